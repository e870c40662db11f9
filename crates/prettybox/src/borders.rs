#![forbid(unsafe_code)]

//! Border edge flags and the box glyph set.

use bitflags::bitflags;

bitflags! {
    /// Which edges of the box are drawn.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Borders: u8 {
        const LEFT = 1 << 0;
        const RIGHT = 1 << 1;
        const TOP = 1 << 2;
        const BOTTOM = 1 << 3;
        const ALL = Self::LEFT.bits()
            | Self::RIGHT.bits()
            | Self::TOP.bits()
            | Self::BOTTOM.bits();
    }
}

impl Borders {
    /// Number of vertical (left/right) edges enabled: 0, 1, or 2.
    ///
    /// Each enabled vertical edge consumes one column of the total width
    /// budget.
    pub fn vertical_count(self) -> usize {
        self.contains(Borders::LEFT) as usize + self.contains(Borders::RIGHT) as usize
    }
}

/// The characters used to draw one box, one fixed glyph per role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphSet {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    /// Left end of a section-break row.
    pub middle_left: char,
    /// Right end of a section-break row.
    pub middle_right: char,
    /// Vertical edge of content and padding rows.
    pub vertical: char,
    /// Fill of the top and bottom borders.
    pub horizontal: char,
    /// Fill of a section-break row; visually distinct from `horizontal`.
    pub section_break: char,
}

impl GlyphSet {
    /// Square corners, solid horizontal rule, dashed section break.
    pub const SQUARE: Self = Self {
        top_left: '┌',
        top_right: '┐',
        bottom_left: '└',
        bottom_right: '┘',
        middle_left: '├',
        middle_right: '┤',
        vertical: '│',
        horizontal: '─',
        section_break: '┄',
    };
}

impl Default for GlyphSet {
    fn default() -> Self {
        Self::SQUARE
    }
}
