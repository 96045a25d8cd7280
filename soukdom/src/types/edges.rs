use super::TextDirection;

/// Per-side spacing in cells. `left` and `right` are physical sides; use
/// [`Edges::resolve`] to flip them for right-to-left content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Edges {
    pub top: u16,
    pub right: u16,
    pub bottom: u16,
    pub left: u16,
}

impl Edges {
    pub const fn new(top: u16, right: u16, bottom: u16, left: u16) -> Self {
        Edges {
            top,
            right,
            bottom,
            left,
        }
    }

    pub const fn all(n: u16) -> Self {
        Edges::new(n, n, n, n)
    }

    /// Left and right only.
    pub const fn horizontal(n: u16) -> Self {
        Edges::new(0, n, 0, n)
    }

    pub const fn horizontal_total(&self) -> u16 {
        self.left.saturating_add(self.right)
    }

    pub const fn vertical_total(&self) -> u16 {
        self.top.saturating_add(self.bottom)
    }

    /// Physical edges for `dir`: start and end swap under RTL.
    pub const fn resolve(self, dir: TextDirection) -> Self {
        match dir {
            TextDirection::Ltr => self,
            TextDirection::Rtl => Edges::new(self.top, self.left, self.bottom, self.right),
        }
    }

    /// Every side grown by `n`, for adding a border around padding.
    pub const fn grow(self, n: u16) -> Self {
        Edges::new(
            self.top.saturating_add(n),
            self.right.saturating_add(n),
            self.bottom.saturating_add(n),
            self.left.saturating_add(n),
        )
    }
}
