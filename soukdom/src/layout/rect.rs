use crate::types::Edges;

/// A screen area in cells, origin top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn from_size(width: u16, height: u16) -> Self {
        Rect::new(0, 0, width, height)
    }

    /// One past the last column.
    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    /// One past the last row.
    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    /// The area left after taking `edges` off each side. Never underflows.
    pub fn inset(self, edges: Edges) -> Rect {
        Rect::new(
            self.x.saturating_add(edges.left),
            self.y.saturating_add(edges.top),
            self.width.saturating_sub(edges.horizontal_total()),
            self.height.saturating_sub(edges.vertical_total()),
        )
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        (self.x..self.right()).contains(&x) && (self.y..self.bottom()).contains(&y)
    }

    /// Overlap of the two areas, zero-sized when they are disjoint.
    pub fn intersect(&self, other: &Rect) -> Rect {
        let (x, y) = (self.x.max(other.x), self.y.max(other.y));
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        Rect::new(x, y, right.saturating_sub(x), bottom.saturating_sub(y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inset_saturates() {
        let r = Rect::new(2, 2, 3, 1).inset(Edges::all(2));
        assert_eq!(r, Rect::new(4, 4, 0, 0));
    }

    #[test]
    fn disjoint_intersection_is_empty() {
        let r = Rect::new(0, 0, 2, 2).intersect(&Rect::new(5, 5, 2, 2));
        assert_eq!((r.width, r.height), (0, 0));
    }
}
