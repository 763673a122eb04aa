//! Axis-aligned rectangles in logical coordinates.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// AABB overlap with strict inequalities: rectangles that only share an edge
    /// do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touching_edges_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
        let below = Rect::new(0.0, 10.0, 10.0, 10.0);
        assert!(!a.overlaps(&below));
    }

    #[test]
    fn partial_and_contained_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.overlaps(&Rect::new(9.5, 9.5, 10.0, 10.0)));
        assert!(a.overlaps(&Rect::new(2.0, 2.0, 1.0, 1.0)));
        assert!(Rect::new(2.0, 2.0, 1.0, 1.0).overlaps(&a));
    }

    #[test]
    fn disjoint_on_one_axis_is_enough() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&Rect::new(5.0, 20.0, 10.0, 10.0)));
        assert!(!a.overlaps(&Rect::new(-30.0, 5.0, 10.0, 10.0)));
    }
}
