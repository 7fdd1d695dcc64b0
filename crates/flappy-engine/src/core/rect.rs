use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in screen coordinates.
///
/// `x`/`y` is the top-left corner; `width`/`height` extend right and down.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[must_use]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    #[must_use]
    pub fn has_area(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    /// Returns whether the two rectangles share a region of positive area.
    ///
    /// Rectangles that only touch along an edge or a corner do not overlap,
    /// and a rectangle with zero width or height never overlaps anything.
    #[must_use]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.has_area()
            && other.has_area()
            && self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_edge_is_not_overlap() {
        // Agent bottom at y=100, barrier top at y=100
        let agent = Rect::new(50.0, 70.0, 30.0, 30.0);
        let barrier = Rect::new(40.0, 100.0, 70.0, 200.0);
        assert!(!agent.overlaps(&barrier));
        assert!(!barrier.overlaps(&agent));
    }

    #[test]
    fn test_shared_vertical_edge_is_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_corner_touch_is_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 10.0, 10.0, 10.0);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_positive_area_overlap() {
        let agent = Rect::new(50.0, 70.5, 30.0, 30.0);
        let barrier = Rect::new(40.0, 100.0, 70.0, 200.0);
        assert!(agent.overlaps(&barrier));
        assert!(barrier.overlaps(&agent));
    }

    #[test]
    fn test_containment_is_overlap() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(10.0, 10.0, 5.0, 5.0);
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_zero_height_never_overlaps() {
        let flat = Rect::new(0.0, 50.0, 100.0, 0.0);
        let other = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(!flat.overlaps(&other));
        assert!(!other.overlaps(&flat));
    }

    #[test]
    fn test_zero_width_never_overlaps() {
        let thin = Rect::new(50.0, 0.0, 0.0, 100.0);
        let other = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(!thin.overlaps(&other));
        assert!(!other.overlaps(&thin));
    }
}
