//! Collision geometry for an axis-aligned rectangular arena
//!
//! The only shape pairing this game needs: a circle (the ball) against an
//! axis-aligned rectangle (the paddle). Wall contact is a plain coordinate
//! comparison handled by the ball itself.

use glam::Vec2;

/// Axis-aligned rectangle, origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Closest point of the rectangle to `p` (clamped onto the rect)
    #[inline]
    pub fn closest_point(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            p.x.clamp(self.x, self.x + self.w),
            p.y.clamp(self.y, self.y + self.h),
        )
    }
}

/// Check whether a circle overlaps an axis-aligned rectangle
///
/// Clamps the circle center onto the rectangle and compares squared
/// distances, so edge and corner contact are both covered.
pub fn circle_overlaps_rect(center: Vec2, radius: f32, rect: Rect) -> bool {
    let closest = rect.closest_point(center);
    (center - closest).length_squared() <= radius * radius
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_inside_rect() {
        let rect = Rect::new(100.0, 100.0, 50.0, 20.0);
        assert!(circle_overlaps_rect(Vec2::new(120.0, 110.0), 5.0, rect));
    }

    #[test]
    fn test_edge_contact_from_above() {
        let rect = Rect::new(150.0, 540.0, 100.0, 30.0);
        // Ball center 20px above the top edge, radius 30 - overlaps
        assert!(circle_overlaps_rect(Vec2::new(200.0, 520.0), 30.0, rect));
        // Ball center 40px above the top edge - clear miss
        assert!(!circle_overlaps_rect(Vec2::new(200.0, 500.0), 30.0, rect));
    }

    #[test]
    fn test_corner_contact() {
        let rect = Rect::new(100.0, 100.0, 50.0, 20.0);
        // Diagonal distance to the (100, 100) corner is ~14.1
        assert!(circle_overlaps_rect(Vec2::new(90.0, 90.0), 15.0, rect));
        assert!(!circle_overlaps_rect(Vec2::new(90.0, 90.0), 14.0, rect));
    }

    #[test]
    fn test_touching_counts_as_overlap() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        // Exactly radius away from the right edge
        assert!(circle_overlaps_rect(Vec2::new(15.0, 5.0), 5.0, rect));
    }
}
