//! Axis-aligned rectangle math over `glam` vectors.

use glam::Vec2;

/// An axis-aligned rectangle described by its minimum and maximum corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub const fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Builds a rectangle from its center and half-extents.
    pub fn centered(center: Vec2, half_extents: Vec2) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Whether the point lies inside the rectangle. Edges count as inside.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x && point.x <= self.max.x && point.y >= self.min.y && point.y <= self.max.y
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) / 2.0
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_interior_and_edges() {
        let rect = Rect::new(Vec2::new(10.0, 20.0), Vec2::new(30.0, 40.0));

        assert!(rect.contains(Vec2::new(20.0, 30.0)));
        assert!(rect.contains(Vec2::new(10.0, 20.0)));
        assert!(rect.contains(Vec2::new(30.0, 40.0)));
        assert!(rect.contains(Vec2::new(10.0, 40.0)));

        assert!(!rect.contains(Vec2::new(9.99, 30.0)));
        assert!(!rect.contains(Vec2::new(20.0, 40.01)));
    }

    #[test]
    fn test_centered() {
        let rect = Rect::centered(Vec2::new(400.0, 300.0), Vec2::new(50.0, 50.0));
        assert_eq!(rect.min, Vec2::new(350.0, 250.0));
        assert_eq!(rect.max, Vec2::new(450.0, 350.0));
        assert_eq!(rect.center(), Vec2::new(400.0, 300.0));
        assert_eq!(rect.size(), Vec2::new(100.0, 100.0));
    }
}
