//! Geometric primitives

/// 2D point
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance(&self, other: Point) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// 2D size
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// A size is usable as a viewport once both sides are finite and positive
    pub fn is_usable(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// Convert to a Rect at the origin (0, 0)
    pub const fn to_rect(self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    /// The four corners of a viewport of this size anchored at the origin,
    /// clockwise from the top-left
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(0.0, 0.0),
            Point::new(self.width, 0.0),
            Point::new(self.width, self.height),
            Point::new(0.0, self.height),
        ]
    }
}

/// A rectangle
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// A circle
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f32,
}

impl Circle {
    pub const fn new(center: Point, radius: f32) -> Self {
        Self { center, radius }
    }

    /// The smallest circle centered at `center` that covers a viewport of
    /// the given size, wherever `center` lies (inside or outside it).
    pub fn covering(center: Point, viewport: Size) -> Self {
        Self::new(center, covering_radius(center, viewport))
    }

    /// This circle with its radius scaled by `factor`
    pub fn scaled(&self, factor: f32) -> Self {
        Self::new(self.center, self.radius * factor)
    }

    pub fn contains(&self, point: Point) -> bool {
        let dx = point.x - self.center.x;
        let dy = point.y - self.center.y;
        (dx * dx + dy * dy) <= (self.radius * self.radius)
    }
}

/// Distance from `center` to the farthest corner of a `viewport`-sized rect at the origin.
///
/// A circle of this radius contains all four corners and therefore the whole
/// (convex) viewport.
pub fn covering_radius(center: Point, viewport: Size) -> f32 {
    center.distance(farthest_corner(center, viewport))
}

/// The viewport corner farthest from `center`. Ties resolve to the first
/// corner in clockwise order from the top-left.
pub fn farthest_corner(center: Point, viewport: Size) -> Point {
    let corners = viewport.corners();
    let mut best = corners[0];
    let mut best_distance = center.distance(best);
    for corner in &corners[1..] {
        let distance = center.distance(*corner);
        if distance > best_distance {
            best = *corner;
            best_distance = distance;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn test_covering_radius_portrait_viewport() {
        let viewport = Size::new(300.0, 800.0);
        let center = Point::new(100.0, 100.0);

        // corner distances: 141.42, 223.61, 728.01, 707.11
        assert_eq!(farthest_corner(center, viewport), Point::new(300.0, 800.0));
        assert!(approx(covering_radius(center, viewport), 530_000f32.sqrt()));
    }

    #[test]
    fn test_covering_radius_from_center_is_half_diagonal() {
        let viewport = Size::new(400.0, 300.0);
        let radius = covering_radius(viewport.to_rect().center(), viewport);
        assert!(approx(radius, 250.0));
    }

    #[test]
    fn test_covering_radius_outside_viewport() {
        let viewport = Size::new(100.0, 100.0);
        let center = Point::new(-50.0, 150.0);

        assert_eq!(farthest_corner(center, viewport), Point::new(100.0, 0.0));
        assert!(approx(covering_radius(center, viewport), 150f32.hypot(150.0)));
    }

    #[test]
    fn test_covering_circle_contains_every_corner() {
        let viewport = Size::new(390.0, 844.0);
        let samples = [
            Point::new(0.0, 0.0),
            Point::new(390.0, 844.0),
            Point::new(12.5, 700.0),
            Point::new(200.0, 20.0),
            Point::new(-300.0, 1200.0),
        ];

        for center in samples {
            let circle = Circle::covering(center, viewport);
            let max = viewport
                .corners()
                .iter()
                .map(|c| center.distance(*c))
                .fold(0.0f32, f32::max);
            assert_eq!(circle.radius, max, "center={center:?}");
            // Nudge corners inward to stay clear of float rounding on the boundary
            for corner in viewport.corners() {
                let inward = Point::new(
                    corner.x + (center.x - corner.x) * 1e-4,
                    corner.y + (center.y - corner.y) * 1e-4,
                );
                assert!(circle.contains(inward), "center={center:?} corner={corner:?}");
            }
        }
    }

    #[test]
    fn test_covering_radius_tie_uses_first_corner() {
        let viewport = Size::new(200.0, 200.0);
        let center = Point::new(100.0, 100.0);
        assert_eq!(farthest_corner(center, viewport), Point::new(0.0, 0.0));
    }

    #[test]
    fn test_size_usable() {
        assert!(Size::new(1.0, 1.0).is_usable());
        assert!(!Size::ZERO.is_usable());
        assert!(!Size::new(f32::NAN, 10.0).is_usable());
        assert!(!Size::new(10.0, f32::INFINITY).is_usable());
    }

    #[test]
    fn test_circle_scaled_keeps_center() {
        let circle = Circle::new(Point::new(3.0, 4.0), 10.0).scaled(0.25);
        assert_eq!(circle.center, Point::new(3.0, 4.0));
        assert_eq!(circle.radius, 2.5);
    }
}
