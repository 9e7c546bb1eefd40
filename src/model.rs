/// A user-placed point in plane coordinates (origin at the canvas centre,
/// y up). Device-to-plane conversion happens before a point is stored, so
/// a `Point` never holds raw pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl std::ops::Add for Point {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl std::ops::Mul<f32> for Point {
    type Output = Self;

    fn mul(self, k: f32) -> Self {
        Self::new(self.x * k, self.y * k)
    }
}

/// Ordered collection of placed points. Append-only until cleared;
/// duplicates are allowed and insertion order is the draw order.
#[derive(Debug, Default)]
pub struct PointSet {
    points: Vec<Point>,
}

impl PointSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, point: Point) {
        self.points.push(point);
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_keeps_insertion_order() {
        let mut set = PointSet::new();
        set.add(Point::new(10.0, 20.0));
        set.add(Point::new(-5.0, 0.0));
        set.add(Point::new(10.0, 20.0));

        assert_eq!(set.len(), 3);
        assert_eq!(set.points()[0], Point::new(10.0, 20.0));
        assert_eq!(set.points()[1], Point::new(-5.0, 0.0));
        assert_eq!(set.points()[2], Point::new(10.0, 20.0));
    }

    #[test]
    fn test_clear_empties_collection() {
        let mut set = PointSet::new();
        set.add(Point::new(1.0, 2.0));
        set.add(Point::new(3.0, 4.0));
        set.clear();

        assert!(set.is_empty());
        assert_eq!(set.points(), &[]);
    }
}
