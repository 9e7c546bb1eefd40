use crate::math::clamp;
use crate::model::Point;

/// Slider range for a matrix cell.
pub const CELL_MIN: f32 = -5.0;
pub const CELL_MAX: f32 = 5.0;
/// Slider step granularity.
pub const CELL_STEP: f32 = 0.1;

/// The 2x2 matrix driving the visualization, row-major. Starts as the
/// identity; cells are edited one at a time by the sliders and stay inside
/// `[CELL_MIN, CELL_MAX]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat2 {
    pub m: [[f32; 2]; 2],
}

impl Mat2 {
    pub fn new(m00: f32, m01: f32, m10: f32, m11: f32) -> Self {
        Self {
            m: [[m00, m01], [m10, m11]],
        }
    }

    pub fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0)
    }

    /// Applies the linear map to a plane point: `p' = M * p`.
    pub fn apply(&self, p: Point) -> Point {
        Point::new(
            self.m[0][0] * p.x + self.m[0][1] * p.y,
            self.m[1][0] * p.x + self.m[1][1] * p.y,
        )
    }

    pub fn cell(&self, row: usize, col: usize) -> f32 {
        self.m[row][col]
    }

    /// Replaces a single cell, clamping the value to the slider range.
    /// Errors on an out-of-range index; the other three cells are untouched.
    pub fn set_cell(&mut self, row: usize, col: usize, value: f32) -> anyhow::Result<()> {
        anyhow::ensure!(
            row < 2 && col < 2,
            "matrix cell ({row}, {col}) out of range"
        );
        self.m[row][col] = clamp(value, CELL_MIN, CELL_MAX);
        Ok(())
    }

    /// Restores the identity matrix in one assignment.
    pub fn reset(&mut self) {
        *self = Self::identity();
    }
}

impl Default for Mat2 {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_point_eq(a: Point, b: Point) {
        assert!((a.x - b.x).abs() < 0.001, "{a:?} != {b:?}");
        assert!((a.y - b.y).abs() < 0.001, "{a:?} != {b:?}");
    }

    #[test]
    fn test_identity_leaves_points_unchanged() {
        let m = Mat2::identity();
        for p in [
            Point::new(0.0, 0.0),
            Point::new(10.0, 20.0),
            Point::new(-3.5, 7.25),
        ] {
            assert_point_eq(m.apply(p), p);
        }
    }

    #[test]
    fn test_apply_is_linear() {
        let m = Mat2::new(2.0, -1.0, 0.5, 3.0);
        let p1 = Point::new(3.0, -2.0);
        let p2 = Point::new(-1.5, 4.0);

        assert_point_eq(m.apply(p1 + p2), m.apply(p1) + m.apply(p2));
        assert_point_eq(m.apply(p1 * 2.5), m.apply(p1) * 2.5);
    }

    #[test]
    fn test_uniform_scale_scenario() {
        let m = Mat2::new(2.0, 0.0, 0.0, 2.0);
        assert_point_eq(m.apply(Point::new(10.0, 20.0)), Point::new(20.0, 40.0));
        assert_point_eq(m.apply(Point::new(-5.0, 0.0)), Point::new(-10.0, 0.0));
    }

    #[test]
    fn test_rotation_scenario() {
        // 90 degree counter-clockwise rotation.
        let m = Mat2::new(0.0, -1.0, 1.0, 0.0);
        assert_point_eq(m.apply(Point::new(1.0, 0.0)), Point::new(0.0, 1.0));
    }

    #[test]
    fn test_set_cell_touches_one_cell_and_clamps() {
        let mut m = Mat2::identity();
        m.set_cell(0, 1, 3.0).unwrap();
        assert_eq!(m, Mat2::new(1.0, 3.0, 0.0, 1.0));

        m.set_cell(1, 0, 99.0).unwrap();
        assert_eq!(m.cell(1, 0), CELL_MAX);
        m.set_cell(1, 0, -99.0).unwrap();
        assert_eq!(m.cell(1, 0), CELL_MIN);
        // Other cells stayed put throughout.
        assert_eq!(m.cell(0, 0), 1.0);
        assert_eq!(m.cell(0, 1), 3.0);
        assert_eq!(m.cell(1, 1), 1.0);
    }

    #[test]
    fn test_set_cell_rejects_bad_index() {
        let mut m = Mat2::identity();
        assert!(m.set_cell(2, 0, 1.0).is_err());
        assert!(m.set_cell(0, 2, 1.0).is_err());
        assert_eq!(m, Mat2::identity());
    }

    #[test]
    fn test_reset_restores_identity() {
        let mut m = Mat2::new(0.0, -1.0, 1.0, 0.0);
        m.reset();
        assert_eq!(m, Mat2::identity());
    }
}
