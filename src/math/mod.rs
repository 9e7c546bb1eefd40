mod mat4;

pub use mat4::Mat4;

pub fn ortho(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Mat4 {
    let w = right - left;
    let h = top - bottom;
    let d = far - near;

    Mat4::new([
        [2.0 / w, 0.0, 0.0, 0.0],
        [0.0, 2.0 / h, 0.0, 0.0],
        [0.0, 0.0, -2.0 / d, 0.0],
        [
            -(right + left) / w,
            -(top + bottom) / h,
            -(far + near) / d,
            1.0,
        ],
    ])
}

pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_matrix() {
        let identity = Mat4::identity();
        let p = [3.0, -7.0];
        let result = identity.transform_point(p);

        assert!((result[0] - p[0]).abs() < 0.001);
        assert!((result[1] - p[1]).abs() < 0.001);
    }

    #[test]
    fn test_ortho_maps_screen_corners_to_ndc() {
        let proj = ortho(0.0, 500.0, 500.0, 0.0, -1.0, 1.0);

        let top_left = proj.transform_point([0.0, 0.0]);
        assert!((top_left[0] + 1.0).abs() < 0.001);
        assert!((top_left[1] - 1.0).abs() < 0.001);

        let bottom_right = proj.transform_point([500.0, 500.0]);
        assert!((bottom_right[0] - 1.0).abs() < 0.001);
        assert!((bottom_right[1] + 1.0).abs() < 0.001);

        let center = proj.transform_point([250.0, 250.0]);
        assert!(center[0].abs() < 0.001);
        assert!(center[1].abs() < 0.001);
    }

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(0.5, -5.0, 5.0), 0.5);
        assert_eq!(clamp(-7.0, -5.0, 5.0), -5.0);
        assert_eq!(clamp(12.0, -5.0, 5.0), 5.0);
    }
}
