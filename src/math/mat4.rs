/// Column-major 4x4 matrix; `data[i]` is the i-th column, matching the
/// layout WGSL expects for a `mat4x4<f32>` uniform.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Mat4 {
    pub data: [[f32; 4]; 4],
}

impl Mat4 {
    pub fn new(data: [[f32; 4]; 4]) -> Self {
        Self { data }
    }

    pub fn identity() -> Self {
        Self {
            data: [
                [1.0, 0.0, 0.0, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    /// Transforms a 2D point (z = 0, w = 1) and drops the depth component.
    pub fn transform_point(&self, point: [f32; 2]) -> [f32; 2] {
        let x = self.data[0][0] * point[0] + self.data[1][0] * point[1] + self.data[3][0];
        let y = self.data[0][1] * point[0] + self.data[1][1] * point[1] + self.data[3][1];
        let w = self.data[0][3] * point[0] + self.data[1][3] * point[1] + self.data[3][3];

        if w != 0.0 { [x / w, y / w] } else { [x, y] }
    }
}

impl From<Mat4> for [[f32; 4]; 4] {
    fn from(mat: Mat4) -> Self {
        mat.data
    }
}
