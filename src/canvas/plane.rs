use crate::model::Point;

/// Maps between device pixels (origin top-left, y down) and plane
/// coordinates (origin at the surface centre, y up). The y-axis is flipped
/// on the way in and back out, so "up" on screen is positive plane y.
#[derive(Debug, Clone, Copy)]
pub struct PlaneMapper {
    pub origin: [f32; 2],
}

impl PlaneMapper {
    pub fn new(surface_size: (f32, f32)) -> Self {
        Self {
            origin: [surface_size.0 / 2.0, surface_size.1 / 2.0],
        }
    }

    pub fn to_plane(&self, device_pos: [f32; 2]) -> Point {
        Point::new(
            device_pos[0] - self.origin[0],
            -(device_pos[1] - self.origin[1]),
        )
    }

    pub fn to_device(&self, p: Point) -> [f32; 2] {
        [p.x + self.origin[0], self.origin[1] - p.y]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_maps_to_plane_zero() {
        let mapper = PlaneMapper::new((500.0, 500.0));
        let p = mapper.to_plane([250.0, 250.0]);
        assert!((p.x).abs() < 0.001);
        assert!((p.y).abs() < 0.001);
    }

    #[test]
    fn test_up_on_screen_is_positive_y() {
        let mapper = PlaneMapper::new((500.0, 500.0));
        // Device y above the origin (smaller value) lands above the x-axis.
        let p = mapper.to_plane([250.0, 100.0]);
        assert!(p.y > 0.0);
    }

    #[test]
    fn test_device_round_trip() {
        let mapper = PlaneMapper::new((500.0, 400.0));
        for device in [[0.0, 0.0], [250.0, 200.0], [499.0, 1.0], [13.5, 371.25]] {
            let back = mapper.to_device(mapper.to_plane(device));
            assert!((back[0] - device[0]).abs() < 0.001);
            assert!((back[1] - device[1]).abs() < 0.001);
        }
    }
}
