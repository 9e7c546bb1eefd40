use crate::app_state::State;
use crate::canvas::PlaneMapper;
use crate::model::PointSet;
use crate::state::GeometryBuffers;
use crate::transform::Mat2;
use crate::ui::add_line;
use crate::vertex::Vertex;
use wgpu::util::DeviceExt;

const AXIS_WIDTH: f32 = 1.0;
const AXIS_COLOR: [f32; 4] = [0.62, 0.62, 0.62, 1.0];

const MARKER_RADIUS: f32 = 4.0;
const MARKER_SEGMENTS: u32 = 32;
const OUTLINE_WIDTH: f32 = 1.5;
// Placed points are solid, their images under the matrix are outlines.
const ORIGINAL_COLOR: [f32; 4] = [0.12, 0.25, 0.8, 1.0];
const TRANSFORMED_COLOR: [f32; 4] = [0.85, 0.2, 0.12, 1.0];

impl State {
    pub fn update(&mut self) {
        let (vertices, indices) = scene_geometry(
            &self.points,
            &self.matrix,
            &self.scene.mapper,
            (self.size.width as f32, self.size.height as f32),
        );
        upload_geometry(&self.gpu.device, &vertices, &indices, &mut self.geometry);

        let (panel_vertices, panel_indices) = self.panel.generate_vertices(&self.matrix);
        upload_geometry(
            &self.gpu.device,
            &panel_vertices,
            &panel_indices,
            &mut self.panel_geo,
        );
    }
}

fn upload_geometry(
    device: &wgpu::Device,
    vertices: &[Vertex],
    indices: &[u32],
    geo: &mut GeometryBuffers,
) {
    if vertices.is_empty() {
        geo.vertex = None;
        geo.index = None;
        geo.count = 0;
        return;
    }

    geo.vertex = Some(
        device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Vertex Buffer"),
            contents: bytemuck::cast_slice(vertices),
            usage: wgpu::BufferUsages::VERTEX,
        }),
    );
    geo.index = Some(
        device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Index Buffer"),
            contents: bytemuck::cast_slice(indices),
            usage: wgpu::BufferUsages::INDEX,
        }),
    );
    geo.count = indices.len() as u32;
}

/// Tessellates the full scene: axes first, then every stored point as a
/// filled marker, then every transformed point as an outlined marker.
/// Purely a function of the stores, the mapper and the surface size.
pub(crate) fn scene_geometry(
    points: &PointSet,
    matrix: &Mat2,
    mapper: &PlaneMapper,
    surface_size: (f32, f32),
) -> (Vec<Vertex>, Vec<u32>) {
    let mut vertices = Vec::new();
    let mut indices = Vec::new();
    let mut index_offset = 0u32;

    let (width, height) = surface_size;
    let [origin_x, origin_y] = mapper.origin;
    add_line(
        &mut vertices,
        &mut indices,
        &mut index_offset,
        [0.0, origin_y],
        [width, origin_y],
        AXIS_WIDTH,
        AXIS_COLOR,
    );
    add_line(
        &mut vertices,
        &mut indices,
        &mut index_offset,
        [origin_x, 0.0],
        [origin_x, height],
        AXIS_WIDTH,
        AXIS_COLOR,
    );

    for p in points.points() {
        add_circle_filled(
            &mut vertices,
            &mut indices,
            &mut index_offset,
            mapper.to_device(*p),
            MARKER_RADIUS,
            ORIGINAL_COLOR,
        );
    }

    for p in points.points() {
        add_circle_outline(
            &mut vertices,
            &mut indices,
            &mut index_offset,
            mapper.to_device(matrix.apply(*p)),
            MARKER_RADIUS,
            OUTLINE_WIDTH,
            TRANSFORMED_COLOR,
        );
    }

    (vertices, indices)
}

fn add_circle_filled(
    vertices: &mut Vec<Vertex>,
    indices: &mut Vec<u32>,
    index_offset: &mut u32,
    center: [f32; 2],
    radius: f32,
    color: [f32; 4],
) {
    let center_index = *index_offset;
    vertices.push(Vertex {
        position: center,
        color,
    });
    *index_offset += 1;

    for i in 0..MARKER_SEGMENTS {
        let angle = (i as f32 * 2.0 * std::f32::consts::PI) / MARKER_SEGMENTS as f32;
        vertices.push(Vertex {
            position: [
                center[0] + angle.cos() * radius,
                center[1] + angle.sin() * radius,
            ],
            color,
        });
    }

    for i in 0..MARKER_SEGMENTS {
        indices.extend_from_slice(&[
            center_index,
            center_index + 1 + i,
            center_index + 1 + (i + 1) % MARKER_SEGMENTS,
        ]);
    }
    *index_offset += MARKER_SEGMENTS;
}

fn add_circle_outline(
    vertices: &mut Vec<Vertex>,
    indices: &mut Vec<u32>,
    index_offset: &mut u32,
    center: [f32; 2],
    radius: f32,
    stroke_width: f32,
    color: [f32; 4],
) {
    for i in 0..MARKER_SEGMENTS {
        let angle1 = (i as f32 * 2.0 * std::f32::consts::PI) / MARKER_SEGMENTS as f32;
        let angle2 = ((i + 1) as f32 * 2.0 * std::f32::consts::PI) / MARKER_SEGMENTS as f32;

        let p1 = [
            center[0] + angle1.cos() * radius,
            center[1] + angle1.sin() * radius,
        ];
        let p2 = [
            center[0] + angle2.cos() * radius,
            center[1] + angle2.sin() * radius,
        ];

        add_line(vertices, indices, index_offset, p1, p2, stroke_width, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Point;

    const AXIS_VERTICES: usize = 8; // two thick lines, one quad each
    const FILLED_VERTICES: usize = 1 + MARKER_SEGMENTS as usize;
    const OUTLINE_VERTICES: usize = MARKER_SEGMENTS as usize * 4;

    #[test]
    fn test_empty_point_set_draws_axes_only() {
        let points = PointSet::new();
        let mapper = PlaneMapper::new((500.0, 500.0));
        let (vertices, indices) =
            scene_geometry(&points, &Mat2::identity(), &mapper, (500.0, 500.0));

        assert_eq!(vertices.len(), AXIS_VERTICES);
        assert_eq!(indices.len(), 12);
    }

    #[test]
    fn test_each_point_adds_one_filled_and_one_outlined_marker() {
        let mut points = PointSet::new();
        points.add(Point::new(10.0, 20.0));
        points.add(Point::new(-5.0, 0.0));
        let mapper = PlaneMapper::new((500.0, 500.0));
        let (vertices, _) = scene_geometry(&points, &Mat2::identity(), &mapper, (500.0, 500.0));

        assert_eq!(
            vertices.len(),
            AXIS_VERTICES + 2 * FILLED_VERTICES + 2 * OUTLINE_VERTICES
        );
    }

    #[test]
    fn test_markers_land_at_mapped_positions() {
        let mut points = PointSet::new();
        points.add(Point::new(10.0, 20.0));
        let mapper = PlaneMapper::new((500.0, 500.0));
        let matrix = Mat2::new(2.0, 0.0, 0.0, 2.0);
        let (vertices, _) = scene_geometry(&points, &matrix, &mapper, (500.0, 500.0));

        // First vertex after the axes is the filled marker's fan centre.
        let original = vertices[AXIS_VERTICES].position;
        let expected = mapper.to_device(Point::new(10.0, 20.0));
        assert!((original[0] - expected[0]).abs() < 0.001);
        assert!((original[1] - expected[1]).abs() < 0.001);

        // The outline ring is tessellated around the transformed position.
        let ring_start = AXIS_VERTICES + FILLED_VERTICES;
        let expected = mapper.to_device(Point::new(20.0, 40.0));
        for v in &vertices[ring_start..ring_start + OUTLINE_VERTICES] {
            let dx = v.position[0] - expected[0];
            let dy = v.position[1] - expected[1];
            let dist = (dx * dx + dy * dy).sqrt();
            assert!(dist <= MARKER_RADIUS + OUTLINE_WIDTH);
        }
    }
}
