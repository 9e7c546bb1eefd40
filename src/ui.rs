use crate::math::clamp;
use crate::transform::{CELL_MAX, CELL_MIN, CELL_STEP, Mat2};
use crate::vertex::Vertex;

const PANEL_POS: [f32; 2] = [5.0, 5.0];
const PANEL_SIZE: [f32; 2] = [330.0, 90.0];

const TRACK_SIZE: [f32; 2] = [130.0, 6.0];
const HANDLE_SIZE: [f32; 2] = [8.0, 16.0];
const BUTTON_SIZE: [f32; 2] = [70.0, 20.0];

const PANEL_BG: [f32; 4] = [0.95, 0.95, 0.95, 0.9];
const TRACK_COLOR: [f32; 4] = [0.75, 0.75, 0.78, 1.0];
const TICK_COLOR: [f32; 4] = [0.55, 0.55, 0.58, 1.0];
const HANDLE_COLOR: [f32; 4] = [0.25, 0.45, 0.85, 1.0];
const BUTTON_BG: [f32; 4] = [0.8, 0.8, 0.8, 1.0];
const ICON_COLOR: [f32; 4] = [0.2, 0.2, 0.2, 1.0];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelCommand {
    ClearPoints,
    ResetMatrix,
}

/// Result of a pointer press inside the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelAction {
    BeginSlide { row: usize, col: usize },
    Command(PanelCommand),
}

struct SliderControl {
    row: usize,
    col: usize,
    position: [f32; 2],
    size: [f32; 2],
}

struct ButtonControl {
    command: PanelCommand,
    position: [f32; 2],
    size: [f32; 2],
}

/// Screen-space overlay with one slider per matrix cell (laid out as the
/// 2x2 grid of the matrix itself) and the two command buttons.
pub struct ControlPanel {
    sliders: Vec<SliderControl>,
    buttons: Vec<ButtonControl>,
}

impl ControlPanel {
    pub fn new() -> Self {
        let mut sliders = Vec::new();
        for row in 0..2 {
            for col in 0..2 {
                sliders.push(SliderControl {
                    row,
                    col,
                    position: [
                        15.0 + col as f32 * 160.0,
                        22.0 + row as f32 * 24.0,
                    ],
                    size: TRACK_SIZE,
                });
            }
        }

        let buttons = vec![
            ButtonControl {
                command: PanelCommand::ClearPoints,
                position: [15.0, 66.0],
                size: BUTTON_SIZE,
            },
            ButtonControl {
                command: PanelCommand::ResetMatrix,
                position: [95.0, 66.0],
                size: BUTTON_SIZE,
            },
        ];

        Self { sliders, buttons }
    }

    fn slider(&self, row: usize, col: usize) -> &SliderControl {
        &self.sliders[row * 2 + col]
    }

    /// Slider value for a cursor x position on the given cell's track,
    /// clamped to the cell range and quantized to the slider step.
    pub fn value_at(&self, row: usize, col: usize, cursor_x: f32) -> f32 {
        let track = self.slider(row, col);
        let t = (cursor_x - track.position[0]) / track.size[0];
        let value = CELL_MIN + t * (CELL_MAX - CELL_MIN);
        let stepped = (value / CELL_STEP).round() * CELL_STEP;
        clamp(stepped, CELL_MIN, CELL_MAX)
    }

    fn handle_x(&self, row: usize, col: usize, value: f32) -> f32 {
        let track = self.slider(row, col);
        track.position[0] + (value - CELL_MIN) / (CELL_MAX - CELL_MIN) * track.size[0]
    }

    pub fn is_over(&self, cursor_pos: [f32; 2]) -> bool {
        in_rect(cursor_pos, PANEL_POS, PANEL_SIZE)
    }

    pub fn handle_press(&self, cursor_pos: [f32; 2]) -> Option<PanelAction> {
        for track in &self.sliders {
            // Grab area is taller than the track so the handle is easy to hit.
            let hit_pos = [track.position[0] - 4.0, track.position[1] - 6.0];
            let hit_size = [track.size[0] + 8.0, 18.0];
            if in_rect(cursor_pos, hit_pos, hit_size) {
                return Some(PanelAction::BeginSlide {
                    row: track.row,
                    col: track.col,
                });
            }
        }

        for button in &self.buttons {
            if in_rect(cursor_pos, button.position, button.size) {
                return Some(PanelAction::Command(button.command));
            }
        }

        None
    }

    pub fn generate_vertices(&self, matrix: &Mat2) -> (Vec<Vertex>, Vec<u32>) {
        let mut vertices = Vec::new();
        let mut indices = Vec::new();
        let mut index_offset = 0u32;

        add_quad(
            &mut vertices,
            &mut indices,
            &mut index_offset,
            PANEL_POS,
            PANEL_SIZE,
            PANEL_BG,
        );

        for track in &self.sliders {
            add_quad(
                &mut vertices,
                &mut indices,
                &mut index_offset,
                track.position,
                track.size,
                TRACK_COLOR,
            );

            // Zero tick so the identity position is visible.
            let zero_x = self.handle_x(track.row, track.col, 0.0);
            add_quad(
                &mut vertices,
                &mut indices,
                &mut index_offset,
                [zero_x - 1.0, track.position[1] - 2.0],
                [2.0, track.size[1] + 4.0],
                TICK_COLOR,
            );

            let value = matrix.cell(track.row, track.col);
            let handle_x = self.handle_x(track.row, track.col, value);
            let handle_y = track.position[1] + track.size[1] / 2.0 - HANDLE_SIZE[1] / 2.0;
            add_quad(
                &mut vertices,
                &mut indices,
                &mut index_offset,
                [handle_x - HANDLE_SIZE[0] / 2.0, handle_y],
                HANDLE_SIZE,
                HANDLE_COLOR,
            );
        }

        for button in &self.buttons {
            add_quad(
                &mut vertices,
                &mut indices,
                &mut index_offset,
                button.position,
                button.size,
                BUTTON_BG,
            );

            let center = [
                button.position[0] + button.size[0] / 2.0,
                button.position[1] + button.size[1] / 2.0,
            ];

            match button.command {
                PanelCommand::ClearPoints => {
                    // An X glyph.
                    add_line(
                        &mut vertices,
                        &mut indices,
                        &mut index_offset,
                        [center[0] - 5.0, center[1] - 5.0],
                        [center[0] + 5.0, center[1] + 5.0],
                        2.0,
                        ICON_COLOR,
                    );
                    add_line(
                        &mut vertices,
                        &mut indices,
                        &mut index_offset,
                        [center[0] - 5.0, center[1] + 5.0],
                        [center[0] + 5.0, center[1] - 5.0],
                        2.0,
                        ICON_COLOR,
                    );
                }
                PanelCommand::ResetMatrix => {
                    // A hollow square, for "back to the identity frame".
                    let corners = [
                        [center[0] - 5.0, center[1] - 5.0],
                        [center[0] + 5.0, center[1] - 5.0],
                        [center[0] + 5.0, center[1] + 5.0],
                        [center[0] - 5.0, center[1] + 5.0],
                    ];
                    for i in 0..4 {
                        add_line(
                            &mut vertices,
                            &mut indices,
                            &mut index_offset,
                            corners[i],
                            corners[(i + 1) % 4],
                            2.0,
                            ICON_COLOR,
                        );
                    }
                }
            }
        }

        (vertices, indices)
    }
}

fn in_rect(pos: [f32; 2], rect_pos: [f32; 2], rect_size: [f32; 2]) -> bool {
    pos[0] >= rect_pos[0]
        && pos[0] <= rect_pos[0] + rect_size[0]
        && pos[1] >= rect_pos[1]
        && pos[1] <= rect_pos[1] + rect_size[1]
}

pub(crate) fn add_quad(
    vertices: &mut Vec<Vertex>,
    indices: &mut Vec<u32>,
    index_offset: &mut u32,
    position: [f32; 2],
    size: [f32; 2],
    color: [f32; 4],
) {
    vertices.extend_from_slice(&[
        Vertex { position, color },
        Vertex {
            position: [position[0] + size[0], position[1]],
            color,
        },
        Vertex {
            position: [position[0] + size[0], position[1] + size[1]],
            color,
        },
        Vertex {
            position: [position[0], position[1] + size[1]],
            color,
        },
    ]);
    indices.extend_from_slice(&[
        *index_offset,
        *index_offset + 1,
        *index_offset + 2,
        *index_offset,
        *index_offset + 2,
        *index_offset + 3,
    ]);
    *index_offset += 4;
}

pub(crate) fn add_line(
    vertices: &mut Vec<Vertex>,
    indices: &mut Vec<u32>,
    index_offset: &mut u32,
    start: [f32; 2],
    end: [f32; 2],
    width: f32,
    color: [f32; 4],
) {
    let dx = end[0] - start[0];
    let dy = end[1] - start[1];
    let len = (dx * dx + dy * dy).sqrt();

    if len > 0.0 {
        let nx = -dy / len * width * 0.5;
        let ny = dx / len * width * 0.5;

        vertices.extend_from_slice(&[
            Vertex {
                position: [start[0] - nx, start[1] - ny],
                color,
            },
            Vertex {
                position: [start[0] + nx, start[1] + ny],
                color,
            },
            Vertex {
                position: [end[0] + nx, end[1] + ny],
                color,
            },
            Vertex {
                position: [end[0] - nx, end[1] - ny],
                color,
            },
        ]);

        indices.extend_from_slice(&[
            *index_offset,
            *index_offset + 1,
            *index_offset + 2,
            *index_offset,
            *index_offset + 2,
            *index_offset + 3,
        ]);
        *index_offset += 4;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_endpoints_map_to_range_limits() {
        let panel = ControlPanel::new();
        let track = panel.slider(0, 0);
        let left = track.position[0];
        let right = track.position[0] + track.size[0];

        assert_eq!(panel.value_at(0, 0, left), CELL_MIN);
        assert_eq!(panel.value_at(0, 0, right), CELL_MAX);
        assert_eq!(panel.value_at(0, 0, (left + right) / 2.0), 0.0);
    }

    #[test]
    fn test_values_are_clamped_and_stepped() {
        let panel = ControlPanel::new();
        let track = panel.slider(1, 1);

        assert_eq!(panel.value_at(1, 1, track.position[0] - 100.0), CELL_MIN);
        assert_eq!(panel.value_at(1, 1, track.position[0] + 1000.0), CELL_MAX);

        // Any grab position lands on a multiple of the step.
        for i in 0..20 {
            let x = track.position[0] + i as f32 * 7.3;
            let value = panel.value_at(1, 1, x);
            let steps = value / CELL_STEP;
            assert!((steps - steps.round()).abs() < 0.001, "value {value}");
        }
    }

    #[test]
    fn test_press_resolves_sliders_and_buttons() {
        let panel = ControlPanel::new();

        let track = panel.slider(0, 1);
        let on_track = [
            track.position[0] + 10.0,
            track.position[1] + track.size[1] / 2.0,
        ];
        assert_eq!(
            panel.handle_press(on_track),
            Some(PanelAction::BeginSlide { row: 0, col: 1 })
        );

        assert_eq!(
            panel.handle_press([20.0, 70.0]),
            Some(PanelAction::Command(PanelCommand::ClearPoints))
        );
        assert_eq!(
            panel.handle_press([100.0, 70.0]),
            Some(PanelAction::Command(PanelCommand::ResetMatrix))
        );

        assert_eq!(panel.handle_press([400.0, 400.0]), None);
        assert!(!panel.is_over([400.0, 400.0]));
        assert!(panel.is_over([20.0, 70.0]));
    }
}
