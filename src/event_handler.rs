use crate::app_state::State;
use crate::canvas::PlaneMapper;
use crate::model::PointSet;
use crate::state::{InputState, PointerMode, ScreenUniforms};
use crate::ui::{PanelAction, PanelCommand};

use winit::event::*;
use winit::keyboard::{KeyCode, PhysicalKey};

impl InputState {
    /// Press over the canvas: enter `Drawing` and place the first point.
    pub fn press_canvas(&mut self, mapper: &PlaneMapper, points: &mut PointSet) {
        self.mode = PointerMode::Drawing;
        points.add(mapper.to_plane(self.cursor_pos));
    }

    /// Cursor move: while `Drawing`, every move paints one more point.
    pub fn move_canvas(&mut self, mapper: &PlaneMapper, points: &mut PointSet) {
        if self.mode == PointerMode::Drawing {
            points.add(mapper.to_plane(self.cursor_pos));
        }
    }

    pub fn release(&mut self) {
        self.mode = PointerMode::Idle;
    }

    /// Leaving the surface ends any stroke or slider drag, exactly like a
    /// release; no point is added.
    pub fn leave_surface(&mut self) {
        self.mode = PointerMode::Idle;
    }
}

impl State {
    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.size = new_size;
            self.gpu.config.width = new_size.width;
            self.gpu.config.height = new_size.height;
            self.gpu
                .surface
                .configure(&self.gpu.device, &self.gpu.config);

            let size = (new_size.width as f32, new_size.height as f32);
            self.scene.mapper = PlaneMapper::new(size);
            self.scene.uniform.update_projection(size);
            self.gpu.queue.write_buffer(
                &self.scene.uniform_buffer,
                0,
                bytemuck::cast_slice(&[self.scene.uniform]),
            );

            let screen_uniforms = ScreenUniforms {
                screen_size: [size.0, size.1],
                _padding: [0.0, 0.0],
            };
            self.gpu.queue.write_buffer(
                &self.screen.uniform,
                0,
                bytemuck::cast_slice(&[screen_uniforms]),
            );
        }
    }

    pub fn input(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::MouseInput { state, button, .. } => {
                if *button != MouseButton::Left {
                    return false;
                }
                match state {
                    ElementState::Pressed => {
                        let pos = self.input.cursor_pos;
                        if let Some(action) = self.panel.handle_press(pos) {
                            self.apply_panel_action(action);
                        } else if !self.panel.is_over(pos) {
                            self.input.press_canvas(&self.scene.mapper, &mut self.points);
                        }
                    }
                    ElementState::Released => {
                        self.input.release();
                    }
                }
                true
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.input.cursor_pos = [position.x as f32, position.y as f32];

                match self.input.mode {
                    PointerMode::Adjusting { row, col } => {
                        self.set_matrix_cell(row, col, self.input.cursor_pos[0]);
                    }
                    PointerMode::Drawing => {
                        if self.panel.is_over(self.input.cursor_pos) {
                            // Sliding under the panel ends the stroke.
                            self.input.release();
                        } else {
                            self.input.move_canvas(&self.scene.mapper, &mut self.points);
                        }
                    }
                    PointerMode::Idle => {}
                }
                true
            }
            WindowEvent::CursorLeft { .. } => {
                self.input.leave_surface();
                true
            }
            WindowEvent::KeyboardInput {
                event: key_event, ..
            } => {
                if key_event.state != ElementState::Pressed {
                    return false;
                }
                match key_event.physical_key {
                    PhysicalKey::Code(KeyCode::KeyC) => {
                        self.points.clear();
                        true
                    }
                    PhysicalKey::Code(KeyCode::KeyR) => {
                        self.matrix.reset();
                        true
                    }
                    _ => false,
                }
            }
            _ => false,
        }
    }

    fn apply_panel_action(&mut self, action: PanelAction) {
        match action {
            PanelAction::BeginSlide { row, col } => {
                self.input.mode = PointerMode::Adjusting { row, col };
                self.set_matrix_cell(row, col, self.input.cursor_pos[0]);
            }
            PanelAction::Command(PanelCommand::ClearPoints) => self.points.clear(),
            PanelAction::Command(PanelCommand::ResetMatrix) => self.matrix.reset(),
        }
    }

    fn set_matrix_cell(&mut self, row: usize, col: usize, cursor_x: f32) {
        let value = self.panel.value_at(row, col, cursor_x);
        if let Err(err) = self.matrix.set_cell(row, col, value) {
            // Keep the prior cell value; there is no user-facing error channel.
            log::warn!("ignoring slider update: {err}");
            return;
        }
        log::debug!("matrix = {:?}", self.matrix.m);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Point;

    fn setup() -> (InputState, PlaneMapper, PointSet) {
        (
            InputState::new(),
            PlaneMapper::new((500.0, 500.0)),
            PointSet::new(),
        )
    }

    #[test]
    fn test_press_appends_one_point_in_plane_coords() {
        let (mut input, mapper, mut points) = setup();
        input.cursor_pos = [260.0, 230.0];
        input.press_canvas(&mapper, &mut points);

        assert_eq!(input.mode, PointerMode::Drawing);
        assert_eq!(points.points(), &[Point::new(10.0, 20.0)]);
    }

    #[test]
    fn test_drag_paints_a_point_per_move() {
        let (mut input, mapper, mut points) = setup();
        input.cursor_pos = [250.0, 250.0];
        input.press_canvas(&mapper, &mut points);

        for i in 0..5 {
            input.cursor_pos = [251.0 + i as f32, 250.0];
            input.move_canvas(&mapper, &mut points);
        }

        // One press plus five moves, in event order.
        assert_eq!(points.len(), 6);
        assert_eq!(points.points()[0], Point::new(0.0, 0.0));
        assert_eq!(points.points()[5], Point::new(5.0, 0.0));
    }

    #[test]
    fn test_moves_while_idle_paint_nothing() {
        let (mut input, mapper, mut points) = setup();
        input.cursor_pos = [100.0, 100.0];
        input.move_canvas(&mapper, &mut points);
        assert!(points.is_empty());
    }

    #[test]
    fn test_release_ends_the_stroke() {
        let (mut input, mapper, mut points) = setup();
        input.cursor_pos = [250.0, 250.0];
        input.press_canvas(&mapper, &mut points);
        input.release();
        input.cursor_pos = [300.0, 300.0];
        input.move_canvas(&mapper, &mut points);

        assert_eq!(input.mode, PointerMode::Idle);
        assert_eq!(points.len(), 1);
    }

    #[test]
    fn test_leaving_the_surface_ends_the_stroke() {
        let (mut input, mapper, mut points) = setup();
        input.cursor_pos = [499.0, 250.0];
        input.press_canvas(&mapper, &mut points);
        input.leave_surface();

        assert_eq!(input.mode, PointerMode::Idle);
        assert_eq!(points.len(), 1);
    }
}
