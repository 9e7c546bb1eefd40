mod app;
mod app_state;
mod canvas;
mod event_handler;
mod math;
mod model;
mod renderer;
mod state;
mod transform;
mod ui;
mod update_logic;
mod vertex;

// Re-export the main public interface
pub use app::run;
pub use app_state::State;
pub use canvas::PlaneMapper;
pub use model::{Point, PointSet};
pub use transform::Mat2;

// Re-export for WASM compatibility
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg_attr(target_arch = "wasm32", wasm_bindgen(start))]
pub async fn start() {
    run().await;
}
