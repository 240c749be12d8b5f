#[cfg(not(target_arch = "wasm32"))]
pub mod tui {
    pub use predation_tui::views;
    pub use predation_tui::{FieldFrame, FieldWidget, Tui};
}

#[cfg(target_arch = "wasm32")]
pub mod web_renderer;
