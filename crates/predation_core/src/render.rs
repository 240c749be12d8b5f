//! Display sink consumed by the engine after each tick.

use predation_data::Cell;

/// Receives the scene after every tick.
///
/// The engine calls [`clear`](RenderSink::clear) once per `advance`, then
/// [`draw`](RenderSink::draw) once per live agent (predators first), or
/// [`show_message`](RenderSink::show_message) exactly once when the run
/// ends.
pub trait RenderSink {
    fn clear(&mut self) {}

    fn draw(&mut self, cell: &Cell);

    fn show_message(&mut self, text: &str);
}

/// Discards everything. Used by headless runs and benchmarks.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl RenderSink for NullSink {
    fn draw(&mut self, _cell: &Cell) {}

    fn show_message(&mut self, _text: &str) {}
}

/// Keeps the last frame in memory.
#[derive(Debug, Default, Clone)]
pub struct FrameBuffer {
    pub cells: Vec<Cell>,
    pub message: Option<String>,
    /// Total `draw` calls since creation.
    pub draw_calls: usize,
    /// Total `show_message` calls since creation.
    pub message_calls: usize,
}

impl FrameBuffer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl RenderSink for FrameBuffer {
    fn clear(&mut self) {
        self.cells.clear();
    }

    fn draw(&mut self, cell: &Cell) {
        self.cells.push(*cell);
        self.draw_calls += 1;
    }

    fn show_message(&mut self, text: &str) {
        self.message = Some(text.to_string());
        self.message_calls += 1;
    }
}
