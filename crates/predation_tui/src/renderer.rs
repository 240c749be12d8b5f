use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use predation_core::render::RenderSink;
use predation_data::{Cell, Species, CELL_SIZE};

/// Terminal columns used per grid cell; terminal glyphs are roughly twice
/// as tall as they are wide.
const COLUMNS_PER_CELL: u16 = 2;

/// Last frame drawn by the engine, one slot per grid cell.
///
/// Later draws overwrite earlier ones on the same cell, so a victim drawn
/// after a predator on the same spot hides it, as on a canvas.
#[derive(Debug, Clone)]
pub struct FieldFrame {
    columns: usize,
    slots: Vec<Option<Species>>,
    message: Option<String>,
    predators: usize,
    victims: usize,
}

impl FieldFrame {
    pub fn new(grid_size: i32) -> Self {
        let columns = (grid_size / CELL_SIZE).max(0) as usize;
        Self {
            columns,
            slots: vec![None; columns * columns],
            message: None,
            predators: 0,
            victims: 0,
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn slot(&self, col: usize, row: usize) -> Option<Species> {
        if col >= self.columns || row >= self.columns {
            return None;
        }
        self.slots[row * self.columns + col]
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Agents drawn in the current frame, per species.
    pub fn counts(&self) -> (usize, usize) {
        (self.predators, self.victims)
    }
}

impl RenderSink for FieldFrame {
    fn clear(&mut self) {
        self.slots.iter_mut().for_each(|s| *s = None);
        self.message = None;
        self.predators = 0;
        self.victims = 0;
    }

    fn draw(&mut self, cell: &Cell) {
        match cell.species {
            Species::Predator => self.predators += 1,
            Species::Victim => self.victims += 1,
        }
        let (col, row) = cell.grid_index();
        if col < 0 || row < 0 {
            return;
        }
        let (col, row) = (col as usize, row as usize);
        if col < self.columns && row < self.columns {
            self.slots[row * self.columns + col] = Some(cell.species);
        }
    }

    fn show_message(&mut self, text: &str) {
        self.message = Some(text.to_string());
    }
}

pub struct FieldWidget<'a> {
    frame: &'a FieldFrame,
    tick: u64,
}

impl<'a> FieldWidget<'a> {
    pub fn new(frame: &'a FieldFrame, tick: u64) -> Self {
        Self { frame, tick }
    }

    pub fn color_for(species: Species) -> Color {
        match species {
            Species::Predator => Color::Red,
            Species::Victim => Color::Gray,
        }
    }

    pub fn get_inner_area(area: Rect) -> Rect {
        Block::default().borders(Borders::ALL).inner(area)
    }

    /// Screen position of the top-left glyph of grid cell `(col, row)`.
    pub fn grid_to_screen(col: usize, row: usize, area: Rect) -> Option<(u16, u16)> {
        let inner = Self::get_inner_area(area);
        let x = inner.x as usize + col * COLUMNS_PER_CELL as usize;
        let y = inner.y as usize + row;
        if x + (COLUMNS_PER_CELL as usize) <= inner.right() as usize && y < inner.bottom() as usize
        {
            Some((x as u16, y as u16))
        } else {
            None
        }
    }
}

impl<'a> Widget for FieldWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(format!(" Field (Tick: {}) ", self.tick))
            .borders(Borders::ALL)
            .render(area, buf);

        let inner = Self::get_inner_area(area);

        if let Some(message) = self.frame.message() {
            let y = inner.y + inner.height / 2;
            let line = Rect::new(inner.x, y, inner.width, 1.min(inner.height));
            Paragraph::new(message)
                .alignment(Alignment::Center)
                .style(
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                )
                .render(line, buf);
            return;
        }

        for row in 0..self.frame.columns() {
            for col in 0..self.frame.columns() {
                let Some(species) = self.frame.slot(col, row) else {
                    continue;
                };
                let Some((x, y)) = Self::grid_to_screen(col, row, area) else {
                    continue;
                };
                for dx in 0..COLUMNS_PER_CELL {
                    if let Some(glyph) = buf.cell_mut((x + dx, y)) {
                        glyph.set_symbol("█").set_fg(Self::color_for(species));
                    }
                }
            }
        }
    }
}
