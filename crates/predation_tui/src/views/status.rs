use predation_core::stats::TickStats;
use predation_core::Termination;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Paragraph, Widget};

pub struct StatusWidget<'a> {
    pub stats: &'a TickStats,
    pub iterations_left: u32,
    pub termination: Termination,
    pub paused: bool,
    pub time_scale: f64,
}

impl<'a> StatusWidget<'a> {
    fn state_label(&self) -> (&'static str, Color) {
        if self.termination.is_terminal() {
            ("FINISHED", Color::Magenta)
        } else if self.paused {
            ("PAUSED", Color::Yellow)
        } else {
            ("RUNNING", Color::Green)
        }
    }
}

impl<'a> Widget for StatusWidget<'a> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let status_lines = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(area);

        let (label, color) = self.state_label();
        Paragraph::new(format!(
            " {} | Tick: {} | Left: {} | Speed: {:.1}x | [q]uit [space] pause [r]estart [+/-] speed",
            label, self.stats.tick, self.iterations_left, self.time_scale
        ))
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .render(status_lines[0], buf);

        Paragraph::new(format!(
            " Predators: {} (+{} born, {} starved) | Victims: {} (+{} born, {} eaten)",
            self.stats.predators,
            self.stats.predator_births,
            self.stats.starvations,
            self.stats.victims,
            self.stats.victim_births,
            self.stats.predations
        ))
        .render(status_lines[1], buf);
    }
}
