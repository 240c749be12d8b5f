use crate::app::state::App;
use predation_tui::views::sparklines::SparklinesWidget;
use predation_tui::views::status::StatusWidget;
use predation_tui::FieldWidget;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Frame;

impl App {
    pub fn draw(&self, f: &mut Frame) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Status
                Constraint::Length(5), // Sparklines
                Constraint::Min(0),    // Field
            ])
            .split(f.area());

        let stats = self.current_stats();
        f.render_widget(
            StatusWidget {
                stats: &stats,
                iterations_left: self.iterations_left(),
                termination: self.last_outcome,
                paused: self.paused,
                time_scale: self.time_scale,
            },
            layout[0],
        );

        let predator_data = self.history.predator_series();
        let victim_data = self.history.victim_series();
        f.render_widget(
            SparklinesWidget {
                predator_data: &predator_data,
                victim_data: &victim_data,
            },
            layout[1],
        );

        f.render_widget(FieldWidget::new(&self.frame, self.tick_number()), layout[2]);
    }
}
