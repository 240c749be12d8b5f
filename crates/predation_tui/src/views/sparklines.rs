use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Sparkline, Widget};

pub struct SparklinesWidget<'a> {
    pub predator_data: &'a [u64],
    pub victim_data: &'a [u64],
}

impl<'a> Widget for SparklinesWidget<'a> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let spark_layout = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        Sparkline::default()
            .block(Block::default().title(" Predators "))
            .data(self.predator_data)
            .style(Style::default().fg(Color::Red))
            .render(spark_layout[0], buf);

        Sparkline::default()
            .block(Block::default().title(" Victims "))
            .data(self.victim_data)
            .style(Style::default().fg(Color::Gray))
            .render(spark_layout[1], buf);
    }
}
