use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::FieldView;
use super::components::{centered_rect, field_height, render_field, render_footer};

const FIELD_WIDTH: u16 = 48;

pub struct UiContext<'a> {
    pub title: Option<&'a str>,
    pub view: &'a FieldView,
    pub status_message: &'a str,
    pub help: Option<&'a str>,
}

pub fn draw(frame: &mut Frame<'_>, ctx: UiContext<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(5),
            Constraint::Length(4),
        ])
        .split(frame.area());

    if let Some(title) = ctx.title {
        let header = Paragraph::new(Line::from(Span::styled(
            title.to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));
        frame.render_widget(header, chunks[0]);
    }

    let width = FIELD_WIDTH.min(chunks[1].width);
    let inner_width = width.saturating_sub(2);
    let area = centered_rect(chunks[1], width, field_height(ctx.view, inner_width));
    render_field(frame, area, ctx.view);
    render_footer(frame, chunks[2], &ctx);
}
