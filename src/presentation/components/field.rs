use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color as TuiColor, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use textwrap::wrap;
use unicode_width::UnicodeWidthStr;

use crate::domain::{Color, LineType};
use crate::presentation::{AccessoryIcon, AffixProps, FieldView, UnderlineProps};

const MASK: char = '•';

/// Rows the field needs at `width`: label, input, underline and the wrapped
/// helper row.
pub fn field_height(view: &FieldView, width: u16) -> u16 {
    3 + helper_lines(view, width).len() as u16 + 2
}

pub fn render_field(frame: &mut Frame<'_>, area: Rect, view: &FieldView) {
    let background = view.container.background;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(tui_color(view.underline.color, background)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let helper = helper_lines(view, inner.width);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(helper.len() as u16),
            Constraint::Min(0),
        ])
        .split(inner);

    let alignment = if view.rtl {
        Alignment::Right
    } else {
        Alignment::Left
    };

    if view.label.is_floating() {
        let label = Paragraph::new(Line::from(Span::styled(
            view.label.text.clone(),
            label_style(view),
        )))
        .alignment(alignment);
        frame.render_widget(label, rows[0]);
    }

    let (input_line, cursor_column) = input_line(view);
    frame.render_widget(Paragraph::new(input_line).alignment(alignment), rows[1]);
    if view.label.focused {
        let width = rows[1].width;
        let column = if view.rtl {
            width.saturating_sub(1)
        } else {
            cursor_column.min(width.saturating_sub(1))
        };
        frame.set_cursor_position((rows[1].x.saturating_add(column), rows[1].y));
    }

    frame.render_widget(
        Paragraph::new(underline_line(&view.underline, rows[2].width, background)),
        rows[2],
    );
    frame.render_widget(Paragraph::new(helper), rows[3]);
}

fn label_style(view: &FieldView) -> Style {
    let style = Style::default().fg(tui_color(
        view.label.resolved_color(),
        view.container.background,
    ));
    if view.label.focused {
        style.add_modifier(Modifier::BOLD)
    } else {
        style
    }
}

/// The input row and the column right after the typed text.
fn input_line(view: &FieldView) -> (Line<'static>, u16) {
    let background = view.container.background;
    let input = &view.input;
    let mut spans = Vec::new();
    let mut column = 0usize;

    let mut push = |spans: &mut Vec<Span<'static>>, text: String, style: Style| {
        column += UnicodeWidthStr::width(text.as_str());
        spans.push(Span::styled(text, style));
    };

    if let Some(prefix) = visible_affix(view.prefix.as_ref()) {
        let style = Style::default().fg(tui_color(prefix.base_color, background));
        push(&mut spans, format!("{} ", prefix.text), style);
    }

    let text_style = Style::default().fg(tui_color(input.style.color, background));
    if input.value.is_empty() {
        if !view.label.is_floating() {
            let style = Style::default().fg(tui_color(view.label.base_color, background));
            spans.push(Span::styled(view.label.text.clone(), style));
        } else if let Some(placeholder) = &input.placeholder {
            let style = Style::default()
                .fg(tui_color(view.label.base_color, background))
                .add_modifier(Modifier::ITALIC);
            spans.push(Span::styled(placeholder.clone(), style));
        }
    } else if input.secure_text_entry {
        let masked: String = input.value.chars().map(|_| MASK).collect();
        push(&mut spans, masked, text_style);
    } else {
        push(&mut spans, input.value.clone(), text_style);
    }

    if let Some(accessory) = &view.accessory {
        let glyph = match accessory.icon {
            AccessoryIcon::Eye => " [show]",
            AccessoryIcon::EyeOff => " [hide]",
        };
        spans.push(Span::styled(
            glyph,
            Style::default().fg(tui_color(accessory.color, background)),
        ));
    }
    if let Some(suffix) = visible_affix(view.suffix.as_ref()) {
        let style = Style::default().fg(tui_color(suffix.base_color, background));
        spans.push(Span::styled(format!(" {}", suffix.text), style));
    }

    if view.rtl {
        spans.reverse();
    }
    (Line::from(spans), column as u16)
}

fn visible_affix(affix: Option<&AffixProps>) -> Option<&AffixProps> {
    affix.filter(|affix| affix.is_visible())
}

fn underline_line(underline: &UnderlineProps, width: u16, background: Color) -> Line<'static> {
    let glyph = match underline.line_type {
        LineType::Solid if underline.width >= 1.5 => "━",
        LineType::Solid => "─",
        LineType::Dotted => "┄",
        LineType::Dashed => "╌",
        LineType::None => " ",
    };
    Line::from(Span::styled(
        glyph.repeat(width as usize),
        Style::default().fg(tui_color(underline.color, background)),
    ))
}

/// Error or helper text (whichever is more opaque right now) on the left,
/// the counter on the right of the first row.
fn helper_lines(view: &FieldView, width: u16) -> Vec<Line<'static>> {
    let background = view.container.background;
    let counter = view.counter.display();
    let counter_width = counter
        .as_ref()
        .map(|counter| UnicodeWidthStr::width(counter.text.as_str()) + 1)
        .unwrap_or(0);

    let showing_error =
        view.error.text.is_some() && view.error.style.opacity > view.helper.style.opacity;
    let (message, style) = if showing_error {
        (view.error.text.as_deref(), view.error.style)
    } else {
        (view.helper.text.as_deref(), view.helper.style)
    };
    let color = style.color.with_alpha(style.color.a * style.opacity);

    let text_width = (width as usize).saturating_sub(counter_width).max(1);
    let mut rows: Vec<String> = message
        .map(|message| {
            wrap(message, text_width)
                .into_iter()
                .map(|segment| segment.into_owned())
                .collect()
        })
        .unwrap_or_default();
    if rows.is_empty() && counter.is_none() {
        return Vec::new();
    }
    if rows.is_empty() {
        rows.push(String::new());
    }

    let text_style = Style::default().fg(tui_color(color, background));
    rows.into_iter()
        .enumerate()
        .map(|(index, row)| {
            let mut spans = vec![Span::styled(row.clone(), text_style)];
            if index == 0
                && let Some(counter) = &counter
            {
                let used = UnicodeWidthStr::width(row.as_str());
                let gap = (width as usize)
                    .saturating_sub(used)
                    .saturating_sub(counter_width - 1);
                spans.push(Span::raw(" ".repeat(gap)));
                spans.push(Span::styled(
                    counter.text.clone(),
                    Style::default().fg(tui_color(counter.color, background)),
                ));
            }
            if view.rtl {
                spans.reverse();
            }
            Line::from(spans)
        })
        .collect()
}

/// Flattens a translucent palette color onto the container background.
pub fn tui_color(color: Color, background: Color) -> TuiColor {
    let solid = color.over(background);
    TuiColor::Rgb(solid.r, solid.g, solid.b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FieldConfig, FieldType, PlatformQuirks};
    use crate::presentation::{FieldSnapshot, build_view};

    fn view(config: &FieldConfig, text: &str, focused: bool) -> FieldView {
        build_view(
            FieldSnapshot {
                text,
                focused,
                received_focus: focused,
                errored: false,
                error: None,
                position: if focused { 1.0 } else { 0.0 },
                content_height: 24.0,
                secure_text_entry: config.field_type == FieldType::Password,
            },
            config,
            &PlatformQuirks::default(),
        )
    }

    fn plain(line: &Line<'_>) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn secure_text_is_masked() {
        let config = FieldConfig::new("Password").with_type(FieldType::Password);
        let (line, column) = input_line(&view(&config, "hunter2", true));
        assert_eq!(plain(&line), "••••••• [show]");
        assert_eq!(column, 7);
    }

    #[test]
    fn accessory_sits_between_value_and_suffix() {
        let config = FieldConfig::new("Password")
            .with_type(FieldType::Password)
            .with_prefix("#")
            .with_suffix("key");
        let (line, _) = input_line(&view(&config, "abc", true));
        assert_eq!(plain(&line), "# ••• [show] key");
    }

    #[test]
    fn resting_empty_field_shows_label_inline() {
        let config = FieldConfig::new("Email");
        let (line, _) = input_line(&view(&config, "", false));
        assert_eq!(plain(&line), "Email");
    }

    #[test]
    fn affixes_frame_the_value() {
        let config = FieldConfig::new("Price").with_prefix("$").with_suffix("USD");
        let (line, column) = input_line(&view(&config, "12", false));
        assert_eq!(plain(&line), "$ 12 USD");
        assert_eq!(column, 4);
    }

    #[test]
    fn counter_sits_at_the_right_edge() {
        let config = FieldConfig::new("Bio")
            .with_helper("Tell us")
            .with_character_restriction(20);
        let lines = helper_lines(&view(&config, "hello", false), 20);
        assert_eq!(lines.len(), 1);
        let row = plain(&lines[0]);
        assert!(row.starts_with("Tell us"));
        assert!(row.ends_with("5 / 20"));
        assert_eq!(UnicodeWidthStr::width(row.as_str()), 20);
    }

    #[test]
    fn no_helper_row_without_content() {
        let config = FieldConfig::new("Name");
        assert!(helper_lines(&view(&config, "x", false), 30).is_empty());
    }

    #[test]
    fn dotted_underline_for_disabled_fields() {
        let config = FieldConfig::new("Name").with_disabled(true);
        let view = view(&config, "", false);
        let line = underline_line(&view.underline, 3, view.container.background);
        assert_eq!(plain(&line), "┄┄┄");
    }
}
