use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use userdeck_core::{DetailState, UserDetail};

use crate::app::{App, Focus};
use crate::ui::styles;

/// Render the detail pane for the current selection
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let focused = matches!(app.focus, Focus::Detail);
    let messages = app.messages();

    let lines = match app.directory.detail_state() {
        DetailState::Empty => vec![Line::from(Span::styled(messages.select_prompt, styles::muted_style()))],
        DetailState::Loading { .. } => vec![Line::from(Span::styled(messages.detail_loading, styles::muted_style()))],
        DetailState::Failed { message, .. } => vec![Line::from(Span::styled(message.as_str(), styles::error_style()))],
        DetailState::Loaded(detail) => {
            let age = app.directory.detail_loader().cache().age_display(detail.id);
            detail_lines(detail, age)
        }
    };

    let block = Block::default()
        .title(" Details ")
        .title_style(styles::muted_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(focused));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn detail_lines(detail: &UserDetail, age: Option<String>) -> Vec<Line<'_>> {
    let placeholder = "-";
    let or_placeholder = |value: &str| -> String {
        if value.trim().is_empty() {
            placeholder.to_string()
        } else {
            value.to_string()
        }
    };

    let mut lines = vec![
        Line::from(Span::styled(detail.name.as_str(), styles::title_style())),
        Line::from(""),
        Line::from(vec![
            Span::styled("City:     ", styles::muted_style()),
            Span::raw(or_placeholder(&detail.city)),
        ]),
        Line::from(vec![
            Span::styled("Company:  ", styles::muted_style()),
            Span::raw(or_placeholder(&detail.company)),
        ]),
        Line::from(vec![
            Span::styled("Position: ", styles::muted_style()),
            Span::raw(or_placeholder(&detail.position)),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Avatar:   ", styles::muted_style()),
            Span::styled(detail.avatar().unwrap_or(placeholder), styles::highlight_style()),
        ]),
    ];

    if let Some(age) = age {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(format!("Fetched {}", age), styles::muted_style())));
    }

    lines
}
