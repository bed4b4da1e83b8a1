use ratatui::{
    layout::{Constraint, Rect},
    widgets::{Block, Borders, Cell, Row, Table, TableState},
    Frame,
};

use crate::app::{App, Focus};
use crate::ui::styles;

/// Marker shown in front of the selected user
const SELECTED_MARKER: &str = "▶";

/// Render the user list. The selected user is marked and styled; the cursor
/// row is highlighted separately and is what `Enter` selects.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let users = app.directory.users();
    let selected_id = app.directory.selected_id();
    let focused = matches!(app.focus, Focus::List);

    let rows: Vec<Row> = users.iter().map(|user| {
        let is_selected = selected_id == Some(user.id);
        let (marker, style) = if is_selected {
            (SELECTED_MARKER, styles::selected_style())
        } else {
            ("", styles::list_item_style())
        };

        Row::new(vec![
            Cell::from(marker),
            Cell::from(user.name.as_str()),
            Cell::from(format!("{:>4}", user.id)),
        ]).style(style)
    }).collect();

    let widths = [
        Constraint::Length(2),  // Marker
        Constraint::Fill(1),    // Name
        Constraint::Length(5),  // Id
    ];

    let title = format!(" Users ({}) ", users.len());

    let table = Table::new(rows, widths)
        .block(
            Block::default()
                .title(title)
                .title_style(styles::muted_style())
                .borders(Borders::ALL)
                .border_style(styles::border_style(focused))
        )
        .row_highlight_style(styles::cursor_style());

    let mut state = TableState::default();
    if !users.is_empty() {
        state.select(Some(app.cursor));
    }

    frame.render_stateful_widget(table, area, &mut state);
}
