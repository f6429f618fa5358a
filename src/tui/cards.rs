//! Card grid
//!
//! Turns an ordered slice of tools into a grid of cards. Layout is
//! computed by pure functions so it can be checked without a terminal;
//! `render_cards` only draws what they return.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Wrap},
};

use super::colors;
use crate::domain::Tool;

/// Terminal width at which the grid switches to two columns.
pub const MEDIUM_WIDTH: u16 = 80;
/// Terminal width at which the grid switches to three columns.
pub const WIDE_WIDTH: u16 = 120;
/// Rows taken by one card, borders included.
pub const CARD_HEIGHT: u16 = 7;

/// Label of each card's outbound link.
pub const VISIT_LABEL: &str = "Visit Website ↗";

/// Number of card columns for a terminal `width` cells wide.
pub fn grid_columns(width: u16) -> usize {
    if width >= WIDE_WIDTH {
        3
    } else if width >= MEDIUM_WIDTH {
        2
    } else {
        1
    }
}

/// Where one card sits in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardSlot {
    /// Position of the tool in its list, also used as the card's key
    pub key: usize,
    pub row: usize,
    pub column: usize,
}

/// Lay `count` cards out row by row, keeping list order.
pub fn layout_grid(count: usize, columns: usize) -> Vec<CardSlot> {
    let columns = columns.max(1);
    (0..count)
        .map(|key| CardSlot {
            key,
            row: key / columns,
            column: key % columns,
        })
        .collect()
}

/// First grid row to draw so that the selected card stays on screen.
pub fn first_visible_row(selected: usize, columns: usize, visible_rows: usize) -> usize {
    let selected_row = selected / columns.max(1);
    selected_row.saturating_sub(visible_rows.max(1) - 1)
}

/// Draw `tools` as a grid into `area`, highlighting `selected` if given.
pub fn render_cards(frame: &mut Frame, area: Rect, tools: &[Tool], selected: Option<usize>) {
    let columns = grid_columns(area.width);
    let visible_rows = usize::from((area.height / CARD_HEIGHT).max(1));
    let first_row = first_visible_row(selected.unwrap_or(0), columns, visible_rows);

    let rows = Layout::vertical(std::iter::repeat_n(Constraint::Length(CARD_HEIGHT), visible_rows)).split(area);
    let column_constraints = std::iter::repeat_n(Constraint::Ratio(1, columns as u32), columns);

    for (row_offset, row_area) in rows.iter().enumerate() {
        let row = first_row + row_offset;
        let cells = Layout::horizontal(column_constraints.clone()).spacing(1).split(*row_area);
        for slot in layout_grid(tools.len(), columns).into_iter().filter(|s| s.row == row) {
            let tool = &tools[slot.key];
            render_card(frame, cells[slot.column], tool, selected == Some(slot.key));
        }
    }
}

fn render_card(frame: &mut Frame, area: Rect, tool: &Tool, selected: bool) {
    let border_style = if selected {
        Style::default().fg(colors::SELECTED)
    } else {
        Style::default().fg(colors::BORDER)
    };

    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(border_style)
        .title(Span::styled(
            format!(" {} ", tool.name),
            Style::default().add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [body, footer] = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);

    let description = Paragraph::new(tool.description.as_str())
        .style(Style::default().fg(colors::MUTED))
        .wrap(Wrap { trim: true });
    frame.render_widget(description, body);

    let button_style = if selected {
        Style::default().fg(colors::BUTTON_FG).bg(colors::SELECTED)
    } else {
        Style::default().fg(colors::BUTTON_FG).bg(colors::BUTTON_BG)
    };
    let link = Line::from(Span::styled(format!(" {} ", VISIT_LABEL), button_style)).centered();
    frame.render_widget(Paragraph::new(link), footer);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_columns_breakpoints() {
        assert_eq!(grid_columns(40), 1);
        assert_eq!(grid_columns(MEDIUM_WIDTH - 1), 1);
        assert_eq!(grid_columns(MEDIUM_WIDTH), 2);
        assert_eq!(grid_columns(WIDE_WIDTH - 1), 2);
        assert_eq!(grid_columns(WIDE_WIDTH), 3);
        assert_eq!(grid_columns(300), 3);
    }

    #[test]
    fn test_layout_grid_keeps_order() {
        let slots = layout_grid(5, 3);
        let keys: Vec<usize> = slots.iter().map(|s| s.key).collect();
        assert_eq!(keys, vec![0, 1, 2, 3, 4]);
        assert_eq!(slots[2], CardSlot { key: 2, row: 0, column: 2 });
        assert_eq!(slots[3], CardSlot { key: 3, row: 1, column: 0 });
    }

    #[test]
    fn test_layout_grid_single_column() {
        let slots = layout_grid(3, 1);
        assert!(slots.iter().all(|s| s.column == 0));
        assert_eq!(slots.iter().map(|s| s.row).collect::<Vec<_>>(), vec![0, 1, 2]);
    }

    #[test]
    fn test_layout_grid_zero_columns_treated_as_one() {
        assert_eq!(layout_grid(2, 0), layout_grid(2, 1));
    }

    #[test]
    fn test_layout_grid_empty() {
        assert!(layout_grid(0, 3).is_empty());
    }

    #[test]
    fn test_first_visible_row_scrolls_to_selection() {
        assert_eq!(first_visible_row(0, 2, 2), 0);
        assert_eq!(first_visible_row(3, 2, 2), 0);
        assert_eq!(first_visible_row(4, 2, 2), 1);
        assert_eq!(first_visible_row(9, 1, 3), 7);
        assert_eq!(first_visible_row(9, 1, 0), 9);
    }
}
