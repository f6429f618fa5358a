//! TUI Views
//!
//! Draws the whole screen from an `App`: title, tab bar, the visible
//! tab's content, and a footer with the status line or key hints.

use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Paragraph, Tabs},
};

use super::app::App;
use super::cards::render_cards;
use super::colors;
use super::state::{Mode, Tab};
use crate::domain::Field;

/// Title shown on the first line.
pub const TITLE: &str = "Tools Dashboard";
/// Shown on the custom tab before anything was added.
pub const EMPTY_CUSTOM_MESSAGE: &str = "No custom tools added yet.";

/// Text rows of the description box; name and url get one each.
const DESCRIPTION_ROWS: u16 = 3;
const FORM_HEIGHT: u16 = 3 + (DESCRIPTION_ROWS + 2) + 3 + 1 + 2;

const HELP_LINES: [(&str, &str); 9] = [
    ("Tab / Shift-Tab", "switch between AI Tools and My Tools"),
    ("1 / 2", "jump to a tab"),
    ("←↓↑→ / hjkl", "select a card"),
    ("Enter / o", "open the selected card's website"),
    ("i / a", "edit the Add New Tool form (My Tools)"),
    ("Tab / ↓ / ↑", "move between form fields"),
    ("Enter", "Add Tool"),
    ("Esc", "leave the form"),
    ("q / Ctrl-C", "quit"),
];

/// Render the full screen.
pub fn render(app: &App, frame: &mut Frame) {
    let [title, tabs, heading, content, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    frame.render_widget(
        Paragraph::new(Line::from(TITLE).centered())
            .style(Style::default().fg(colors::HEADER).add_modifier(Modifier::BOLD)),
        title,
    );
    render_tab_bar(app, frame, tabs);
    frame.render_widget(
        Paragraph::new(app.state().tab.heading()).style(Style::default().add_modifier(Modifier::BOLD)),
        heading,
    );

    match app.state().tab {
        Tab::Catalog => render_cards(
            frame,
            content,
            app.dashboard().catalog().tools(),
            Some(app.state().selected_card()),
        ),
        Tab::Custom => render_custom_tab(app, frame, content),
    }

    render_footer(app, frame, footer);

    if app.state().show_help {
        render_help(frame);
    }
}

fn render_tab_bar(app: &App, frame: &mut Frame, area: Rect) {
    let tabs = Tabs::new(Tab::ALL.iter().map(|t| t.title()))
        .select(app.state().tab.index())
        .style(Style::default().fg(colors::DIM))
        .highlight_style(Style::default().fg(colors::SELECTED).add_modifier(Modifier::BOLD));
    frame.render_widget(tabs, area);
}

fn render_custom_tab(app: &App, frame: &mut Frame, area: Rect) {
    let [form, list] = Layout::vertical([Constraint::Length(FORM_HEIGHT), Constraint::Min(0)]).areas(area);
    render_form(app, frame, form);

    let custom = app.dashboard().custom_tools();
    if custom.is_empty() {
        let message = Paragraph::new(vec![Line::default(), Line::from(EMPTY_CUSTOM_MESSAGE).centered()])
            .style(Style::default().fg(colors::MUTED));
        frame.render_widget(message, list);
    } else {
        // No highlight while the form has focus
        let selected = (!app.state().is_editing()).then(|| app.state().selected_card());
        render_cards(frame, list, custom.tools(), selected);
    }
}

fn render_form(app: &App, frame: &mut Frame, area: Rect) {
    let editing = match app.state().mode {
        Mode::Editing(field) => Some(field),
        Mode::Browse => None,
    };

    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if editing.is_some() { colors::SELECTED } else { colors::BORDER }))
        .title(Span::styled(" Add New Tool ", Style::default().add_modifier(Modifier::BOLD)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [name, description, url, button] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(DESCRIPTION_ROWS + 2),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(inner);

    for (field, field_area) in [(Field::Name, name), (Field::Description, description), (Field::Url, url)] {
        let focused = editing == Some(field);
        let input = app.state().form.get(field);
        let field_block = Block::bordered()
            .border_style(Style::default().fg(if focused { colors::SELECTED } else { colors::DIM }))
            .title(format!(" {} ", field.label()));
        let input_area = field_block.inner(field_area);

        // (column, row) of the cursor relative to input_area
        let (paragraph, cursor) = if field == Field::Description {
            let wrapped = input.wrap(input_area.width);
            let top = wrapped.cursor_row.saturating_sub(usize::from(input_area.height.max(1)) - 1);
            let lines: Vec<Line> = wrapped.rows.into_iter().map(Line::from).collect();
            (
                Paragraph::new(lines).scroll((to_cells(top), 0)),
                (wrapped.cursor_column, wrapped.cursor_row - top),
            )
        } else {
            let offset = input.horizontal_scroll(input_area.width);
            (
                Paragraph::new(input.content()).scroll((0, offset)),
                (input.cursor_column().saturating_sub(usize::from(offset)), 0),
            )
        };
        frame.render_widget(paragraph.block(field_block), field_area);

        if focused {
            let max_x = input_area.x + input_area.width.saturating_sub(1);
            let max_y = input_area.y + input_area.height.saturating_sub(1);
            let x = input_area.x.saturating_add(to_cells(cursor.0)).min(max_x);
            let y = input_area.y.saturating_add(to_cells(cursor.1)).min(max_y);
            frame.set_cursor_position(Position::new(x, y));
        }
    }

    let button_line = Line::from(Span::styled(
        " Add Tool ",
        Style::default().fg(colors::BUTTON_FG).bg(colors::BUTTON_BG),
    ));
    frame.render_widget(Paragraph::new(button_line), button);
}

fn to_cells(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let line = match &app.state().status_message {
        Some(message) => Line::from(Span::styled(message.as_str(), Style::default().fg(colors::STATUS))),
        None => {
            let hints: &[(&str, &str)] = match app.state().mode {
                Mode::Editing(_) => &[("Enter", "add tool"), ("Tab", "next field"), ("Esc", "done")],
                Mode::Browse if app.state().tab == Tab::Custom => {
                    &[("Tab", "switch tab"), ("i", "add tool"), ("Enter", "open"), ("?", "help"), ("q", "quit")]
                }
                Mode::Browse => &[("Tab", "switch tab"), ("Enter", "open"), ("?", "help"), ("q", "quit")],
            };
            Line::from(
                hints
                    .iter()
                    .flat_map(|(key, action)| {
                        [
                            Span::styled(format!("<{}>", key), Style::default().fg(colors::KEYBIND)),
                            Span::styled(format!(" {}  ", action), Style::default().fg(colors::DIM)),
                        ]
                    })
                    .collect::<Vec<_>>(),
            )
        }
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn render_help(frame: &mut Frame) {
    let height = HELP_LINES.len() as u16 + 2;
    let [area] = Layout::vertical([Constraint::Length(height)]).flex(Flex::Center).areas(frame.area());
    let [area] = Layout::horizontal([Constraint::Length(64)]).flex(Flex::Center).areas(area);

    let lines: Vec<Line> = HELP_LINES
        .iter()
        .map(|(keys, action)| {
            Line::from(vec![
                Span::styled(format!("{:<18}", keys), Style::default().fg(colors::KEYBIND)),
                Span::raw(*action),
            ])
        })
        .collect();

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines).block(Block::bordered().border_type(BorderType::Rounded).title(" Help ")),
        area,
    );
}
