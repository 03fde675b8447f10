use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table},
    Frame,
};

use crate::ui::app::{App, InputMode, FORM_FIELDS};
use crate::ui::theme;
use crate::ui::util::{format_amount, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    render_table(f, area, app);
    if app.input_mode == InputMode::Form {
        render_add_form(f, area, app);
    }
}

fn render_table(f: &mut Frame, area: Rect, app: &App) {
    if app.visible.is_empty() {
        let msg = if !app.search_input.is_empty() {
            vec![
                Line::from(""),
                Line::from(Span::styled(
                    format!("No expenses matching '{}'", app.search_input),
                    theme::dim_style(),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    "Press Esc to clear the search",
                    theme::dim_style(),
                )),
            ]
        } else {
            vec![
                Line::from(""),
                Line::from(Span::styled("No expenses yet", theme::dim_style())),
                Line::from(""),
                Line::from(Span::styled(
                    "Press a to add one, or :add <date> <category> <amount>",
                    theme::dim_style(),
                )),
            ]
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(
                " Expenses (0) ",
                Style::default()
                    .fg(theme::TEXT_DIM)
                    .add_modifier(Modifier::BOLD),
            ));
        f.render_widget(Paragraph::new(msg).centered().block(block), area);
        return;
    }

    let header_cells = ["Date", "Category", "Description", "Amount"]
        .iter()
        .map(|h| Cell::from(*h).style(theme::header_style()));
    let header = Row::new(header_cells).height(1);

    let rows: Vec<Row> = app
        .visible
        .iter()
        .enumerate()
        .skip(app.expense_scroll)
        .take(area.height.saturating_sub(3) as usize)
        .filter_map(|(pos, &i)| app.store.expenses().get(i).map(|e| (pos, e)))
        .map(|(pos, expense)| {
            let style = if pos == app.expense_index {
                theme::selected_style()
            } else if pos % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };

            Row::new(vec![
                Cell::from(expense.date.clone()),
                Cell::from(expense.category.clone()),
                Cell::from(truncate(&expense.description, 40)),
                Cell::from(format_amount(expense.amount)),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(12),
        Constraint::Length(16),
        Constraint::Min(20),
        Constraint::Length(14),
    ];

    let title = format!(
        " Expenses ({}) {}",
        app.visible.len(),
        if app.search_input.is_empty() {
            String::new()
        } else {
            format!("search: '{}' ", app.search_input)
        }
    );

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(
                title,
                Style::default()
                    .fg(theme::TEXT_DIM)
                    .add_modifier(Modifier::BOLD),
            )),
    );

    f.render_widget(table, area);
}

/// Centered popup with one row per draft field; the focused field is
/// highlighted and receives keystrokes.
fn render_add_form(f: &mut Frame, area: Rect, app: &App) {
    let popup_width = 52.min(area.width.saturating_sub(4));
    let popup_height = 12.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(x, y, popup_width, popup_height);

    let draft = &app.store.draft;
    let values = [
        draft.amount.clone(),
        if draft.category.is_empty() {
            "(+/- to pick)".into()
        } else {
            draft.category.clone()
        },
        draft.date.clone(),
        draft.description.clone(),
    ];

    let mut lines = vec![Line::from("")];
    for (i, (label, value)) in FORM_FIELDS.iter().zip(values.iter()).enumerate() {
        let focused = i == app.form_field;
        let marker = if focused { "▸ " } else { "  " };
        let label_style = if focused {
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD)
        } else {
            theme::dim_style()
        };
        let value_style = if focused {
            theme::normal_style().add_modifier(Modifier::BOLD)
        } else {
            theme::normal_style()
        };
        let cursor = if focused { "_" } else { "" };
        lines.push(Line::from(vec![
            Span::styled(format!("{marker}{label:<12}"), label_style),
            Span::styled(format!("{value}{cursor}"), value_style),
        ]));
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        " Tab/arrows fields · +/- category · Enter save · Esc cancel",
        theme::dim_style(),
    )));

    f.render_widget(Clear, popup_area);
    let form = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::ACCENT))
            .style(Style::default().bg(theme::HEADER_BG))
            .title(Span::styled(
                " Add Expense ",
                Style::default()
                    .fg(theme::ACCENT)
                    .add_modifier(Modifier::BOLD),
            )),
    );
    f.render_widget(form, popup_area);
}
