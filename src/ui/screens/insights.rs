use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::insights::FetchState;
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::format_amount;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(
            " AI Financial Assistant ",
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        ));

    let lines = match app.insights.state {
        FetchState::Idle => idle_lines(),
        FetchState::Loading => loading_lines(app.tick),
        FetchState::Loaded | FetchState::Error => result_lines(app),
    };

    let panel = Paragraph::new(lines).wrap(Wrap { trim: false }).block(block);
    f.render_widget(panel, area);
}

fn idle_lines() -> Vec<Line<'static>> {
    vec![
        Line::from(""),
        Line::from(Span::styled(
            " Get personalized saving tips and budget recommendations",
            theme::normal_style(),
        )),
        Line::from(Span::styled(
            " based on your spending.",
            theme::normal_style(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            " Press g to fetch insights",
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
    ]
}

fn loading_lines(tick: usize) -> Vec<Line<'static>> {
    let frame = SPINNER_FRAMES[tick % SPINNER_FRAMES.len()];
    vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(format!(" {frame} "), Style::default().fg(theme::YELLOW)),
            Span::styled("Analyzing your expenses…", theme::normal_style()),
        ]),
    ]
}

fn result_lines(app: &App) -> Vec<Line<'static>> {
    let panel = &app.insights;
    let mut lines: Vec<Line> = Vec::new();

    if let Some(ref error) = panel.error {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!(" ✗ {error}"),
            theme::error_style().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            " Press g to retry",
            theme::dim_style(),
        )));
        if panel.has_results() {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                " Showing previous results:",
                theme::dim_style(),
            )));
        }
    }

    if !panel.has_results() {
        if panel.error.is_none() {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                " No suggestions this time. Press g to try again.",
                theme::dim_style(),
            )));
        }
        return lines;
    }

    if !panel.saving_tips.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            " Money-Saving Recommendations",
            Style::default()
                .fg(theme::YELLOW)
                .add_modifier(Modifier::BOLD),
        )));
        for tip in &panel.saving_tips {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!(" • {}", tip.tip),
                theme::normal_style(),
            )));
            lines.push(Line::from(vec![
                Span::styled(format!("   {}", tip.category), theme::dim_style()),
                Span::styled(
                    format!(
                        "   Potential savings: {}",
                        format_amount(tip.potential_saving)
                    ),
                    theme::saving_style().add_modifier(Modifier::BOLD),
                ),
            ]));
        }
    }

    if !panel.budget_recommendations.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            " Budget Recommendations",
            Style::default()
                .fg(theme::YELLOW)
                .add_modifier(Modifier::BOLD),
        )));
        for rec in &panel.budget_recommendations {
            lines.push(Line::from(""));
            lines.push(Line::from(vec![
                Span::styled(format!(" {:<16}", rec.category), theme::normal_style()),
                Span::styled(
                    format!("{}/month", format_amount(rec.recommended_amount)),
                    Style::default()
                        .fg(theme::ACCENT)
                        .add_modifier(Modifier::BOLD),
                ),
            ]));
            lines.push(Line::from(Span::styled(
                format!("   {}", rec.reasoning),
                theme::dim_style(),
            )));
        }
    }

    lines
}
