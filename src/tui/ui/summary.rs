//! Summary view: red flags, diagnoses, investigations, and export status.

use std::path::PathBuf;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::application::Report;
use crate::tui::styles::ClinicTheme;

/// Outcome of the most recent export attempt.
#[derive(Debug, Clone)]
pub enum ExportStatus {
    Saved(PathBuf),
    Failed(String),
}

/// Summary screen state.
pub struct SummaryState {
    pub report: Report,
    /// Whether any symptom was reported at all; an empty form gets a prompt
    /// instead of empty sections.
    pub any_symptoms: bool,
    pub export_status: Option<ExportStatus>,
}

/// Render the summary view
pub fn render_summary(f: &mut Frame, area: Rect, state: &SummaryState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Footer
        ])
        .split(area);

    render_summary_header(f, chunks[0], state);
    if state.any_symptoms {
        render_summary_content(f, chunks[1], state);
    } else {
        render_empty_prompt(f, chunks[1]);
    }
    render_summary_footer(f, chunks[2], state);
}

fn render_summary_header(f: &mut Frame, area: Rect, state: &SummaryState) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(" ", ClinicTheme::text()),
        Span::styled(state.report.title.clone(), ClinicTheme::title()),
        Span::styled(
            format!(" │ {}", state.report.date.format("%Y-%m-%d")),
            ClinicTheme::text_secondary(),
        ),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(ClinicTheme::border()),
    );

    f.render_widget(header, area);
}

fn render_summary_content(f: &mut Frame, area: Rect, state: &SummaryState) {
    let mut lines: Vec<Line> = Vec::new();

    // Red flags first: they are the part that must not be missed.
    if state.report.red_flags.is_empty() {
        lines.push(Line::from(Span::styled(
            "No critical red flags identified based on input.",
            ClinicTheme::success(),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            "Red Flags",
            ClinicTheme::danger(),
        )));
        for flag in &state.report.red_flags {
            lines.push(Line::from(Span::styled(
                format!("  ! {flag}"),
                ClinicTheme::danger(),
            )));
        }
    }
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(
        "Possible Differential Diagnosis",
        ClinicTheme::subtitle(),
    )));
    for d in &state.report.diagnoses {
        lines.push(Line::from(Span::styled(
            format!("  • {d}"),
            ClinicTheme::text(),
        )));
    }
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(
        "Suggested Investigations",
        ClinicTheme::subtitle(),
    )));
    for inv in &state.report.investigations {
        lines.push(Line::from(Span::styled(
            format!("  • {inv}"),
            ClinicTheme::text(),
        )));
    }
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(
        "Reported Symptoms",
        ClinicTheme::subtitle(),
    )));
    for s in &state.report.symptoms {
        lines.push(Line::from(Span::styled(
            format!("  - {}", s.format()),
            ClinicTheme::text_secondary(),
        )));
    }

    let content = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(ClinicTheme::border()),
        );

    f.render_widget(content, area);
}

fn render_empty_prompt(f: &mut Frame, area: Rect) {
    let content = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "Please select symptoms to get diagnosis suggestions.",
            ClinicTheme::text_secondary(),
        )),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(ClinicTheme::border()),
    );

    f.render_widget(content, area);
}

fn render_summary_footer(f: &mut Frame, area: Rect, state: &SummaryState) {
    let content = match &state.export_status {
        Some(ExportStatus::Saved(path)) => Line::from(vec![
            Span::styled("Saved ", ClinicTheme::success()),
            Span::styled(path.display().to_string(), ClinicTheme::text()),
            Span::styled("  [Esc] ", ClinicTheme::key_hint()),
            Span::styled("Back", ClinicTheme::key_desc()),
        ]),
        Some(ExportStatus::Failed(message)) => Line::from(vec![
            Span::styled("Export failed: ", ClinicTheme::danger()),
            Span::styled(message.clone(), ClinicTheme::text()),
        ]),
        None => Line::from(vec![
            Span::styled("[E] ", ClinicTheme::key_hint()),
            Span::styled("Export PDF ", ClinicTheme::key_desc()),
            Span::styled("[Esc] ", ClinicTheme::key_hint()),
            Span::styled("Back to form ", ClinicTheme::key_desc()),
            Span::styled("[Q] ", ClinicTheme::key_hint()),
            Span::styled("Quit", ClinicTheme::key_desc()),
        ]),
    };

    let footer = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(ClinicTheme::border()),
    );

    f.render_widget(footer, area);
}
