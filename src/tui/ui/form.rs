//! Symptom capture form.
//!
//! One row per symptom: presence checkbox, severity selector, and duration
//! field. Severity and duration are shown only while the symptom is marked
//! present, mirroring how the record itself treats them.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::domain::{Severity, Symptom, SymptomEntry, SymptomRecord, MAX_DURATION_DAYS};
use crate::tui::styles::ClinicTheme;

/// One editable symptom row.
#[derive(Debug, Clone)]
pub struct SymptomRow {
    pub symptom: Symptom,
    pub present: bool,
    pub severity: Severity,
    pub duration_days: u8,
}

impl SymptomRow {
    fn new(symptom: Symptom) -> Self {
        Self {
            symptom,
            present: false,
            severity: Severity::Mild,
            duration_days: 0,
        }
    }
}

/// Symptom form state.
pub struct SymptomFormState {
    pub rows: Vec<SymptomRow>,
    pub selected: usize,
}

impl Default for SymptomFormState {
    fn default() -> Self {
        Self {
            rows: Symptom::ALL.iter().map(|s| SymptomRow::new(*s)).collect(),
            selected: 0,
        }
    }
}

impl SymptomFormState {
    /// Move to the next row
    pub fn next_row(&mut self) {
        self.selected = (self.selected + 1) % self.rows.len();
    }

    /// Move to the previous row
    pub fn prev_row(&mut self) {
        if self.selected == 0 {
            self.selected = self.rows.len() - 1;
        } else {
            self.selected -= 1;
        }
    }

    /// Toggle presence of the selected symptom
    pub fn toggle_present(&mut self) {
        let row = &mut self.rows[self.selected];
        row.present = !row.present;
    }

    /// Cycle the selected symptom's severity forward
    pub fn severity_next(&mut self) {
        let row = &mut self.rows[self.selected];
        if row.present {
            let idx = Severity::ALL.iter().position(|s| *s == row.severity);
            let next = (idx.unwrap_or(0) + 1) % Severity::ALL.len();
            row.severity = Severity::ALL[next];
        }
    }

    /// Cycle the selected symptom's severity backward
    pub fn severity_prev(&mut self) {
        let row = &mut self.rows[self.selected];
        if row.present {
            let idx = Severity::ALL
                .iter()
                .position(|s| *s == row.severity)
                .unwrap_or(0);
            let prev = (idx + Severity::ALL.len() - 1) % Severity::ALL.len();
            row.severity = Severity::ALL[prev];
        }
    }

    /// Append a digit to the selected symptom's duration.
    ///
    /// The field behaves like a bounded number input: when appending would
    /// exceed the 0-30 day range, entry restarts from the typed digit.
    pub fn input_digit(&mut self, c: char) {
        let Some(digit) = c.to_digit(10) else {
            return;
        };
        let row = &mut self.rows[self.selected];
        if !row.present {
            return;
        }
        let appended = u32::from(row.duration_days) * 10 + digit;
        row.duration_days = if appended > u32::from(MAX_DURATION_DAYS) {
            digit as u8
        } else {
            appended as u8
        };
    }

    /// Drop the last digit of the selected symptom's duration
    pub fn delete_digit(&mut self) {
        let row = &mut self.rows[self.selected];
        row.duration_days /= 10;
    }

    /// Reset the selected row to its absent state
    pub fn clear_row(&mut self) {
        let symptom = self.rows[self.selected].symptom;
        self.rows[self.selected] = SymptomRow::new(symptom);
    }

    /// Convert the form into a symptom record.
    ///
    /// Infallible: absent rows contribute an absent entry, present rows a
    /// fully populated one. No invalid states are reachable via the form.
    #[must_use]
    pub fn to_record(&self) -> SymptomRecord {
        let mut record = SymptomRecord::empty();
        for row in &self.rows {
            let entry = if row.present {
                SymptomEntry::present(row.severity, row.duration_days)
            } else {
                SymptomEntry::absent()
            };
            record.set(row.symptom, entry);
        }
        record
    }
}

/// Render the symptom capture form
pub fn render_symptom_form(f: &mut Frame, area: Rect, state: &SymptomFormState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Rows
            Constraint::Length(3), // Footer
        ])
        .split(area);

    render_form_header(f, chunks[0]);
    render_form_rows(f, chunks[1], state);
    render_form_footer(f, chunks[2]);
}

fn render_form_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(" ", ClinicTheme::text()),
        Span::styled("Symptom Entry", ClinicTheme::title()),
        Span::styled(
            " │ Presence, severity and duration",
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

fn render_form_rows(f: &mut Frame, area: Rect, state: &SymptomFormState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(ClinicTheme::border());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let lines: Vec<Line> = state
        .rows
        .iter()
        .enumerate()
        .map(|(i, row)| render_row_line(row, i == state.selected))
        .collect();

    f.render_widget(Paragraph::new(lines), inner);
}

fn render_row_line(row: &SymptomRow, is_selected: bool) -> Line<'static> {
    let marker = if is_selected { "> " } else { "  " };
    let checkbox = if row.present { "[x]" } else { "[ ]" };

    let name_style = if is_selected {
        ClinicTheme::focused()
    } else if row.present {
        ClinicTheme::text()
    } else {
        ClinicTheme::text_secondary()
    };

    let mut spans = vec![
        Span::styled(marker.to_string(), ClinicTheme::focused()),
        Span::styled(format!("{checkbox} "), name_style),
        Span::styled(format!("{:<22}", row.symptom.label()), name_style),
    ];

    if row.present {
        spans.push(Span::styled(
            format!("{:<10}", row.severity.label()),
            ClinicTheme::severity(row.severity),
        ));
        spans.push(Span::styled(
            format!("{:>2} days", row.duration_days),
            ClinicTheme::text(),
        ));
    } else {
        spans.push(Span::styled("absent".to_string(), ClinicTheme::text_muted()));
    }

    Line::from(spans)
}

fn render_form_footer(f: &mut Frame, area: Rect) {
    let content = Line::from(vec![
        Span::styled("[↑↓] ", ClinicTheme::key_hint()),
        Span::styled("Navigate ", ClinicTheme::key_desc()),
        Span::styled("[Space] ", ClinicTheme::key_hint()),
        Span::styled("Toggle ", ClinicTheme::key_desc()),
        Span::styled("[←→] ", ClinicTheme::key_hint()),
        Span::styled("Severity ", ClinicTheme::key_desc()),
        Span::styled("[0-9] ", ClinicTheme::key_hint()),
        Span::styled("Days ", ClinicTheme::key_desc()),
        Span::styled("[Enter] ", ClinicTheme::key_hint()),
        Span::styled("Summary ", ClinicTheme::key_desc()),
        Span::styled("[E] ", ClinicTheme::key_hint()),
        Span::styled("Export ", ClinicTheme::key_desc()),
        Span::styled("[Q] ", ClinicTheme::key_hint()),
        Span::styled("Quit", ClinicTheme::key_desc()),
    ]);

    let footer = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(ClinicTheme::border()),
    );

    f.render_widget(footer, area);
}
