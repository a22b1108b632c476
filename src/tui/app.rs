//! Main TUI application state machine.
//!
//! Handles:
//! - Screen navigation (form ⇄ summary)
//! - Input event handling
//! - Synchronous re-evaluation on every submit

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};

use crate::adapters::pdf::PdfExporter;
use crate::application::TriageService;

use super::ui::{
    form::{render_symptom_form, SymptomFormState},
    render_disclaimer,
    summary::{render_summary, ExportStatus, SummaryState},
};

/// Current screen/view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    SymptomForm,
    Summary,
}

/// Main application state
pub struct App {
    /// Current screen
    screen: Screen,

    /// Whether the app should quit
    should_quit: bool,

    /// Triage service (rule evaluation + export)
    triage: TriageService<PdfExporter>,

    /// Symptom form state
    form_state: SymptomFormState,

    /// Summary state, populated when the summary screen is entered
    summary_state: Option<SummaryState>,
}

impl App {
    /// Create a new application instance using the default PDF exporter,
    /// which writes into the working directory.
    pub fn new() -> Self {
        Self::with_exporter(PdfExporter::in_working_dir())
    }

    /// Create the application with an injected exporter (Composition Root
    /// pattern), so tests can redirect output.
    pub fn with_exporter(exporter: PdfExporter) -> Self {
        Self {
            screen: Screen::SymptomForm,
            should_quit: false,
            triage: TriageService::new(exporter),
            form_state: SymptomFormState::default(),
            summary_state: None,
        }
    }

    /// Run the main application loop.
    ///
    /// # Errors
    /// Returns error if terminal operations fail.
    pub fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Main loop
        let result = self.main_loop(&mut terminal);

        // Restore terminal
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        result
    }

    fn main_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        loop {
            // Draw current screen
            terminal.draw(|f| {
                let area = f.area();
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Min(0), Constraint::Length(3)])
                    .split(area);

                let content_area = chunks[0];
                let disclaimer_area = chunks[1];

                match self.screen {
                    Screen::SymptomForm => {
                        render_symptom_form(f, content_area, &self.form_state);
                    }
                    Screen::Summary => {
                        if let Some(summary) = &self.summary_state {
                            render_summary(f, content_area, summary);
                        }
                    }
                }

                render_disclaimer(f, disclaimer_area);
            })?;

            // Handle input (short poll to stay responsive)
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key(key.code, key.modifiers);
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_key(&mut self, key: KeyCode, modifiers: KeyModifiers) {
        // Global quit handling
        if key == KeyCode::Char('q') && modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.screen {
            Screen::SymptomForm => self.handle_form_key(key),
            Screen::Summary => self.handle_summary_key(key),
        }
    }

    fn handle_form_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Up => {
                self.form_state.prev_row();
            }
            KeyCode::Down | KeyCode::Tab => {
                self.form_state.next_row();
            }
            KeyCode::Char(' ') => {
                self.form_state.toggle_present();
            }
            KeyCode::Left => {
                self.form_state.severity_prev();
            }
            KeyCode::Right => {
                self.form_state.severity_next();
            }
            KeyCode::Char(c @ '0'..='9') => {
                self.form_state.input_digit(c);
            }
            KeyCode::Backspace => {
                self.form_state.delete_digit();
            }
            KeyCode::Delete => {
                self.form_state.clear_row();
            }
            KeyCode::Enter => {
                self.open_summary();
            }
            KeyCode::Char('e') | KeyCode::Char('E') => {
                self.open_summary();
                self.export_report();
            }
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            _ => {}
        }
    }

    fn handle_summary_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::Enter => {
                self.summary_state = None;
                self.screen = Screen::SymptomForm;
            }
            KeyCode::Char('e') | KeyCode::Char('E') => {
                self.export_report();
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            _ => {}
        }
    }

    /// Re-evaluate the current form and switch to the summary screen.
    fn open_summary(&mut self) {
        let record = self.form_state.to_record();
        let report = self.triage.summarize(&record);

        self.summary_state = Some(SummaryState {
            report,
            any_symptoms: record.any_present(),
            export_status: None,
        });
        self.screen = Screen::Summary;
    }

    /// Export the current form as a PDF and record the outcome.
    fn export_report(&mut self) {
        let record = self.form_state.to_record();
        let status = match self.triage.export(&record) {
            Ok(path) => ExportStatus::Saved(path),
            Err(e) => {
                tracing::error!("Report export failed: {e}");
                ExportStatus::Failed(e.to_string())
            }
        };

        if let Some(summary) = &mut self.summary_state {
            summary.export_status = Some(status);
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::pdf::REPORT_FILENAME;

    fn app_in(dir: &std::path::Path) -> App {
        App::with_exporter(PdfExporter::new(dir))
    }

    #[test]
    fn test_enter_opens_summary_and_esc_returns() {
        let dir = tempfile::tempdir().expect("Should create temp dir");
        let mut app = app_in(dir.path());

        app.handle_key(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(app.screen, Screen::Summary);
        assert!(app.summary_state.is_some());

        app.handle_key(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(app.screen, Screen::SymptomForm);
        assert!(app.summary_state.is_none());
    }

    #[test]
    fn test_empty_form_summary_prompts_for_symptoms() {
        let dir = tempfile::tempdir().expect("Should create temp dir");
        let mut app = app_in(dir.path());

        app.handle_key(KeyCode::Enter, KeyModifiers::NONE);
        let summary = app.summary_state.as_ref().expect("Summary should exist");
        assert!(!summary.any_symptoms);
        assert!(summary.report.diagnoses.is_empty());
    }

    #[test]
    fn test_export_key_writes_report_and_records_status() {
        let dir = tempfile::tempdir().expect("Should create temp dir");
        let mut app = app_in(dir.path());

        // Mark fever present with a long duration, then export from the form.
        app.handle_key(KeyCode::Char(' '), KeyModifiers::NONE);
        app.handle_key(KeyCode::Char('8'), KeyModifiers::NONE);
        app.handle_key(KeyCode::Char('e'), KeyModifiers::NONE);

        assert_eq!(app.screen, Screen::Summary);
        let summary = app.summary_state.as_ref().expect("Summary should exist");
        match &summary.export_status {
            Some(ExportStatus::Saved(path)) => {
                assert!(path.exists());
                assert_eq!(
                    path.file_name().and_then(|n| n.to_str()),
                    Some(REPORT_FILENAME)
                );
            }
            other => panic!("Expected saved status, got {other:?}"),
        }
    }

    #[test]
    fn test_ctrl_q_quits_from_any_screen() {
        let dir = tempfile::tempdir().expect("Should create temp dir");
        let mut app = app_in(dir.path());

        app.handle_key(KeyCode::Char('q'), KeyModifiers::CONTROL);
        assert!(app.should_quit);
    }
}
