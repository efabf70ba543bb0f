//! Submissions screen: lists stored records, with delete and export.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table};

use crate::export::format_date;
use crate::model::Submission;
use crate::tui::action::Action;
use crate::tui::app::Screen;

/// State for the submissions list screen.
#[derive(Debug, Clone, Default)]
pub struct SubmissionsState {
    /// Cached list in display order (newest first), refreshed by the app
    /// after every mutation.
    submissions: Vec<Submission>,
    /// Index of the highlighted row, or `None` if the list is empty.
    selected: Option<usize>,
    /// Error message from the last failed load.
    error: Option<String>,
}

impl SubmissionsState {
    /// Creates an empty state. The app populates it via [`set_submissions`](Self::set_submissions).
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the cached list, clamping the selection to the new length.
    ///
    /// Takes storage order (ascending id) and shows the newest submission
    /// at the top.
    pub fn set_submissions(&mut self, mut submissions: Vec<Submission>) {
        submissions.reverse();
        self.selected = match self.selected {
            _ if submissions.is_empty() => None,
            None => Some(0),
            Some(i) => Some(i.min(submissions.len() - 1)),
        };
        self.submissions = submissions;
        self.error = None;
    }

    /// Handles a key event, returning an [`Action`] for the app to apply.
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up => {
                self.select_prev();
                Action::None
            }
            KeyCode::Down => {
                self.select_next();
                Action::None
            }
            KeyCode::Char('n') | KeyCode::Enter => Action::Navigate(Screen::Entry),
            KeyCode::Char('d') | KeyCode::Delete => self.delete_current(),
            KeyCode::Char('e') => Action::Export,
            KeyCode::Char('?') => Action::Navigate(Screen::Help),
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            _ => Action::None,
        }
    }

    /// Returns the cached submissions in display order (newest first).
    pub fn submissions(&self) -> &[Submission] {
        &self.submissions
    }

    /// Returns the selected index.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Returns the current error message, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Sets an error message to display on this screen.
    pub fn set_error(&mut self, msg: String) {
        self.error = Some(msg);
    }

    /// Returns an action to delete the currently selected submission.
    fn delete_current(&self) -> Action {
        match self.selected.and_then(|i| self.submissions.get(i)) {
            Some(submission) => Action::DeleteSubmission(submission.id),
            None => Action::None,
        }
    }

    /// Moves the selection up by one (no wrap).
    fn select_prev(&mut self) {
        self.selected = match self.selected {
            Some(i) if i > 0 => Some(i - 1),
            other => other,
        };
    }

    /// Moves the selection down by one (no wrap).
    fn select_next(&mut self) {
        self.selected = match self.selected {
            Some(i) if i + 1 < self.submissions.len() => Some(i + 1),
            other => other,
        };
    }
}

/// Renders the submissions list screen.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_submissions(state: &SubmissionsState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Submissions ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if state.submissions().is_empty() {
        let message = match state.error() {
            Some(err) => vec![
                Line::from(""),
                Line::styled(err, Style::default().fg(Color::Red)),
            ],
            None => vec![
                Line::from(""),
                Line::from("No submissions yet."),
                Line::from("Press 'n' for a new submission, 'e' to export, 'q' to quit."),
            ],
        };
        let paragraph = Paragraph::new(message)
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let header = Row::new(vec!["ID", "Date", "Name", "Email", "City"])
        .style(Style::default().add_modifier(Modifier::BOLD))
        .bottom_margin(1);

    let rows: Vec<Row> = state
        .submissions()
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let style = if state.selected() == Some(i) {
                Style::default().fg(Color::Black).bg(Color::Yellow)
            } else {
                Style::default()
            };
            Row::new(vec![
                s.id.to_string(),
                format_date(&s.timestamp),
                s.full_name(),
                s.email.clone(),
                s.city.clone(),
            ])
            .style(style)
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(6),
            Constraint::Length(20),
            Constraint::Min(16),
            Constraint::Min(20),
            Constraint::Min(10),
        ],
    )
    .header(header);
    frame.render_widget(table, inner);
}
