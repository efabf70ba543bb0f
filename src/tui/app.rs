use std::path::PathBuf;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::layout::{Constraint, Layout};
use ratatui::{Frame, Terminal};
use tokio::runtime::Runtime;

use crate::export::{ExportOutcome, export_all};
use crate::store::SubmissionStore;

use super::action::Action;
use super::error::AppError;
use super::screens::{
    EntryState, SubmissionsState, draw_entry, draw_help, draw_submissions,
};
use super::widgets::{Notice, StatusBarContext, draw_status_bar};

/// All screens the app can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// The intake entry form (start screen).
    Entry,
    /// List stored submissions; delete and export live here.
    Submissions,
    /// Key binding help.
    Help,
}

/// Top-level application state.
///
/// Owns the store handle and the tokio runtime that drives it; the event
/// loop itself stays synchronous, and every store future is resolved with
/// `block_on` before the next frame is drawn.
pub struct App {
    runtime: Runtime,
    store: SubmissionStore,
    export_dir: PathBuf,
    screen: Screen,
    entry: EntryState,
    submissions: SubmissionsState,
    status: StatusBarContext,
    should_quit: bool,
}

impl App {
    /// Creates the app and loads the initial submission list.
    ///
    /// The store handle, runtime, and export directory are injected by the
    /// composition root; nothing here reaches for globals.
    pub fn new(
        runtime: Runtime,
        store: SubmissionStore,
        export_dir: PathBuf,
    ) -> Result<Self, AppError> {
        let records = runtime.block_on(store.list_all())?;
        let mut submissions = SubmissionsState::new();
        let status = StatusBarContext {
            submission_count: records.len(),
            notice: None,
        };
        submissions.set_submissions(records);

        Ok(Self {
            runtime,
            store,
            export_dir,
            screen: Screen::Entry,
            entry: EntryState::new(),
            submissions,
            status,
            should_quit: false,
        })
    }

    /// Main event loop: draw → read event → dispatch → check quit.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Renders the active screen above the status bar.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    fn draw(&self, frame: &mut Frame) {
        let [screen_area, status_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());

        match self.screen {
            Screen::Entry => draw_entry(&self.entry, frame, screen_area),
            Screen::Submissions => draw_submissions(&self.submissions, frame, screen_area),
            Screen::Help => draw_help(frame, screen_area),
        }

        draw_status_bar(&self.status, frame, status_area);
    }

    /// Routes a key event to the active screen and applies the action.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        // Notices are transient: any keypress dismisses the previous one.
        self.status.notice = None;

        let action = match self.screen {
            Screen::Entry => self.entry.handle_key(key),
            Screen::Submissions => self.submissions.handle_key(key),
            Screen::Help => Action::Navigate(Screen::Submissions),
        };
        self.apply(action);
    }

    /// Applies a screen action: store mutations, export, navigation.
    fn apply(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Navigate(screen) => {
                if screen == Screen::Submissions {
                    self.refresh();
                }
                self.screen = screen;
            }
            Action::Submit(draft) => {
                match self.runtime.block_on(self.store.create(draft)) {
                    Ok(id) => {
                        self.entry.reset();
                        self.status.notice = Some(Notice::info(format!("Submission #{id} saved")));
                    }
                    Err(e) => {
                        self.status.notice = Some(Notice::error(e.to_string()));
                    }
                }
                self.refresh();
            }
            Action::DeleteSubmission(id) => {
                match self.runtime.block_on(self.store.delete_by_id(id)) {
                    Ok(()) => {
                        self.status.notice =
                            Some(Notice::info(format!("Submission #{id} deleted")));
                    }
                    Err(e) => {
                        self.status.notice = Some(Notice::error(e.to_string()));
                    }
                }
                self.refresh();
            }
            Action::Export => {
                let result = self
                    .runtime
                    .block_on(export_all(&self.store, &self.export_dir));
                self.status.notice = Some(match result {
                    Ok(ExportOutcome::NoData) => Notice::info("No data available to export"),
                    Ok(ExportOutcome::Written { path, rows }) => {
                        Notice::info(format!("Exported {rows} submissions to {}", path.display()))
                    }
                    Err(e) => Notice::error(e.to_string()),
                });
            }
            Action::Quit => self.should_quit = true,
        }
    }

    /// Reloads the submission list from the store.
    fn refresh(&mut self) {
        match self.runtime.block_on(self.store.list_all()) {
            Ok(records) => {
                self.status.submission_count = records.len();
                self.submissions.set_submissions(records);
            }
            Err(e) => {
                self.submissions.set_error(e.to_string());
                self.status.notice = Some(Notice::error(e.to_string()));
            }
        }
    }

    /// Returns the current screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Returns `true` if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns the status bar context (count + latest notice).
    pub fn status(&self) -> &StatusBarContext {
        &self.status
    }

    /// Returns the submissions screen state.
    pub fn submissions(&self) -> &SubmissionsState {
        &self.submissions
    }
}
