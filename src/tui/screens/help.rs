//! Help screen: key binding reference. Any key returns to the list.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Key bindings shown on the help screen, as (keys, description) pairs.
const BINDINGS: &[(&str, &str)] = &[
    ("Tab / Shift+Tab", "move between form fields"),
    ("Enter", "submit the form"),
    ("Esc", "leave the form for the submissions list"),
    ("Up / Down", "move the list selection"),
    ("n", "start a new submission"),
    ("d / Del", "delete the selected submission"),
    ("e", "export all submissions to XLSX"),
    ("?", "show this help"),
    ("q", "quit"),
];

/// Renders the help screen.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_help(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let mut lines = vec![Line::from("")];
    for (keys, description) in BINDINGS {
        lines.push(Line::from(vec![
            Span::styled(format!("{keys:>16}"), Style::default().fg(Color::Yellow)),
            Span::raw("  "),
            Span::raw(*description),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press any key to go back.",
        Style::default().fg(Color::DarkGray),
    )));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Left)
        .block(block);
    frame.render_widget(paragraph, area);
}
