//! Status bar widget: submission count plus a transient notice line.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

/// Severity of a transient notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Success or neutral information (green).
    Info,
    /// A recoverable failure the user should see (red).
    Error,
}

/// A one-shot message shown after an action, the terminal analogue of the
/// original form's notification banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub kind: NoticeKind,
}

impl Notice {
    /// Creates an informational notice.
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: NoticeKind::Info,
        }
    }

    /// Creates an error notice.
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: NoticeKind::Error,
        }
    }
}

/// Data passed to the status bar widget.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusBarContext {
    /// Number of submissions currently stored.
    pub submission_count: usize,
    /// Notice from the most recent action, if any.
    pub notice: Option<Notice>,
}

/// Renders a one-line status bar: stored count on the left, the latest
/// notice (if any) after it.
#[mutants::skip]
pub fn draw_status_bar(ctx: &StatusBarContext, frame: &mut Frame, area: Rect) {
    let cyan = Style::default().fg(Color::Cyan);

    let count_label = match ctx.submission_count {
        1 => "1 submission stored".to_string(),
        n => format!("{n} submissions stored"),
    };

    let mut spans = vec![Span::styled(count_label, cyan)];

    if let Some(notice) = &ctx.notice {
        let color = match notice.kind {
            NoticeKind::Info => Color::Green,
            NoticeKind::Error => Color::Red,
        };
        spans.push(Span::styled("  ", cyan));
        spans.push(Span::styled(
            notice.text.clone(),
            Style::default().fg(color),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    fn buffer_to_string(buf: &ratatui::buffer::Buffer) -> String {
        let mut s = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                s.push(buf[(x, y)].symbol().chars().next().unwrap_or(' '));
            }
            s.push('\n');
        }
        s
    }

    fn render_status_bar(ctx: &StatusBarContext, width: u16) -> String {
        let backend = TestBackend::new(width, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                draw_status_bar(ctx, frame, frame.area());
            })
            .unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    #[test]
    fn renders_plural_count() {
        let ctx = StatusBarContext {
            submission_count: 3,
            notice: None,
        };
        let output = render_status_bar(&ctx, 60);
        assert!(output.contains("3 submissions stored"));
    }

    #[test]
    fn renders_singular_count() {
        let ctx = StatusBarContext {
            submission_count: 1,
            notice: None,
        };
        let output = render_status_bar(&ctx, 60);
        assert!(output.contains("1 submission stored"));
        assert!(!output.contains("submissions"));
    }

    #[test]
    fn renders_zero_count() {
        let ctx = StatusBarContext::default();
        let output = render_status_bar(&ctx, 60);
        assert!(output.contains("0 submissions stored"));
    }

    #[test]
    fn renders_info_notice_after_count() {
        let ctx = StatusBarContext {
            submission_count: 1,
            notice: Some(Notice::info("Submission #1 saved")),
        };
        let output = render_status_bar(&ctx, 60);
        assert!(output.contains("Submission #1 saved"));
    }

    #[test]
    fn renders_error_notice() {
        let ctx = StatusBarContext {
            submission_count: 0,
            notice: Some(Notice::error("write transaction failed")),
        };
        let output = render_status_bar(&ctx, 60);
        assert!(output.contains("write transaction failed"));
    }

    #[test]
    fn notice_constructors_set_kind() {
        assert_eq!(Notice::info("x").kind, NoticeKind::Info);
        assert_eq!(Notice::error("x").kind, NoticeKind::Error);
    }
}
