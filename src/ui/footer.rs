use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Keys and what they do, in display order. Mirrors `input::classify_key`.
pub const KEY_HINTS: &[(&str, &str)] = &[
    ("←/h", "Previous"),
    ("→/l", "Next"),
    ("q", "Quit"),
];

/// Key hints on the left, crate version on the right.
#[derive(Default)]
pub struct Footer;

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn hints() -> String {
        KEY_HINTS
            .iter()
            .map(|(key, action)| format!("{key}: {action}"))
            .collect::<Vec<_>>()
            .join(" │ ")
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let hints = format!(" {}", Self::hints());
        let version = format!("v{VERSION} ");

        let inner_width = area.width.saturating_sub(2) as usize;
        let used = hints.chars().count() + version.chars().count();
        let gap = " ".repeat(inner_width.saturating_sub(used));

        let style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let line = Line::from(vec![Span::raw(hints), Span::raw(gap), Span::raw(version)]);

        Paragraph::new(line).style(style).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
