use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Title bar: position in the carousel and the current image's label.
pub struct Header<'a> {
    position: usize,
    total: usize,
    label: &'a str,
}

impl<'a> Header<'a> {
    /// `position` is zero-based.
    pub fn new(position: usize, total: usize, label: &'a str) -> Self {
        Self {
            position,
            total,
            label,
        }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled("KPI", Style::default().fg(ACCENT)),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("{}/{}", self.position + 1, self.total), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(self.label.to_string(), text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
