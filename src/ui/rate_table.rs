use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Cell, Row, Table, Widget};

use crate::rates::ExchangeRateRecord;
use crate::ui::theme::{ACCENT, HEADER_TEXT, ROW_ALT_BG, TABLE_BORDER};

/// Exchange-rate table: one row per record, date then rate.
///
/// Values are written as literal cell text.
pub struct RateTable<'a> {
    rows: &'a [ExchangeRateRecord],
}

impl<'a> RateTable<'a> {
    pub fn new(rows: &'a [ExchangeRateRecord]) -> Self {
        Self { rows }
    }
}

impl Widget for RateTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let header = Row::new(vec![Cell::from("Fecha"), Cell::from("USD")]).style(
            Style::default()
                .fg(HEADER_TEXT)
                .add_modifier(Modifier::BOLD),
        );

        let rows = self.rows.iter().enumerate().map(|(idx, record)| {
            let row = Row::new(vec![
                Cell::from(record.date.as_str()),
                Cell::from(record.rate.as_str()),
            ]);
            if idx % 2 == 1 {
                row.style(Style::default().bg(ROW_ALT_BG))
            } else {
                row
            }
        });

        Table::new(rows, [Constraint::Length(12), Constraint::Min(6)])
            .header(header)
            .column_spacing(2)
            .block(
                Block::default()
                    .title(Span::styled(" Tipo de cambio ", Style::default().fg(ACCENT)))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(TABLE_BORDER)),
            )
            .render(area, buf);
    }
}
