use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{body_panes, layout_regions};
use crate::ui::picture::PictureWidget;
use crate::ui::rate_table::RateTable;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let carousel = app.carousel();
    let state = carousel.state();
    let view = carousel.view();
    let label = view.image().map(|image| image.label).unwrap_or_default();

    let header_widget = Header::new(state.current_index(), state.len(), label);
    frame.render_widget(header_widget.widget(), header);

    frame.render_widget(Clear, body);
    let (picture_area, table_area) = body_panes(body, view.table_visible());
    frame.render_widget(PictureWidget::new(view.picture(), label), picture_area);
    if let Some(table_area) = table_area {
        frame.render_widget(RateTable::new(view.rows()), table_area);
    }

    let footer_widget = Footer::new();
    frame.render_widget(footer_widget.widget(footer), footer);
}
