use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Splits the body into picture and table panes when the table is shown.
pub fn body_panes(body: Rect, table_visible: bool) -> (Rect, Option<Rect>) {
    if !table_visible {
        return (body, None);
    }
    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(body);
    (panes[0], Some(panes[1]))
}

/// Largest `width x height` box with the aspect ratio of `source`, centered
/// in `area`. Both are measured in the same unit.
pub fn fit_centered(source: (u32, u32), area: (u32, u32)) -> (u32, u32, u32, u32) {
    let (src_w, src_h) = source;
    let (max_w, max_h) = area;
    if src_w == 0 || src_h == 0 || max_w == 0 || max_h == 0 {
        return (0, 0, 0, 0);
    }
    let scale = f64::min(max_w as f64 / src_w as f64, max_h as f64 / src_h as f64);
    let width = ((src_w as f64 * scale).floor() as u32).clamp(1, max_w);
    let height = ((src_h as f64 * scale).floor() as u32).clamp(1, max_h);
    ((max_w - width) / 2, (max_h - height) / 2, width, height)
}
