//! Raster images drawn with half-block cells.
//!
//! Each terminal cell shows two vertically stacked pixels: the upper one as
//! the foreground of `▀`, the lower one as the background.

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};
use parking_lot::Mutex;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget, Wrap};
use std::path::{Path, PathBuf};

use crate::ui::layout::fit_centered;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, PLACEHOLDER_TEXT};

const UPPER_HALF_BLOCK: &str = "▀";

enum Content {
    Decoded(RgbaImage),
    Unavailable { path: PathBuf, reason: String },
}

struct Scaled {
    size: (u32, u32),
    pixels: RgbaImage,
}

/// A decoded image plus the last resize of it, or the reason it could not
/// be decoded.
pub struct Picture {
    content: Content,
    scaled: Mutex<Option<Scaled>>,
}

impl Picture {
    /// Decodes the file at `path`. Failures are logged and kept for display.
    pub fn open(path: &Path) -> Self {
        match image::open(path) {
            Ok(decoded) => Self::from_image(decoded.to_rgba8()),
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "Failed to load image");
                Self::unavailable(path, err.to_string())
            }
        }
    }

    pub fn from_image(pixels: RgbaImage) -> Self {
        Self {
            content: Content::Decoded(pixels),
            scaled: Mutex::new(None),
        }
    }

    pub fn unavailable(path: &Path, reason: impl Into<String>) -> Self {
        Self {
            content: Content::Unavailable {
                path: path.to_path_buf(),
                reason: reason.into(),
            },
            scaled: Mutex::new(None),
        }
    }

    pub fn is_decoded(&self) -> bool {
        matches!(self.content, Content::Decoded(_))
    }

    fn render_pixels(&self, source: &RgbaImage, area: Rect, buf: &mut Buffer) {
        let (x_off, y_off, width, height) = fit_centered(
            source.dimensions(),
            (u32::from(area.width), u32::from(area.height) * 2),
        );
        if width == 0 || height == 0 {
            return;
        }

        let mut scaled = self.scaled.lock();
        if scaled.as_ref().map(|s| s.size) != Some((width, height)) {
            *scaled = Some(Scaled {
                size: (width, height),
                pixels: imageops::resize(source, width, height, FilterType::Triangle),
            });
        }
        let Some(scaled) = scaled.as_ref() else {
            return;
        };

        let left = area.x + x_off as u16;
        let top = area.y + (y_off / 2) as u16;
        for py in (0..height).step_by(2) {
            let y = top + (py / 2) as u16;
            for px in 0..width {
                let x = left + px as u16;
                let upper = to_color(scaled.pixels.get_pixel(px, py));
                let lower = if py + 1 < height {
                    to_color(scaled.pixels.get_pixel(px, py + 1))
                } else {
                    Color::Reset
                };
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_symbol(UPPER_HALF_BLOCK).set_fg(upper).set_bg(lower);
                }
            }
        }
    }
}

/// Premultiplies against black; terminals have no alpha.
fn to_color(pixel: &Rgba<u8>) -> Color {
    let [r, g, b, a] = pixel.0;
    let blend = |c: u8| ((u16::from(c) * u16::from(a)) / 255) as u8;
    Color::Rgb(blend(r), blend(g), blend(b))
}

/// Bordered image pane titled with the image's label.
pub struct PictureWidget<'a> {
    picture: Option<&'a Picture>,
    label: &'a str,
}

impl<'a> PictureWidget<'a> {
    pub fn new(picture: Option<&'a Picture>, label: &'a str) -> Self {
        Self { picture, label }
    }
}

impl Widget for PictureWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(Span::styled(format!(" {} ", self.label), Style::default().fg(ACCENT)))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER));
        let inner = block.inner(area);
        block.render(area, buf);

        let Some(picture) = self.picture else {
            return;
        };
        match &picture.content {
            Content::Decoded(source) => picture.render_pixels(source, inner, buf),
            Content::Unavailable { path, reason } => {
                let style = Style::default().fg(PLACEHOLDER_TEXT);
                let lines = vec![
                    Line::from(Span::styled(self.label.to_string(), style)),
                    Line::from(Span::styled(path.display().to_string(), style)),
                    Line::from(Span::styled(reason.clone(), style)),
                ];
                let top = inner.height.saturating_sub(lines.len() as u16) / 2;
                let text_area = Rect {
                    y: inner.y + top,
                    height: inner.height.saturating_sub(top),
                    ..inner
                };
                Paragraph::new(lines)
                    .alignment(Alignment::Center)
                    .wrap(Wrap { trim: true })
                    .render(text_area, buf);
            }
        }
    }
}
