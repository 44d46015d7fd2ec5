use std::collections::HashMap;
use std::path::PathBuf;

use crate::images::ImageDescriptor;
use crate::rates::ExchangeRateRecord;
use crate::ui::carousel::CarouselView;
use crate::ui::picture::Picture;

/// Terminal-side element handles: what the renderer draws each frame.
///
/// Each image source is decoded the first time it is shown and reused after.
pub struct TerminalView {
    assets_dir: PathBuf,
    image: Option<ImageDescriptor>,
    pictures: HashMap<&'static str, Picture>,
    table_visible: bool,
    rows: Vec<ExchangeRateRecord>,
}

impl TerminalView {
    pub fn new(assets_dir: impl Into<PathBuf>) -> Self {
        Self {
            assets_dir: assets_dir.into(),
            image: None,
            pictures: HashMap::new(),
            table_visible: false,
            rows: Vec::new(),
        }
    }

    pub fn image(&self) -> Option<&ImageDescriptor> {
        self.image.as_ref()
    }

    pub fn picture(&self) -> Option<&Picture> {
        self.image
            .as_ref()
            .and_then(|image| self.pictures.get(image.source))
    }

    pub fn table_visible(&self) -> bool {
        self.table_visible
    }

    pub fn rows(&self) -> &[ExchangeRateRecord] {
        &self.rows
    }
}

impl CarouselView for TerminalView {
    fn show_image(&mut self, image: &ImageDescriptor) {
        let assets_dir = &self.assets_dir;
        self.pictures
            .entry(image.source)
            .or_insert_with(|| Picture::open(&assets_dir.join(image.source)));
        self.image = Some(*image);
    }

    fn set_table_visible(&mut self, visible: bool) {
        self.table_visible = visible;
    }

    fn replace_rows(&mut self, rows: &[ExchangeRateRecord]) {
        self.rows.clear();
        self.rows.extend_from_slice(rows);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::images::kpi_images;

    #[test]
    fn show_image_resolves_against_assets_dir() {
        let dir = tempfile::tempdir().unwrap();
        let mut view = TerminalView::new(dir.path());
        view.show_image(&kpi_images()[0]);
        assert_eq!(view.image(), Some(&kpi_images()[0]));
        assert!(!view.picture().unwrap().is_decoded());
    }

    #[test]
    fn decodes_png_from_assets_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("images")).unwrap();
        image::RgbaImage::from_pixel(2, 2, image::Rgba([0, 128, 255, 255]))
            .save(dir.path().join("images/dollar_graph.png"))
            .unwrap();

        let mut view = TerminalView::new(dir.path());
        view.show_image(&kpi_images()[2]);
        assert!(view.picture().unwrap().is_decoded());
    }

    #[test]
    fn revisited_image_is_not_decoded_again() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("images")).unwrap();
        let path = dir.path().join("images/employment_graph.png");
        image::RgbaImage::from_pixel(2, 2, image::Rgba([255, 255, 255, 255]))
            .save(&path)
            .unwrap();

        let mut view = TerminalView::new(dir.path());
        view.show_image(&kpi_images()[0]);
        std::fs::remove_file(&path).unwrap();
        view.show_image(&kpi_images()[1]);
        assert!(!view.picture().unwrap().is_decoded());

        view.show_image(&kpi_images()[0]);
        assert_eq!(view.image(), Some(&kpi_images()[0]));
        assert!(view.picture().unwrap().is_decoded());
    }

    #[test]
    fn hiding_keeps_rows() {
        let mut view = TerminalView::new(".");
        view.replace_rows(&[ExchangeRateRecord::new("2024-01-01", "900")]);
        view.set_table_visible(false);
        assert_eq!(view.rows().len(), 1);
    }
}
