use thiserror::Error;

use crate::images::{kpi_images, ImageDescriptor};
use crate::rates::ExchangeRateRecord;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CarouselError {
    #[error("A carousel needs at least one image")]
    NoImages,
}

/// State of one carousel.
///
/// `current_index` is always a valid position in `images`; the list is
/// non-empty by construction and only the reducer moves the index.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselState {
    images: Vec<ImageDescriptor>,
    current_index: usize,
    table_visible: bool,
    rows: Vec<ExchangeRateRecord>,
    latest_request: u64,
}

impl UiState for CarouselState {}

impl Default for CarouselState {
    fn default() -> Self {
        Self::at_start(kpi_images().to_vec())
    }
}

impl CarouselState {
    pub fn new(images: Vec<ImageDescriptor>) -> Result<Self, CarouselError> {
        if images.is_empty() {
            return Err(CarouselError::NoImages);
        }
        Ok(Self::at_start(images))
    }

    fn at_start(images: Vec<ImageDescriptor>) -> Self {
        let table_visible = images.first().is_some_and(ImageDescriptor::is_rate_image);
        Self {
            images,
            current_index: 0,
            table_visible,
            rows: Vec::new(),
            latest_request: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Never true for a constructed state.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_image(&self) -> &ImageDescriptor {
        &self.images[self.current_index]
    }

    pub fn table_visible(&self) -> bool {
        self.table_visible
    }

    /// Rows from the last applied load. Kept while the table is hidden.
    pub fn rows(&self) -> &[ExchangeRateRecord] {
        &self.rows
    }

    /// Number of the most recently dispatched fetch (0 before the first).
    pub fn latest_request(&self) -> u64 {
        self.latest_request
    }

    pub fn is_latest_request(&self, request: u64) -> bool {
        request != 0 && request == self.latest_request
    }

    pub(super) fn move_to(&mut self, index: usize) {
        self.current_index = index;
        self.table_visible = self.images[index].is_rate_image();
    }

    pub(super) fn next_request(&mut self) {
        self.latest_request += 1;
    }

    pub(super) fn set_rows(&mut self, rows: Vec<ExchangeRateRecord>) {
        self.rows = rows;
    }
}
