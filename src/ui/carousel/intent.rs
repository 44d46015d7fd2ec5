use crate::rates::ExchangeRateRecord;
use crate::ui::mvi::Intent;

#[derive(Debug)]
pub enum CarouselIntent {
    /// Previous control; wraps from the first image to the last.
    ShowPrevious,
    /// Next control; wraps from the last image to the first.
    ShowNext,
    /// Jump to a position. Out-of-range positions are ignored.
    ShowIndex(usize),
    /// A fetch is about to be dispatched; it becomes the latest request.
    RatesRequested,
    /// A fetch succeeded. Only applied when `request` is still the latest.
    RatesLoaded {
        request: u64,
        rows: Vec<ExchangeRateRecord>,
    },
}

impl Intent for CarouselIntent {}
