use crate::ui::carousel::{CarouselController, FetchOutcome};
use crate::ui::view::TerminalView;

/// Top-level UI state: the carousel plus the quit flag.
pub struct App {
    should_quit: bool,
    carousel: CarouselController<TerminalView>,
}

impl App {
    /// Takes an already initialized carousel.
    pub fn new(carousel: CarouselController<TerminalView>) -> Self {
        Self {
            should_quit: false,
            carousel,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn carousel(&self) -> &CarouselController<TerminalView> {
        &self.carousel
    }

    pub fn show_previous(&mut self) {
        self.carousel.show_previous();
    }

    pub fn show_next(&mut self) {
        self.carousel.show_next();
    }

    pub fn on_rates(&mut self, outcome: FetchOutcome) {
        self.carousel.apply_fetch_outcome(outcome);
    }
}
