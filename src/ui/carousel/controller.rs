use crate::images::ImageDescriptor;
use crate::ui::mvi::Reducer;

use super::intent::CarouselIntent;
use super::loader::{FetchOutcome, RateLoader};
use super::reducer::CarouselReducer;
use super::state::{CarouselError, CarouselState};
use super::view::CarouselView;

/// One carousel: its state, the view handles it drives and the loader it
/// fetches exchange-rate rows through.
///
/// All methods run on the UI thread. Fetches are dispatched without waiting;
/// their outcomes come back through [`CarouselController::apply_fetch_outcome`].
pub struct CarouselController<V: CarouselView> {
    state: CarouselState,
    view: V,
    loader: RateLoader,
}

impl<V: CarouselView> CarouselController<V> {
    pub fn new(
        images: Vec<ImageDescriptor>,
        view: V,
        loader: RateLoader,
    ) -> Result<Self, CarouselError> {
        Ok(Self {
            state: CarouselState::new(images)?,
            view,
            loader,
        })
    }

    /// Shows the first image and applies the table rule for it.
    pub fn initialize(&mut self) {
        self.update_display(0);
    }

    pub fn show_previous(&mut self) {
        self.dispatch(CarouselIntent::ShowPrevious);
        self.refresh_display();
    }

    pub fn show_next(&mut self) {
        self.dispatch(CarouselIntent::ShowNext);
        self.refresh_display();
    }

    /// Shows the image at `index`; out-of-range positions re-display the
    /// current image.
    pub fn update_display(&mut self, index: usize) {
        self.dispatch(CarouselIntent::ShowIndex(index));
        self.refresh_display();
    }

    /// Applies a finished fetch. Returns true when the table body changed.
    ///
    /// Failures are logged and leave the table untouched. Successful
    /// responses for anything but the latest request are discarded.
    pub fn apply_fetch_outcome(&mut self, outcome: FetchOutcome) -> bool {
        let FetchOutcome { request, result } = outcome;
        match result {
            Ok(rows) => {
                if !self.state.is_latest_request(request) {
                    tracing::debug!(
                        request,
                        latest = self.state.latest_request(),
                        "Discarding superseded exchange-rate response"
                    );
                    return false;
                }
                self.dispatch(CarouselIntent::RatesLoaded { request, rows });
                self.view.replace_rows(self.state.rows());
                tracing::debug!(request, rows = self.state.rows().len(), "Exchange-rate table updated");
                true
            }
            Err(err) => {
                tracing::warn!(request, kind = err.kind(), error = %err, "Failed to load exchange-rate data");
                false
            }
        }
    }

    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    fn dispatch(&mut self, intent: CarouselIntent) {
        self.state = CarouselReducer::reduce(std::mem::take(&mut self.state), intent);
    }

    fn refresh_display(&mut self) {
        let image = *self.state.current_image();
        self.view.show_image(&image);
        self.view.set_table_visible(self.state.table_visible());
        if self.state.table_visible() {
            self.load_exchange_rate_table();
        }
    }

    fn load_exchange_rate_table(&mut self) {
        self.dispatch(CarouselIntent::RatesRequested);
        let request = self.state.latest_request();
        tracing::debug!(request, "Requesting exchange-rate data");
        self.loader.spawn(request);
    }
}
