//! Reducer for the carousel.

use crate::ui::mvi::Reducer;

use super::intent::CarouselIntent;
use super::state::CarouselState;

/// Pure transitions; spawning fetches and updating view handles happen in
/// the controller around the dispatch call.
pub struct CarouselReducer;

impl Reducer for CarouselReducer {
    type State = CarouselState;
    type Intent = CarouselIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        let last = state.len() - 1;
        match intent {
            CarouselIntent::ShowPrevious => {
                let index = if state.current_index() == 0 {
                    last
                } else {
                    state.current_index() - 1
                };
                state.move_to(index);
            }
            CarouselIntent::ShowNext => {
                let index = if state.current_index() == last {
                    0
                } else {
                    state.current_index() + 1
                };
                state.move_to(index);
            }
            CarouselIntent::ShowIndex(index) => {
                if index <= last {
                    state.move_to(index);
                }
            }
            CarouselIntent::RatesRequested => state.next_request(),
            CarouselIntent::RatesLoaded { request, rows } => {
                if state.is_latest_request(request) {
                    state.set_rows(rows);
                }
            }
        }
        state
    }
}
