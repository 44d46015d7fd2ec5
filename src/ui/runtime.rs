use anyhow::Context;
use std::sync::Arc;
use tokio::runtime::Handle;

use crate::config::Config;
use crate::images::kpi_images;
use crate::rates::RateClient;
use crate::ui::app::App;
use crate::ui::carousel::{CarouselController, RateLoader};
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::ui::view::TerminalView;

/// Runs the carousel until the user quits.
///
/// Fetches are spawned on `runtime`; this function itself blocks the
/// calling thread, which becomes the UI thread.
pub fn run(config: &Config, runtime: Handle) -> anyhow::Result<()> {
    let client = RateClient::new(&config.endpoint).context("Failed to set up rate client")?;
    tracing::info!(url = client.url(), "Exchange-rate endpoint configured");

    let tick_rate = config.ui.tick_rate();
    let events = EventHandler::new(tick_rate);
    let loader = RateLoader::new(Arc::new(client), runtime, events.outcome_notifier());
    let view = TerminalView::new(config.ui.assets_dir.clone());
    let mut carousel = CarouselController::new(kpi_images().to_vec(), view, loader)?;

    let (mut terminal, guard) = setup_terminal().context("Failed to set up terminal")?;
    carousel.initialize();
    let mut app = App::new(carousel);

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Input(key)) => {
                handle_key(&mut app, key);
            }
            Ok(AppEvent::Rates(outcome)) => app.on_rates(outcome),
            Ok(AppEvent::Tick) | Ok(AppEvent::Resize(..)) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    tracing::info!("Carousel closed");
    Ok(())
}
