pub mod args;
pub mod config;
pub mod images;
pub mod logging;
pub mod rates;
pub mod ui;
