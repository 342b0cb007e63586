// Library exports for the SidEx wallet terminal
pub mod app;
pub mod assistant;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod quote;
pub mod ui;
pub mod utils;
pub mod zakat;

// Re-export commonly used types
pub use app::{App, FlowStage, Screen};
pub use catalog::{Asset, Catalog};
pub use cli::Cli;
pub use quote::QuoteCalculator;
pub use ui::render_ui;
pub use utils::*;
