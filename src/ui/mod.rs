// UI module organization
pub mod layout;
pub mod components;
pub mod dashboard;
pub mod flows;
pub mod screens;

// Re-export the main UI function
pub use layout::render_ui;
