//! Terminal rendering of the feed view model

pub mod layout;
pub mod renderer;
pub mod terminal;

pub use renderer::render_plain;
pub use terminal::run_ui;
