//! Interactive terminal front-end.
//!
//! [`App`] owns the view state and the fetch controller, `render` is the
//! presentation tree drawn from that state, and `runtime` pumps terminal
//! events and settled requests between frames.

mod actions;
mod app;
pub mod cards;
pub mod input;
mod render;
mod runtime;
pub mod theme;

pub use actions::Flow;
pub use app::App;
pub use input::SearchInput;
pub use runtime::run;
pub use theme::Theme;
