/// Reusable UI components
///
/// One component lives here. It is stateless: everything is re-derived from
/// props on each render, and styling is driven by class identifiers owned by
/// an external stylesheet.

pub mod button;

pub use button::{Button, ButtonRole, ButtonType};
