/// Presentational button component for Leptos
///
/// A single `Button` component with two style variants, a defaulted `type`
/// attribute, an optional activation callback, and verbatim attribute
/// pass-through. Styling is resolved by an external stylesheet through two
/// fixed class identifiers.

pub mod app;
pub mod components;

pub use components::button::{Button, ButtonProps, ButtonRole, ButtonType};
