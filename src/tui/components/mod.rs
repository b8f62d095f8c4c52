//! Reusable UI components for the review TUI.
//!
//! Components are pure view functions over explicit contexts: they take
//! borrowed state, return a rendered `String`, and hold only their own
//! layout configuration. This keeps them trivially testable.

mod montage;
mod progress;
mod text_fit;

pub use montage::{MontageComponent, MontageViewContext};
pub use progress::{ProgressComponent, ProgressViewContext};
pub use text_fit::pad_or_truncate;
