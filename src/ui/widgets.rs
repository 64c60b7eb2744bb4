//! Reusable UI widgets - composable pieces without business logic
//!
//! Widgets must not import `crate::app`; they take generic Message types so
//! components can wire them to application messages.

mod dashed_divider;
mod gradient_text;
mod icon;

pub use dashed_divider::dashed_divider;
pub use gradient_text::gradient_text;
pub use icon::icon;
