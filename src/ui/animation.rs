//! Motion for the Ask widget
//!
//! Container geometry follows an analytical spring, view cross-fades and row
//! entrances use `iced::animation`, and hover highlights use `iced_anim`
//! transitions.

pub mod fade;
pub mod geometry;
mod hover;
pub mod spring;

pub use fade::Stagger;
pub use geometry::ShellGeometry;
pub use hover::HoverAnimations;
