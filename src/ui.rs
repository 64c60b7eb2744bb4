//! UI layer for the Ask widget
//!
//! # Architecture
//!
//! - **Widgets** (`widgets`): Generic building blocks without business logic
//! - **Components** (`components`): Widget-specific UI with Message handling
//! - **Animation** (`animation`): Springs, fades and hover highlights driven by app state

pub mod animation;
pub mod components;
pub mod icons;
pub mod theme;
pub mod widgets;
