//! UI Components module - widget-specific composite components
//!
//! Components combine widgets with application state. They are the only
//! layer that imports from `crate::app`.

pub mod ask_widget;
pub mod collapsed_pill;
pub mod search_input;
pub mod suggestion_list;
