//! Feature modules - widget logic separated from UI
//!
//! Nothing in here renders; the UI layer reads these types and feeds user
//! input back through the app's update loop.

pub mod ask;
pub mod hooks;
pub mod keybindings;
pub mod settings;

pub use hooks::{HostHooks, SearchHooks};
pub use keybindings::{Action, KeyBindings};
pub use settings::{Settings, Variant};
