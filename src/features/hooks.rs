//! Host capabilities the widget calls out to
//!
//! The widget never searches anything itself. Submitted queries and
//! microphone presses are handed to a [`SearchHooks`] implementation
//! supplied by whoever mounts the widget.

use std::sync::Arc;

pub trait SearchHooks: Send + Sync {
    /// A non-blank query was submitted from the input or a suggestion
    fn on_submit(&self, query: &str);

    /// The microphone button was pressed
    fn on_voice_input(&self) {
        tracing::info!("Voice input requested");
    }
}

type ClickCallback = Arc<dyn Fn() + Send + Sync>;

/// Default hooks: log the query and fire the host's click callback
#[derive(Clone, Default)]
pub struct HostHooks {
    on_click: Option<ClickCallback>,
}

impl std::fmt::Debug for HostHooks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostHooks")
            .field("on_click", &self.on_click.is_some())
            .finish()
    }
}

impl HostHooks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_on_click(mut self, callback: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_click = Some(Arc::new(callback));
        self
    }
}

impl SearchHooks for HostHooks {
    fn on_submit(&self, query: &str) {
        tracing::info!("Searching for: {}", query);
        if let Some(callback) = &self.on_click {
            callback();
        }
    }
}
