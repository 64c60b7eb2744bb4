//! Keyboard shortcuts for the Ask widget
//!
//! Bindings are stored in the settings file so users can remap them.

use std::collections::HashMap;

use iced::keyboard::{Key, Modifiers};
use serde::{Deserialize, Deserializer, Serialize};

/// Bindable widget actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Open the panel, same as clicking the pill
    Expand,
    /// Close the panel, same as clicking outside it
    Collapse,
    /// Swap in the second suggestion set
    MoreSuggestions,
}

impl Action {
    pub fn all() -> &'static [Action] {
        &[Action::Expand, Action::Collapse, Action::MoreSuggestions]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Action::Expand => "Open Ask",
            Action::Collapse => "Close Ask",
            Action::MoreSuggestions => "More suggestions",
        }
    }
}

/// A key plus the modifiers that must be held with it
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyBinding {
    #[serde(default)]
    pub modifiers: ModifierSet,
    pub key: KeyCode,
}

impl KeyBinding {
    pub fn new(key: KeyCode) -> Self {
        Self {
            modifiers: ModifierSet::default(),
            key,
        }
    }

    pub fn ctrl(mut self) -> Self {
        self.modifiers.ctrl = true;
        self
    }

    pub fn alt(mut self) -> Self {
        self.modifiers.alt = true;
        self
    }

    pub fn matches(&self, key: &Key, modifiers: &Modifiers) -> bool {
        self.key.matches(key) && self.modifiers.matches(modifiers)
    }

    /// Human-readable form such as `Ctrl+K`
    pub fn display(&self) -> String {
        let mut parts = Vec::new();
        if self.modifiers.ctrl {
            parts.push("Ctrl".to_string());
        }
        if self.modifiers.alt {
            parts.push("Alt".to_string());
        }
        if self.modifiers.shift {
            parts.push("Shift".to_string());
        }
        parts.push(self.key.display());
        parts.join("+")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ModifierSet {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

impl ModifierSet {
    pub fn matches(&self, modifiers: &Modifiers) -> bool {
        self.ctrl == modifiers.control()
            && self.alt == modifiers.alt()
            && self.shift == modifiers.shift()
    }
}

/// Keys that can be bound. Printable keys are matched case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyCode {
    Char(char),
    Enter,
    Escape,
    Space,
    Tab,
}

impl KeyCode {
    pub fn matches(&self, key: &Key) -> bool {
        use iced::keyboard::key::Named;

        match (self, key) {
            (KeyCode::Char(expected), Key::Character(typed)) => {
                typed.chars().flat_map(char::to_lowercase).eq(expected.to_lowercase())
            }
            (KeyCode::Enter, Key::Named(Named::Enter))
            | (KeyCode::Escape, Key::Named(Named::Escape))
            | (KeyCode::Space, Key::Named(Named::Space))
            | (KeyCode::Tab, Key::Named(Named::Tab)) => true,
            _ => false,
        }
    }

    pub fn display(&self) -> String {
        match self {
            KeyCode::Char(c) => c.to_uppercase().collect(),
            KeyCode::Enter => "Enter".to_string(),
            KeyCode::Escape => "Esc".to_string(),
            KeyCode::Space => "Space".to_string(),
            KeyCode::Tab => "Tab".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeyBindings {
    bindings: HashMap<Action, Vec<KeyBinding>>,
}

/// Actions missing from the file keep their default bindings
impl<'de> Deserialize<'de> for KeyBindings {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Stored {
            #[serde(default)]
            bindings: HashMap<Action, Vec<KeyBinding>>,
        }

        let stored = Stored::deserialize(deserializer)?;
        let mut merged = Self::default();
        for (action, bindings) in stored.bindings {
            merged.set(action, bindings);
        }
        Ok(merged)
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = HashMap::new();
        bindings.insert(
            Action::Expand,
            vec![KeyBinding::new(KeyCode::Char('k')).ctrl()],
        );
        bindings.insert(Action::Collapse, vec![KeyBinding::new(KeyCode::Escape)]);
        bindings.insert(
            Action::MoreSuggestions,
            vec![KeyBinding::new(KeyCode::Char('m')).alt()],
        );
        Self { bindings }
    }
}

impl KeyBindings {
    pub fn get(&self, action: &Action) -> Option<&Vec<KeyBinding>> {
        self.bindings.get(action)
    }

    pub fn set(&mut self, action: Action, bindings: Vec<KeyBinding>) {
        self.bindings.insert(action, bindings);
    }

    /// First action whose binding matches, checked in [`Action::all`] order
    pub fn find_action(&self, key: &Key, modifiers: &Modifiers) -> Option<Action> {
        Action::all().iter().copied().find(|action| {
            self.get(action)
                .is_some_and(|list| list.iter().any(|b| b.matches(key, modifiers)))
        })
    }

    pub fn display_for_action(&self, action: &Action) -> String {
        self.get(action)
            .and_then(|b| b.first())
            .map(|b| b.display())
            .unwrap_or_else(|| "None".to_string())
    }
}
