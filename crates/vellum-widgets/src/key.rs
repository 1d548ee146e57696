//! Key bindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Modifiers that act as the platform command key (Ctrl, Cmd/Super, Meta).
pub const COMMAND: KeyModifiers = KeyModifiers::CONTROL
    .union(KeyModifiers::SUPER)
    .union(KeyModifiers::META);

/// A key binding that maps one or more key combinations to a described action.
#[derive(Debug, Clone)]
pub struct Binding {
    /// Key combinations that trigger this binding.
    pub keys: Vec<KeyCombination>,
    /// What the binding does, for help text.
    pub description: String,
    /// Disabled bindings never match.
    pub enabled: bool,
}

impl Binding {
    /// A binding for a single combination.
    pub fn new(key: KeyCombination, description: impl Into<String>) -> Self {
        Self::with_keys(vec![key], description)
    }

    /// A binding for several combinations.
    pub fn with_keys(keys: Vec<KeyCombination>, description: impl Into<String>) -> Self {
        Self {
            keys,
            description: description.into(),
            enabled: true,
        }
    }

    /// Whether `event` matches any combination of this binding.
    pub fn matches(&self, event: &KeyEvent) -> bool {
        self.enabled && self.keys.iter().any(|k| k.matches(event))
    }

    /// Enable or disable the binding.
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

/// A key with the modifiers it requires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyCombination {
    /// The base key.
    pub code: KeyCode,
    /// Required modifiers.
    pub modifiers: KeyModifiers,
    /// When set, holding any one of `modifiers` is enough.
    pub any_modifier: bool,
}

impl KeyCombination {
    /// A key with no modifiers.
    pub fn new(code: KeyCode) -> Self {
        Self::with_modifiers(code, KeyModifiers::NONE)
    }

    /// A key with Ctrl.
    pub fn ctrl(code: KeyCode) -> Self {
        Self::with_modifiers(code, KeyModifiers::CONTROL)
    }

    /// A key with whichever of Ctrl, Cmd/Super, or Meta the platform uses.
    pub fn command(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: COMMAND,
            any_modifier: true,
        }
    }

    /// A key with an explicit modifier set, all of which are required.
    pub fn with_modifiers(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self {
            code,
            modifiers,
            any_modifier: false,
        }
    }

    /// Whether `event` presses this combination.
    ///
    /// Letters are compared case-insensitively whenever a modifier is
    /// required, since Shift changes the reported character.
    pub fn matches(&self, event: &KeyEvent) -> bool {
        let modifiers_held = if self.any_modifier {
            event.modifiers.intersects(self.modifiers)
        } else {
            event.modifiers.contains(self.modifiers)
        };
        let code_matches = match (self.code, event.code) {
            (KeyCode::Char(a), KeyCode::Char(b)) if !self.modifiers.is_empty() => {
                a.eq_ignore_ascii_case(&b)
            }
            (a, b) => a == b,
        };
        modifiers_held && code_matches
    }
}
