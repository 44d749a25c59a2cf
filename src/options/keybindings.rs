use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::input::KeyAction;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
/// Configurable keyboard bindings mapping actions to key codes.
pub struct KeybindingOptions {
    /// Maps action → key strings (e.g. `MoveForward` → `["KeyW",
    /// "ArrowUp"]`).
    pub bindings: HashMap<KeyAction, Vec<String>>,
    /// Reverse lookup cache (key string → action). Rebuilt on load.
    #[serde(skip)]
    key_to_action: HashMap<String, KeyAction>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let bindings = HashMap::from([
            (KeyAction::MoveForward, vec!["KeyW".into(), "ArrowUp".into()]),
            (
                KeyAction::MoveBackward,
                vec!["KeyS".into(), "ArrowDown".into()],
            ),
            (KeyAction::MoveLeft, vec!["KeyA".into(), "ArrowLeft".into()]),
            (
                KeyAction::MoveRight,
                vec!["KeyD".into(), "ArrowRight".into()],
            ),
            (KeyAction::RotateLeft, vec!["KeyQ".into()]),
            (KeyAction::RotateRight, vec!["KeyE".into()]),
            (
                KeyAction::PanModifier,
                vec!["ShiftLeft".into(), "ShiftRight".into()],
            ),
        ]);

        let mut opts = Self {
            bindings,
            key_to_action: HashMap::new(),
        };
        opts.rebuild_reverse_map();
        opts
    }
}

impl PartialEq for KeybindingOptions {
    fn eq(&self, other: &Self) -> bool {
        self.bindings == other.bindings
    }
}

impl Eq for KeybindingOptions {}

impl KeybindingOptions {
    /// Rebuild the reverse lookup map (key string → action).
    ///
    /// Actions are visited in declaration order, so a key bound to two
    /// actions resolves to the later one deterministically.
    pub fn rebuild_reverse_map(&mut self) {
        self.key_to_action.clear();
        for action in KeyAction::ALL {
            let Some(keys) = self.bindings.get(&action) else {
                continue;
            };
            for key in keys {
                let _ = self.key_to_action.insert(key.clone(), action);
            }
        }
    }

    /// Look up the action for a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        self.key_to_action.get(key).copied()
    }

    /// Bind an additional key to `action`.
    pub fn bind(&mut self, action: KeyAction, key: impl Into<String>) {
        let key = key.into();
        let keys = self.bindings.entry(action).or_default();
        if !keys.contains(&key) {
            keys.push(key);
        }
        self.rebuild_reverse_map();
    }
}
