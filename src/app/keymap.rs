use std::sync::LazyLock;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::Deserialize;

use super::input::KeyAction;

macro_rules! keymap_source {
    () => {
        include_str!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/keymap/default.keymap.json"
        ))
    };
}

/// Which bindings apply: `Editing` while the field has focus.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) enum KeymapContext {
    Editing,
    Resting,
}

impl KeymapContext {
    pub(crate) fn for_focus(focused: bool) -> Self {
        if focused {
            KeymapContext::Editing
        } else {
            KeymapContext::Resting
        }
    }

    fn from_str(raw: &str) -> Option<Self> {
        match raw {
            "editing" => Some(KeymapContext::Editing),
            "resting" => Some(KeymapContext::Resting),
            _ => None,
        }
    }
}

#[derive(Deserialize)]
struct RawEntry {
    id: String,
    description: String,
    contexts: Vec<String>,
    action: RawAction,
    combos: Vec<String>,
}

#[derive(Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
enum RawAction {
    Focus,
    Blur,
    Clear,
    TogglePassword,
    ToggleError,
    Submit,
    Quit,
}

impl RawAction {
    fn into_action(self) -> KeyAction {
        match self {
            RawAction::Focus => KeyAction::Focus,
            RawAction::Blur => KeyAction::Blur,
            RawAction::Clear => KeyAction::Clear,
            RawAction::TogglePassword => KeyAction::TogglePassword,
            RawAction::ToggleError => KeyAction::ToggleError,
            RawAction::Submit => KeyAction::Submit,
            RawAction::Quit => KeyAction::Quit,
        }
    }
}

struct KeyBinding {
    action: KeyAction,
    contexts: Vec<KeymapContext>,
    combos: Vec<KeyPattern>,
    snippet: String,
}

impl KeyBinding {
    fn from_raw(raw: RawEntry) -> Self {
        let contexts = raw
            .contexts
            .iter()
            .filter_map(|ctx| KeymapContext::from_str(ctx))
            .collect::<Vec<_>>();
        assert!(
            !contexts.is_empty(),
            "keymap entry {} must declare at least one context",
            raw.id
        );
        let combos = raw
            .combos
            .iter()
            .map(|combo| {
                KeyPattern::parse(combo).unwrap_or_else(|err| {
                    panic!("failed to parse combo '{combo}' for {}: {err}", raw.id)
                })
            })
            .collect::<Vec<_>>();
        assert!(
            !combos.is_empty(),
            "keymap entry {} must declare combos",
            raw.id
        );
        let combos_display = combos
            .iter()
            .map(|pattern| pattern.display.clone())
            .collect::<Vec<_>>()
            .join("/");
        Self {
            action: raw.action.into_action(),
            contexts,
            combos,
            snippet: format!("{combos_display} {}", raw.description),
        }
    }

    fn matches(&self, context: KeymapContext, key: &KeyEvent) -> Option<KeyAction> {
        if !self.contexts.contains(&context) {
            return None;
        }
        self.combos
            .iter()
            .find(|pattern| pattern.matches(key))
            .map(|_| self.action)
    }
}

struct KeyPattern {
    matcher: CodeMatcher,
    required: KeyModifiers,
    allow_shift: bool,
    display: String,
}

impl KeyPattern {
    fn parse(spec: &str) -> Result<Self, String> {
        let display = spec.trim().to_string();
        let mut tokens = display
            .split('+')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>();
        let Some(key_token) = tokens.pop() else {
            return Err("combo must contain a key".into());
        };
        let mut required = KeyModifiers::empty();
        for token in tokens {
            match token.to_lowercase().as_str() {
                "ctrl" | "control" => required |= KeyModifiers::CONTROL,
                "shift" => required |= KeyModifiers::SHIFT,
                "alt" => required |= KeyModifiers::ALT,
                other => return Err(format!("unsupported modifier '{other}'")),
            }
        }
        // Terminals report Shift+Tab as BackTab.
        let matcher = if required.contains(KeyModifiers::SHIFT)
            && key_token.eq_ignore_ascii_case("tab")
        {
            required.remove(KeyModifiers::SHIFT);
            CodeMatcher::Literal(KeyCode::BackTab)
        } else {
            CodeMatcher::from_token(key_token)?
        };
        let allow_shift = matcher.allows_extra_shift() && !required.contains(KeyModifiers::SHIFT);
        Ok(Self {
            matcher,
            required,
            allow_shift,
            display,
        })
    }

    fn matches(&self, key: &KeyEvent) -> bool {
        if !self.matcher.matches(&key.code) || !key.modifiers.contains(self.required) {
            return false;
        }
        let extra = key.modifiers - self.required;
        if self.allow_shift {
            (extra - KeyModifiers::SHIFT).is_empty()
        } else {
            extra.is_empty()
        }
    }
}

enum CodeMatcher {
    Literal(KeyCode),
    Alpha(char),
}

impl CodeMatcher {
    fn from_token(token: &str) -> Result<Self, String> {
        let normalized = token.to_lowercase();
        let matcher = match normalized.as_str() {
            "tab" => CodeMatcher::Literal(KeyCode::Tab),
            "backtab" => CodeMatcher::Literal(KeyCode::BackTab),
            "enter" => CodeMatcher::Literal(KeyCode::Enter),
            "esc" | "escape" => CodeMatcher::Literal(KeyCode::Esc),
            "backspace" => CodeMatcher::Literal(KeyCode::Backspace),
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => CodeMatcher::Alpha(ch),
                    _ => return Err(format!("unsupported key '{token}'")),
                }
            }
        };
        Ok(matcher)
    }

    fn matches(&self, code: &KeyCode) -> bool {
        match (self, code) {
            (CodeMatcher::Literal(expected), actual) => actual == expected,
            (CodeMatcher::Alpha(expected), KeyCode::Char(actual)) => {
                actual.to_ascii_lowercase() == *expected
            }
            _ => false,
        }
    }

    fn allows_extra_shift(&self) -> bool {
        matches!(
            self,
            CodeMatcher::Alpha(_) | CodeMatcher::Literal(KeyCode::BackTab)
        )
    }
}

static KEYMAP: LazyLock<Vec<KeyBinding>> = LazyLock::new(|| {
    let raw_entries: Vec<RawEntry> =
        serde_json::from_str(keymap_source!()).expect("invalid keymap/default.keymap.json");
    raw_entries.into_iter().map(KeyBinding::from_raw).collect()
});

pub(crate) fn classify_key(context: KeymapContext, key: &KeyEvent) -> Option<KeyAction> {
    KEYMAP
        .iter()
        .find_map(|binding| binding.matches(context, key))
}

pub(crate) fn help_text(context: KeymapContext) -> Option<String> {
    let snippets = KEYMAP
        .iter()
        .filter(|binding| binding.contexts.contains(&context))
        .map(|binding| binding.snippet.clone())
        .collect::<Vec<_>>();
    if snippets.is_empty() {
        None
    } else {
        Some(snippets.join(" • "))
    }
}
