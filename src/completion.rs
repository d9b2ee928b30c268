// completion.rs

use rustyline::completion::{Completer, Pair};
use rustyline::{Helper, Context};
use rustyline::hint::{Hint, Hinter};
use rustyline::highlight::Highlighter;
use rustyline::validate::Validator;
use rustyline::error::ReadlineError;
use std::borrow::Cow;
use std::cell::Cell;
use crate::menu::MenuChoice;

/// Line-editor helper for the menu prompt: label hints after a code, and Tab from label to code.
/// Inert unless `menu_active` is set, so name and number prompts are left alone.
pub struct MenuHelper {
    pub menu_active: Cell<bool>,
}

impl MenuHelper {
    pub fn new() -> Self {
        Self { menu_active: Cell::new(false) }
    }

    fn candidates(&self, prefix: &str) -> Vec<Pair> {
        if !self.menu_active.get() {
            return Vec::new();
        }
        MenuChoice::matching_label(prefix)
            .into_iter()
            .map(|choice| Pair {
                display: format!("{}. {}", choice.code(), choice.label()),
                replacement: choice.code().to_string(),
            })
            .collect()
    }

    fn label_hint(&self, line: &str, pos: usize) -> Option<MenuHint> {
        if !self.menu_active.get() || pos != line.len() {
            return None;
        }
        MenuChoice::parse(line)
            .ok()
            .map(|choice| MenuHint(format!("  {}", choice.label())))
    }
}

/// Display-only hint; accepting it must not insert the label into the line.
pub struct MenuHint(String);

impl Hint for MenuHint {
    fn display(&self) -> &str {
        &self.0
    }
    fn completion(&self) -> Option<&str> {
        None
    }
}

impl Completer for MenuHelper {
    type Candidate = Pair;
    fn complete(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Result<(usize, Vec<Pair>), ReadlineError> {
        Ok((0, self.candidates(&line[..pos])))
    }
}

impl Hinter for MenuHelper {
    type Hint = MenuHint;
    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<MenuHint> {
        self.label_hint(line, pos)
    }
}

impl Highlighter for MenuHelper {
    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(format!("\x1b[2m{}\x1b[0m", hint))
    }
}

impl Validator for MenuHelper {}

impl Helper for MenuHelper {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inactive_helper_offers_nothing() {
        let helper = MenuHelper::new();
        assert!(helper.candidates("div").is_empty());
        assert!(helper.label_hint("4", 1).is_none());
    }

    #[test]
    fn label_prefix_completes_to_code() {
        let helper = MenuHelper::new();
        helper.menu_active.set(true);
        let pairs = helper.candidates("div");
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].replacement, "4");
        assert_eq!(pairs[0].display, "4. Divide");
        let replacements: Vec<String> = helper.candidates("s").into_iter().map(|p| p.replacement).collect();
        assert_eq!(replacements, ["2", "6"]);
    }

    #[test]
    fn code_hints_label_without_completion() {
        let helper = MenuHelper::new();
        helper.menu_active.set(true);
        let hint = helper.label_hint("6", 1).unwrap();
        assert_eq!(hint.display(), "  Show History");
        assert_eq!(hint.completion(), None);
        assert!(helper.label_hint("9", 1).is_none());
        assert!(helper.label_hint("6", 0).is_none());
    }
}
