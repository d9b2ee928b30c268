// menu.rs

use thiserror::Error;
use crate::calculator::Operation;

pub const MENU: &str = "\
=== Calculator Menu ===
1. Add
2. Subtract
3. Multiply
4. Divide
5. Power
6. Show History
7. Exit";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("not a number: {0:?}")]
    InvalidNumber(String),
    #[error("unrecognized menu choice: {0:?}")]
    UnrecognizedChoice(String),
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MenuChoice {
    Compute(Operation),
    ShowHistory,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 7] = [
        MenuChoice::Compute(Operation::Add),
        MenuChoice::Compute(Operation::Subtract),
        MenuChoice::Compute(Operation::Multiply),
        MenuChoice::Compute(Operation::Divide),
        MenuChoice::Compute(Operation::Power),
        MenuChoice::ShowHistory,
        MenuChoice::Exit,
    ];

    pub fn code(self) -> &'static str {
        match self {
            MenuChoice::Compute(Operation::Add) => "1",
            MenuChoice::Compute(Operation::Subtract) => "2",
            MenuChoice::Compute(Operation::Multiply) => "3",
            MenuChoice::Compute(Operation::Divide) => "4",
            MenuChoice::Compute(Operation::Power) => "5",
            MenuChoice::ShowHistory => "6",
            MenuChoice::Exit => "7",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::Compute(op) => op.label(),
            MenuChoice::ShowHistory => "Show History",
            MenuChoice::Exit => "Exit",
        }
    }

    /// Matches a menu code, ignoring surrounding whitespace.
    pub fn parse(input: &str) -> Result<Self, InputError> {
        let code = input.trim();
        Self::ALL
            .into_iter()
            .find(|choice| choice.code() == code)
            .ok_or_else(|| InputError::UnrecognizedChoice(code.to_string()))
    }

    /// Choices whose label starts with `prefix`, case-insensitively.
    pub fn matching_label(prefix: &str) -> Vec<MenuChoice> {
        let prefix = prefix.trim().to_lowercase();
        if prefix.is_empty() {
            return Vec::new();
        }
        Self::ALL
            .into_iter()
            .filter(|choice| choice.label().to_lowercase().starts_with(&prefix))
            .collect()
    }
}

pub fn parse_number(input: &str) -> Result<f64, InputError> {
    let text = input.trim();
    text.parse::<f64>()
        .map_err(|_| InputError::InvalidNumber(text.to_string()))
}
