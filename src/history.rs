// history.rs

use std::fmt;
use itertools::Itertools;
use crate::util::format_number;

/// One successful calculation: the rendered expression and its result.
#[derive(Clone, Debug, PartialEq)]
pub struct OperationRecord {
    expression: String,
    result: f64,
}

impl OperationRecord {
    pub fn new(expression: String, result: f64) -> Self {
        Self { expression, result }
    }
    pub fn expression(&self) -> &str {
        &self.expression
    }
    pub fn result(&self) -> f64 {
        self.result
    }
}

impl fmt::Display for OperationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.expression, format_number(self.result))
    }
}

/// Append-only log of the calculations made by one calculator.
#[derive(Debug, Default)]
pub struct History {
    entries: Vec<OperationRecord>,
}

impl History {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }
    pub(crate) fn add(&mut self, entry: OperationRecord) {
        self.entries.push(entry);
    }
    pub fn get(&self, n: usize) -> Option<&OperationRecord> {
        self.entries.get(n)
    }
    pub fn last(&self) -> Option<&OperationRecord> {
        self.entries.last()
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = &OperationRecord> {
        self.entries.iter()
    }

    /// Numbered listing starting at 1, or the empty-history notice.
    pub fn render(&self) -> String {
        if self.entries.is_empty() {
            return "No calculations performed yet.".to_string();
        }
        let lines = self
            .entries
            .iter()
            .enumerate()
            .map(|(i, record)| format!("{}. {}", i + 1, record))
            .join("\n");
        format!("Calculation History:\n{}", lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_history_renders_notice() {
        let history = History::new();
        assert!(history.is_empty());
        assert_eq!(history.render(), "No calculations performed yet.");
    }

    #[test]
    fn render_is_one_indexed_in_insertion_order() {
        let mut history = History::new();
        history.add(OperationRecord::new("1 + 1".into(), 2.0));
        history.add(OperationRecord::new("2 × 2".into(), 4.0));
        assert_eq!(history.len(), 2);
        assert_eq!(
            history.render(),
            "Calculation History:\n1. 1 + 1 = 2\n2. 2 × 2 = 4"
        );
        assert_eq!(history.last().map(|r| r.expression()), Some("2 × 2"));
    }

    #[test]
    fn record_display_uses_number_formatting() {
        let record = OperationRecord::new("0.1 + 0.2".into(), 0.1 + 0.2);
        assert_eq!(record.to_string(), "0.1 + 0.2 = 0.30000000000000004");
    }
}
