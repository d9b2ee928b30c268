// calculator.rs

use thiserror::Error;
use tracing::debug;
use crate::history::{History, OperationRecord};
use crate::util::format_number;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl Operation {
    #[cfg(test)]
    pub const ALL: [Operation; 5] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
        Operation::Power,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "×",
            Operation::Divide => "÷",
            Operation::Power => "^",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Operation::Add => "Add",
            Operation::Subtract => "Subtract",
            Operation::Multiply => "Multiply",
            Operation::Divide => "Divide",
            Operation::Power => "Power",
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CalcError {
    #[error("Cannot divide by zero!")]
    DivisionByZero,
    #[error("Math domain error: {base} ^ {exponent} is undefined")]
    Domain { base: f64, exponent: f64 },
    #[error("Result of {base} ^ {exponent} is too large to compute!")]
    Overflow { base: f64, exponent: f64 },
}

/// Binary arithmetic over `f64`, recording every successful call.
#[derive(Debug, Default)]
pub struct Calculator {
    history: History,
}

impl Calculator {
    pub fn new() -> Self {
        Self { history: History::new() }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn apply(&mut self, op: Operation, a: f64, b: f64) -> Result<f64, CalcError> {
        match op {
            Operation::Add => self.add(a, b),
            Operation::Subtract => self.subtract(a, b),
            Operation::Multiply => self.multiply(a, b),
            Operation::Divide => self.divide(a, b),
            Operation::Power => self.power(a, b),
        }
    }

    pub fn add(&mut self, a: f64, b: f64) -> Result<f64, CalcError> {
        Ok(self.record(Operation::Add, a, b, a + b))
    }

    pub fn subtract(&mut self, a: f64, b: f64) -> Result<f64, CalcError> {
        Ok(self.record(Operation::Subtract, a, b, a - b))
    }

    pub fn multiply(&mut self, a: f64, b: f64) -> Result<f64, CalcError> {
        Ok(self.record(Operation::Multiply, a, b, a * b))
    }

    pub fn divide(&mut self, a: f64, b: f64) -> Result<f64, CalcError> {
        // -0.0 == 0.0 as well
        if b == 0.0 {
            return Err(CalcError::DivisionByZero);
        }
        Ok(self.record(Operation::Divide, a, b, a / b))
    }

    /// IEEE `powf`, except that a pole or a NaN produced from non-NaN operands is a domain error,
    /// and an infinite result from finite operands is an overflow.
    pub fn power(&mut self, a: f64, b: f64) -> Result<f64, CalcError> {
        if a == 0.0 && b < 0.0 {
            return Err(CalcError::Domain { base: a, exponent: b });
        }
        let result = a.powf(b);
        if result.is_nan() && !a.is_nan() && !b.is_nan() {
            return Err(CalcError::Domain { base: a, exponent: b });
        }
        if result.is_infinite() && a.is_finite() && b.is_finite() {
            return Err(CalcError::Overflow { base: a, exponent: b });
        }
        Ok(self.record(Operation::Power, a, b, result))
    }

    pub fn show_history(&self) -> String {
        self.history.render()
    }

    fn record(&mut self, op: Operation, a: f64, b: f64, result: f64) -> f64 {
        let expression = format!("{} {} {}", format_number(a), op.symbol(), format_number(b));
        debug!(%expression, result, "calculation recorded");
        self.history.add(OperationRecord::new(expression, result));
        result
    }
}
