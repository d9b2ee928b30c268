// repl.rs

use anyhow::{Context, Result};
use std::io::{self, IsTerminal, Write};
use std::ops::ControlFlow;
use tracing::{debug, info};
use crate::calculator::{Calculator, Operation};
use crate::config::Config;
use crate::input::{EditorSource, LineSource, ReaderSource};
use crate::menu::{parse_number, MenuChoice, MENU};
use crate::util::{format_number, writeln_ignore_broken_pipe};

pub const NAME_PROMPT: &str = "Please enter your name: ";
pub const CHOICE_PROMPT: &str = "Enter your choice (1-7): ";
pub const FIRST_OPERAND_PROMPT: &str = "Enter first number: ";
pub const SECOND_OPERAND_PROMPT: &str = "Enter second number: ";

pub fn start_repl(config: &Config) -> Result<()> {
    if config.line_editor.use_editor(io::stdin().is_terminal()) {
        debug!("reading input through the line editor");
        Session::new(EditorSource::new()?, io::stdout()).run()
    } else {
        debug!("reading input from plain stdin");
        Session::new(ReaderSource::new(io::stdin().lock()), io::stdout().lock()).run()
    }
}

/// One operator's menu dialogue over a line source, owning the calculator and its history.
pub struct Session<S, W> {
    source: S,
    out: W,
    calculator: Calculator,
}

impl<S: LineSource, W: Write> Session<S, W> {
    pub fn new(source: S, out: W) -> Self {
        Self { source, out, calculator: Calculator::new() }
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// Runs until the exit choice or the end of input.
    pub fn run(&mut self) -> Result<()> {
        let Some(name) = self.source.read_line(NAME_PROMPT, &mut self.out)? else {
            info!("input closed before greeting");
            return Ok(());
        };
        let name = name.trim().to_string();
        info!(operator = %name, "session started");
        self.say(format!("Hello, {}! Welcome to the enhanced calculator.", name))?;

        loop {
            self.say(format!("\n{}", MENU))?;
            self.say("")?;
            let Some(input) = self.source.read_choice(CHOICE_PROMPT, &mut self.out)? else {
                break;
            };
            match MenuChoice::parse(&input) {
                Ok(MenuChoice::Exit) => {
                    self.say(format!("\nGoodbye, {}! Thanks for using the calculator.", name))?;
                    info!(calculations = self.calculator.history().len(), "session finished");
                    return Ok(());
                }
                Ok(MenuChoice::ShowHistory) => {
                    let rendered = self.calculator.show_history();
                    self.say(format!("\n{}", rendered))?;
                }
                Ok(MenuChoice::Compute(op)) => {
                    if self.compute(op)?.is_break() {
                        break;
                    }
                }
                Err(err) => {
                    debug!(%err, "menu input rejected");
                    self.say("Invalid choice. Please try again.")?;
                }
            }
        }
        info!(calculations = self.calculator.history().len(), "input closed, session ended");
        Ok(())
    }

    fn compute(&mut self, op: Operation) -> Result<ControlFlow<()>> {
        let Some(a) = self.read_number(FIRST_OPERAND_PROMPT)? else {
            return Ok(ControlFlow::Break(()));
        };
        let Some(b) = self.read_number(SECOND_OPERAND_PROMPT)? else {
            return Ok(ControlFlow::Break(()));
        };
        match self.calculator.apply(op, a, b) {
            Ok(result) => self.say(format!("Result: {}", format_number(result)))?,
            Err(err) => {
                debug!(?op, a, b, %err, "calculation failed");
                self.say(format!("Error: {}", err))?;
            }
        }
        Ok(ControlFlow::Continue(()))
    }

    /// Prompts until the line parses as a number; `None` only when the input is closed.
    fn read_number(&mut self, prompt: &str) -> Result<Option<f64>> {
        loop {
            let Some(text) = self.source.read_line(prompt, &mut self.out)? else {
                return Ok(None);
            };
            match parse_number(&text) {
                Ok(value) => return Ok(Some(value)),
                Err(err) => {
                    debug!(%err, "operand rejected");
                    self.say("Please enter a valid number.")?;
                }
            }
        }
    }

    fn say<S2: AsRef<str>>(&mut self, line: S2) -> Result<()> {
        writeln_ignore_broken_pipe(&mut self.out, line).context("failed to write output")
    }
}
