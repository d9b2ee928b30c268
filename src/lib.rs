pub mod calculator;
pub mod completion;
pub mod config;
pub mod history;
pub mod input;
pub mod menu;
pub mod repl;
pub mod util;
