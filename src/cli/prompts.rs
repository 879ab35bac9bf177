use anyhow::Result;
use inquire::{Confirm, Select};

pub struct Prompt;

impl Prompt {
    pub fn confirm(message: &str, default: bool) -> Result<bool> {
        Ok(Confirm::new(message).with_default(default).prompt()?)
    }

    pub fn select(message: &str, options: Vec<&str>, default: usize) -> Result<usize> {
        let selection = Select::new(message, options.clone())
            .with_starting_cursor(default)
            .prompt()?;

        Ok(options.iter().position(|&x| x == selection).unwrap_or(0))
    }
}
