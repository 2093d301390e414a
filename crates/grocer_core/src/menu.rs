use std::str::FromStr;

use thiserror::Error;

/// User input rejected locally; always answered with a re-prompt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid menu choice {0:?}, expected a number from 1 to 4")]
    InvalidChoice(String),
    #[error("item name is empty")]
    EmptyItemName,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    LookUp,
    ListAll,
    Histogram,
    Exit,
}

impl MenuChoice {
    pub fn from_number(number: i64) -> Option<Self> {
        match number {
            1 => Some(Self::LookUp),
            2 => Some(Self::ListAll),
            3 => Some(Self::Histogram),
            4 => Some(Self::Exit),
            _ => None,
        }
    }
}

impl FromStr for MenuChoice {
    type Err = ValidationError;

    /// Accepts a whole line holding one integer in `1..=4`, surrounding whitespace allowed.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        line.trim()
            .parse::<i64>()
            .ok()
            .and_then(Self::from_number)
            .ok_or_else(|| ValidationError::InvalidChoice(line.trim().to_owned()))
    }
}

/// Trims an entered item name and rejects it when nothing is left.
pub fn parse_item_name(line: &str) -> Result<String, ValidationError> {
    let item = line.trim();
    if item.is_empty() {
        Err(ValidationError::EmptyItemName)
    } else {
        Ok(item.to_owned())
    }
}
