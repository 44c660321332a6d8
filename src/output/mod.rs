use serde::Serialize;

use crate::error::AppResult;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum OutputMode {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy)]
pub struct Output {
    mode: OutputMode,
}

impl Output {
    pub fn new(json: bool) -> Self {
        let mode = if json {
            OutputMode::Json
        } else {
            OutputMode::Text
        };
        Self { mode }
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Line-oriented output: the human-readable text, or the serialized
    /// value in json mode.
    pub fn emit<T: Serialize>(&self, text: &str, json_value: &T) -> AppResult<()> {
        match self.mode {
            OutputMode::Text => {
                println!("{text}");
                Ok(())
            }
            OutputMode::Json => print_json(json_value),
        }
    }

    /// Page output: the rendered HTML fragment as-is in text mode, the full
    /// page envelope (user, stats, snapshot, html) in json mode.
    pub fn emit_page<T: Serialize>(&self, html: &str, page: &T) -> AppResult<()> {
        match self.mode {
            OutputMode::Text => {
                println!("{html}");
                Ok(())
            }
            OutputMode::Json => print_json(page),
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    let payload = serde_json::to_string_pretty(value)?;
    println!("{payload}");
    Ok(())
}
