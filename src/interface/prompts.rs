use std::io::{self, BufRead, IsTerminal};

use dialoguer::Input;
use tracing::debug;

use crate::catalog::texts::{PROMPT_USER, TRY_AGAIN};
use crate::catalog::TextAssets;
use crate::error::{Result, ShoppingError};
use crate::models::{Meal, MealCatalog};
use crate::planner::parse_selection;

/// Something that can show a message and hand back one line of user input.
pub trait LineSource {
    fn read_line(&mut self, message: &str) -> Result<String>;
}

/// Reads from the terminal through dialoguer, or line by line when stdin is
/// piped.
#[derive(Debug, Default)]
pub struct ConsoleInput;

impl LineSource for ConsoleInput {
    fn read_line(&mut self, message: &str) -> Result<String> {
        println!("{message}");

        let line = if io::stdin().is_terminal() {
            Input::<String>::new().allow_empty(true).interact_text()?
        } else {
            let mut line = String::new();
            if io::stdin().lock().read_line(&mut line)? == 0 {
                return Err(ShoppingError::Io(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input closed before a valid selection was made",
                )));
            }
            line.trim_end_matches(['\r', '\n']).to_string()
        };

        println!();
        Ok(line)
    }
}

/// Where the selection prompt stands.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionState {
    /// Waiting for a line; `message` is what to show the user.
    AwaitingInput { message: String },
    /// A valid, possibly empty, set of 1-based indices.
    Validated(Vec<usize>),
}

/// Validate-or-retry loop over the meal selection.
///
/// Starts in `AwaitingInput` with the regular prompt. A valid line moves to
/// `Validated`; an invalid one stays in `AwaitingInput` with the parse error
/// followed by the retry hint.
#[derive(Debug, Clone)]
pub struct SelectionPrompt {
    available: usize,
    retry_hint: String,
    state: SelectionState,
}

impl SelectionPrompt {
    pub fn new(texts: &TextAssets, available: usize) -> Self {
        Self {
            available,
            retry_hint: texts.get(TRY_AGAIN).to_string(),
            state: SelectionState::AwaitingInput {
                message: texts.get(PROMPT_USER).to_string(),
            },
        }
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// Feed one line of input. Once validated, further input is ignored.
    pub fn submit(&mut self, input: &str) -> &SelectionState {
        if matches!(self.state, SelectionState::AwaitingInput { .. }) {
            self.state = match parse_selection(input, self.available) {
                Ok(indices) => SelectionState::Validated(indices),
                Err(ShoppingError::InvalidInput(reason)) => {
                    debug!(input, %reason, "rejected selection");
                    SelectionState::AwaitingInput {
                        message: format!("{reason}\r\n{}", self.retry_hint),
                    }
                }
                Err(other) => SelectionState::AwaitingInput {
                    message: format!("{other}\r\n{}", self.retry_hint),
                },
            };
        }
        &self.state
    }

    /// Prompt until the input is valid. There is no retry limit.
    pub fn run(mut self, source: &mut impl LineSource) -> Result<Vec<usize>> {
        loop {
            match &self.state {
                SelectionState::Validated(indices) => return Ok(indices.clone()),
                SelectionState::AwaitingInput { message } => {
                    let line = source.read_line(message)?;
                    self.submit(&line);
                }
            }
        }
    }
}

/// Ask the user which meals to prepare, returning them in index order.
pub fn prompt_selected_meals<'a>(
    catalog: &'a MealCatalog,
    texts: &TextAssets,
    source: &mut impl LineSource,
) -> Result<Vec<&'a Meal>> {
    let indices = SelectionPrompt::new(texts, catalog.len()).run(source)?;
    let meals = catalog.meals();
    Ok(indices.into_iter().map(|i| &meals[i - 1]).collect())
}
