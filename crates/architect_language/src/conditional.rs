//! The `ift` branch grammar.
//!
//! ```text
//! ift_<subject><comparator><comparand>><then-1>}<then-2>...<<else-1>}<else-2>...
//! ```
//!
//! The comparand runs up to the first unescaped `>`. Branch lines are
//! separated by unescaped `}`, and the first unescaped `<` switches from the
//! true branch to the false branch. A backslash makes the next character
//! literal; parsing strips exactly one level of escaping, so a nested `ift`
//! is written with its own delimiters escaped once.

use architect_foundation::{Error, Result};

use crate::token::FunctionalChar;

/// How an `ift` subject is compared with its comparand.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Comparator {
    /// `@`: the subject is held by the comparand.
    Holds,
    /// `=`: the subject is the comparand.
    Identical,
}

impl Comparator {
    /// Maps a functional character to a comparator.
    ///
    /// # Errors
    ///
    /// Returns a malformed-conditional error for any other character.
    pub fn from_functional(functional: FunctionalChar) -> Result<Self> {
        match functional {
            FunctionalChar::Holds => Ok(Comparator::Holds),
            FunctionalChar::Identical => Ok(Comparator::Identical),
            other => Err(Error::malformed_conditional(format!(
                "`{other}` is not a comparator"
            ))),
        }
    }
}

/// Parsed `ift` parameters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Conditional {
    /// Token naming what the subject is compared against.
    pub comparand: String,
    /// Lines run when the comparison holds.
    pub then_branch: Vec<String>,
    /// Lines run otherwise.
    pub else_branch: Vec<String>,
}

#[derive(Copy, Clone, PartialEq, Eq)]
enum Part {
    Comparand,
    Then,
    Else,
}

impl Conditional {
    /// Parses the parameter string of an `ift` instruction.
    ///
    /// # Errors
    ///
    /// Returns a malformed-conditional error if the comparand is not closed
    /// by `>` or the else separator `<` appears more than once.
    pub fn parse(params: &str) -> Result<Self> {
        let mut conditional = Conditional::default();
        let mut part = Part::Comparand;
        let mut current = String::new();
        let mut chars = params.chars();

        while let Some(c) = chars.next() {
            match (c, part) {
                ('\\', _) => current.push(chars.next().unwrap_or('\\')),
                ('>', Part::Comparand) => {
                    conditional.comparand = std::mem::take(&mut current).trim().to_string();
                    part = Part::Then;
                }
                ('<' | '}', Part::Comparand) => {
                    return Err(Error::malformed_conditional(format!(
                        "expected `>` after comparison target in `{params}`"
                    )));
                }
                ('}', _) => conditional.push_line(part, std::mem::take(&mut current)),
                ('<', Part::Then) => {
                    conditional.push_line(part, std::mem::take(&mut current));
                    part = Part::Else;
                }
                ('<', Part::Else) => {
                    return Err(Error::malformed_conditional(format!(
                        "more than one `<` in `{params}`"
                    )));
                }
                _ => current.push(c),
            }
        }

        if part == Part::Comparand {
            return Err(Error::malformed_conditional(format!(
                "expected `>` after comparison target in `{params}`"
            )));
        }
        conditional.push_line(part, current);
        Ok(conditional)
    }

    fn push_line(&mut self, part: Part, line: String) {
        let line = line.trim();
        if line.is_empty() {
            return;
        }
        match part {
            Part::Then => self.then_branch.push(line.to_string()),
            Part::Else => self.else_branch.push(line.to_string()),
            Part::Comparand => {}
        }
    }

    /// Returns the lines for the given outcome.
    #[must_use]
    pub fn branch(&self, outcome: bool) -> &[String] {
        if outcome {
            &self.then_branch
        } else {
            &self.else_branch
        }
    }
}
