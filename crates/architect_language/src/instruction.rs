//! Decomposition of a Blueprint line.

use architect_foundation::{Error, Result};

use crate::token::{FunctionalChar, TypeCode};

/// The literal no-op instruction.
pub const PASS: &str = "pass";

/// Byte offset of the separator after the type code.
const SEPARATOR: usize = 3;

/// Byte offset where the target begins.
const TARGET_START: usize = SEPARATOR + 1;

/// One Blueprint line split into its parts.
///
/// The parts borrow from the line; nothing is allocated.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Instruction<'a> {
    /// The whole line, trimmed.
    pub line: &'a str,
    /// Handler selector.
    pub type_code: TypeCode,
    /// First functional character at or after the separator.
    pub functional: FunctionalChar,
    /// Text between the separator and the functional character.
    pub target: &'a str,
    /// Text after the functional character.
    pub params: &'a str,
}

impl<'a> Instruction<'a> {
    /// Parses one line. Returns `None` for [`PASS`].
    ///
    /// # Errors
    ///
    /// Returns a missing-functional-char error if no functional character
    /// follows the separator, and an unknown-type error if the first three
    /// characters are not a recognised type code.
    pub fn parse(line: &'a str) -> Result<Option<Self>> {
        let line = line.trim();
        if line == PASS {
            return Ok(None);
        }

        let (position, functional) = line
            .char_indices()
            .filter(|&(index, _)| index >= SEPARATOR)
            .find_map(|(index, c)| FunctionalChar::from_char(c).map(|f| (index, f)))
            .ok_or_else(|| Error::missing_functional_char(line))?;

        let type_code = line
            .get(..SEPARATOR)
            .and_then(TypeCode::from_code)
            .ok_or_else(|| {
                Error::unknown_instruction_type(line.chars().take(SEPARATOR).collect::<String>())
            })?;

        Ok(Some(Self {
            line,
            type_code,
            functional,
            target: line.get(TARGET_START..position).unwrap_or(""),
            params: &line[position + functional.symbol().len_utf8()..],
        }))
    }
}
