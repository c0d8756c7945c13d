//! Type codes and functional characters.

use std::fmt;

/// The handler an instruction is routed to, taken from its first three
/// characters.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum TypeCode {
    /// `sys`: player-visible output.
    System,
    /// `inv`: inventory storage.
    Inventory,
    /// `rom`: room holdings, links, and attributes.
    Room,
    /// `obj`: thing attributes.
    Object,
    /// `ift`: conditional branching.
    Conditional,
}

impl TypeCode {
    /// Every recognised type code.
    pub const ALL: [TypeCode; 5] = [
        TypeCode::System,
        TypeCode::Inventory,
        TypeCode::Room,
        TypeCode::Object,
        TypeCode::Conditional,
    ];

    /// Looks up a three-letter code.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|type_code| type_code.code() == code)
    }

    /// Returns the three-letter code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            TypeCode::System => "sys",
            TypeCode::Inventory => "inv",
            TypeCode::Room => "rom",
            TypeCode::Object => "obj",
            TypeCode::Conditional => "ift",
        }
    }
}

impl fmt::Display for TypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// The symbol separating an instruction's target from its parameters.
///
/// Each handler gives the symbol its own meaning; under `ift` the symbol is
/// the comparator.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum FunctionalChar {
    /// `&`: link rooms.
    Link,
    /// `!`: say.
    Say,
    /// `-`: remove.
    Remove,
    /// `+`: add.
    Add,
    /// `@`: held-by comparison.
    Holds,
    /// `#`: set an attribute.
    SetAttribute,
    /// `=`: identity comparison.
    Identical,
}

impl FunctionalChar {
    /// Every functional character, in symbol-table order.
    pub const ALL: [FunctionalChar; 7] = [
        FunctionalChar::Link,
        FunctionalChar::Say,
        FunctionalChar::Remove,
        FunctionalChar::Add,
        FunctionalChar::Holds,
        FunctionalChar::SetAttribute,
        FunctionalChar::Identical,
    ];

    /// Maps a character to its functional meaning.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '&' => Some(FunctionalChar::Link),
            '!' => Some(FunctionalChar::Say),
            '-' => Some(FunctionalChar::Remove),
            '+' => Some(FunctionalChar::Add),
            '@' => Some(FunctionalChar::Holds),
            '#' => Some(FunctionalChar::SetAttribute),
            '=' => Some(FunctionalChar::Identical),
            _ => None,
        }
    }

    /// Returns the symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            FunctionalChar::Link => '&',
            FunctionalChar::Say => '!',
            FunctionalChar::Remove => '-',
            FunctionalChar::Add => '+',
            FunctionalChar::Holds => '@',
            FunctionalChar::SetAttribute => '#',
            FunctionalChar::Identical => '=',
        }
    }
}

impl fmt::Display for FunctionalChar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
