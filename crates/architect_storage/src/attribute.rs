//! Attribute code tables for `#` instructions.
//!
//! An attribute-set parameter string starts with a code from a fixed table
//! and continues with the new value, optionally after a single space:
//! `DESC A dark cellar.` or `DESCA dark cellar.` both set the description
//! to `A dark cellar.`.

/// Room attributes settable from Blueprint.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum RoomAttribute {
    /// `IDEN` (or the short form `ID`): identifier.
    Identifier,
    /// `NAME`: display name.
    Name,
    /// `DESC`: entry description.
    EntryDesc,
    /// `EXAM`: examine description.
    ExamineDesc,
    /// `HOLD`: holding set, as `|`-separated aliases.
    Holding,
}

impl RoomAttribute {
    /// Code table.
    pub const CODES: &'static [(&'static str, RoomAttribute)] = &[
        ("IDEN", RoomAttribute::Identifier),
        ("ID", RoomAttribute::Identifier),
        ("NAME", RoomAttribute::Name),
        ("DESC", RoomAttribute::EntryDesc),
        ("EXAM", RoomAttribute::ExamineDesc),
        ("HOLD", RoomAttribute::Holding),
    ];

    /// Splits a parameter string into attribute and value.
    #[must_use]
    pub fn split(params: &str) -> Option<(Self, &str)> {
        split_code(Self::CODES, params)
    }
}

/// Thing attributes settable from Blueprint.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ThingAttribute {
    /// `ALIAS`: lookup name.
    Alias,
    /// `NAME`: display name.
    Name,
    /// `GRND`: ground description.
    GroundDesc,
    /// `EXAM`: examine description.
    ExamineDesc,
    /// `PROP`: prop flag (`true`/`false`).
    Prop,
}

impl ThingAttribute {
    /// Code table.
    pub const CODES: &'static [(&'static str, ThingAttribute)] = &[
        ("ALIAS", ThingAttribute::Alias),
        ("NAME", ThingAttribute::Name),
        ("GRND", ThingAttribute::GroundDesc),
        ("EXAM", ThingAttribute::ExamineDesc),
        ("PROP", ThingAttribute::Prop),
    ];

    /// Splits a parameter string into attribute and value.
    #[must_use]
    pub fn split(params: &str) -> Option<(Self, &str)> {
        split_code(Self::CODES, params)
    }
}

/// Bag attributes settable from Blueprint.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum BagAttribute {
    /// `LIMIT`: capacity, or `none`.
    Limit,
}

impl BagAttribute {
    /// Code table.
    pub const CODES: &'static [(&'static str, BagAttribute)] = &[("LIMIT", BagAttribute::Limit)];

    /// Splits a parameter string into attribute and value.
    #[must_use]
    pub fn split(params: &str) -> Option<(Self, &str)> {
        split_code(Self::CODES, params)
    }
}

/// Returns the leading code of a parameter string, for error messages.
#[must_use]
pub fn leading_code(params: &str) -> &str {
    let end = params
        .find(|c: char| !c.is_ascii_uppercase())
        .unwrap_or(params.len());
    &params[..end]
}

/// Parses a boolean attribute value.
#[must_use]
pub fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" | "prop" => Some(true),
        "false" | "no" | "0" | "item" => Some(false),
        _ => None,
    }
}

fn split_code<'p, A: Copy>(table: &[(&str, A)], params: &'p str) -> Option<(A, &'p str)> {
    // Longest match wins, so `IDEN` is never read as `ID` plus `EN`.
    let (code, attribute) = table
        .iter()
        .filter(|(code, _)| params.starts_with(code))
        .max_by_key(|(code, _)| code.len())?;
    let value = &params[code.len()..];
    Some((*attribute, value.strip_prefix(' ').unwrap_or(value)))
}
