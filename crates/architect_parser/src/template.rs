//! Placeholder expansion for instruction templates.
//!
//! | Placeholder  | Replacement                          |
//! |--------------|--------------------------------------|
//! | `{0}`        | alias of argument 0                  |
//! | `{0.name}`   | display name of argument 0           |
//! | `{0.ground}` | ground description of argument 0     |
//! | `{0.exam}`   | examine description of argument 0    |
//!
//! Anything else in braces, including an out-of-range index, is left as
//! written.
//!
//! In an `ift` line, values substituted after the comparator have `\`, `<`,
//! `>` and `}` backslash-escaped, so a name like `Key <gold>` stays one piece
//! of text inside its branch. A placeholder inside a nested `ift` branch gets
//! the outer level of escaping only.

use architect_foundation::ThingId;
use architect_language::{FunctionalChar, TypeCode};
use architect_storage::{Thing, World};

/// Characters the `ift` grammar treats as delimiters.
const DELIMITERS: [char; 4] = ['\\', '<', '>', '}'];

/// Expands the placeholders in one instruction line.
#[must_use]
pub fn interpolate(line: &str, args: &[ThingId], world: &World) -> String {
    let mut expanded = String::with_capacity(line.len());
    let mut rest = line;
    let escape_from = conditional_params_start(line);

    while let Some(open) = rest.find('{') {
        let position = line.len() - rest.len() + open;
        expanded.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            rest = &rest[open..];
            break;
        };

        let placeholder = &after[..close];
        match lookup(placeholder, args, world) {
            Some(value) if escape_from.is_some_and(|start| position >= start) => {
                push_escaped(&mut expanded, value);
            }
            Some(value) => expanded.push_str(value),
            None => {
                expanded.push('{');
                expanded.push_str(placeholder);
                expanded.push('}');
            }
        }
        rest = &after[close + 1..];
    }

    expanded.push_str(rest);
    expanded
}

/// Returns the byte offset just past the comparator of an `ift` line.
fn conditional_params_start(line: &str) -> Option<usize> {
    let lead = line.len() - line.trim_start().len();
    let body = &line[lead..];
    let code = TypeCode::Conditional.code();
    if !body.starts_with(code) {
        return None;
    }
    body.char_indices()
        .filter(|&(index, _)| index >= code.len())
        .find(|&(_, c)| FunctionalChar::from_char(c).is_some())
        .map(|(index, c)| lead + index + c.len_utf8())
}

fn push_escaped(expanded: &mut String, value: &str) {
    for c in value.chars() {
        if DELIMITERS.contains(&c) {
            expanded.push('\\');
        }
        expanded.push(c);
    }
}

fn lookup<'w>(placeholder: &str, args: &[ThingId], world: &'w World) -> Option<&'w str> {
    let (index, field) = match placeholder.split_once('.') {
        Some((index, field)) => (index, Some(field)),
        None => (placeholder, None),
    };
    let thing: &Thing = world.thing(*args.get(index.parse::<usize>().ok()?)?);

    match field {
        None => Some(thing.alias.as_str()),
        Some("name") => Some(thing.name.as_str()),
        Some("ground") => Some(thing.ground_desc.as_str()),
        Some("exam") => Some(thing.examine_desc.as_str()),
        Some(_) => None,
    }
}
