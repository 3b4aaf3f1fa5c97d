use crate::error::{ListError, Result};
use crate::linkedlist::{Node, NodeFactory};
use regex::Regex;

/*
 * Parse a list from its rendered form :
 * <value> -> <value> -> ... -> <value>
 *
 * Whitespace around the arrows and a trailing newline are accepted.
 * Blank input is the empty list.
 * All nodes are allocated from <factory>.
 */
pub fn parse<'a>(factory: &NodeFactory<'a>, input: &str) -> Result<Option<&'a Node<'a>>> {
    let re = Regex::new(r"^\s*(?:-?\d+(?:\s*->\s*-?\d+)*)?\s*$")?;
    if !re.is_match(input) {
        return Err(ListError::Parse {
            input: input.to_string(),
        });
    }

    let text = input.trim();
    if text.is_empty() {
        return Ok(None);
    }

    let values = text
        .split("->")
        .map(|v| v.trim().parse::<i32>())
        .collect::<std::result::Result<Vec<_>, _>>()
        // Only overflow can get past the pattern
        .map_err(|_| ListError::Parse {
            input: input.to_string(),
        })?;

    factory.from_values(&values)
}
