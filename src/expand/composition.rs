//! Unordered shorthands: `list-style` and the per-edge `border-<edge>`.
//!
//! Each token goes to the first longhand whose grammar accepts it. Tokens
//! are visited back to front, so when two tokens fit the same longhand the
//! one written first wins.

use crate::grammar::Grammar;
use crate::value::Value;

use super::NormalizedResult;

pub(super) fn expand_composition<G: Grammar>(
    grammar: &G,
    composition: &[&str],
    value: &Value,
    check_inherit: bool,
) -> NormalizedResult {
    if check_inherit && value.as_keyword() == Some("inherit") {
        return NormalizedResult::filled(composition, "inherit");
    }

    let mut result = NormalizedResult::with_defaults(composition);
    for token in value.tokens().iter().rev() {
        let token = token.as_str();
        match composition
            .iter()
            .copied()
            .find(|name| grammar.accepts(name, token))
        {
            Some(name) => result.insert(name, token),
            None => log::trace!("no longhand accepts {}", token),
        }
    }
    result
}
