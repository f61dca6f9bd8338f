//! Box-edge shorthands (margin, padding, border-style/-width/-color).

use crate::properties::Edge;
use crate::value::{Token, Value};

use super::NormalizedResult;

/// Spread 1-4 tokens over the four edges of `base`.
///
/// Tokens past the fourth are ignored. No grammar check is applied.
pub(super) fn expand_edges(base: &str, value: &Value) -> NormalizedResult {
    let tokens = value.tokens();
    let tokens = &tokens[..tokens.len().min(4)];

    let Some((top, right, bottom, left)) = expand_shorthand_4(tokens) else {
        return NormalizedResult::new();
    };

    [
        (Edge::Top, top),
        (Edge::Right, right),
        (Edge::Bottom, bottom),
        (Edge::Left, left),
    ]
    .into_iter()
    .map(|(edge, token)| (edge.longhand(base), token.as_str().to_string()))
    .collect()
}

/// Expand 1-4 values to (top, right, bottom, left) following CSS shorthand rules.
fn expand_shorthand_4(values: &[Token]) -> Option<(&Token, &Token, &Token, &Token)> {
    match values {
        [v] => Some((v, v, v, v)),
        [tb, lr] => Some((tb, lr, tb, lr)),
        [t, lr, b] => Some((t, lr, b, lr)),
        [t, r, b, l] => Some((t, r, b, l)),
        _ => None,
    }
}
