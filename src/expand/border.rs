//! The `border` shorthand.

use crate::grammar::Grammar;
use crate::properties::Edge;
use crate::value::Value;

use super::NormalizedResult;
use super::composition::expand_composition;

/// Resolve the top edge's color/style/width, then copy it to the other
/// three edges.
pub(super) fn expand_border<G: Grammar>(grammar: &G, value: &Value) -> NormalizedResult {
    let top = expand_composition(grammar, Edge::Top.border_composition(), value, false);

    let mut result = top.clone();
    for edge in [Edge::Right, Edge::Bottom, Edge::Left] {
        // `top` holds its entries in composition order
        for (name, (_, part)) in edge.border_composition().iter().zip(top.iter()) {
            result.insert(*name, part);
        }
    }
    result
}
