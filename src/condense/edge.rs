//! Inverse of the box-edge expansion.

use crate::properties::Edge;
use crate::style::Declaration;

/// Shortest 1-4 value form of four edge values.
pub fn condense_edges(top: &str, right: &str, bottom: &str, left: &str) -> String {
    match (top == bottom, left == right) {
        (true, true) if top == left => top.to_string(),
        (true, true) => format!("{top} {left}"),
        (true, false) => format!("{top} {right} {top} {left}"),
        (false, true) => format!("{top} {left} {bottom}"),
        (false, false) => format!("{top} {right} {bottom} {left}"),
    }
}

/// Condense a `<base>-<edge>` group.
///
/// Returns `None` unless the group is exactly the four edge longhands.
pub(crate) fn condense_edge_group(base: &str, group: &[Declaration]) -> Option<String> {
    if group.len() != 4 {
        return None;
    }
    let edge_value = |edge: Edge| {
        let name = edge.longhand(base);
        group
            .iter()
            .find(|d| d.name() == name)
            .map(Declaration::value)
    };
    Some(condense_edges(
        edge_value(Edge::Top)?,
        edge_value(Edge::Right)?,
        edge_value(Edge::Bottom)?,
        edge_value(Edge::Left)?,
    ))
}
