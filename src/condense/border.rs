//! Inverse of the border expansion.
//!
//! Collapses each edge's color/style/width into `border-<edge>`, then four
//! identical edges into `border`. Whatever level is reached is kept.

use std::collections::HashMap;

use crate::properties::Edge;
use crate::style::{Declaration, Priority, Style};

pub(crate) fn condense_border_group(style: &mut Style, group: &[Declaration], priority: Priority) {
    let mut values: HashMap<String, String> = group
        .iter()
        .map(|d| (d.name().to_string(), d.value().to_string()))
        .collect();

    let mut edge_values = Vec::with_capacity(4);
    for edge in Edge::ALL {
        let shorthand = edge.border_shorthand().as_str();
        let parts: Vec<&str> = edge
            .border_composition()
            .iter()
            .filter_map(|name| values.get(*name).map(String::as_str))
            .collect();

        if parts.len() == 3 {
            let joined = parts.join(" ");
            for name in edge.border_composition() {
                style.remove(name);
            }
            log::trace!("condensed {}: {}", shorthand, joined);
            style.set_property(shorthand, joined.clone(), priority);
            values.insert(shorthand.to_string(), joined);
        }

        if let Some(value) = values.get(shorthand) {
            edge_values.push(value.clone());
        }
    }

    let all_equal = edge_values.windows(2).all(|pair| pair[0] == pair[1]);
    if edge_values.len() == 4 && all_equal {
        for edge in Edge::ALL {
            style.remove(edge.border_shorthand().as_str());
        }
        log::trace!("condensed border: {}", edge_values[0]);
        style.set_property("border", edge_values[0].clone(), priority);
    }
}
