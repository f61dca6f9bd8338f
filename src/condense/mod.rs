//! Longhand condensation.
//!
//! The inverse of [`crate::expand`]: declarations sharing a `margin-`,
//! `padding-` or `border-` prefix are collapsed into the shortest
//! equivalent shorthand. A group is only rewritten when it has more than
//! one member and all members share one priority; the shorthand inherits
//! that priority.

mod border;
mod edge;

pub use edge::condense_edges;

use crate::config::NormalizerConfig;
use crate::normalizer::Normalizer;
use crate::style::{Declaration, Priority, Style, Stylesheet};

/// Prefix groups, in processing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Group {
    Margin,
    Padding,
    Border,
}

impl Group {
    const ALL: [Group; 3] = [Group::Margin, Group::Padding, Group::Border];

    fn base(self) -> &'static str {
        match self {
            Group::Margin => "margin",
            Group::Padding => "padding",
            Group::Border => "border",
        }
    }

    fn matches(self, name: &str) -> bool {
        name.strip_prefix(self.base())
            .is_some_and(|rest| rest.starts_with('-'))
    }

    fn enabled(self, config: &NormalizerConfig) -> bool {
        match self {
            Group::Margin => config.condense_margin,
            Group::Padding => config.condense_padding,
            Group::Border => config.condense_border,
        }
    }
}

impl<G> Normalizer<G> {
    /// Collapse longhand groups in `style` into shorthands where safe.
    pub fn condense(&self, style: &mut Style) {
        condense_style(style, &self.config);
    }

    /// Condense every style rule of a stylesheet. Other rules are untouched.
    pub fn condense_sheet(&self, sheet: &mut Stylesheet) {
        for rule in sheet.style_rules_mut() {
            self.condense(&mut rule.style);
        }
    }
}

fn condense_style(style: &mut Style, config: &NormalizerConfig) {
    let mut groups: [Vec<Declaration>; 3] = Default::default();
    for declaration in style.iter() {
        if let Some(index) = Group::ALL
            .iter()
            .position(|group| group.matches(declaration.name()))
        {
            groups[index].push(declaration.clone());
        }
    }

    for (group, members) in Group::ALL.into_iter().zip(groups) {
        let Some(priority) = shared_priority(&members) else {
            log::trace!("{} group not condensable", group.base());
            continue;
        };
        if !group.enabled(config) {
            continue;
        }
        if priority == Priority::Important && !config.condense_important {
            log::trace!("{} group is important, skipped", group.base());
            continue;
        }

        match group {
            Group::Margin | Group::Padding => {
                if let Some(value) = edge::condense_edge_group(group.base(), &members) {
                    for member in &members {
                        style.remove(member.name());
                    }
                    log::trace!("condensed {}: {}", group.base(), value);
                    style.set_property(group.base(), value, priority);
                }
            }
            Group::Border => border::condense_border_group(style, &members, priority),
        }
    }
}

/// The priority of a group with more than one member, all sharing it.
fn shared_priority(members: &[Declaration]) -> Option<Priority> {
    let (first, rest) = members.split_first()?;
    if rest.is_empty() || rest.iter().any(|d| d.priority() != first.priority()) {
        return None;
    }
    Some(first.priority())
}
