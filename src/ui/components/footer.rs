//! Footer hint line.
//!
//! The list page and the edit form show fixed, translated hints. The detail
//! page lists the hotkeys actually bound in the current frame.

use crate::i18n::Translator;
use crate::ui::bindings::Bindings;
use crate::ui::viewmodel::{NodeKind, Segment, ViewNode};

/// Fixed hint text for the page, looked up by translation key.
pub fn static_hints(key: &str, t: &Translator<'_>) -> ViewNode {
    ViewNode::line(vec![Segment::dim(t.t(key))])
}

/// One `key label` pair per hotkey binding, in registration order.
///
/// Labels are read from the button nodes in `tree`.
pub fn hotkey_hints(bindings: &Bindings, tree: &ViewNode) -> ViewNode {
    let mut segments = Vec::new();
    for binding in bindings.iter() {
        let Some(key) = binding.hotkey else {
            continue;
        };
        let label = tree
            .find(&binding.element)
            .and_then(|node| match &node.kind {
                NodeKind::Button { label, .. } => Some(label.as_str()),
                _ => None,
            })
            .unwrap_or_default();

        if !segments.is_empty() {
            segments.push(Segment::dim("  "));
        }
        segments.push(Segment::accent(key.to_string()));
        segments.push(Segment::dim(format!(" {label}")));
    }
    ViewNode::line(segments)
}
