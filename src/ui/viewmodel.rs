//! Presentation tree produced by the view renderer.
//!
//! A [`Frame`] is the complete output of one projection: a [`ViewNode`] tree
//! describing what is on screen and the [`Bindings`] attached to its
//! interactive elements. Frames are plain data. They are compared for
//! equality to check that a re-render of the same state is equivalent, and
//! painted to ANSI text by [`crate::ui::paint`].
//!
//! # Example
//!
//! ```rust
//! use musicianhub::ui::viewmodel::{NodeKind, Segment, ViewNode};
//!
//! let line = ViewNode::line(vec![Segment::strong("MusicianHub"), Segment::dim(" v1")]);
//! assert_eq!(line.text(), "MusicianHub v1");
//! assert!(matches!(line.kind, NodeKind::Line(_)));
//! ```

use crate::app::{DetailTab, FormField, ViewMode};
use crate::i18n::Language;
use crate::ui::bindings::Bindings;

/// Identity of an interactive element within a frame.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ElementId {
    SearchInput,
    /// Card of the artist with this name.
    ArtistCard(String),
    Back,
    Tab(DetailTab),
    Edit,
    Share,
    Download,
    Language(Language),
    /// Area around the edit form; activating it dismisses the form.
    ModalBackdrop,
    ModalClose,
    ModalCancel,
    EditForm,
    FormField(FormField),
}

/// Text style of a [`Segment`], resolved to colours by the painter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentStyle {
    Plain,
    Dim,
    Strong,
    Accent,
    /// Part of a name matching the search text.
    Match,
    Link,
}

/// A run of text sharing one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub style: SegmentStyle,
}

impl Segment {
    pub fn new(text: impl Into<String>, style: SegmentStyle) -> Self {
        Self { text: text.into(), style }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, SegmentStyle::Plain)
    }

    pub fn dim(text: impl Into<String>) -> Self {
        Self::new(text, SegmentStyle::Dim)
    }

    pub fn strong(text: impl Into<String>) -> Self {
        Self::new(text, SegmentStyle::Strong)
    }

    pub fn accent(text: impl Into<String>) -> Self {
        Self::new(text, SegmentStyle::Accent)
    }

    pub fn link(text: impl Into<String>) -> Self {
        Self::new(text, SegmentStyle::Link)
    }
}

/// What a node draws.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// Root of a frame.
    Page(ViewMode),
    /// Vertical group with an optional heading.
    Section { title: Option<String> },
    /// Horizontal group of buttons.
    Toolbar,
    /// One line of styled text.
    Line(Vec<Segment>),
    /// A clickable label. `active` marks the current tab or language.
    Button { label: String, active: bool },
    /// A single-line text input.
    Input { label: String, value: String, placeholder: String },
    /// An artist card: image reference, highlighted name and genre.
    Card { image: String, title: Vec<Segment>, subtitle: String },
    /// A horizontal percentage bar. `width` is relative to the largest bar
    /// (0-100) and `rank` picks the chart color.
    Bar { label: String, percent: u32, width: u32, rank: usize },
    /// Modal overlay drawn above the page.
    Overlay { title: String },
    /// Horizontal separator.
    Rule,
    /// Blank spacer line.
    Gap,
}

/// A node of the presentation tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewNode {
    pub kind: NodeKind,
    /// Set on nodes that carry an interaction binding.
    pub element: Option<ElementId>,
    pub children: Vec<ViewNode>,
}

impl ViewNode {
    #[must_use]
    pub const fn new(kind: NodeKind) -> Self {
        Self { kind, element: None, children: Vec::new() }
    }

    #[must_use]
    pub fn page(view: ViewMode, children: Vec<Self>) -> Self {
        Self::new(NodeKind::Page(view)).with_children(children)
    }

    #[must_use]
    pub fn section(title: Option<String>, children: Vec<Self>) -> Self {
        Self::new(NodeKind::Section { title }).with_children(children)
    }

    #[must_use]
    pub fn line(segments: Vec<Segment>) -> Self {
        Self::new(NodeKind::Line(segments))
    }

    #[must_use]
    pub fn button(element: ElementId, label: impl Into<String>, active: bool) -> Self {
        Self::new(NodeKind::Button { label: label.into(), active }).with_element(element)
    }

    #[must_use]
    pub fn with_element(mut self, element: ElementId) -> Self {
        self.element = Some(element);
        self
    }

    #[must_use]
    pub fn with_children(mut self, children: Vec<Self>) -> Self {
        self.children = children;
        self
    }

    /// Depth-first iterator over this node and its descendants.
    pub fn walk(&self) -> impl Iterator<Item = &Self> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children.iter().rev());
            Some(node)
        })
    }

    /// Finds the node carrying `element`.
    #[must_use]
    pub fn find(&self, element: &ElementId) -> Option<&Self> {
        self.walk().find(|node| node.element.as_ref() == Some(element))
    }

    /// Plain text of the node itself, without styling or children.
    #[must_use]
    pub fn text(&self) -> String {
        match &self.kind {
            NodeKind::Line(segments) => segments.iter().map(|s| s.text.as_str()).collect(),
            NodeKind::Button { label, .. } | NodeKind::Bar { label, .. } => label.clone(),
            NodeKind::Input { label, value, .. } => format!("{label} {value}"),
            NodeKind::Card { title, subtitle, .. } => {
                let name: String = title.iter().map(|s| s.text.as_str()).collect();
                format!("{name} {subtitle}")
            }
            NodeKind::Section { title, .. } => title.clone().unwrap_or_default(),
            NodeKind::Overlay { title } => title.clone(),
            NodeKind::Page(_) | NodeKind::Toolbar | NodeKind::Rule | NodeKind::Gap => String::new(),
        }
    }

    /// Text of every node in the tree, in document order.
    #[must_use]
    pub fn all_text(&self) -> Vec<String> {
        self.walk().map(Self::text).filter(|text| !text.is_empty()).collect()
    }
}

/// Output of one full projection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub tree: ViewNode,
    pub bindings: Bindings,
}

impl Default for Frame {
    fn default() -> Self {
        Self {
            tree: ViewNode::page(ViewMode::List, Vec::new()),
            bindings: Bindings::default(),
        }
    }
}

impl Frame {
    /// The edit overlay, when the frame has one.
    #[must_use]
    pub fn overlay(&self) -> Option<&ViewNode> {
        self.tree
            .walk()
            .find(|node| matches!(node.kind, NodeKind::Overlay { .. }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walk_is_depth_first_in_document_order() {
        let tree = ViewNode::page(
            ViewMode::List,
            vec![
                ViewNode::section(
                    Some("a".to_string()),
                    vec![ViewNode::line(vec![Segment::plain("b")])],
                ),
                ViewNode::line(vec![Segment::plain("c")]),
            ],
        );
        assert_eq!(tree.all_text(), vec!["a", "b", "c"]);
    }

    #[test]
    fn find_locates_element() {
        let tree = ViewNode::page(
            ViewMode::Detail,
            vec![ViewNode::new(NodeKind::Toolbar).with_children(vec![ViewNode::button(
                ElementId::Back,
                "Back",
                false,
            )])],
        );
        assert_eq!(tree.find(&ElementId::Back).map(ViewNode::text).as_deref(), Some("Back"));
        assert!(tree.find(&ElementId::Share).is_none());
    }
}
