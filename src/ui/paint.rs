//! Paints a [`Frame`] into ANSI text for a terminal pane.
//!
//! The painter is the only place where colors, column widths and pane size
//! come into play. It flattens the presentation tree into rows, composes the
//! edit overlay above the page, and pins the hint line and status bar to the
//! bottom of the pane.
//!
//! # Layout
//!
//! ```text
//! rows 1..=rows-3   page body (scrolled to keep the focus visible)
//! row  rows-2       border
//! row  rows-1       hints
//! row  rows         notice or status bar
//! ```
//!
//! # Example
//!
//! ```rust
//! use musicianhub::ui::paint::{PaintContext, Painter};
//! use musicianhub::ui::viewmodel::Frame;
//! use musicianhub::ui::Theme;
//!
//! let theme = Theme::default();
//! let out = Painter::new(&theme, 10, 40).paint(&Frame::default(), &PaintContext::default());
//! assert!(out.starts_with("\u{1b}[1;1H"));
//! ```

use crate::app::{EditForm, FormField};
use crate::ui::bindings::Trigger;
use crate::ui::helpers::{display_width, pad_to_width, position_cursor, truncate_to_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ElementId, Frame, NodeKind, Segment, SegmentStyle, ViewNode};

/// Columns used by a full demographic bar.
const BAR_COLUMNS: usize = 30;
/// Column width of demographic bar labels.
const BAR_LABEL_WIDTH: usize = 10;
/// Rows reserved at the bottom: border, hints, status.
const CHROME_ROWS: usize = 3;

/// Host-side state that affects painting but not the frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaintContext<'a> {
    /// Element with keyboard focus.
    pub focus: Option<&'a ElementId>,
    /// Values being typed into the edit form.
    pub draft: Option<&'a EditForm>,
    /// Form field receiving typed characters.
    pub focused_field: Option<FormField>,
    /// Message shown in the status row until the next key.
    pub notice: Option<&'a str>,
    /// Right-hand status text, e.g. the document language.
    pub status: Option<&'a str>,
    /// Rows scrolled past at the top of the page body.
    pub scroll: usize,
}

/// A run of text with its ANSI style prefix.
#[derive(Debug, Clone)]
struct Cell {
    style: String,
    text: String,
}

/// One painted line before padding.
#[derive(Debug, Clone, Default)]
struct Row {
    cells: Vec<Cell>,
    /// Style applied to the padding after the cells.
    fill: String,
    focused: bool,
}

impl Row {
    fn push(&mut self, style: impl Into<String>, text: impl Into<String>) {
        self.cells.push(Cell { style: style.into(), text: text.into() });
    }

    fn blank() -> Self {
        Self::default()
    }
}

/// Draws frames for one pane size and theme.
#[derive(Debug, Clone, Copy)]
pub struct Painter<'a> {
    theme: &'a Theme,
    rows: usize,
    cols: usize,
}

impl<'a> Painter<'a> {
    #[must_use]
    pub const fn new(theme: &'a Theme, rows: usize, cols: usize) -> Self {
        Self { theme, rows, cols }
    }

    /// Paints `frame` into a string of positioned, padded ANSI lines.
    #[must_use]
    pub fn paint(&self, frame: &Frame, ctx: &PaintContext<'_>) -> String {
        let _span = tracing::trace_span!("paint", rows = self.rows, cols = self.cols).entered();

        let mut body = Vec::new();
        let mut hints = Row::blank();
        let mut overlay = None;

        let children = &frame.tree.children;
        for (i, node) in children.iter().enumerate() {
            let is_last = i + 1 == children.len();
            match &node.kind {
                NodeKind::Overlay { .. } => overlay = Some(node),
                NodeKind::Line(segments) if is_last => hints = self.line_row(segments),
                _ => self.flatten(node, frame, ctx, &mut body),
            }
        }

        // Trailing rule is replaced by the pinned border.
        if matches!(children.iter().rev().nth(1).map(|n| &n.kind), Some(NodeKind::Rule)) {
            body.pop();
        }

        if let Some(node) = overlay {
            self.compose_overlay(node, frame, ctx, &mut body);
        }

        let visible = self.rows.saturating_sub(CHROME_ROWS);
        let offset = Self::scroll_offset(&body, visible, ctx.scroll);

        let mut out = String::new();
        for row in 0..visible {
            let line = body.get(offset + row).cloned().unwrap_or_default();
            self.emit(&mut out, row + 1, &line);
        }

        if self.rows >= CHROME_ROWS {
            self.emit(&mut out, self.rows - 2, &self.rule_row());
            self.emit(&mut out, self.rows - 1, &hints);
            self.emit(&mut out, self.rows, &self.status_row(ctx));
        }
        out
    }

    /// Offset that honours `requested` scrolling but keeps the focused row
    /// on screen.
    fn scroll_offset(body: &[Row], visible: usize, requested: usize) -> usize {
        let max = body.len().saturating_sub(visible);
        let mut offset = requested.min(max);
        if let Some(focused) = body.iter().position(|row| row.focused) {
            if focused < offset {
                offset = focused;
            } else if visible > 0 && focused >= offset + visible {
                offset = focused + 1 - visible;
            }
        }
        offset
    }

    fn flatten(&self, node: &ViewNode, frame: &Frame, ctx: &PaintContext<'_>, out: &mut Vec<Row>) {
        let colors = &self.theme.colors;
        let focused = ctx.focus.is_some() && node.element.as_ref() == ctx.focus;

        match &node.kind {
            NodeKind::Page(_) => {
                for child in &node.children {
                    self.flatten(child, frame, ctx, out);
                }
            }
            NodeKind::Section { title } => {
                if let Some(title) = title {
                    out.push(Row::blank());
                    let mut row = Row::blank();
                    let style = format!("{}{}", Theme::bold(), Theme::fg(&colors.accent));
                    row.push(style, title.clone());
                    out.push(row);
                }
                for child in &node.children {
                    self.flatten(child, frame, ctx, out);
                }
            }
            NodeKind::Toolbar => out.push(self.toolbar_row(&node.children, frame, ctx)),
            NodeKind::Line(segments) => out.push(self.line_row(segments)),
            NodeKind::Button { .. } => {
                out.push(self.toolbar_row(std::slice::from_ref(node), frame, ctx));
            }
            NodeKind::Input { label, value, placeholder } => {
                let field = match &node.element {
                    Some(ElementId::FormField(field)) => Some(*field),
                    _ => None,
                };
                let value = match (field, ctx.draft) {
                    (Some(field), Some(draft)) => draft.value(field),
                    _ => value.as_str(),
                };
                let typing = field.is_some() && field == ctx.focused_field;
                if field.is_some() {
                    out.push(self.field_row(label, value, typing));
                } else {
                    out.extend(self.search_box(value, placeholder));
                }
            }
            NodeKind::Card { image, title, subtitle } => {
                out.push(self.card_row(image, title, subtitle, focused));
            }
            NodeKind::Bar { label, percent, width, rank } => {
                out.push(self.bar_row(label, *percent, *width, *rank));
            }
            NodeKind::Overlay { .. } => {}
            NodeKind::Rule => out.push(self.rule_row()),
            NodeKind::Gap => out.push(Row::blank()),
        }
    }

    /// Draws the overlay box over the page rows, starting below the first
    /// toolbar.
    fn compose_overlay(
        &self,
        node: &ViewNode,
        frame: &Frame,
        ctx: &PaintContext<'_>,
        body: &mut Vec<Row>,
    ) {
        let colors = &self.theme.colors;
        let title = match &node.kind {
            NodeKind::Overlay { title } => title.as_str(),
            _ => "",
        };

        let mut inner = Vec::new();
        for child in &node.children {
            self.flatten(child, frame, ctx, &mut inner);
        }

        let border = Theme::fg(&colors.border);
        let inner_width = self.cols.saturating_sub(6);
        let mut boxed = Vec::with_capacity(inner.len() + 2);

        let mut top = Row::blank();
        top.push(border.clone(), "  ┌ ");
        top.push(format!("{}{}", Theme::bold(), Theme::fg(&colors.header_fg)), title);
        top.push(
            border.clone(),
            format!(" {}┐", "─".repeat(inner_width.saturating_sub(display_width(title) + 2))),
        );
        boxed.push(top);

        for row in inner {
            let mut framed = Row::blank();
            framed.focused = row.focused;
            framed.push(border.clone(), "  │ ");
            let used: usize = row.cells.iter().map(|c| display_width(&c.text)).sum();
            framed.cells.extend(row.cells);
            framed.push(String::new(), " ".repeat(inner_width.saturating_sub(used + 2)));
            framed.push(border.clone(), " │");
            boxed.push(framed);
        }

        let mut bottom = Row::blank();
        bottom.push(border, format!("  └{}┘", "─".repeat(inner_width)));
        boxed.push(bottom);

        let start = 1.min(body.len());
        let end = (start + boxed.len()).min(body.len());
        body.splice(start..end, boxed);
    }

    fn line_row(&self, segments: &[Segment]) -> Row {
        let mut row = Row::blank();
        for segment in segments {
            row.push(self.segment_style(segment.style), segment.text.clone());
        }
        row
    }

    fn segment_style(&self, style: SegmentStyle) -> String {
        let colors = &self.theme.colors;
        match style {
            SegmentStyle::Plain => Theme::fg(&colors.text_normal),
            SegmentStyle::Dim => Theme::fg(&colors.text_dim),
            SegmentStyle::Strong => format!("{}{}", Theme::bold(), Theme::fg(&colors.text_normal)),
            SegmentStyle::Accent => Theme::fg(&colors.accent),
            SegmentStyle::Match => format!(
                "{}{}",
                Theme::fg(&colors.match_highlight_fg),
                Theme::bg(&colors.match_highlight_bg)
            ),
            SegmentStyle::Link => format!("{}{}", Theme::underline(), Theme::fg(&colors.link)),
        }
    }

    fn selection_style(&self) -> String {
        let colors = &self.theme.colors;
        format!("{}{}", Theme::fg(&colors.selection_fg), Theme::bg(&colors.selection_bg))
    }

    /// Buttons side by side, each prefixed with its hotkey.
    fn toolbar_row(&self, buttons: &[ViewNode], frame: &Frame, ctx: &PaintContext<'_>) -> Row {
        let colors = &self.theme.colors;
        let mut row = Row::blank();

        for node in buttons {
            let NodeKind::Button { label, active } = &node.kind else {
                continue;
            };
            let hotkey = node
                .element
                .as_ref()
                .and_then(|element| frame.bindings.get(element, Trigger::Activate))
                .and_then(|binding| binding.hotkey);
            let focused = ctx.focus.is_some() && node.element.as_ref() == ctx.focus;

            let style = if focused {
                self.selection_style()
            } else if *active {
                format!("{}{}", Theme::bold(), Theme::fg(&colors.accent))
            } else {
                Theme::fg(&colors.text_normal)
            };

            row.push(String::new(), " ");
            if let Some(key) = hotkey {
                row.push(Theme::fg(&colors.text_dim), format!("[{key}]"));
            }
            row.push(style, format!(" {label} "));
            row.focused |= focused;
        }
        row
    }

    fn search_box(&self, value: &str, placeholder: &str) -> Vec<Row> {
        let colors = &self.theme.colors;
        let border = Theme::fg(&colors.input_border);
        let inner_width = self.cols.saturating_sub(4);

        let (style, text) = if value.is_empty() {
            (Theme::fg(&colors.text_dim), format!(" {placeholder}"))
        } else {
            (Theme::fg(&colors.text_normal), format!(" {value}▏"))
        };
        let text = truncate_to_width(&text, inner_width);
        let pad = inner_width.saturating_sub(display_width(&text));

        let mut top = Row::blank();
        top.push(border.clone(), format!(" ┌{}┐", "─".repeat(inner_width)));

        let mut middle = Row::blank();
        middle.push(border.clone(), " │");
        middle.push(style, text);
        middle.push(String::new(), " ".repeat(pad));
        middle.push(border.clone(), "│");

        let mut bottom = Row::blank();
        bottom.push(border, format!(" └{}┘", "─".repeat(inner_width)));

        vec![top, middle, bottom]
    }

    fn field_row(&self, label: &str, value: &str, typing: bool) -> Row {
        let colors = &self.theme.colors;
        let mut row = Row::blank();
        row.focused = typing;
        row.push(Theme::fg(&colors.text_dim), format!("{label}: "));
        if typing {
            row.push(self.selection_style(), format!("{value}▏"));
        } else {
            row.push(Theme::fg(&colors.text_normal), value.to_string());
        }
        row
    }

    fn card_row(&self, image: &str, title: &[Segment], subtitle: &str, focused: bool) -> Row {
        let colors = &self.theme.colors;
        let mut row = Row::blank();
        row.focused = focused;

        if focused {
            let selection = self.selection_style();
            let name: String = title.iter().map(|s| s.text.as_str()).collect();
            row.push(selection.clone(), format!(" ◉ {name}  {subtitle}"));
            row.fill = selection;
        } else {
            row.push(Theme::fg(&colors.text_dim), " ◉ ");
            for segment in title {
                row.push(self.segment_style(segment.style), segment.text.clone());
            }
            row.push(Theme::fg(&colors.text_dim), format!("  {subtitle}"));
        }

        if !image.is_empty() {
            row.push(Theme::fg(&colors.text_dim), "  ");
            row.push(self.segment_style(SegmentStyle::Link), image.to_string());
        }
        row
    }

    fn bar_row(&self, label: &str, percent: u32, width: u32, rank: usize) -> Row {
        let colors = &self.theme.colors;
        let filled = (width.min(100) as usize * BAR_COLUMNS) / 100;

        let mut row = Row::blank();
        row.push(
            Theme::fg(&colors.text_normal),
            pad_to_width(label, BAR_LABEL_WIDTH),
        );
        row.push(Theme::fg(self.theme.chart_color(rank)), "█".repeat(filled));
        row.push(Theme::fg(&colors.border), "░".repeat(BAR_COLUMNS - filled));
        row.push(Theme::fg(&colors.text_dim), format!(" {percent}%"));
        row
    }

    fn rule_row(&self) -> Row {
        let mut row = Row::blank();
        row.push(Theme::fg(&self.theme.colors.border), "─".repeat(self.cols));
        row
    }

    fn status_row(&self, ctx: &PaintContext<'_>) -> Row {
        let colors = &self.theme.colors;
        let mut row = Row::blank();

        if let Some(notice) = ctx.notice {
            let style = format!("{}{}", Theme::fg(&colors.notice_fg), Theme::bg(&colors.notice_bg));
            row.push(style.clone(), format!(" {notice}"));
            row.fill = style;
        } else if let Some(status) = ctx.status {
            let text = format!("{status} ");
            let pad = self.cols.saturating_sub(display_width(&text));
            row.push(String::new(), " ".repeat(pad));
            row.push(Theme::fg(&colors.text_dim), text);
        }
        row
    }

    /// Writes `row` at `line`, truncated and padded to the pane width.
    fn emit(&self, out: &mut String, line: usize, row: &Row) {
        out.push_str(&position_cursor(line, 1));

        let mut used = 0;
        for cell in &row.cells {
            let remaining = self.cols.saturating_sub(used);
            if remaining == 0 {
                break;
            }
            let text = truncate_to_width(&cell.text, remaining);
            used += display_width(&text);
            out.push_str(&cell.style);
            out.push_str(&text);
            out.push_str(Theme::reset());
        }

        out.push_str(&row.fill);
        out.push_str(&" ".repeat(self.cols.saturating_sub(used)));
        out.push_str(Theme::reset());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::ViewMode;

    fn strip_ansi(s: &str) -> String {
        let mut out = String::new();
        let mut chars = s.chars().peekable();
        while let Some(c) = chars.next() {
            if c == '\u{1b}' {
                for next in chars.by_ref() {
                    if next.is_ascii_alphabetic() {
                        break;
                    }
                }
            } else {
                out.push(c);
            }
        }
        out
    }

    #[test]
    fn every_row_is_padded_to_pane_width() {
        let theme = Theme::default();
        let frame = Frame {
            tree: ViewNode::page(
                ViewMode::List,
                vec![
                    ViewNode::line(vec![Segment::strong("서울 Seoul")]),
                    ViewNode::line(vec![Segment::dim("hint")]),
                ],
            ),
            bindings: crate::ui::bindings::Bindings::default(),
        };

        let out = Painter::new(&theme, 6, 20).paint(&frame, &PaintContext::default());
        let plain = strip_ansi(&out);

        assert_eq!(display_width(&plain), 6 * 20);
        assert!(plain.contains("서울 Seoul"));
        assert!(plain.contains("hint"));
    }

    #[test]
    fn notice_takes_the_status_row() {
        let theme = Theme::default();
        let ctx = PaintContext {
            notice: Some("copied"),
            status: Some("ko"),
            ..PaintContext::default()
        };
        let out = strip_ansi(&Painter::new(&theme, 4, 12).paint(&Frame::default(), &ctx));
        assert!(out.ends_with(" copied     "));
    }

    #[test]
    fn scrolling_keeps_focus_visible() {
        let mut rows = vec![Row::blank(); 10];
        rows[8].focused = true;
        assert_eq!(Painter::scroll_offset(&rows, 4, 0), 5);
        assert_eq!(Painter::scroll_offset(&rows, 4, 100), 6);
    }
}
