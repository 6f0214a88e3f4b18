//! View layer: full-redraw projection of state into a presentation tree,
//! interaction bindings, and the ANSI painter for the terminal pane.
//!
//! # Architecture
//!
//! The view layer follows a declarative rendering model:
//!
//! ```text
//! AppState → render_frame → Frame { ViewNode tree, Bindings } → Painter → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: Presentation tree types and element identities
//! - [`bindings`]: Interaction bindings rebuilt with every frame
//! - [`renderer`]: Projection coordinator that owns the latest frame
//! - [`components`]: Composable builders for each part of the page
//! - [`paint`]: Frame to ANSI text for a pane size
//! - [`terminal`]: Keyboard interaction and host effects for one pane
//! - [`helpers`]: Shared text utilities (highlighting, display width, numbers)
//! - [`theme`]: Color scheme definitions and ANSI escape sequence generation

pub mod bindings;
pub mod components;
pub mod helpers;
pub mod paint;
pub mod renderer;
pub mod terminal;
pub mod theme;
pub mod viewmodel;

pub use bindings::{Binding, Bindings, Intent, Payload, Trigger};
pub use paint::{PaintContext, Painter};
pub use renderer::{render_frame, ViewRenderer};
pub use terminal::{Key, Outcome, TerminalSession};
pub use theme::Theme;
pub use viewmodel::{ElementId, Frame, NodeKind, Segment, SegmentStyle, ViewNode};
