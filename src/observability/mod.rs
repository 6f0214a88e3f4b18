//! Tracing pipeline with file-based OTLP export.
//!
//! ```text
//! tracing spans → tracing-opentelemetry → OpenTelemetry SDK → FileExporter → musicianhub-otlp.json
//! ```
//!
//! Traces land in `~/.local/share/zellij/musicianhub/musicianhub-otlp.json`
//! (the sandbox sees it under `/host`). The file rolls over at 10 MB and three
//! rolled files are kept.
//!
//! The level comes from the `trace_level` plugin option and defaults to
//! `"info"`. Store updates and projections emit `debug` spans, so set
//! `trace_level "debug"` to see every state change.
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`exporter`]: OTLP/JSON span exporter and tracer provider
//! - [`rotating_file`]: Size-limited trace file

pub mod exporter;
mod init;
pub mod rotating_file;

pub use init::init_tracing;
