//! Morsel library crate for composing restaurant reviews.
//!
//! The library owns the review domain: the static category and
//! characteristic catalogs, the mutable segment session, the
//! deterministic review generator, and the clipboard gateway used to
//! export a generated review. The companion binary drives it from a
//! terminal user interface.

pub mod catalog;
pub mod clipboard;
pub mod config;
pub mod review;
pub mod telemetry;
pub mod tui;

pub use clipboard::{ClipboardError, ClipboardGateway, DisabledClipboard, Osc52Clipboard};
pub use config::{MorselConfig, OperationMode};
pub use review::{GeneratedReview, Rating, ReviewError, ReviewSession, Segment, Sentiment, generate};
