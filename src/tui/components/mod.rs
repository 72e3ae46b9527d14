//! UI components for the composer TUI.
//!
//! This module provides reusable UI components following the bubbletea-rs
//! Model-View pattern. Each component manages its own state and rendering.

mod picker;
mod review_panel;
mod segment_list;

pub use picker::{PickerComponent, PickerViewContext};
pub use review_panel::{ReviewPanelComponent, ReviewPanelViewContext};
pub use segment_list::{SegmentListComponent, SegmentListViewContext};
