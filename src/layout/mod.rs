//! Screen layout: taffy-computed panel regions.

pub mod panels;

pub use panels::{LayoutError, PanelLayout};
