//! Headless testing: the [`Pilot`] drives an [`App`](crate::app::App) without
//! a terminal; snapshot helpers render components, previews and frames to
//! text.

pub mod pilot;
pub mod snapshot;

pub use pilot::Pilot;
pub use snapshot::{component_markup, frame_to_string, preview_markup, strips_to_string};
