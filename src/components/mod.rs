//! Presentational components: Button, Input, Text.

pub mod button;
pub mod input;
pub mod text;
pub mod traits;

pub use button::{Button, ClickHandler};
pub use input::{Input, InputMessage};
pub use text::Text;
pub use traits::{render_standalone, Component};
