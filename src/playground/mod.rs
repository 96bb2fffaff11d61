//! Playground controllers: per-surface controlled state, a live preview and
//! generated prop code.
//!
//! Every controller implements [`Playground`], which exposes its controls as
//! indexed [`OptionGroup`]s so a host can drive any surface the same way.

pub mod button;
pub mod clipboard;
pub mod code;
pub mod color;
pub mod input;
pub mod motion;
pub mod options;
pub mod typography;

pub use button::ButtonPlayground;
pub use clipboard::{Clipboard, ClipboardError, MemoryClipboard, Osc52Clipboard};
pub use code::{CodePreview, PropList, COPIED_INDICATOR};
pub use color::ColorPlayground;
pub use input::InputPlayground;
pub use motion::MotionPlayground;
pub use options::{Choice, OptionGroup, OptionKind};
pub use typography::TypographyPlayground;

use crate::dom::{Dom, NodeId};
use crate::event::input::KeyEvent;
use crate::tokens::token_enum;

token_enum! {
    /// A playground surface.
    #[derive(Default)]
    pub enum Surface in "surface" {
        #[default]
        Button => "button",
        Input => "input",
        Typography => "typography",
        Color => "color",
        Motion => "motion",
    }
}

impl Surface {
    pub const fn title(self) -> &'static str {
        match self {
            Surface::Button => "Button",
            Surface::Input => "Input",
            Surface::Typography => "Typography",
            Surface::Color => "Color",
            Surface::Motion => "Motion",
        }
    }

    /// The surface after this one, wrapping around.
    pub fn next(self) -> Surface {
        let i = self as usize;
        Surface::ALL[(i + 1) % Surface::ALL.len()]
    }

    /// The surface before this one, wrapping around.
    pub fn prev(self) -> Surface {
        let i = self as usize;
        Surface::ALL[(i + Surface::ALL.len() - 1) % Surface::ALL.len()]
    }

    /// A controller in its default state.
    pub fn controller(self) -> Box<dyn Playground> {
        match self {
            Surface::Button => Box::new(ButtonPlayground::new()),
            Surface::Input => Box::new(InputPlayground::new()),
            Surface::Typography => Box::new(TypographyPlayground::new()),
            Surface::Color => Box::new(ColorPlayground::new()),
            Surface::Motion => Box::new(MotionPlayground::new()),
        }
    }
}

// ---------------------------------------------------------------------------
// PlaygroundError
// ---------------------------------------------------------------------------

/// Errors from driving a controller by index.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlaygroundError {
    #[error("no option group {group} (surface has {count})")]
    UnknownGroup { group: usize, count: usize },
    #[error("option {option} out of range for group {group} ({count} options)")]
    OptionOutOfRange {
        group: usize,
        option: usize,
        count: usize,
    },
}

// ---------------------------------------------------------------------------
// Playground trait
// ---------------------------------------------------------------------------

/// A playground surface controller.
pub trait Playground {
    fn surface(&self) -> Surface;

    /// The controls, rebuilt from current state.
    fn groups(&self) -> Vec<OptionGroup>;

    /// Apply option `option` of group `group`. Toggles take `0` (off) or
    /// `1` (on).
    fn select(&mut self, group: usize, option: usize) -> Result<(), PlaygroundError>;

    /// The generated code for the current state.
    fn code(&self) -> String;

    /// Render the live preview into `dom` and return its root.
    fn render_preview(&self, dom: &mut Dom) -> NodeId;

    /// Extra `(label, value)` rows shown under the preview.
    fn info(&self) -> Vec<(String, String)> {
        Vec::new()
    }

    /// Trigger the preview's action (click, replay, focus). Returns whether
    /// anything happened.
    fn activate(&mut self) -> bool {
        false
    }

    /// Whether the preview holds keyboard focus.
    fn is_editing(&self) -> bool {
        false
    }

    /// Route a key to the focused preview. Returns whether it was consumed.
    fn edit(&mut self, _key: &KeyEvent) -> bool {
        false
    }

    /// Flip a toggle group.
    fn toggle(&mut self, group: usize) -> Result<(), PlaygroundError> {
        let groups = self.groups();
        let count = groups.len();
        let current = groups
            .get(group)
            .ok_or(PlaygroundError::UnknownGroup { group, count })?;
        match current.kind {
            OptionKind::Toggle { checked } => self.select(group, usize::from(!checked)),
            OptionKind::Radio { .. } => Ok(()),
        }
    }
}

/// The `UnknownGroup` error for a surface with `count` groups.
pub(crate) fn unknown_group(group: usize, count: usize) -> PlaygroundError {
    PlaygroundError::UnknownGroup { group, count }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surface_cycle() {
        assert_eq!(Surface::Button.next(), Surface::Input);
        assert_eq!(Surface::Motion.next(), Surface::Button);
        assert_eq!(Surface::Button.prev(), Surface::Motion);
        assert_eq!("typography".parse::<Surface>(), Ok(Surface::Typography));
    }

    #[test]
    fn every_controller_matches_its_surface() {
        for &surface in Surface::ALL {
            let controller = surface.controller();
            assert_eq!(controller.surface(), surface);
            assert!(!controller.groups().is_empty());
        }
    }

    #[test]
    fn unknown_group_is_an_error() {
        for &surface in Surface::ALL {
            let mut controller = surface.controller();
            let count = controller.groups().len();
            assert_eq!(
                controller.select(count, 0),
                Err(PlaygroundError::UnknownGroup { group: count, count })
            );
        }
    }

    #[test]
    fn every_option_of_every_group_applies() {
        for &surface in Surface::ALL {
            let mut controller = surface.controller();
            for (g, group) in controller.groups().into_iter().enumerate() {
                for option in 0..group.len() {
                    controller.select(g, option).unwrap();
                    assert_eq!(controller.groups()[g].selected(), option, "{surface} group {g}");
                }
                assert!(controller.select(g, group.len()).is_err());
            }
        }
    }
}
