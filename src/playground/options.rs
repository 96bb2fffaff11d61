//! Option groups: the radio and toggle controls a playground exposes.
//!
//! Groups are rebuilt from controller state on demand, so a host can drive
//! any surface generically by (group, option) index.

use std::fmt;

use super::PlaygroundError;

/// One radio choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    /// The prop value the choice stands for (e.g. `lg`).
    pub value: String,
    /// Human-readable label (e.g. `Large (48px)`).
    pub label: String,
}

impl Choice {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// What kind of control a group is, with its current state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionKind {
    Radio { choices: Vec<Choice>, selected: usize },
    Toggle { checked: bool },
}

/// A labelled control in the options panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionGroup {
    pub label: &'static str,
    pub kind: OptionKind,
}

impl OptionGroup {
    /// A radio group over a closed token enumeration.
    pub fn radio<T>(label: &'static str, all: &[T], current: T, describe: impl Fn(T) -> String) -> Self
    where
        T: Copy + PartialEq + fmt::Display,
    {
        let choices = all
            .iter()
            .map(|&item| Choice::new(item.to_string(), describe(item)))
            .collect();
        let selected = all.iter().position(|&item| item == current).unwrap_or(0);
        Self {
            label,
            kind: OptionKind::Radio { choices, selected },
        }
    }

    pub fn toggle(label: &'static str, checked: bool) -> Self {
        Self {
            label,
            kind: OptionKind::Toggle { checked },
        }
    }

    /// Number of selectable options: the choices of a radio, two for a toggle.
    pub fn len(&self) -> usize {
        match &self.kind {
            OptionKind::Radio { choices, .. } => choices.len(),
            OptionKind::Toggle { .. } => 2,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Index of the current option. Toggles are `0` (off) or `1` (on).
    pub fn selected(&self) -> usize {
        match &self.kind {
            OptionKind::Radio { selected, .. } => *selected,
            OptionKind::Toggle { checked } => usize::from(*checked),
        }
    }

    pub fn is_toggle(&self) -> bool {
        matches!(self.kind, OptionKind::Toggle { .. })
    }
}

/// Pick the `option`-th member of a closed enumeration.
pub fn pick<T: Copy>(all: &[T], group: usize, option: usize) -> Result<T, PlaygroundError> {
    all.get(option)
        .copied()
        .ok_or(PlaygroundError::OptionOutOfRange {
            group,
            option,
            count: all.len(),
        })
}

/// Interpret `option` as a toggle state: `0` is off, `1` is on.
pub fn pick_bool(group: usize, option: usize) -> Result<bool, PlaygroundError> {
    match option {
        0 => Ok(false),
        1 => Ok(true),
        _ => Err(PlaygroundError::OptionOutOfRange {
            group,
            option,
            count: 2,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::ControlSize;

    #[test]
    fn radio_from_enum() {
        let g = OptionGroup::radio("Size", ControlSize::ALL, ControlSize::Lg, |s| {
            format!("{s} ({})", s.height())
        });
        assert_eq!(g.len(), 3);
        assert_eq!(g.selected(), 2);
        let OptionKind::Radio { choices, .. } = &g.kind else {
            panic!("expected radio");
        };
        assert_eq!(choices[0], Choice::new("sm", "sm (32px)"));
    }

    #[test]
    fn toggle_selected_index() {
        assert_eq!(OptionGroup::toggle("Disabled", false).selected(), 0);
        assert_eq!(OptionGroup::toggle("Disabled", true).selected(), 1);
        assert!(OptionGroup::toggle("Disabled", true).is_toggle());
    }

    #[test]
    fn pick_bounds() {
        assert_eq!(pick(ControlSize::ALL, 0, 1), Ok(ControlSize::Md));
        assert_eq!(
            pick(ControlSize::ALL, 4, 3),
            Err(PlaygroundError::OptionOutOfRange {
                group: 4,
                option: 3,
                count: 3
            })
        );
        assert_eq!(pick_bool(0, 1), Ok(true));
        assert!(pick_bool(0, 2).is_err());
    }
}
