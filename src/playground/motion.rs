//! Motion surface: duration, easing and animation radios over an animated
//! card that can be replayed.

use crate::dom::{Dom, Element, NodeId};
use crate::style::{Declarations, Property};
use crate::tokens::{Animation, Duration, Easing};

use super::options::{pick, OptionGroup};
use super::{unknown_group, Playground, PlaygroundError, Surface};

const GROUPS: usize = 3;

const DURATIONS: &[Duration] = &[Duration::Fast, Duration::Normal, Duration::Slow];

/// An animation choice, including no animation at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationChoice(pub Option<Animation>);

impl std::fmt::Display for AnimationChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(animation) => f.write_str(animation.key()),
            None => f.write_str("none"),
        }
    }
}

const ANIMATIONS: &[AnimationChoice] = &[
    AnimationChoice(None),
    AnimationChoice(Some(Animation::FadeIn)),
    AnimationChoice(Some(Animation::ScaleIn)),
    AnimationChoice(Some(Animation::SlideUp)),
    AnimationChoice(Some(Animation::SlideDown)),
];

/// Controller state for the motion surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotionPlayground {
    pub duration: Duration,
    pub easing: Easing,
    pub animation: Option<Animation>,
    replays: u32,
}

impl MotionPlayground {
    pub fn new() -> Self {
        Self {
            duration: Duration::Normal,
            easing: Easing::EaseOut,
            animation: Some(Animation::FadeIn),
            replays: 0,
        }
    }

    /// Times the animation has been replayed.
    pub fn replays(&self) -> u32 {
        self.replays
    }

    /// The `animation` declaration value, or `none`.
    pub fn animation_value(&self) -> String {
        match self.animation {
            Some(animation) => animation.shorthand_with(self.duration, self.easing),
            None => "none".into(),
        }
    }
}

impl Default for MotionPlayground {
    fn default() -> Self {
        Self::new()
    }
}

impl Playground for MotionPlayground {
    fn surface(&self) -> Surface {
        Surface::Motion
    }

    fn groups(&self) -> Vec<OptionGroup> {
        vec![
            OptionGroup::radio("Duration", DURATIONS, self.duration, |d| {
                format!("{d} ({})", d.value())
            }),
            OptionGroup::radio("Easing", Easing::ALL, self.easing, |e| e.to_string()),
            OptionGroup::radio("Animation", ANIMATIONS, AnimationChoice(self.animation), |a| {
                a.to_string()
            }),
        ]
    }

    fn select(&mut self, group: usize, option: usize) -> Result<(), PlaygroundError> {
        match group {
            0 => self.duration = pick(DURATIONS, group, option)?,
            1 => self.easing = pick(Easing::ALL, group, option)?,
            2 => self.animation = pick(ANIMATIONS, group, option)?.0,
            _ => return Err(unknown_group(group, GROUPS)),
        }
        tracing::debug!(group, option, animation = %self.animation_value(), "motion playground updated");
        Ok(())
    }

    fn code(&self) -> String {
        format!("animation: {};", self.animation_value())
    }

    fn render_preview(&self, dom: &mut Dom) -> NodeId {
        let root = dom.insert(Element::new("div").with_class("tk-preview"));
        dom.insert_child(
            root,
            Element::new("div")
                .with_class("tk-animated-card")
                .with_attr("data-replay", self.replays.to_string())
                .with_text("Animated Card")
                .with_declarations(
                    Declarations::new().with(Property::Animation, self.animation_value()),
                ),
        );
        root
    }

    fn info(&self) -> Vec<(String, String)> {
        let mut rows = vec![
            ("Duration".into(), self.duration.value().into()),
            ("Easing".into(), self.easing.value().into()),
        ];
        if let Some(animation) = self.animation {
            rows.push(("Keyframes".into(), animation.keyframes().into()));
        }
        rows
    }

    /// Replay the animation.
    fn activate(&mut self) -> bool {
        self.replays += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_animation() {
        let pg = MotionPlayground::new();
        assert_eq!(pg.animation_value(), "fadeIn 200ms cubic-bezier(0, 0, 0.2, 1)");
        assert_eq!(pg.code(), "animation: fadeIn 200ms cubic-bezier(0, 0, 0.2, 1);");
    }

    #[test]
    fn selections_change_declaration() {
        let mut pg = MotionPlayground::new();
        pg.select(0, 2).unwrap();
        pg.select(1, 0).unwrap();
        pg.select(2, 3).unwrap();
        assert_eq!(pg.animation_value(), "slideUp 320ms linear");
    }

    #[test]
    fn no_animation() {
        let mut pg = MotionPlayground::new();
        pg.select(2, 0).unwrap();
        assert_eq!(pg.code(), "animation: none;");
        assert_eq!(pg.info().len(), 2);
    }

    #[test]
    fn replay_restarts_card() {
        let mut pg = MotionPlayground::new();
        assert!(pg.activate());
        let mut dom = Dom::new();
        pg.render_preview(&mut dom);
        let card = dom.get(dom.query_by_class("tk-animated-card")[0]).unwrap();
        assert_eq!(card.attr("data-replay"), Some("1"));
        assert_eq!(
            card.style.base.get(Property::Animation),
            Some(pg.animation_value().as_str())
        );
    }
}
