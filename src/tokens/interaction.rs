//! Motion tokens: durations, easings, transitions, keyframe animations and
//! the hover/press overlays components can opt into.

token_enum! {
    pub enum Duration in "duration" {
        Instant => "instant",
        Fast => "fast",
        Normal => "normal",
        Slow => "slow",
        Slower => "slower",
    }
}

token_enum! {
    pub enum Easing in "easing" {
        Linear => "linear",
        EaseIn => "easeIn",
        EaseOut => "easeOut",
        EaseInOut => "easeInOut",
        Bounce => "bounce",
    }
}

token_enum! {
    pub enum Transition in "transition" {
        Fast => "fast",
        Normal => "normal",
        Slow => "slow",
    }
}

token_enum! {
    /// Keyframe animation presets.
    pub enum Animation in "animation" {
        FadeIn => "fadeIn",
        FadeOut => "fadeOut",
        ScaleIn => "scaleIn",
        SlideUp => "slideUp",
        SlideDown => "slideDown",
    }
}

token_enum! {
    /// Hover/press effect a component can opt into.
    #[derive(Default)]
    pub enum Interaction in "interaction" {
        #[default]
        None => "none",
        HoverScale => "hover-scale",
        HoverGlow => "hover-glow",
        HoverLift => "hover-lift",
        ActivePress => "active-press",
    }
}

impl Duration {
    pub const fn value(self) -> &'static str {
        match self {
            Duration::Instant => "0ms",
            Duration::Fast => "120ms",
            Duration::Normal => "200ms",
            Duration::Slow => "320ms",
            Duration::Slower => "480ms",
        }
    }

    pub const fn millis(self) -> u64 {
        match self {
            Duration::Instant => 0,
            Duration::Fast => 120,
            Duration::Normal => 200,
            Duration::Slow => 320,
            Duration::Slower => 480,
        }
    }
}

impl Easing {
    pub const fn value(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseIn => "cubic-bezier(0.4, 0, 1, 1)",
            Easing::EaseOut => "cubic-bezier(0, 0, 0.2, 1)",
            Easing::EaseInOut => "cubic-bezier(0.4, 0, 0.2, 1)",
            Easing::Bounce => "cubic-bezier(0.68, -0.55, 0.265, 1.55)",
        }
    }
}

impl Transition {
    pub const fn value(self) -> &'static str {
        match self {
            Transition::Fast => "all 120ms cubic-bezier(0, 0, 0.2, 1)",
            Transition::Normal => "all 200ms cubic-bezier(0.4, 0, 0.2, 1)",
            Transition::Slow => "all 320ms cubic-bezier(0.4, 0, 0.2, 1)",
        }
    }
}

impl Animation {
    /// The `@keyframes` block for this animation.
    pub const fn keyframes(self) -> &'static str {
        match self {
            Animation::FadeIn => "@keyframes fadeIn { from { opacity: 0; } to { opacity: 1; } }",
            Animation::FadeOut => "@keyframes fadeOut { from { opacity: 1; } to { opacity: 0; } }",
            Animation::ScaleIn => {
                "@keyframes scaleIn { from { opacity: 0; transform: scale(0.9); } to { opacity: 1; transform: scale(1); } }"
            }
            Animation::SlideUp => {
                "@keyframes slideUp { from { opacity: 0; transform: translateY(10px); } to { opacity: 1; transform: translateY(0); } }"
            }
            Animation::SlideDown => {
                "@keyframes slideDown { from { opacity: 0; transform: translateY(-10px); } to { opacity: 1; transform: translateY(0); } }"
            }
        }
    }

    /// The preset's own timing: fade-out eases in, everything else eases out.
    pub const fn default_timing(self) -> (Duration, Easing) {
        match self {
            Animation::FadeOut => (Duration::Normal, Easing::EaseIn),
            Animation::FadeIn | Animation::ScaleIn | Animation::SlideUp | Animation::SlideDown => {
                (Duration::Normal, Easing::EaseOut)
            }
        }
    }

    /// `animation` shorthand with the preset's own timing.
    pub const fn shorthand(self) -> &'static str {
        match self {
            Animation::FadeIn => "fadeIn 200ms cubic-bezier(0, 0, 0.2, 1)",
            Animation::FadeOut => "fadeOut 200ms cubic-bezier(0.4, 0, 1, 1)",
            Animation::ScaleIn => "scaleIn 200ms cubic-bezier(0, 0, 0.2, 1)",
            Animation::SlideUp => "slideUp 200ms cubic-bezier(0, 0, 0.2, 1)",
            Animation::SlideDown => "slideDown 200ms cubic-bezier(0, 0, 0.2, 1)",
        }
    }

    /// `animation` shorthand with an explicit timing.
    pub fn shorthand_with(self, duration: Duration, easing: Easing) -> String {
        format!("{} {} {}", self.key(), duration.value(), easing.value())
    }
}

/// The declarations an [`Interaction`] contributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InteractionOverlay {
    pub transition: Option<Transition>,
    pub hover_transform: Option<&'static str>,
    pub hover_shadow: Option<&'static str>,
    pub active_transform: Option<&'static str>,
}

impl Interaction {
    pub const fn overlay(self) -> InteractionOverlay {
        let none = InteractionOverlay {
            transition: None,
            hover_transform: None,
            hover_shadow: None,
            active_transform: None,
        };
        match self {
            Interaction::None => none,
            Interaction::HoverScale => InteractionOverlay {
                transition: Some(Transition::Fast),
                hover_transform: Some("scale(1.05)"),
                ..none
            },
            Interaction::HoverGlow => InteractionOverlay {
                transition: Some(Transition::Fast),
                hover_shadow: Some("0 0 0 4px rgba(59, 130, 246, 0.2)"),
                ..none
            },
            Interaction::HoverLift => InteractionOverlay {
                transition: Some(Transition::Fast),
                hover_transform: Some("translateY(-2px)"),
                hover_shadow: Some("0 4px 12px rgba(0, 0, 0, 0.15)"),
                ..none
            },
            Interaction::ActivePress => InteractionOverlay {
                transition: Some(Transition::Fast),
                active_transform: Some("scale(0.98)"),
                ..none
            },
        }
    }
}
