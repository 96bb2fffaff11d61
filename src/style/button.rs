//! Button style resolution.
//!
//! Bundles are merged in a fixed order: reset, variant, size, shape,
//! interaction overlay, full width, loading, disabled. Later steps override
//! earlier ones property by property. A button that is disabled or loading
//! loses its hover/active layers entirely.

use crate::tokens::colors::{self, Hue, Scale};
use crate::tokens::interaction::Interaction;
use crate::tokens::radii::Shape;
use crate::tokens::shadows::Shadow;
use crate::tokens::spacing::{control, Spacing};
use crate::tokens::token_enum;
use crate::tokens::typography::{FontFamily, FontSize, FontWeight};

use super::bundle::StyleBundle;
use super::declaration::{Declarations, Property};
use super::{ControlSize, Resolve};

token_enum! {
    /// The semantic role of a button.
    #[derive(Default)]
    pub enum ButtonVariant in "button variant" {
        #[default]
        Primary => "primary",
        Secondary => "secondary",
        Danger => "danger",
    }
}

// ---------------------------------------------------------------------------
// ButtonProps
// ---------------------------------------------------------------------------

/// The style-relevant props of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonProps {
    pub variant: ButtonVariant,
    pub size: ControlSize,
    pub shape: Shape,
    pub interaction: Interaction,
    pub disabled: bool,
    pub loading: bool,
    pub full_width: bool,
}

impl ButtonProps {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the color variant (builder).
    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the control size (builder).
    pub fn size(mut self, size: ControlSize) -> Self {
        self.size = size;
        self
    }

    /// Set the corner shape (builder).
    pub fn shape(mut self, shape: Shape) -> Self {
        self.shape = shape;
        self
    }

    /// Set the hover/press overlay (builder).
    pub fn interaction(mut self, interaction: Interaction) -> Self {
        self.interaction = interaction;
        self
    }

    /// Set the disabled state (builder). Wins over loading.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the loading state (builder).
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Stretch to the container width (builder).
    pub fn full_width(mut self, full_width: bool) -> Self {
        self.full_width = full_width;
        self
    }

    /// Whether the button reacts to pointer input.
    pub fn is_interactive(&self) -> bool {
        !self.disabled && !self.loading
    }

    /// Resolve the final layered style.
    pub fn resolve(&self) -> StyleBundle {
        let mut bundle = reset()
            .merge(&variant_bundle(self.variant))
            .merge(&size_bundle(self.size))
            .merge(&shape_bundle(self.shape))
            .merge(&interaction_bundle(self.interaction));

        if self.full_width {
            bundle = bundle.merge(&StyleBundle::base(
                Declarations::new().with(Property::Width, "100%"),
            ));
        }
        if self.loading {
            bundle = bundle.merge(&StyleBundle::base(
                Declarations::new()
                    .with(Property::Cursor, "wait")
                    .with(Property::Opacity, "0.7"),
            ));
        }
        if self.disabled {
            bundle = bundle.merge(&StyleBundle::base(
                Declarations::new()
                    .with(Property::Cursor, "not-allowed")
                    .with(Property::Opacity, "0.5"),
            ));
        }
        if !self.is_interactive() {
            bundle = bundle.without_pointer_states();
        }

        tracing::debug!(
            variant = %self.variant,
            size = %self.size,
            shape = %self.shape,
            interaction = %self.interaction,
            disabled = self.disabled,
            loading = self.loading,
            "resolved button style"
        );
        bundle
    }
}

impl Resolve for ButtonProps {
    type Output = StyleBundle;

    fn resolve(&self) -> StyleBundle {
        ButtonProps::resolve(self)
    }
}

// ---------------------------------------------------------------------------
// Bundles
// ---------------------------------------------------------------------------

/// Layout, typography, cursor and focus ring every button starts from.
pub fn reset() -> StyleBundle {
    StyleBundle::base(
        Declarations::new()
            .with(Property::Display, "inline-flex")
            .with(Property::AlignItems, "center")
            .with(Property::JustifyContent, "center")
            .with(Property::Gap, Spacing::Xs.value())
            .with(Property::FontFamily, FontFamily::Sans.value())
            .with(Property::FontWeight, FontWeight::Medium.value().to_string())
            .with(Property::LineHeight, "1")
            .with(Property::WhiteSpace, "nowrap")
            .with(Property::Cursor, "pointer"),
    )
    .on_focus(
        Declarations::new()
            .with(Property::Outline, "none")
            .with(Property::BoxShadow, Shadow::Focus.value()),
    )
}

/// Colors and borders for a variant, with hover and active overlays.
pub fn variant_bundle(variant: ButtonVariant) -> StyleBundle {
    match variant {
        ButtonVariant::Primary => filled(Hue::Primary),
        ButtonVariant::Danger => filled(Hue::Danger),
        ButtonVariant::Secondary => StyleBundle::base(
            Declarations::new()
                .with(Property::Background, colors::color(Hue::Secondary, Scale::S100))
                .with(Property::Color, colors::color(Hue::Secondary, Scale::S700))
                .with(
                    Property::Border,
                    format!("1px solid {}", colors::color(Hue::Secondary, Scale::S300)),
                ),
        )
        .on_hover(
            Declarations::new()
                .with(Property::Background, colors::color(Hue::Secondary, Scale::S200))
                .with(Property::BorderColor, colors::color(Hue::Secondary, Scale::S400)),
        )
        .on_active(
            Declarations::new()
                .with(Property::Background, colors::color(Hue::Secondary, Scale::S300)),
        ),
    }
}

fn filled(hue: Hue) -> StyleBundle {
    StyleBundle::base(
        Declarations::new()
            .with(Property::Background, colors::color(hue, Scale::S500))
            .with(Property::Color, colors::WHITE)
            .with(Property::Border, "none"),
    )
    .on_hover(Declarations::new().with(Property::Background, colors::color(hue, Scale::S600)))
    .on_active(Declarations::new().with(Property::Background, colors::color(hue, Scale::S700)))
}

/// Padding, font size and minimum height for a size.
pub fn size_bundle(size: ControlSize) -> StyleBundle {
    let (padding, font_size) = match size {
        ControlSize::Sm => (control::SM, FontSize::Sm),
        ControlSize::Md => (control::MD, FontSize::Md),
        ControlSize::Lg => (control::LG, FontSize::Lg),
    };
    StyleBundle::base(
        Declarations::new()
            .with(Property::Padding, padding.css())
            .with(Property::FontSize, font_size.value())
            .with(Property::MinHeight, size.height()),
    )
}

/// Corner radius for a shape.
pub fn shape_bundle(shape: Shape) -> StyleBundle {
    StyleBundle::base(Declarations::new().with(Property::BorderRadius, shape.radius().value()))
}

/// Transition plus hover/active transforms for an interaction preset.
pub fn interaction_bundle(interaction: Interaction) -> StyleBundle {
    let overlay = interaction.overlay();
    let mut bundle = StyleBundle::new();
    if let Some(transition) = overlay.transition {
        bundle.base.set(Property::Transition, transition.value());
    }
    if let Some(transform) = overlay.hover_transform {
        bundle.hover.set(Property::Transform, transform);
    }
    if let Some(shadow) = overlay.hover_shadow {
        bundle.hover.set(Property::BoxShadow, shadow);
    }
    if let Some(transform) = overlay.active_transform {
        bundle.active.set(Property::Transform, transform);
    }
    bundle
}

/// The loading spinner drawn before the button's children.
pub fn spinner() -> Declarations {
    Declarations::new()
        .with(Property::Display, "inline-block")
        .with(Property::Width, "14px")
        .with(Property::Height, "14px")
        .with(Property::Border, "2px solid currentColor")
        .with(Property::BorderColor, "currentColor transparent currentColor currentColor")
        .with(Property::BorderRadius, "50%")
        .with(Property::Animation, "spin 0.6s linear infinite")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::bundle::InteractionState;

    // ── axes ─────────────────────────────────────────────────────────

    #[test]
    fn enum_defaults() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
        assert_eq!(ControlSize::default(), ControlSize::Md);
        assert_eq!(Shape::default(), Shape::Round);
        assert_eq!(Interaction::default(), Interaction::None);
        assert_eq!(FontSize::default(), FontSize::Md);
        assert_eq!(crate::playground::Surface::default(), crate::playground::Surface::Button);
    }

    #[test]
    fn primary_is_brand_blue() {
        let style = ButtonProps::new().resolve();
        assert_eq!(style.base.get(Property::Background), Some("#3B82F6"));
        assert_eq!(style.base.get(Property::Color), Some("#FFFFFF"));
        assert_eq!(style.base.get(Property::Border), Some("none"));
        assert_eq!(style.hover.get(Property::Background), Some("#2563EB"));
        assert_eq!(style.active.get(Property::Background), Some("#1D4ED8"));
    }

    #[test]
    fn secondary_hover_changes_border_color() {
        let style = variant_bundle(ButtonVariant::Secondary);
        assert_eq!(style.base.get(Property::Border), Some("1px solid #CBD5E1"));
        assert_eq!(style.hover.get(Property::BorderColor), Some("#94A3B8"));
    }

    #[test]
    fn sizes() {
        let lg = size_bundle(ControlSize::Lg);
        assert_eq!(lg.base.get(Property::MinHeight), Some("48px"));
        assert_eq!(lg.base.get(Property::Padding), Some("1rem 1.5rem"));
        assert_eq!(lg.base.get(Property::FontSize), Some("1.125rem"));
        assert_eq!(
            size_bundle(ControlSize::Sm).base.get(Property::MinHeight),
            Some("32px")
        );
    }

    #[test]
    fn shapes() {
        assert_eq!(shape_bundle(Shape::Sharp).base.get(Property::BorderRadius), Some("0"));
        assert_eq!(shape_bundle(Shape::Pill).base.get(Property::BorderRadius), Some("9999px"));
    }

    #[test]
    fn interaction_none_adds_nothing() {
        assert!(interaction_bundle(Interaction::None).is_empty());
    }

    #[test]
    fn hover_lift_keeps_variant_hover_background() {
        let style = ButtonProps::new().interaction(Interaction::HoverLift).resolve();
        let hover = style.flatten(InteractionState::Hover);
        assert_eq!(hover.get(Property::Background), Some("#2563EB"));
        assert_eq!(hover.get(Property::Transform), Some("translateY(-2px)"));
    }

    // ── states ───────────────────────────────────────────────────────

    #[test]
    fn full_width() {
        let style = ButtonProps::new().full_width(true).resolve();
        assert_eq!(style.base.get(Property::Width), Some("100%"));
        assert_eq!(ButtonProps::new().resolve().base.get(Property::Width), None);
    }

    #[test]
    fn loading_sets_wait_cursor() {
        let style = ButtonProps::new().loading(true).resolve();
        assert_eq!(style.base.get(Property::Cursor), Some("wait"));
        assert_eq!(style.base.get(Property::Opacity), Some("0.7"));
        assert!(style.hover.is_empty());
    }

    #[test]
    fn disabled_wins_over_loading() {
        let style = ButtonProps::new().loading(true).disabled(true).resolve();
        assert_eq!(style.base.get(Property::Cursor), Some("not-allowed"));
        assert_eq!(style.base.get(Property::Opacity), Some("0.5"));
    }

    #[test]
    fn disabled_suppresses_pointer_layers() {
        let style = ButtonProps::new()
            .disabled(true)
            .interaction(Interaction::HoverScale)
            .resolve();
        assert!(style.hover.is_empty());
        assert!(style.active.is_empty());
        assert_eq!(
            style.flatten(InteractionState::Hover).get(Property::Background),
            Some("#3B82F6")
        );
    }

    #[test]
    fn focus_ring_from_reset() {
        let style = ButtonProps::new().resolve();
        assert_eq!(style.focus.get(Property::BoxShadow), Some(Shadow::Focus.value()));
        assert_eq!(style.focus.get(Property::Outline), Some("none"));
    }

    #[test]
    fn resolve_is_idempotent() {
        let props = ButtonProps::new()
            .variant(ButtonVariant::Secondary)
            .size(ControlSize::Sm)
            .interaction(Interaction::ActivePress);
        assert_eq!(props.resolve(), props.resolve());
        assert_eq!(props.resolve().to_css("&"), props.resolve().to_css("&"));
    }
}
