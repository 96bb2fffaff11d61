//! Input style resolution.
//!
//! An input is several styled parts (container, label, field wrapper, the
//! field itself, affixes, helper and error lines), so resolution yields an
//! [`InputStyles`] rather than a single bundle. Only the wrapper carries
//! interaction layers.

use crate::tokens::colors::{self, semantic, Hue, Scale};
use crate::tokens::interaction::Transition;
use crate::tokens::radii::Radius;
use crate::tokens::shadows::Shadow;
use crate::tokens::spacing::{control, Spacing};
use crate::tokens::typography::{FontFamily, FontSize, FontWeight, TypographyPreset};

use super::bundle::StyleBundle;
use super::declaration::{Declarations, Property};
use super::text;
use super::{ControlSize, Resolve};

/// The style-relevant props of an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputProps {
    pub size: ControlSize,
    pub error: bool,
    pub disabled: bool,
    pub read_only: bool,
    pub full_width: bool,
}

impl InputProps {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the control size (builder).
    pub fn size(mut self, size: ControlSize) -> Self {
        self.size = size;
        self
    }

    /// Set the error state (builder).
    pub fn error(mut self, error: bool) -> Self {
        self.error = error;
        self
    }

    /// Set the disabled state (builder).
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the read-only state (builder).
    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    /// Stretch to the container width (builder).
    pub fn full_width(mut self, full_width: bool) -> Self {
        self.full_width = full_width;
        self
    }

    /// Resolve every part of the input.
    pub fn resolve(&self) -> InputStyles {
        let styles = InputStyles {
            container: container(self.full_width),
            label: text::preset(TypographyPreset::BodySmall)
                .with(Property::FontWeight, FontWeight::Medium.value().to_string())
                .with(Property::Color, semantic::text::PRIMARY),
            wrapper: wrapper(self),
            field: field(self),
            affix: Declarations::new()
                .with(Property::Display, "flex")
                .with(Property::AlignItems, "center")
                .with(Property::Color, semantic::text::SECONDARY)
                .with(Property::FlexShrink, "0"),
            helper: text::preset(TypographyPreset::Caption)
                .with(Property::Color, semantic::text::SECONDARY),
            error: text::preset(TypographyPreset::Caption)
                .with(Property::Color, colors::color(Hue::Danger, Scale::S500))
                .with(Property::FontWeight, FontWeight::Medium.value().to_string()),
            placeholder: Declarations::new().with(Property::Color, semantic::text::TERTIARY),
        };
        tracing::debug!(
            size = %self.size,
            error = self.error,
            disabled = self.disabled,
            read_only = self.read_only,
            "resolved input style"
        );
        styles
    }
}

impl Resolve for InputProps {
    type Output = InputStyles;

    fn resolve(&self) -> InputStyles {
        InputProps::resolve(self)
    }
}

/// Resolved styles for each part of an input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputStyles {
    pub container: Declarations,
    pub label: Declarations,
    pub wrapper: StyleBundle,
    pub field: Declarations,
    pub affix: Declarations,
    pub helper: Declarations,
    pub error: Declarations,
    pub placeholder: Declarations,
}

fn container(full_width: bool) -> Declarations {
    Declarations::new()
        .with(Property::Display, "inline-flex")
        .with(Property::FlexDirection, "column")
        .with(Property::Gap, Spacing::Xs.value())
        .with(Property::Width, if full_width { "100%" } else { "auto" })
}

fn horizontal_padding(size: ControlSize) -> Spacing {
    match size {
        ControlSize::Sm => control::SM.horizontal,
        ControlSize::Md => control::MD.horizontal,
        ControlSize::Lg => control::LG.horizontal,
    }
}

fn font_size(size: ControlSize) -> FontSize {
    match size {
        ControlSize::Sm => FontSize::Sm,
        ControlSize::Md => FontSize::Md,
        ControlSize::Lg => FontSize::Lg,
    }
}

fn wrapper(props: &InputProps) -> StyleBundle {
    let (border, hover_border, focus_border, focus_shadow) = if props.error {
        (
            colors::color(Hue::Danger, Scale::S500),
            colors::color(Hue::Danger, Scale::S600),
            colors::color(Hue::Danger, Scale::S500),
            Shadow::FocusDanger,
        )
    } else {
        (
            semantic::border::DEFAULT,
            semantic::border::STRONG,
            colors::color(Hue::Primary, Scale::S500),
            Shadow::Focus,
        )
    };

    let mut bundle = StyleBundle::base(
        Declarations::new()
            .with(Property::Display, "flex")
            .with(Property::AlignItems, "center")
            .with(Property::Gap, Spacing::Xs.value())
            .with(Property::Background, colors::WHITE)
            .with(Property::Border, format!("1px solid {border}"))
            .with(Property::BorderRadius, Radius::Md.value())
            .with(Property::Height, props.size.height())
            .with(
                Property::Padding,
                format!("0 {}", horizontal_padding(props.size).value()),
            )
            .with(Property::Transition, Transition::Fast.value()),
    )
    .on_hover(Declarations::new().with(Property::BorderColor, hover_border))
    .on_focus(
        Declarations::new()
            .with(Property::BorderColor, focus_border)
            .with(Property::BoxShadow, focus_shadow.value()),
    )
    .focus_within();

    if props.disabled {
        bundle = bundle
            .merge(&StyleBundle::base(
                Declarations::new()
                    .with(Property::Background, semantic::bg::SECONDARY)
                    .with(Property::Cursor, "not-allowed")
                    .with(Property::Opacity, "0.6"),
            ))
            .without_pointer_states()
            .without_focus();
    }
    bundle
}

fn field(props: &InputProps) -> Declarations {
    let mut d = Declarations::new()
        .with(Property::Flex, "1")
        .with(Property::Border, "none")
        .with(Property::Outline, "none")
        .with(Property::Background, colors::TRANSPARENT)
        .with(Property::FontFamily, FontFamily::Sans.value())
        .with(Property::FontSize, font_size(props.size).value())
        .with(Property::Color, semantic::text::PRIMARY);
    if props.disabled {
        d.set(Property::Cursor, "not-allowed");
    } else if props.read_only {
        d.set(Property::Cursor, "default");
    }
    d
}
