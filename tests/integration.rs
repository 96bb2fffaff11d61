//! Integration tests for tokenkit.
//!
//! These exercise the public API from outside the crate: token tables,
//! style resolution through components, playground code generation and the
//! headless app driven by a `Pilot`.

use std::cell::Cell;
use std::rc::Rc;

use pretty_assertions::assert_eq;

use tokenkit::components::{render_standalone, Button, Component, Input, InputMessage, Text};
use tokenkit::event::input::{Key, Modifiers};
use tokenkit::playground::{ButtonPlayground, MemoryClipboard, Playground, Surface};
use tokenkit::style::{ButtonVariant, ControlSize, InteractionState, Property};
use tokenkit::testing::Pilot;
use tokenkit::tokens::colors::{self, Hue, Scale};
use tokenkit::tokens::{lookup, FontSize, Shape, TypographyPreset};

// ---------------------------------------------------------------------------
// Tokens
// ---------------------------------------------------------------------------

#[test]
fn primary_500_by_constant_and_by_path() {
    assert_eq!(colors::color(Hue::Primary, Scale::S500), "#3B82F6");
    assert_eq!(lookup("colors.primary[500]").unwrap().as_str(), Some("#3B82F6"));
    assert_eq!(lookup("colors.primary.500").unwrap().as_str(), Some("#3B82F6"));
}

#[test]
fn unknown_token_path_fails_fast() {
    assert!(lookup("colors.mauve[500]").is_err());
    assert!("xl".parse::<ControlSize>().is_err());
}

// ---------------------------------------------------------------------------
// Button
// ---------------------------------------------------------------------------

#[test]
fn danger_large_pill_loading_scenario() {
    let button = Button::new("Delete")
        .variant(ButtonVariant::Danger)
        .size(ControlSize::Lg)
        .shape(Shape::Pill)
        .loading(true);
    let style = button.style();
    assert_eq!(style.base.get(Property::Background), Some("#EF4444"));
    assert_eq!(style.base.get(Property::MinHeight), Some("48px"));
    assert_eq!(style.base.get(Property::BorderRadius), Some("9999px"));

    let (dom, root) = render_standalone(&button);
    assert_eq!(dom.query_by_class("tk-spinner").len(), 1);
    assert_eq!(dom.text_content(root), "Delete");
}

#[test]
fn every_axis_combination_has_one_background_color_border() {
    for &variant in ButtonVariant::ALL {
        for &size in ControlSize::ALL {
            for &shape in Shape::ALL {
                let style = Button::new("x").variant(variant).size(size).shape(shape).style();
                let base = &style.base;
                for property in [Property::Background, Property::Color, Property::Border] {
                    let count = base.iter().filter(|(p, _)| *p == property).count();
                    assert_eq!(count, 1, "{variant}/{size}/{shape} {property}");
                }
                let background = base.get(Property::Background).unwrap();
                assert!(
                    Hue::ALL
                        .iter()
                        .any(|&h| Scale::ALL.iter().any(|&s| colors::color(h, s) == background)),
                    "{background} is not a palette token"
                );
            }
        }
    }
}

#[test]
fn resolution_is_idempotent() {
    let button = Button::new("Save").variant(ButtonVariant::Secondary).disabled(true);
    assert_eq!(button.style(), button.style());
    assert_eq!(button.style().to_css(".b"), button.style().to_css(".b"));

    let input = Input::new().error(true);
    assert_eq!(input.styles(), input.styles());
}

#[test]
fn disabled_button_never_fires() {
    let count = Rc::new(Cell::new(0));
    let c = Rc::clone(&count);
    let mut button = Button::new("Go").disabled(true).on_click(move || c.set(c.get() + 1));
    assert!(!button.click());
    assert_eq!(count.get(), 0);

    let style = button.style();
    assert_eq!(style.flatten(InteractionState::Hover), style.base);
}

// ---------------------------------------------------------------------------
// Input and Text
// ---------------------------------------------------------------------------

#[test]
fn input_message_rules() {
    let input = Input::new().helper_text("Help").error_message("Bad");
    assert_eq!(input.message(), Some(InputMessage::Helper("Help")));

    let input = input.error(true);
    assert_eq!(input.message(), Some(InputMessage::Error("Bad")));

    let silent = Input::new().error(true).helper_text("Help");
    assert_eq!(silent.message(), None);
}

#[test]
fn text_preset_beats_size() {
    let text = Text::new("Title").size(FontSize::Xs).preset(TypographyPreset::H1);
    let style = text.style();
    assert_eq!(style.base.get(Property::FontSize), Some("2.25rem"));
}

// ---------------------------------------------------------------------------
// Playground code
// ---------------------------------------------------------------------------

#[test]
fn only_size_changed() {
    let mut pg = ButtonPlayground::new();
    pg.select(1, 2).unwrap();
    insta::assert_snapshot!(pg.code(), @r#"<Button size="lg" />"#);
}

#[test]
fn every_changed_button_prop() {
    let mut pg = ButtonPlayground::new();
    for (group, option) in [(0, 2), (1, 0), (2, 2), (3, 3), (4, 1), (5, 1), (6, 1)] {
        pg.select(group, option).unwrap();
    }
    insta::assert_snapshot!(
        pg.code(),
        @r#"<Button variant="danger" size="sm" shape="pill" interaction="hover-lift" disabled loading fullWidth />"#
    );
}

// ---------------------------------------------------------------------------
// Pilot-driven app
// ---------------------------------------------------------------------------

#[test]
fn pilot_flow_through_surfaces() {
    let mut pilot = Pilot::new(100, 30);
    assert_eq!(pilot.code(), "<Button />");

    // Size -> Large
    pilot.press_keys(&[Key::Tab, Key::Down, Key::Enter]);
    assert_eq!(pilot.code(), r#"<Button size="lg" />"#);

    // Copy
    pilot.press_key(Key::Char('c'));
    assert_eq!(pilot.clipboard_contents(), Some(r#"<Button size="lg" />"#));
    assert!(pilot.frame().contains("Copied!"));

    // Color surface
    pilot.go_to(Surface::Color);
    assert_eq!(pilot.code(), "colors.primary[500]");
    let frame = pilot.frame();
    assert!(frame.contains("#3B82F6"));

    pilot.press_key_with(Key::Char('c'), Modifiers::CTRL);
    assert!(!pilot.is_running());
}

#[test]
fn disabled_preview_ignores_activate() {
    let mut pilot = Pilot::new(100, 30);
    assert!(pilot.focus_group("Disabled"));
    pilot.press_key(Key::Enter);
    pilot.press_key(Key::Char('x'));
    assert_eq!(pilot.app().playground().info()[0].1, "0");
    assert!(pilot.frame().contains("Clicks: 0"));
}

#[test]
fn typography_preset_overrides_size_choice() {
    let mut pilot = Pilot::new(100, 30);
    pilot.go_to(Surface::Typography);
    assert!(pilot.focus_group("Size"));
    pilot.press_keys(&[Key::Down, Key::Down, Key::Enter]);
    assert_eq!(pilot.code(), r#"<Text size="xl" />"#);

    assert!(pilot.focus_group("Preset"));
    pilot.press_keys(&[Key::Down, Key::Enter]);
    assert_eq!(pilot.code(), r#"<Text preset="h1" />"#);
    assert!(pilot.frame().contains("Font size: 2.25rem"));
}

#[test]
fn failing_clipboard_keeps_running() {
    let mut pilot = Pilot::new(100, 30).with_clipboard(Box::new(MemoryClipboard::failing()));
    pilot.press_key(Key::Char('c'));
    assert!(pilot.is_running());
    assert!(pilot.frame().contains("[Copy]"));
}
