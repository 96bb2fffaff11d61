//! # tokenkit
//!
//! A design-token driven component kit. Every visual value (color, spacing,
//! radius, shadow, typography, motion) lives in typed token tables; component
//! props resolve to layered style declarations built only from those tokens.
//!
//! ## Core Systems
//!
//! - **[`tokens`]**: token tables, closed enums and path lookup (`colors.primary.500`)
//! - **[`style`]**: prop-to-declaration resolution with hover/active/focus layers
//! - **[`dom`]**: slotmap element tree that components render into, with markup output
//! - **[`components`]**: Button, Input and Text
//! - **[`playground`]**: per-surface controllers, generated code, clipboard
//! - **[`app`]**, **[`screen`]**, **[`layout`]**, **[`render`]**, **[`event`]**:
//!   the terminal playground built on taffy and crossterm
//! - **[`testing`]**: headless [`Pilot`](testing::Pilot) and snapshot helpers

// Foundation
pub mod geometry;
pub mod tokens;

// Styling and components
pub mod components;
pub mod dom;
pub mod style;

// Playground
pub mod playground;

// Terminal host
pub mod app;
pub mod event;
pub mod layout;
pub mod render;
pub mod screen;

// Testing utilities
pub mod testing;
