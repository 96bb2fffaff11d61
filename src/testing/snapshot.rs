//! Snapshot rendering helpers.
//!
//! Plain-text renderings of components, playground previews and whole frames
//! for snapshot assertions.

use crate::app::{App, AppConfig};
use crate::components::{render_standalone, Component};
use crate::dom::Dom;
use crate::playground::{Playground, Surface};
use crate::render::strip::Strip;

/// Markup of a standalone-rendered component.
///
/// ```
/// use tokenkit::components::Button;
/// use tokenkit::testing::component_markup;
///
/// let markup = component_markup(&Button::new("Go").disabled(true));
/// assert!(markup.starts_with(r#"<button class="tk-button tk-button--primary" type="button" disabled>"#));
/// ```
pub fn component_markup(component: &dyn Component) -> String {
    let (dom, root) = render_standalone(component);
    dom.to_markup(root)
}

/// Markup of a controller's live preview.
pub fn preview_markup(playground: &dyn Playground) -> String {
    let mut dom = Dom::new();
    let root = playground.render_preview(&mut dom);
    dom.to_markup(root)
}

/// One full headless frame of `surface` in its default state.
pub fn frame_to_string(surface: Surface, width: u16, height: u16) -> String {
    let mut app = App::headless(AppConfig::new().with_surface(surface), width, height);
    match app.render_text() {
        Ok(text) => text,
        Err(err) => panic!("frame failed to draw: {err}"),
    }
}

/// Convert strips to text on a `width` x `height` grid, trimming trailing
/// spaces per row.
pub fn strips_to_string(strips: &[Strip], width: i32, height: i32) -> String {
    if width <= 0 || height <= 0 {
        return String::new();
    }
    let mut grid = vec![vec![' '; width as usize]; height as usize];
    for strip in strips {
        if strip.y < 0 || strip.y >= height {
            continue;
        }
        for (i, cell) in strip.cells.iter().enumerate() {
            let x = strip.x_offset + i as i32;
            if (0..width).contains(&x) {
                grid[strip.y as usize][x as usize] = cell.ch;
            }
        }
    }
    grid.into_iter()
        .map(|row| row.into_iter().collect::<String>().trim_end().to_owned())
        .collect::<Vec<_>>()
        .join("\n")
}
