//! Frame buffer and frame-to-frame diffing.
//!
//! The `Compositor` holds a full-screen grid of `StyledCell`s. Each frame the
//! screen places strips into it; `diff` against the previous frame yields the
//! `CellUpdate`s the driver needs to write.

use crate::geometry::Region;

use super::strip::{Strip, StyledCell};

/// A single cell that changed between frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellUpdate {
    pub x: u16,
    pub y: u16,
    pub cell: StyledCell,
}

/// A terminal-sized cell buffer.
#[derive(Debug, Clone)]
pub struct Compositor {
    /// `screen[y][x]` is the cell at column x, row y.
    screen: Vec<Vec<StyledCell>>,
    pub width: u16,
    pub height: u16,
}

impl Compositor {
    /// A blank buffer of the given size.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            screen: blank_screen(width, height),
            width,
            height,
        }
    }

    /// Resize and blank the buffer.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.screen = blank_screen(width, height);
    }

    /// Reset every cell to blank.
    pub fn clear(&mut self) {
        for row in &mut self.screen {
            row.fill(StyledCell::blank());
        }
    }

    /// The whole buffer as a region.
    pub fn bounds(&self) -> Region {
        Region::new(0, 0, i32::from(self.width), i32::from(self.height))
    }

    /// Write strips into the buffer, clipped to `region` and the screen.
    pub fn place_strips(&mut self, strips: &[Strip], region: &Region) {
        let clip = region.intersection(self.bounds());
        if clip.is_empty() {
            return;
        }

        for strip in strips {
            if strip.y < clip.y || strip.y >= clip.bottom() {
                continue;
            }
            let row = &mut self.screen[strip.y as usize];
            for (i, cell) in strip.cells.iter().enumerate() {
                let x = strip.x_offset + i as i32;
                if x >= clip.x && x < clip.right() {
                    row[x as usize] = cell.clone();
                }
            }
        }
    }

    /// The cells that differ from `previous`. Cells outside the previous
    /// frame's bounds always count as changed.
    pub fn diff(&self, previous: &Compositor) -> Vec<CellUpdate> {
        let mut updates = Vec::new();
        for (y, row) in self.screen.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                let old = previous.screen.get(y).and_then(|r| r.get(x));
                if old != Some(cell) {
                    updates.push(CellUpdate {
                        x: x as u16,
                        y: y as u16,
                        cell: cell.clone(),
                    });
                }
            }
        }
        updates
    }

    /// Every cell, for a full redraw.
    pub fn all_cells(&self) -> Vec<CellUpdate> {
        self.diff(&Compositor::new(0, 0))
    }

    /// The cell at (x, y), if in bounds.
    pub fn get_cell(&self, x: u16, y: u16) -> Option<&StyledCell> {
        self.screen.get(y as usize).and_then(|row| row.get(x as usize))
    }

    /// One row as plain text with trailing spaces trimmed.
    pub fn row_text(&self, y: u16) -> String {
        self.screen
            .get(y as usize)
            .map(|row| {
                let line: String = row.iter().map(|c| c.ch).collect();
                line.trim_end().to_owned()
            })
            .unwrap_or_default()
    }

    /// The buffer as plain text, rows joined with `'\n'`.
    pub fn to_text(&self) -> String {
        (0..self.height)
            .map(|y| self.row_text(y))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn blank_screen(width: u16, height: u16) -> Vec<Vec<StyledCell>> {
    (0..height)
        .map(|_| vec![StyledCell::blank(); width as usize])
        .collect()
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::strip::CellStyle;

    #[test]
    fn new_is_blank() {
        let c = Compositor::new(4, 2);
        assert_eq!(c.get_cell(3, 1), Some(&StyledCell::blank()));
        assert!(c.get_cell(4, 0).is_none());
        assert_eq!(c.to_text(), "\n");
    }

    #[test]
    fn strips_are_clipped_to_region() {
        let mut c = Compositor::new(10, 3);
        let strips = vec![
            Strip::text(0, 0, "outside", CellStyle::default()),
            Strip::text(1, 2, "abcdef", CellStyle::default()),
        ];
        c.place_strips(&strips, &Region::new(3, 1, 3, 2));
        assert_eq!(c.row_text(0), "");
        assert_eq!(c.row_text(1), "   bcd");
    }

    #[test]
    fn strips_are_clipped_to_screen() {
        let mut c = Compositor::new(3, 1);
        c.place_strips(
            &[Strip::text(0, -1, "xyzw", CellStyle::default())],
            &Region::new(-5, -5, 50, 50),
        );
        assert_eq!(c.to_text(), "yzw");
    }

    #[test]
    fn diff_reports_changed_cells_only() {
        let before = Compositor::new(5, 1);
        let mut after = before.clone();
        after.place_strips(
            &[Strip::text(0, 1, "ok", CellStyle::default())],
            &after.bounds(),
        );
        let updates = after.diff(&before);
        assert_eq!(updates.len(), 2);
        assert_eq!((updates[0].x, updates[0].y, updates[0].cell.ch), (1, 0, 'o'));
        assert!(after.diff(&after).is_empty());
    }

    #[test]
    fn style_change_is_a_diff() {
        let before = Compositor::new(1, 1);
        let mut after = before.clone();
        after.place_strips(
            &[Strip::text(0, 0, " ", CellStyle::new().bg("#3B82F6"))],
            &after.bounds(),
        );
        assert_eq!(after.diff(&before).len(), 1);
    }

    #[test]
    fn resize_grows_into_full_redraw() {
        let small = Compositor::new(2, 1);
        let mut big = small.clone();
        big.resize(3, 2);
        assert_eq!(big.diff(&small).len(), 4);
        assert_eq!(big.all_cells().len(), 6);
    }

    #[test]
    fn clear_blanks_buffer() {
        let mut c = Compositor::new(3, 1);
        c.place_strips(&[Strip::text(0, 0, "abc", CellStyle::default())], &c.bounds());
        c.clear();
        assert_eq!(c.to_text(), "");
    }
}
