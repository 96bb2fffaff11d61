//! Playground panel layout computed with taffy.
//!
//! The screen is a flex column: header (title and surface tabs), a body row,
//! and a one-line footer. The body holds the options panel on the left and a
//! column on the right with the live preview above the code block.

use taffy::prelude::*;

use crate::geometry::Region;

/// Rows taken by the header: title line plus tab line.
pub const HEADER_HEIGHT: f32 = 2.0;
/// Rows taken by the key-help footer.
pub const FOOTER_HEIGHT: f32 = 1.0;
/// Rows taken by the code block, including its border.
pub const CODE_HEIGHT: f32 = 5.0;
/// Widest the options panel grows, in cells.
pub const OPTIONS_MAX_WIDTH: f32 = 34.0;

/// Errors from computing the panel layout.
#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("layout computation failed: {0}")]
    Taffy(#[from] taffy::TaffyError),
}

/// Absolute regions of every playground panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PanelLayout {
    pub header: Region,
    pub options: Region,
    pub preview: Region,
    pub code: Region,
    pub footer: Region,
}

impl PanelLayout {
    /// Lay out a `width` x `height` cell screen.
    pub fn compute(width: u16, height: u16) -> Result<PanelLayout, LayoutError> {
        let mut tree: TaffyTree<()> = TaffyTree::new();

        let fixed_rows = |rows: f32| Style {
            size: Size {
                width: Dimension::from_percent(1.0),
                height: Dimension::from_length(rows),
            },
            flex_shrink: 0.0,
            ..Style::default()
        };

        let header = tree.new_leaf(fixed_rows(HEADER_HEIGHT))?;
        let footer = tree.new_leaf(fixed_rows(FOOTER_HEIGHT))?;

        let options = tree.new_leaf(Style {
            size: Size {
                width: Dimension::from_percent(0.35),
                height: Dimension::AUTO,
            },
            max_size: Size {
                width: Dimension::from_length(OPTIONS_MAX_WIDTH),
                height: Dimension::AUTO,
            },
            flex_shrink: 0.0,
            ..Style::default()
        })?;
        let preview = tree.new_leaf(Style {
            flex_grow: 1.0,
            min_size: Size {
                width: Dimension::AUTO,
                height: Dimension::from_length(0.0),
            },
            ..Style::default()
        })?;
        let code = tree.new_leaf(fixed_rows(CODE_HEIGHT))?;

        let right = tree.new_with_children(
            Style {
                flex_direction: FlexDirection::Column,
                flex_grow: 1.0,
                ..Style::default()
            },
            &[preview, code],
        )?;
        let body = tree.new_with_children(
            Style {
                flex_direction: FlexDirection::Row,
                flex_grow: 1.0,
                min_size: Size {
                    width: Dimension::AUTO,
                    height: Dimension::from_length(0.0),
                },
                ..Style::default()
            },
            &[options, right],
        )?;
        let root = tree.new_with_children(
            Style {
                flex_direction: FlexDirection::Column,
                size: Size {
                    width: Dimension::from_length(f32::from(width)),
                    height: Dimension::from_length(f32::from(height)),
                },
                ..Style::default()
            },
            &[header, body, footer],
        )?;

        tree.compute_layout(
            root,
            Size {
                width: AvailableSpace::Definite(f32::from(width)),
                height: AvailableSpace::Definite(f32::from(height)),
            },
        )?;

        let body_origin = region(&tree, body, (0, 0))?;
        let right_origin = region(&tree, right, (body_origin.x, body_origin.y))?;

        let layout = PanelLayout {
            header: region(&tree, header, (0, 0))?,
            options: region(&tree, options, (body_origin.x, body_origin.y))?,
            preview: region(&tree, preview, (right_origin.x, right_origin.y))?,
            code: region(&tree, code, (right_origin.x, right_origin.y))?,
            footer: region(&tree, footer, (0, 0))?,
        };
        tracing::trace!(width, height, ?layout, "computed panel layout");
        Ok(layout)
    }
}

/// The node's layout as an absolute region, given its parent's origin.
/// Taffy's f32 coordinates are rounded to the nearest cell.
fn region(tree: &TaffyTree<()>, node: NodeId, origin: (i32, i32)) -> Result<Region, LayoutError> {
    let layout = tree.layout(node)?;
    Ok(Region {
        x: origin.0 + layout.location.x.round() as i32,
        y: origin.1 + layout.location.y.round() as i32,
        width: layout.size.width.round() as i32,
        height: layout.size.height.round() as i32,
    })
}
