//! A coarse flow layout for the page model.
//!
//! Sections stack top to bottom; blocks stack inside a section; cells fill a
//! block's grid row by row. The numbers approximate the stylesheet closely
//! enough for intersection checks, which is all the runtime needs.

use kjv_core::{MountSpec, Rect, SectionSpec, Viewport};

use crate::assembly::{Observes, SectionPlan};

pub const BREAKPOINT_SM: f64 = 640.0;
pub const BREAKPOINT_MD: f64 = 768.0;
pub const BREAKPOINT_LG: f64 = 1024.0;

/// Widest content column (`container`).
pub const CONTAINER_MAX_WIDTH: f64 = 1280.0;
pub const CONTAINER_GUTTER: f64 = 16.0;

pub const SECTION_PADDING: f64 = 80.0;
pub const SECTION_PADDING_MD: f64 = 112.0;
pub const BLOCK_GAP: f64 = 64.0;
pub const CELL_GAP: f64 = 24.0;

/// A cell's rectangle after layout.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedCell {
    pub key: String,
    pub rect: Rect,
}

fn section_padding(width: f64) -> f64 {
    if width >= BREAKPOINT_MD {
        SECTION_PADDING_MD
    } else {
        SECTION_PADDING
    }
}

/// Lay out one section whose top edge sits at `top`.
///
/// Returns the section rectangle and every placed cell.
pub fn layout_section(plan: &SectionPlan, top: f64, viewport: &Viewport) -> (Rect, Vec<PlacedCell>) {
    let width = viewport.width;
    let padding = section_padding(width);
    let inner_width = (width.min(CONTAINER_MAX_WIDTH) - 2.0 * CONTAINER_GUTTER).max(0.0);
    let left = ((width - inner_width) / 2.0).max(0.0);

    let mut cells = Vec::new();
    let mut cursor = top + padding;

    for (index, block) in plan.blocks.iter().enumerate() {
        if index > 0 {
            cursor += BLOCK_GAP;
        }
        let columns = block.columns.at(width);
        let rows = block.cells.len().div_ceil(columns).max(1);
        let cell_width = (inner_width - CELL_GAP * (columns - 1) as f64).max(0.0) / columns as f64;

        for (i, cell) in block.cells.iter().enumerate() {
            let row = (i / columns) as f64;
            let column = (i % columns) as f64;
            cells.push(PlacedCell {
                key: cell.key.clone(),
                rect: Rect::new(
                    left + column * (cell_width + CELL_GAP),
                    cursor + row * (block.row_height + CELL_GAP),
                    cell_width,
                    block.row_height,
                ),
            });
        }

        cursor += rows as f64 * block.row_height + (rows - 1) as f64 * CELL_GAP;
    }

    let mut height = cursor + padding - top;
    if plan.fills_viewport {
        height = height.max(viewport.height);
    }

    (Rect::new(0.0, top, width, height), cells)
}

/// Lay out the whole page and describe it as sections to mount.
pub fn layout_page(plans: &[SectionPlan], viewport: &Viewport) -> Vec<SectionSpec> {
    let mut top = 0.0;
    let mut specs = Vec::with_capacity(plans.len());

    for plan in plans {
        let (rect, placed) = layout_section(plan, top, viewport);

        let items = plan
            .cells()
            .zip(placed.iter())
            .filter_map(|(cell, placed)| {
                let reveal = cell.reveal?;
                let observed = match reveal.observes {
                    Observes::Itself => placed.rect,
                    Observes::Section => rect,
                };
                let mut spec = MountSpec::new(cell.key.clone(), observed, reveal.delay);
                spec.trigger = reveal.trigger;
                Some(spec)
            })
            .collect();

        specs.push(SectionSpec {
            name: plan.anchor.to_string(),
            anchor: Some(plan.anchor.to_string()),
            rect,
            items,
        });
        top = rect.bottom();
    }

    specs
}
