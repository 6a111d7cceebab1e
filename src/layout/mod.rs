// Collision-free label placement. Every region gets a bounded candidate set
// anchored around its boundary; a depth-first search then commits one box
// per region so that no two committed boxes overlap.

pub(crate) mod candidates;
mod error;
pub(crate) mod geometry;
mod search;
pub(crate) mod types;

pub use candidates::{MAX_CANDIDATES_PER_REGION, candidates_for_region};
pub use error::LayoutError;
pub use geometry::{ellipse_overlaps_rect, rects_overlap};
pub use types::{Anchor, LabelBox, Placement};

use crate::config::LayoutConfig;
use crate::ir::{Region, Scene};

/// Places one label box per region using the default layout config.
///
/// `Placement::Infeasible` is an ordinary outcome, not an error; errors are
/// reserved for degenerate input. In a `Complete` result, element `i` is the
/// box chosen for `regions[i]`.
pub fn place_labels(
    regions: &[Region],
    max_width: f32,
    max_height: f32,
) -> Result<Placement, LayoutError> {
    place_labels_with(regions, max_width, max_height, &LayoutConfig::default())
}

/// Same as [`place_labels`] with an explicit config.
pub fn place_labels_with(
    regions: &[Region],
    max_width: f32,
    max_height: f32,
    config: &LayoutConfig,
) -> Result<Placement, LayoutError> {
    validate(regions, max_width, max_height)?;
    let candidate_lists: Vec<Vec<LabelBox>> = (0..regions.len())
        .map(|index| {
            candidates_for_region(regions, index, max_width, max_height, config.bounds_mode)
        })
        .collect();
    Ok(search::first_feasible(&candidate_lists))
}

/// Scene-level wrapper used by the CLI and the renderer.
pub fn compute_layout(scene: &Scene, config: &LayoutConfig) -> Result<Placement, LayoutError> {
    place_labels_with(&scene.regions, scene.width, scene.height, config)
}

fn validate(regions: &[Region], max_width: f32, max_height: f32) -> Result<(), LayoutError> {
    if !max_width.is_finite() || !max_height.is_finite() || max_width <= 0.0 || max_height <= 0.0 {
        return Err(LayoutError::InvalidCanvasBounds {
            width: max_width,
            height: max_height,
        });
    }
    for (index, region) in regions.iter().enumerate() {
        let finite = region.cx.is_finite()
            && region.cy.is_finite()
            && region.rx.is_finite()
            && region.ry.is_finite()
            && region.label_width.is_finite()
            && region.label_height.is_finite();
        if !finite
            || region.rx <= 0.0
            || region.ry <= 0.0
            || region.label_width <= 0.0
            || region.label_height <= 0.0
        {
            return Err(LayoutError::DegenerateEllipse {
                index,
                rx: region.rx,
                ry: region.ry,
                label_width: region.label_width,
                label_height: region.label_height,
            });
        }
    }
    Ok(())
}
