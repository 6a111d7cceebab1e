// Overlap predicates shared by the candidate generator and the search.
// Pure geometry, no canvas or config dependency.

use crate::ir::Region;

use super::types::LabelBox;

/// Solid-ellipse vs axis-aligned-rectangle intersection.
///
/// Clamps the ellipse center to the rectangle's extent, which is the
/// rectangle point nearest the center under the radius-scaled norm, then
/// tests that point against the ellipse equation. A box merely touching the
/// boundary counts as overlapping.
pub fn ellipse_overlaps_rect(region: &Region, rect: &LabelBox) -> bool {
    let half_w = rect.width / 2.0;
    let half_h = rect.height / 2.0;

    let closest_x = region.cx.clamp(rect.x - half_w, rect.x + half_w);
    let closest_y = region.cy.clamp(rect.y - half_h, rect.y + half_h);

    let norm_x = (closest_x - region.cx) / region.rx;
    let norm_y = (closest_y - region.cy) / region.ry;

    norm_x * norm_x + norm_y * norm_y <= 1.0
}

/// Axis-aligned box overlap. Boxes are separated only when one lies strictly
/// beyond the other on some axis, so touching edges count as overlap.
pub fn rects_overlap(a: &LabelBox, b: &LabelBox) -> bool {
    let half_width_a = a.width / 2.0;
    let half_height_a = a.height / 2.0;
    let half_width_b = b.width / 2.0;
    let half_height_b = b.height / 2.0;

    let left_a = a.x - half_width_a;
    let right_a = a.x + half_width_a;
    let top_a = a.y - half_height_a;
    let bottom_a = a.y + half_height_a;

    let left_b = b.x - half_width_b;
    let right_b = b.x + half_width_b;
    let top_b = b.y - half_height_b;
    let bottom_b = b.y + half_height_b;

    if right_a < left_b || right_b < left_a {
        return false;
    }
    if bottom_a < top_b || bottom_b < top_a {
        return false;
    }
    true
}
