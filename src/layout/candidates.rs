// Candidate generation: one pass around each region interleaving cardinal
// side slides with boundary-angle probes, filtering every box against the
// canvas bounds and against every other region's ellipse.

use std::f32::consts::TAU;

use crate::config::BoundsMode;
use crate::ir::Region;

use super::geometry::ellipse_overlaps_rect;
use super::types::{Anchor, LabelBox};

/// Angular resolution of the boundary walk around each region.
pub(crate) const CIRCLE_SEGMENTS: usize = 32;
/// Linear resolution of the slide along each cardinal side.
pub(crate) const SLIDE_SEGMENTS: usize = 8;

const QUARTER_SIZE: usize = CIRCLE_SEGMENTS / 4;

/// Per-region candidate cap: one slide run per cardinal side plus one probe
/// per non-cardinal segment.
pub const MAX_CANDIDATES_PER_REGION: usize = 4 * SLIDE_SEGMENTS + (CIRCLE_SEGMENTS - 4);

/// Enumerates the in-bounds, non-interfering label placements for one region.
///
/// Survivors keep generation order; the search relies on that order staying
/// stable. A box may overlap its own region, never any other region's
/// ellipse.
pub fn candidates_for_region(
    regions: &[Region],
    index: usize,
    max_width: f32,
    max_height: f32,
    mode: BoundsMode,
) -> Vec<LabelBox> {
    let region = &regions[index];
    let step = TAU / CIRCLE_SEGMENTS as f32;
    let half_width = region.label_width / 2.0;
    let half_height = region.label_height / 2.0;

    let mut out = Vec::new();
    let mut add_rect_if_valid = |x: f32, y: f32, anchor: Anchor| {
        let rect = LabelBox::new(x, y, region.label_width, region.label_height, anchor);
        if !in_bounds(&rect, max_width, max_height, mode) {
            return;
        }
        let blocked = regions
            .iter()
            .enumerate()
            .any(|(j, other)| j != index && ellipse_overlaps_rect(other, &rect));
        if !blocked {
            out.push(rect);
        }
    };

    for seg in 0..CIRCLE_SEGMENTS {
        if seg % QUARTER_SIZE == 0 {
            match seg / QUARTER_SIZE {
                0 => {
                    // Slide along the top of the region.
                    for slide in 0..SLIDE_SEGMENTS {
                        let dx = slide as f32 * region.label_width / SLIDE_SEGMENTS as f32
                            - half_width;
                        add_rect_if_valid(
                            region.cx + dx,
                            region.cy - region.ry - half_height,
                            Anchor::Top,
                        );
                    }
                }
                1 => {
                    // Slide along the right of the region.
                    for slide in 0..SLIDE_SEGMENTS {
                        let dy = slide as f32 * region.label_height / SLIDE_SEGMENTS as f32
                            - half_height;
                        add_rect_if_valid(
                            region.cx + region.rx + half_width,
                            region.cy + dy,
                            Anchor::Right,
                        );
                    }
                }
                2 => {
                    // Slide along the bottom of the region.
                    for slide in 0..SLIDE_SEGMENTS {
                        let dx = slide as f32 * region.label_width / SLIDE_SEGMENTS as f32
                            - half_width;
                        add_rect_if_valid(
                            region.cx + dx,
                            region.cy + region.ry + half_height,
                            Anchor::Bottom,
                        );
                    }
                }
                _ => {
                    // Slide along the left of the region.
                    for slide in 0..SLIDE_SEGMENTS {
                        let dy = slide as f32 * region.label_height / SLIDE_SEGMENTS as f32
                            - half_height;
                        add_rect_if_valid(
                            region.cx - region.rx - half_width,
                            region.cy + dy,
                            Anchor::Left,
                        );
                    }
                }
            }
        } else {
            let theta = seg as f32 * step;
            let cos_theta = theta.cos();
            let sin_theta = theta.sin();
            let radius = region.rx * region.ry
                / ((region.ry * cos_theta).powi(2) + (region.rx * sin_theta).powi(2)).sqrt();

            let x = region.cx + radius * cos_theta;
            let y = region.cy + radius * sin_theta;

            // The box corner nearest the region center anchors to the
            // boundary point, so the box extends away from the region on
            // both axes. Quadrant picked by the point's side of the center,
            // y growing downward.
            if x > region.cx {
                if y > region.cy {
                    add_rect_if_valid(x + half_width, y + half_height, Anchor::LowerRight);
                } else {
                    add_rect_if_valid(x + half_width, y - half_height, Anchor::UpperRight);
                }
            } else if y > region.cy {
                add_rect_if_valid(x - half_width, y + half_height, Anchor::LowerLeft);
            } else {
                add_rect_if_valid(x - half_width, y - half_height, Anchor::UpperLeft);
            }
        }
    }

    out
}

fn in_bounds(rect: &LabelBox, max_width: f32, max_height: f32, mode: BoundsMode) -> bool {
    if rect.left < 0.0 || rect.right() >= max_width {
        return false;
    }
    match mode {
        BoundsMode::Strict => rect.top >= 0.0 && rect.bottom() < max_height,
        BoundsMode::Legacy => rect.bottom() >= 0.0 && rect.top < max_height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lone_region() -> Vec<Region> {
        vec![Region::new(500.0, 500.0, 60.0, 40.0, 100.0, 50.0)]
    }

    #[test]
    fn open_canvas_yields_the_full_candidate_set() {
        let regions = lone_region();
        let candidates =
            candidates_for_region(&regions, 0, 1000.0, 1000.0, BoundsMode::Strict);
        assert_eq!(candidates.len(), MAX_CANDIDATES_PER_REGION);

        let mut counts = [0usize; 8];
        for rect in &candidates {
            counts[rect.anchor.index()] += 1;
        }
        // 8 per cardinal slide run, 7 probes per quadrant.
        assert_eq!(counts, [8, 8, 8, 8, 7, 7, 7, 7]);
    }

    #[test]
    fn generation_order_interleaves_slides_and_probes() {
        let regions = lone_region();
        let candidates =
            candidates_for_region(&regions, 0, 1000.0, 1000.0, BoundsMode::Strict);
        assert_eq!(candidates[0].anchor, Anchor::Top);
        assert_eq!(candidates[8].anchor, Anchor::LowerRight);
        assert_eq!(candidates[15].anchor, Anchor::Right);
        assert_eq!(candidates[23].anchor, Anchor::LowerLeft);
        assert_eq!(candidates[30].anchor, Anchor::Bottom);
        assert_eq!(candidates[38].anchor, Anchor::UpperLeft);
        assert_eq!(candidates[45].anchor, Anchor::Left);
        assert_eq!(candidates[53].anchor, Anchor::UpperRight);
    }

    #[test]
    fn top_slides_run_flush_along_the_side() {
        let regions = lone_region();
        let candidates =
            candidates_for_region(&regions, 0, 1000.0, 1000.0, BoundsMode::Strict);
        let tops: Vec<&LabelBox> = candidates
            .iter()
            .filter(|rect| rect.anchor == Anchor::Top)
            .collect();
        assert_eq!(tops.len(), 8);
        for rect in &tops {
            assert_eq!(rect.y, 500.0 - 40.0 - 25.0, "top run sits above the region");
        }
        let xs: Vec<f32> = tops.iter().map(|rect| rect.x).collect();
        assert_eq!(
            xs,
            vec![450.0, 462.5, 475.0, 487.5, 500.0, 512.5, 525.0, 537.5],
            "slide advances by width / SLIDE_SEGMENTS from the left edge"
        );
    }

    #[test]
    fn quadrant_candidates_anchor_a_corner_on_the_ellipse() {
        let regions = lone_region();
        let candidates =
            candidates_for_region(&regions, 0, 1000.0, 1000.0, BoundsMode::Strict);
        let quadrant: Vec<&LabelBox> = candidates
            .iter()
            .filter(|rect| !rect.anchor.is_cardinal())
            .collect();
        assert_eq!(quadrant.len(), 28, "seven per quadrant on an open canvas");

        for rect in quadrant {
            // The corner nearest the region center is the anchored one.
            let (corner_x, corner_y) = match rect.anchor {
                Anchor::LowerRight => (rect.left, rect.top),
                Anchor::UpperRight => (rect.left, rect.bottom()),
                Anchor::LowerLeft => (rect.right(), rect.top),
                Anchor::UpperLeft => (rect.right(), rect.bottom()),
                _ => unreachable!(),
            };
            let norm =
                ((corner_x - 500.0) / 60.0).powi(2) + ((corner_y - 500.0) / 40.0).powi(2);
            assert!(
                (norm - 1.0).abs() < 1e-3,
                "{:?} corner should sit on the boundary, got norm {norm}",
                rect.anchor
            );
            match rect.anchor {
                Anchor::LowerRight => assert!(corner_x > 500.0 && corner_y > 500.0),
                Anchor::UpperRight => assert!(corner_x > 500.0 && corner_y < 500.0),
                Anchor::LowerLeft => assert!(corner_x < 500.0 && corner_y > 500.0),
                Anchor::UpperLeft => assert!(corner_x < 500.0 && corner_y < 500.0),
                _ => unreachable!(),
            }
        }
    }

    #[test]
    fn strict_mode_drops_boxes_crossing_the_top_edge() {
        let regions = vec![Region::new(200.0, 30.0, 20.0, 10.0, 60.0, 40.0)];
        let strict = candidates_for_region(&regions, 0, 400.0, 300.0, BoundsMode::Strict);
        let legacy = candidates_for_region(&regions, 0, 400.0, 300.0, BoundsMode::Legacy);

        assert!(
            strict.iter().all(|rect| rect.top >= 0.0),
            "strict keeps boxes fully on canvas"
        );
        assert!(strict.iter().all(|rect| rect.anchor != Anchor::Top));
        assert!(
            legacy.iter().any(|rect| rect.top < 0.0),
            "legacy admits boxes crossing the top edge"
        );
        assert_eq!(
            legacy
                .iter()
                .filter(|rect| rect.anchor == Anchor::Top)
                .count(),
            8
        );
        assert!(legacy.len() > strict.len());
    }

    #[test]
    fn horizontal_bounds_bind_in_both_modes() {
        // Pushed against the left canvas edge; left slides land off canvas.
        let regions = vec![Region::new(30.0, 500.0, 20.0, 20.0, 40.0, 20.0)];
        for mode in [BoundsMode::Strict, BoundsMode::Legacy] {
            let candidates = candidates_for_region(&regions, 0, 1000.0, 1000.0, mode);
            assert!(candidates.iter().all(|rect| rect.left >= 0.0));
            assert!(candidates.iter().all(|rect| rect.anchor != Anchor::Left));
        }
    }

    #[test]
    fn other_region_blocks_interfering_candidates() {
        let alone = vec![Region::new(100.0, 100.0, 30.0, 30.0, 40.0, 20.0)];
        let open = candidates_for_region(&alone, 0, 1000.0, 1000.0, BoundsMode::Strict);
        assert_eq!(
            open.iter()
                .filter(|rect| rect.anchor == Anchor::Right)
                .count(),
            8
        );

        // A second region sitting where the right slide run lands.
        let crowded = vec![
            Region::new(100.0, 100.0, 30.0, 30.0, 40.0, 20.0),
            Region::new(160.0, 100.0, 20.0, 20.0, 40.0, 20.0),
        ];
        let filtered =
            candidates_for_region(&crowded, 0, 1000.0, 1000.0, BoundsMode::Strict);
        assert!(
            filtered.iter().all(|rect| rect.anchor != Anchor::Right),
            "every right slide overlaps the neighbor's ellipse"
        );
        for rect in &filtered {
            assert!(
                !ellipse_overlaps_rect(&crowded[1], rect),
                "surviving candidates must clear the neighbor"
            );
        }
    }

    #[test]
    fn oversized_label_has_no_candidates() {
        let regions = vec![Region::new(200.0, 200.0, 50.0, 30.0, 401.0, 50.0)];
        let candidates =
            candidates_for_region(&regions, 0, 400.0, 400.0, BoundsMode::Strict);
        assert!(candidates.is_empty());
    }
}
