use thiserror::Error;

/// Rejections for degenerate layout input.
///
/// A scene with no feasible assignment is not an error; that outcome is
/// reported as `Placement::Infeasible`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error(
        "region {index} is degenerate: rx={rx}, ry={ry}, label {label_width}x{label_height} (all must be positive and finite)"
    )]
    DegenerateEllipse {
        index: usize,
        rx: f32,
        ry: f32,
        label_width: f32,
        label_height: f32,
    },

    #[error("invalid canvas bounds {width}x{height} (must be positive and finite)")]
    InvalidCanvasBounds { width: f32, height: f32 },
}
