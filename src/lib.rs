#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod ir;
pub mod layout;
pub mod parser;
pub mod placement_dump;
pub mod render;
pub mod theme;

#[cfg(feature = "cli")]
pub use cli::run;
pub use config::{BoundsMode, Config, LayoutConfig, RenderConfig, SceneConfig};
pub use ir::{Region, Scene};
pub use layout::{
    Anchor, LabelBox, LayoutError, Placement, compute_layout, place_labels, place_labels_with,
};
pub use parser::parse_scene;
pub use render::render_svg;
pub use theme::Theme;
