use crate::theme::Theme;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Canvas-bounds check applied to generated candidate boxes.
///
/// `Strict` keeps boxes fully inside the canvas on both axes. `Legacy`
/// reproduces the historical check, which tests bottom >= 0 and top < height
/// on the vertical axis, so boxes may cross the top or bottom canvas edge.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BoundsMode {
    #[default]
    Strict,
    Legacy,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub bounds_mode: BoundsMode,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            bounds_mode: BoundsMode::Strict,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneConfig {
    /// Multiplier applied to every coordinate read from a mask SVG.
    pub scale: f32,
    /// Label size used when a region record carries none.
    pub label_width: f32,
    pub label_height: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            scale: 1.0,
            label_width: 150.0,
            label_height: 100.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    pub width: f32,
    pub height: f32,
    pub background: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            background: "#FFFFFF".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub theme: Theme,
    pub layout: LayoutConfig,
    pub scene: SceneConfig,
    pub render: RenderConfig,
}

impl Default for Config {
    fn default() -> Self {
        let theme = Theme::classic();
        let render = RenderConfig {
            background: theme.background.clone(),
            ..Default::default()
        };
        Self {
            theme,
            layout: LayoutConfig::default(),
            scene: SceneConfig::default(),
            render,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct LayoutConfigFile {
    bounds_mode: Option<BoundsMode>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct SceneConfigFile {
    scale: Option<f32>,
    label_width: Option<f32>,
    label_height: Option<f32>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct RenderConfigFile {
    width: Option<f32>,
    height: Option<f32>,
    background: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    theme: Option<String>,
    layout: Option<LayoutConfigFile>,
    scene: Option<SceneConfigFile>,
    render: Option<RenderConfigFile>,
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let mut config = Config::default();
    let Some(path) = path else {
        return Ok(config);
    };

    let contents = std::fs::read_to_string(path)?;
    let parsed: ConfigFile = serde_json::from_str(&contents)?;

    if let Some(theme_name) = parsed.theme.as_deref() {
        if theme_name == "modern" {
            config.theme = Theme::modern();
            config.render.background = config.theme.background.clone();
        } else if theme_name == "classic" || theme_name == "default" {
            config.theme = Theme::classic();
            config.render.background = config.theme.background.clone();
        }
    }

    if let Some(layout) = parsed.layout {
        if let Some(v) = layout.bounds_mode {
            config.layout.bounds_mode = v;
        }
    }

    if let Some(scene) = parsed.scene {
        if let Some(v) = scene.scale {
            config.scene.scale = v;
        }
        if let Some(v) = scene.label_width {
            config.scene.label_width = v;
        }
        if let Some(v) = scene.label_height {
            config.scene.label_height = v;
        }
    }

    if let Some(render) = parsed.render {
        if let Some(v) = render.width {
            config.render.width = v;
        }
        if let Some(v) = render.height {
            config.render.height = v;
        }
        if let Some(v) = render.background {
            config.render.background = v;
        }
    }

    Ok(config)
}
