use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub font_family: String,
    pub font_size: f32,
    pub background: String,
    pub region_stroke: String,
    pub region_stroke_width: f32,
    pub region_fill: String,
    pub label_fill: String,
    pub label_stroke_width: f32,
    pub label_text_color: String,
    /// Stroke color per anchor tag, indexed by `Anchor::index()`.
    pub anchor_colors: [String; 8],
}

impl Theme {
    pub fn classic() -> Self {
        Self {
            font_family: "\"trebuchet ms\", verdana, arial, sans-serif".to_string(),
            font_size: 14.0,
            background: "#FFFFFF".to_string(),
            region_stroke: "#00A000".to_string(),
            region_stroke_width: 2.0,
            region_fill: "none".to_string(),
            label_fill: "#F0F0FF".to_string(),
            label_stroke_width: 1.5,
            label_text_color: "#333333".to_string(),
            anchor_colors: [
                "#E6194B".to_string(),
                "#3CB44B".to_string(),
                "#4363D8".to_string(),
                "#F58231".to_string(),
                "#911EB4".to_string(),
                "#42D4F4".to_string(),
                "#F032E6".to_string(),
                "#9A6324".to_string(),
            ],
        }
    }

    pub fn modern() -> Self {
        Self {
            font_family: "Inter, Segoe UI, system-ui, -apple-system, sans-serif".to_string(),
            font_size: 13.0,
            background: "#FFFFFF".to_string(),
            region_stroke: "#7A8AA6".to_string(),
            region_stroke_width: 1.5,
            region_fill: "none".to_string(),
            label_fill: "#F8FAFF".to_string(),
            label_stroke_width: 1.0,
            label_text_color: "#1C2430".to_string(),
            anchor_colors: [
                "#F94144".to_string(),
                "#43AA8B".to_string(),
                "#277DA1".to_string(),
                "#F9844A".to_string(),
                "#9D4EDD".to_string(),
                "#4CC9F0".to_string(),
                "#F72585".to_string(),
                "#577590".to_string(),
            ],
        }
    }
}
