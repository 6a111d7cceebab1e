#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    pub cx: f32,
    pub cy: f32,
    pub rx: f32,
    pub ry: f32,
    pub label_width: f32,
    pub label_height: f32,
    pub label: Option<String>,
}

impl Region {
    pub fn new(cx: f32, cy: f32, rx: f32, ry: f32, label_width: f32, label_height: f32) -> Self {
        Self {
            cx,
            cy,
            rx,
            ry,
            label_width,
            label_height,
            label: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub regions: Vec<Region>,
    pub width: f32,
    pub height: f32,
}

impl Scene {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            regions: Vec::new(),
            width,
            height,
        }
    }

    pub fn push_region(&mut self, region: Region) {
        self.regions.push(region);
    }
}
