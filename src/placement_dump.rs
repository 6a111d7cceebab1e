use crate::ir::Scene;
use crate::layout::Placement;
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

#[derive(Debug, Serialize)]
pub struct PlacementDump {
    pub feasible: bool,
    pub width: f32,
    pub height: f32,
    pub regions: Vec<RegionDump>,
    pub labels: Vec<LabelDump>,
}

#[derive(Debug, Serialize)]
pub struct RegionDump {
    pub index: usize,
    pub cx: f32,
    pub cy: f32,
    pub rx: f32,
    pub ry: f32,
    pub label: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LabelDump {
    pub region: usize,
    pub anchor: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub left: f32,
    pub top: f32,
}

impl PlacementDump {
    pub fn from_scene(scene: &Scene, placement: &Placement) -> Self {
        let regions = scene
            .regions
            .iter()
            .enumerate()
            .map(|(idx, region)| RegionDump {
                index: idx,
                cx: region.cx,
                cy: region.cy,
                rx: region.rx,
                ry: region.ry,
                label: region.label.clone(),
            })
            .collect();

        let labels = placement
            .labels()
            .iter()
            .enumerate()
            .map(|(idx, rect)| LabelDump {
                region: idx,
                anchor: format!("{:?}", rect.anchor),
                x: rect.x,
                y: rect.y,
                width: rect.width,
                height: rect.height,
                left: rect.left,
                top: rect.top,
            })
            .collect();

        PlacementDump {
            feasible: placement.is_complete(),
            width: scene.width,
            height: scene.height,
            regions,
            labels,
        }
    }
}

pub fn write_placement_dump(
    path: &Path,
    scene: &Scene,
    placement: &Placement,
) -> anyhow::Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let dump = PlacementDump::from_scene(scene, placement);
    serde_json::to_writer_pretty(writer, &dump)?;
    Ok(())
}
