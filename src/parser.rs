use crate::config::SceneConfig;
use crate::ir::{Region, Scene};
use anyhow::{Context, Result, anyhow};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

static SVG_OPEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<svg\b[^>]*>").unwrap());
static ELLIPSE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<ellipse\b[^>]*/?>").unwrap());
// The leading guard keeps lookalikes such as stroke-width from matching.
static WIDTH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?:^|[\s"'])width\s*=\s*["']([^"']+)["']"#).unwrap());
static HEIGHT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?:^|[\s"'])height\s*=\s*["']([^"']+)["']"#).unwrap());
static VIEWBOX_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"viewBox\s*=\s*["']\s*[0-9.eE+-]+[\s,]+[0-9.eE+-]+[\s,]+([0-9.eE+-]+)[\s,]+([0-9.eE+-]+)\s*["']"#,
    )
    .unwrap()
});
static CX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?:^|[\s"'])cx\s*=\s*["']([^"']+)["']"#).unwrap());
static CY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?:^|[\s"'])cy\s*=\s*["']([^"']+)["']"#).unwrap());
static RX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?:^|[\s"'])rx\s*=\s*["']([^"']+)["']"#).unwrap());
static RY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?:^|[\s"'])ry\s*=\s*["']([^"']+)["']"#).unwrap());

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SceneFile {
    width: f32,
    height: f32,
    #[serde(default)]
    regions: Vec<RegionFile>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RegionFile {
    cx: f32,
    cy: f32,
    rx: f32,
    ry: f32,
    label_width: Option<f32>,
    label_height: Option<f32>,
    label: Option<String>,
}

/// Dispatches on content: documents opening with `<` parse as a mask SVG,
/// anything else as a JSON/JSON5 scene file.
pub fn parse_scene(input: &str, config: &SceneConfig) -> Result<Scene> {
    if input.trim_start().starts_with('<') {
        parse_mask_svg(input, config)
    } else {
        parse_scene_json(input, config)
    }
}

/// Parses the scene file format: `{ width, height, regions: [{ cx, cy, rx,
/// ry, labelWidth?, labelHeight?, label? }] }`. Strict JSON is tried first,
/// JSON5 as a fallback for hand-edited files. Missing label sizes fall back
/// to the scene config.
pub fn parse_scene_json(input: &str, config: &SceneConfig) -> Result<Scene> {
    let parsed: SceneFile = match serde_json::from_str(input) {
        Ok(parsed) => parsed,
        Err(json_err) => json5::from_str(input).map_err(|json5_err| {
            anyhow!("scene parses as neither JSON ({json_err}) nor JSON5 ({json5_err})")
        })?,
    };

    let mut scene = Scene::new(parsed.width, parsed.height);
    for record in parsed.regions {
        let mut region = Region::new(
            record.cx,
            record.cy,
            record.rx,
            record.ry,
            record.label_width.unwrap_or(config.label_width),
            record.label_height.unwrap_or(config.label_height),
        );
        region.label = record.label;
        scene.push_region(region);
    }
    Ok(scene)
}

/// Extracts regions from a mask SVG: the `<svg>` width/height give the
/// canvas, each `<ellipse>` gives one region, document order preserved.
/// Every coordinate is multiplied by `SceneConfig::scale`; label sizes come
/// from the scene config since masks carry none.
pub fn parse_mask_svg(input: &str, config: &SceneConfig) -> Result<Scene> {
    let open_tag = SVG_OPEN_RE
        .find(input)
        .context("mask contains no <svg> element")?
        .as_str();

    let (width, height) = match (attr_value(&WIDTH_RE, open_tag), attr_value(&HEIGHT_RE, open_tag))
    {
        (Some(w), Some(h)) => (parse_length(w)?, parse_length(h)?),
        _ => viewbox_size(open_tag)
            .context("mask <svg> carries neither width/height nor a viewBox")?,
    };

    let mut scene = Scene::new(width * config.scale, height * config.scale);
    for found in ELLIPSE_RE.find_iter(input) {
        let tag = found.as_str();
        let cx = required_attr(&CX_RE, tag, "cx")?;
        let cy = required_attr(&CY_RE, tag, "cy")?;
        let rx = required_attr(&RX_RE, tag, "rx")?;
        let ry = required_attr(&RY_RE, tag, "ry")?;
        scene.push_region(Region::new(
            cx * config.scale,
            cy * config.scale,
            rx * config.scale,
            ry * config.scale,
            config.label_width,
            config.label_height,
        ));
    }
    Ok(scene)
}

fn attr_value<'a>(re: &Regex, tag: &'a str) -> Option<&'a str> {
    re.captures(tag)
        .and_then(|caps| caps.get(1))
        .map(|matched| matched.as_str())
}

fn required_attr(re: &Regex, tag: &str, name: &str) -> Result<f32> {
    let value = attr_value(re, tag)
        .ok_or_else(|| anyhow!("<ellipse> is missing the {name} attribute: {tag}"))?;
    parse_length(value)
}

fn parse_length(value: &str) -> Result<f32> {
    let trimmed = value.trim().trim_end_matches("px");
    trimmed
        .parse::<f32>()
        .with_context(|| format!("bad length value {value:?}"))
}

fn viewbox_size(tag: &str) -> Option<(f32, f32)> {
    let caps = VIEWBOX_RE.captures(tag)?;
    let width = caps.get(1)?.as_str().parse::<f32>().ok()?;
    let height = caps.get(2)?.as_str().parse::<f32>().ok()?;
    Some((width, height))
}
