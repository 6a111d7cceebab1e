use crate::config::{BoundsMode, load_config};
use crate::layout::compute_layout;
use crate::parser::parse_scene;
use crate::placement_dump::write_placement_dump;
#[cfg(feature = "png")]
use crate::render::write_output_png;
use crate::render::{render_svg, write_output_svg};
use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "callout", version, about = "Collision-free callout placement for elliptical regions")]
pub struct Args {
    /// Input scene (.json/.json5) or mask SVG, or '-' for stdin
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output file (svg/png). Defaults to stdout for SVG if omitted.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short = 'e', long = "outputFormat", value_enum, default_value = "svg")]
    pub output_format: OutputFormat,

    /// Config JSON file
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Canvas width override (defaults to the scene's own width)
    #[arg(short = 'w', long = "width")]
    pub width: Option<f32>,

    /// Canvas height override (defaults to the scene's own height)
    #[arg(short = 'H', long = "height")]
    pub height: Option<f32>,

    /// Coordinate multiplier applied when reading mask SVG input
    #[arg(long = "scale")]
    pub scale: Option<f32>,

    /// Canvas bounds check applied to candidate boxes
    #[arg(long = "boundsMode", value_enum)]
    pub bounds_mode: Option<BoundsModeArg>,

    /// Write the computed placement as JSON to this path
    #[arg(long = "dumpLayout")]
    pub dump_layout: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum OutputFormat {
    Svg,
    Png,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum BoundsModeArg {
    Strict,
    Legacy,
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let mut config = load_config(args.config.as_deref())?;
    if let Some(scale) = args.scale {
        config.scene.scale = scale;
    }
    if let Some(mode) = args.bounds_mode {
        config.layout.bounds_mode = match mode {
            BoundsModeArg::Strict => BoundsMode::Strict,
            BoundsModeArg::Legacy => BoundsMode::Legacy,
        };
    }

    let input = read_input(args.input.as_deref())?;
    let mut scene = parse_scene(&input, &config.scene)?;
    if let Some(width) = args.width {
        scene.width = width;
    }
    if let Some(height) = args.height {
        scene.height = height;
    }
    config.render.width = scene.width;
    config.render.height = scene.height;

    let placement = compute_layout(&scene, &config.layout)?;
    if !placement.is_complete() {
        eprintln!("warning: no collision-free label placement exists; rendering regions without labels");
    }

    if let Some(dump_path) = args.dump_layout.as_deref() {
        write_placement_dump(dump_path, &scene, &placement)?;
    }

    let svg = render_svg(&scene, &placement, &config.theme);
    match args.output_format {
        OutputFormat::Svg => {
            write_output_svg(&svg, args.output.as_deref())?;
        }
        OutputFormat::Png => {
            #[cfg(feature = "png")]
            {
                let output = ensure_output(&args.output)?;
                write_output_png(&svg, &output, &config.render)?;
            }
            #[cfg(not(feature = "png"))]
            return Err(anyhow::anyhow!(
                "PNG output requires building with the `png` feature"
            ));
        }
    }

    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    if let Some(path) = path {
        if path == Path::new("-") {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            return Ok(buf);
        }
        return Ok(std::fs::read_to_string(path)?);
    }

    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

#[cfg(feature = "png")]
fn ensure_output(output: &Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = output {
        return Ok(path.clone());
    }
    Err(anyhow::anyhow!("Output path required for png output"))
}
