// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dataset tooling for hotspot maps: validate JSON datasets, preview how
//! regions land on screen for a given layout, and convert clicks on a rendered
//! image back to natural coordinates for authoring.

use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use hotspot_region::{LayoutVariant, ShapeKind, VariantSet};
use hotspot_state::{
    DeviceKind, Effect, HotspotConfig, HotspotController, ImageBox, RenderState,
};
use hotspot_view::{CoordinatePicker, ImageTransform};
use kurbo::{Point, Size};

type Result<T, E = Box<dyn Error>> = std::result::Result<T, E>;

#[derive(Parser, Debug)]
#[command(name = "hotspot", about = "Hotspot map dataset tooling")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load and validate a dataset, then summarize each variant.
    Validate {
        /// Dataset JSON file (an array of layout variants).
        dataset: PathBuf,
    },
    /// Print where each region of the active variant lands on screen.
    Map {
        #[command(flatten)]
        layout: Layout,
        /// Also print the popup placement for each region.
        #[arg(long)]
        popups: bool,
    },
    /// Convert screen clicks into natural-image coordinates.
    Pick {
        #[command(flatten)]
        layout: Layout,
        /// Screen points as `X,Y`.
        #[arg(required = true, value_parser = parse_point)]
        points: Vec<Point>,
    },
}

#[derive(Args, Debug)]
struct Layout {
    /// Dataset JSON file (an array of layout variants).
    dataset: PathBuf,
    /// Viewport as `W` or `W,H`.
    #[arg(long, value_parser = parse_viewport)]
    viewport: Size,
    /// Rendered image box as `L,T,W,H` in viewport coordinates.
    #[arg(long = "box", value_parser = parse_box)]
    image_box: ImageBox,
    /// Intrinsic size reported by the image as `W,H`; defaults to the declared size.
    #[arg(long, value_parser = parse_size)]
    natural: Option<Size>,
    /// Optional JSON file with a `HotspotConfig`. For two-variant datasets its
    /// `breakpoint` replaces the dataset's own.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    match Cli::parse().command {
        Command::Validate { dataset } => validate(&dataset),
        Command::Map { layout, popups } => map(&layout, popups),
        Command::Pick { layout, points } => pick(&layout, &points),
    }
}

fn read_variants(path: &Path) -> Result<Vec<LayoutVariant>> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
    let variants: Vec<LayoutVariant> = serde_json::from_str(&text)
        .map_err(|e| format!("failed to parse {}: {e}", path.display()))?;
    log::info!("loaded {} variants from {}", variants.len(), path.display());
    Ok(variants)
}

fn load_dataset(path: &Path) -> Result<VariantSet> {
    Ok(VariantSet::new(read_variants(path)?)?)
}

fn load_config(path: Option<&Path>) -> Result<HotspotConfig> {
    let Some(path) = path else {
        return Ok(HotspotConfig::default());
    };
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

fn validate(path: &Path) -> Result<()> {
    let set = load_dataset(path)?;
    for (i, variant) in set.variants().iter().enumerate() {
        let upper = set
            .get(i + 1)
            .map_or_else(|| "inf".to_owned(), |v| v.min_viewport_width.to_string());
        let polygons = variant
            .regions
            .iter()
            .filter(|r| r.shape.kind() == ShapeKind::Polygon)
            .count();
        println!(
            "{:<12} widths [{}, {upper})  natural {}x{}  {} regions ({polygons} polygons)",
            variant.name,
            variant.min_viewport_width,
            variant.natural_width,
            variant.natural_height,
            variant.regions.len(),
        );
    }
    println!("ok");
    Ok(())
}

/// Builds a loaded controller for the given layout.
fn controller(layout: &Layout) -> Result<HotspotController> {
    let variants = read_variants(&layout.dataset)?;
    let config = load_config(layout.config.as_deref())?;
    let mut map = match <[LayoutVariant; 2]>::try_from(variants) {
        Ok([narrow, wide]) if layout.config.is_some() => {
            log::info!("splitting variants at breakpoint {}", config.breakpoint);
            HotspotController::desktop_mobile(narrow, wide, config, layout.viewport)?
        }
        Ok(pair) => HotspotController::new(VariantSet::new(pair.into())?, config, layout.viewport),
        Err(variants) => {
            HotspotController::new(VariantSet::new(variants)?, config, layout.viewport)
        }
    };
    let natural = layout
        .natural
        .unwrap_or_else(|| map.active_variant().natural_size());
    map.on_load(RenderState::new(natural, layout.image_box));
    Ok(map)
}

fn map(layout: &Layout, popups: bool) -> Result<()> {
    let mut map = controller(layout)?;
    let variant = map.active_variant();
    let transform = map
        .state()
        .transform(map.variants(), map.config())?;
    let scale = transform.scale();
    println!(
        "variant {}  scale {:.4} x {:.4}",
        variant.name, scale.sx, scale.sy
    );

    let targets = map.hit_targets().map(<[_]>::to_vec).unwrap_or_default();
    for target in &targets {
        let region = &map.active_variant().regions[target.index];
        let anchor = transform.natural_to_screen(region.anchor());
        let r = target.rect;
        println!(
            "{:<16} rect [{:.2}, {:.2}, {:.2}, {:.2}]{}  anchor ({:.2}, {:.2})",
            target.id.as_str(),
            r.x0,
            r.y0,
            r.x1,
            r.y1,
            if target.floored { " (floored)" } else { "" },
            anchor.x,
            anchor.y,
        );
        if popups {
            let click = transform.local_to_screen(r.center());
            let effects = map.on_activate(click, DeviceKind::Pointer);
            if let Some((popup, _)) = map.popup()
                && effects.contains(&Effect::PopupOpened {
                    region: target.index,
                    id: target.id.clone(),
                })
            {
                let p = &popup.placement;
                println!(
                    "{:<16} popup at ({:.2}, {:.2}) size {}x{}{}{}",
                    "",
                    p.left,
                    p.top,
                    p.size.width,
                    p.size.height,
                    if p.flipped_vertically { " flipped" } else { "" },
                    if p.centered_vertically { " centered" } else { "" },
                );
            } else {
                log::warn!("region {} is shadowed by an earlier region", target.id);
            }
            map.on_dismiss();
        }
    }
    Ok(())
}

fn pick(layout: &Layout, points: &[Point]) -> Result<()> {
    let map = controller(layout)?;
    let transform: ImageTransform = map.state().transform(map.variants(), map.config())?;
    let mut picker = CoordinatePicker::new();
    for &point in points {
        if !transform.screen_point_on_image(point) {
            log::warn!("({}, {}) is outside the rendered image", point.x, point.y);
        }
        let pick = picker.pick(&transform, point);
        println!("({}, {}) -> {}, {}", point.x, point.y, pick.natural.x, pick.natural.y);
    }
    if let Some(rect) = picker.format_rect() {
        println!("rect: {rect}");
    }
    if picker.picks().len() >= 3 {
        println!("polygon: {}", picker.format_vertices());
    }
    Ok(())
}

fn parse_numbers<const N: usize>(s: &str) -> Result<[f64; N], String> {
    let parts: Vec<f64> = s
        .split(',')
        .map(|p| p.trim().parse::<f64>().map_err(|e| format!("{p:?}: {e}")))
        .collect::<Result<_, _>>()?;
    <[f64; N]>::try_from(parts).map_err(|v| format!("expected {N} numbers, got {}", v.len()))
}

fn parse_point(s: &str) -> Result<Point, String> {
    let [x, y] = parse_numbers(s)?;
    Ok(Point::new(x, y))
}

fn parse_size(s: &str) -> Result<Size, String> {
    let [w, h] = parse_numbers(s)?;
    Ok(Size::new(w, h))
}

fn parse_viewport(s: &str) -> Result<Size, String> {
    if s.contains(',') {
        parse_size(s)
    } else {
        let [w] = parse_numbers(s)?;
        // Height only matters for popup placement; assume a common laptop screen.
        Ok(Size::new(w, 768.0))
    }
}

fn parse_box(s: &str) -> Result<ImageBox, String> {
    let [left, top, width, height] = parse_numbers(s)?;
    Ok(ImageBox::new(left, top, width, height))
}
