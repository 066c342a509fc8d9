// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carousel over a directory of images.
//!
//! Measures every image in a directory with `FileProbe` and prints the
//! resulting layout for a desktop and a phone viewport. An optional JSON file
//! overrides carousel settings; missing fields keep their defaults.
//!
//! Run:
//! - `cargo run -p understory_demos --example carousel_images -- path/to/images`
//! - `cargo run -p understory_demos --example carousel_images -- path/to/images config.json`

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use futures::executor::block_on;
use kurbo::Size;
use tracing::info;
use understory_aspect::FileProbe;
use understory_carousel::{Carousel, CarouselConfig, CarouselEvent, Item};

const IMAGE_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "gif", "webp", "bmp"];

fn load_config(path: Option<&Path>) -> Result<CarouselConfig> {
    let Some(path) = path else {
        return Ok(CarouselConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config: CarouselConfig = serde_json::from_str(&text)
        .with_context(|| format!("parsing config {}", path.display()))?;
    config.validate()?;
    Ok(config)
}

fn collect_items(dir: &Path) -> Result<Vec<Item>> {
    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir).with_context(|| format!("listing {}", dir.display()))? {
        let path = entry?.path();
        let is_image = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()));
        if !is_image {
            continue;
        }
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            names.push(name.to_owned());
        }
    }
    names.sort();
    Ok(names
        .into_iter()
        .map(|name| {
            let title = name
                .rsplit_once('.')
                .map_or(name.as_str(), |(stem, _)| stem)
                .to_owned();
            Item::new(name.clone(), name, title)
        })
        .collect())
}

fn lay_out(carousel: &mut Carousel, probe: &FileProbe, viewport: Size, now: f64) {
    carousel.set_viewport(viewport, now);
    if let Some(request) = carousel.take_sample_request() {
        let outcome = block_on(request.run(probe));
        carousel.apply_sample(outcome, now);
    }
    for event in carousel.drain_events() {
        if let CarouselEvent::Layout(layout) = event {
            println!(
                "{}x{} {:?}: offset={} extents={:?}",
                viewport.width, viewport.height, layout.axis, layout.strip_offset, layout.extents
            );
        }
    }
}

fn main() -> Result<()> {
    understory_demos::init_tracing();

    let mut args = std::env::args_os().skip(1);
    let Some(dir) = args.next().map(PathBuf::from) else {
        bail!("usage: carousel_images <image-dir> [config.json]");
    };
    let config = load_config(args.next().map(PathBuf::from).as_deref())?;

    let items = collect_items(&dir)?;
    if items.is_empty() {
        bail!("no images found in {}", dir.display());
    }
    info!(count = items.len(), dir = %dir.display(), "measuring images");

    let probe = FileProbe::with_root(&dir);
    let mut carousel = Carousel::new(config);
    carousel.set_items(items);
    lay_out(&mut carousel, &probe, Size::new(1440.0, 900.0), 0.0);
    lay_out(&mut carousel, &probe, Size::new(390.0, 844.0), 1000.0);

    for (index, item) in carousel.items().iter().enumerate() {
        println!("{index}: {} ({:?})", item.title, carousel.slide_tone(index));
    }
    Ok(())
}
