use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use zoomgrid_core::io::image_io::load_image;

#[derive(Args)]
pub struct InfoArgs {
    /// Input image file
    pub file: PathBuf,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let img = load_image(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;

    println!("File:        {}", args.file.display());
    println!("Dimensions:  {}x{}", img.width(), img.height());
    println!("Color type:  {:?}", img.color());

    let bytes = std::fs::metadata(&args.file)
        .map(|m| m.len())
        .unwrap_or(0);
    println!("File size:   {:.1} KB", bytes as f64 / 1024.0);

    Ok(())
}
