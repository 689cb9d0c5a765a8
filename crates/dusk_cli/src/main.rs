//! Dusk CLI
//!
//! Headless driver for theme transitions.

use anyhow::Result;
use clap::Parser;
use dusk_paint::{covering_radius, farthest_corner, Point, Size};

mod cli;
mod config;
mod headless;
mod logging;
mod simulate;

use crate::cli::{Cli, Command, RadiusArgs};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    match cli.command {
        Command::Radius(args) => cmd_radius(&args),
        Command::Simulate(args) => {
            let report = simulate::run(&args).await?;
            println!(
                "{} completed, {} failed, {} overlay frames",
                report.completed, report.failed, report.frames
            );
            Ok(())
        }
    }
}

fn cmd_radius(args: &RadiusArgs) -> Result<()> {
    let viewport = Size::new(args.width, args.height);
    if !viewport.is_usable() {
        anyhow::bail!(
            "viewport must have a positive size, got {}x{}",
            args.width,
            args.height
        );
    }
    let center = Point::new(args.x, args.y);
    if !center.is_finite() {
        anyhow::bail!("point must be finite, got ({}, {})", args.x, args.y);
    }

    let corner = farthest_corner(center, viewport);
    println!(
        "radius {:.2} (farthest corner {}, {})",
        covering_radius(center, viewport),
        corner.x,
        corner.y
    );
    Ok(())
}
