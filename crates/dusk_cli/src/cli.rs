//! Command-line argument definitions

use clap::{Args, Parser, Subcommand};
use dusk_theme::ThemeName;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "dusk",
    version,
    about = "Dusk - circular-reveal light/dark theme transitions",
    long_about = "Probe reveal geometry and run theme transitions against a headless view.\n\n\
                  Logging honours RUST_LOG; -v/-vv override it."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the radius that covers a viewport from a point
    Radius(RadiusArgs),

    /// Run theme transitions against a headless view and print each frame
    Simulate(SimulateArgs),
}

#[derive(Args)]
pub struct RadiusArgs {
    #[arg(long)]
    pub width: f32,

    #[arg(long)]
    pub height: f32,

    /// Horizontal position of the interaction point
    #[arg(long, allow_negative_numbers = true)]
    pub x: f32,

    /// Vertical position of the interaction point
    #[arg(long, allow_negative_numbers = true)]
    pub y: f32,
}

#[derive(Args)]
pub struct SimulateArgs {
    /// Configuration file (defaults to ./dusk.toml when present)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub x: f32,

    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub y: f32,

    /// Number of sequential toggles
    #[arg(long, default_value_t = 1)]
    pub toggles: u32,

    /// Scheme the simulated system prefers (unset means no preference)
    #[arg(long, value_name = "light|dark")]
    pub system: Option<ThemeName>,

    /// Make every post-switch capture fail
    #[arg(long)]
    pub fail_capture: bool,
}
