mod app;
mod bodies;
mod config;
mod error;
mod orbit;
mod prompt;
mod render;
mod schedule;
mod system;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Variant {
    /// Mercury, Venus and Earth around a Sun that circles a fixed Mars
    Areo,
    /// All six classical planets around a Sun that circles a chosen planet
    Quasi,
}

/// Animated GIF of the planets as seen from a planet that stays put.
#[derive(Parser, Debug)]
#[command(name = "epicycle", version)]
struct Args {
    /// which body table and framing to use
    #[arg(long, value_enum, default_value_t = Variant::Areo)]
    variant: Variant,

    /// planet pinned at the origin (quasi; prompted when absent)
    #[arg(long)]
    central: Option<String>,

    /// number of the central planet's years to animate (quasi; prompted when absent)
    #[arg(long)]
    years: Option<f64>,

    /// simulated days to animate (areo, default 687)
    #[arg(long)]
    days: Option<f64>,

    /// output GIF path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// image width and height in pixels
    #[arg(long)]
    size: Option<u32>,

    /// GIF playback frames per second
    #[arg(long)]
    fps: Option<u32>,

    /// JSON file with render settings
    #[arg(long)]
    settings: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    app::run(Args::parse())
}
