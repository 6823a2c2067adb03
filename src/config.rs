use crate::bodies::{areo_bodies, quasi_bodies, SystemConfig};
use crate::error::ConfigError;
use crate::prompt::{prompt_central, prompt_years};
use crate::schedule::frame_count;
use crate::{Args, Variant};
use anyhow::Result;
use serde::Deserialize;
use std::{
    fs,
    io::{BufRead, Write},
    path::{Path, PathBuf},
};
use tracing::warn;

const AREO_DAYS: f64 = 687.0;
const AREO_VIEW: f64 = 50.0;
const QUASI_VIEW: f64 = 800.0;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub(crate) struct RenderSettings {
    /// Output width and height in pixels.
    pub(crate) size: u32,
    pub(crate) fps: u32,
    pub(crate) star_count: usize,
    pub(crate) seed: u64,
    pub(crate) trail_alpha: f32,
    /// GIF quantizer speed, 1 (best) to 30 (fastest).
    pub(crate) speed: i32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            size: 480,
            fps: 20,
            star_count: 120,
            seed: 0x5A17_5A17,
            trail_alpha: 0.5,
            speed: 10,
        }
    }
}

impl RenderSettings {
    fn sanitized(mut self) -> Self {
        self.size = self.size.clamp(64, 4096);
        self.fps = self.fps.clamp(1, 100);
        self.trail_alpha = self.trail_alpha.clamp(0.0, 1.0);
        self.speed = self.speed.clamp(1, 30);
        self
    }
}

pub(crate) fn load_settings(path: &Path) -> RenderSettings {
    match fs::read_to_string(path) {
        Ok(s) => match serde_json::from_str::<RenderSettings>(&s) {
            Ok(v) => return v,
            Err(e) => warn!(path = %path.display(), error = %e, "ignoring malformed settings"),
        },
        Err(e) => warn!(path = %path.display(), error = %e, "could not read settings"),
    }
    RenderSettings::default()
}

/// Everything a run needs, fixed before the first frame.
#[derive(Clone, Debug)]
pub(crate) struct Plan {
    pub(crate) system: SystemConfig,
    pub(crate) duration_days: f64,
    pub(crate) frames: usize,
    pub(crate) view_radius: f64,
    pub(crate) output: PathBuf,
    pub(crate) settings: RenderSettings,
}

/// Build the plan from flags, asking on `input`/`out` for whatever the quasi
/// variant still lacks.
pub(crate) fn resolve_plan(args: &Args, input: &mut impl BufRead, out: &mut impl Write) -> Result<Plan> {
    let mut settings = args.settings.as_deref().map(load_settings).unwrap_or_default();
    if let Some(size) = args.size {
        settings.size = size;
    }
    if let Some(fps) = args.fps {
        settings.fps = fps;
    }
    let settings = settings.sanitized();

    match args.variant {
        Variant::Areo => {
            if args.central.is_some() {
                return Err(ConfigError::FlagMismatch { flag: "--central", variant: "quasi" }.into());
            }
            if args.years.is_some() {
                return Err(ConfigError::FlagMismatch { flag: "--years", variant: "quasi" }.into());
            }
            let system = SystemConfig::new(areo_bodies(), "Mars")?;
            let duration_days = args.days.unwrap_or(AREO_DAYS);
            let frames = frame_count(duration_days)?;
            let output = args.output.clone().unwrap_or_else(|| PathBuf::from("solar_system_animation.gif"));
            Ok(Plan { system, duration_days, frames, view_radius: AREO_VIEW, output, settings })
        }
        Variant::Quasi => {
            if args.days.is_some() {
                return Err(ConfigError::FlagMismatch { flag: "--days", variant: "areo" }.into());
            }
            let bodies = quasi_bodies();
            let central = match &args.central {
                Some(name) => name.clone(),
                None => bodies[prompt_central(input, out, &bodies)?].name.to_string(),
            };
            let system = SystemConfig::new(bodies, &central)?;
            let years = match args.years {
                Some(y) if y.is_finite() && y > 0.0 => y,
                Some(y) => return Err(ConfigError::InvalidYears(y.to_string()).into()),
                None => prompt_years(input, out)?,
            };
            let duration_days = years * system.central().period_days;
            let frames = frame_count(duration_days)?;
            let output = args.output.clone().unwrap_or_else(|| {
                PathBuf::from(format!("{}_solar_system_animation.gif", system.central().name.to_lowercase()))
            });
            Ok(Plan { system, duration_days, frames, view_radius: QUASI_VIEW, output, settings })
        }
    }
}
