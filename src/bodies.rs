use crate::error::ConfigError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Rgb {
    pub(crate) r: u8,
    pub(crate) g: u8,
    pub(crate) b: u8,
}

pub(crate) const DARK_ORANGE: Rgb = Rgb { r: 255, g: 140, b: 0 };
pub(crate) const MAGENTA: Rgb = Rgb { r: 255, g: 0, b: 255 };
pub(crate) const TURQUOISE: Rgb = Rgb { r: 64, g: 224, b: 208 };
pub(crate) const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
pub(crate) const WHITE: Rgb = Rgb { r: 255, g: 255, b: 255 };
pub(crate) const GOLDENROD: Rgb = Rgb { r: 218, g: 165, b: 32 };
pub(crate) const STAR_YELLOW: Rgb = Rgb { r: 255, g: 255, b: 0 };

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Body {
    pub(crate) name: &'static str,
    pub(crate) start_deg: f64,
    pub(crate) period_days: f64,
    pub(crate) radius: f64,
    pub(crate) color: Rgb,
}

impl Body {
    fn new(name: &'static str, period_days: f64, orbit_km: f64, scale: f64, color: Rgb) -> Self {
        Self { name, start_deg: 0.0, period_days, radius: orbit_km / scale, color }
    }
}

/// Immutable description of one run: which bodies exist and which of them
/// sits pinned at the origin while the Sun circles it.
#[derive(Clone, Debug)]
pub(crate) struct SystemConfig {
    bodies: Vec<Body>,
    central: usize,
}

impl SystemConfig {
    pub(crate) fn new(bodies: Vec<Body>, central_name: &str) -> Result<Self, ConfigError> {
        for b in &bodies {
            if !(b.period_days.is_finite() && b.period_days > 0.0) {
                return Err(ConfigError::NonPositivePeriod { name: b.name.to_string(), period: b.period_days });
            }
            if !(b.radius.is_finite() && b.radius >= 0.0) {
                return Err(ConfigError::NegativeRadius { name: b.name.to_string(), radius: b.radius });
            }
        }
        let central = find_body(&bodies, central_name)?;
        Ok(Self { bodies, central })
    }

    pub(crate) fn central(&self) -> &Body {
        &self.bodies[self.central]
    }

    pub(crate) fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Every body except the central one, in table order.
    pub(crate) fn orbiters(&self) -> impl Iterator<Item = &Body> {
        self.bodies.iter().enumerate().filter(move |(i, _)| *i != self.central).map(|(_, b)| b)
    }
}

/// Case-insensitive lookup; an empty or unmatched name is an error rather than a panic.
pub(crate) fn find_body(bodies: &[Body], name: &str) -> Result<usize, ConfigError> {
    let wanted = name.trim();
    bodies
        .iter()
        .position(|b| !wanted.is_empty() && b.name.eq_ignore_ascii_case(wanted))
        .ok_or_else(|| ConfigError::UnknownBody {
            name: wanted.to_string(),
            known: bodies.iter().map(|b| b.name).collect::<Vec<_>>().join(", "),
        })
}

// -------------------- Data --------------------
pub(crate) const AREO_SCALE: f64 = 1.0e7;
pub(crate) const QUASI_SCALE: f64 = 1.0e6;

/// Inner planets only, Mars at the centre.
pub(crate) fn areo_bodies() -> Vec<Body> {
    let s = AREO_SCALE;
    vec![
        Body::new("Mercury", 88.0, 57.9e6, s, DARK_ORANGE),
        Body::new("Venus", 225.0, 108.2e6, s, MAGENTA),
        Body::new("Earth", 365.0, 149.6e6, s, TURQUOISE),
        Body::new("Mars", 687.0, 227.9e6, s, RED),
    ]
}

pub(crate) fn quasi_bodies() -> Vec<Body> {
    let s = QUASI_SCALE;
    vec![
        Body::new("Mercury", 88.0, 57.9e6, s, DARK_ORANGE),
        Body::new("Venus", 225.0, 108.2e6, s, MAGENTA),
        Body::new("Earth", 365.0, 149.6e6, s, TURQUOISE),
        Body::new("Mars", 687.0, 227.9e6, s, RED),
        Body::new("Jupiter", 4333.0, 778.6e6, s, WHITE),
        Body::new("Saturn", 10759.0, 1433.5e6, s, GOLDENROD),
    ]
}
