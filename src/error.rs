use thiserror::Error;

/// Problems found while turning flags, prompts and tables into a run plan.
/// All of these are raised before the first frame is rendered.
#[derive(Error, Debug, Clone, PartialEq)]
pub(crate) enum ConfigError {
    #[error("unknown body: {name:?} (expected one of {known})")]
    UnknownBody { name: String, known: String },

    #[error("orbital period of {name} must be positive, got {period}")]
    NonPositivePeriod { name: String, period: f64 },

    #[error("orbital radius of {name} must be non-negative, got {radius}")]
    NegativeRadius { name: String, radius: f64 },

    #[error("animation duration must be positive, got {0} days")]
    NonPositiveDuration(f64),

    #[error("animation duration of {0} days is shorter than a single frame")]
    TooShort(f64),

    #[error("animation duration of {days} days exceeds the limit of {max} frames")]
    TooLong { days: f64, max: usize },

    #[error("invalid year count: {0:?}")]
    InvalidYears(String),

    #[error("{flag} only applies to the {variant} variant")]
    FlagMismatch { flag: &'static str, variant: &'static str },
}
