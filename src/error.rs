use color_model::ParseColorError;
use thiserror::Error;

/// Structural failures of an optimizer call.
///
/// These are raised before any search starts. Numeric degeneracy during a
/// search (a NaN or infinite score) is not an error: it is reported through
/// the `-inf` fitness sentinel and the candidate is simply never selected.
#[derive(Debug, Error)]
pub enum OptimizeError {
    #[error("Palette must have exactly {expected} colors, got {actual}")]
    InvalidPaletteLength { expected: usize, actual: usize },

    #[error("Population needs at least 2 individuals, got {size}")]
    PopulationTooSmall { size: usize },

    #[error("Path optimization needs at least 2 colors, got {count}")]
    TooFewColors { count: usize },

    #[error("Invalid color {input:?}: {source}")]
    InvalidColor {
        input: String,
        #[source]
        source: ParseColorError,
    },
}

/// Unknown name for an enumerated option (crossover operator, harmony rule).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown {kind} {value:?} (expected one of: {expected})")]
pub struct ParseOptionError {
    pub kind: &'static str,
    pub value: String,
    pub expected: &'static str,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
