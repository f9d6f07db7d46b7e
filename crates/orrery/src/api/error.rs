use thiserror::Error;

/// Errors surfaced by the orrery core.
///
/// Pointer clamping and zero-length frames are recovered locally and never
/// show up here.
#[derive(Debug, Error)]
pub enum OrreryError {
    /// Static configuration failed validation. Fatal at startup.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration JSON could not be parsed.
    #[error("failed to parse configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// A body index does not exist in the registry.
    #[error("no body at index {0}")]
    UnknownBody(usize),

    /// Speed changes are not accepted for the star.
    #[error("body {0} is a star and has no orbital speed")]
    StarHasNoOrbit(usize),

    /// A speed value that cannot be clamped (NaN or infinite).
    #[error("orbital speed {0} is not a finite number")]
    InvalidSpeed(f32),

    /// The host did not provide a usable renderer.
    #[error("renderer unavailable: {0}")]
    MissingRenderer(String),
}

pub type Result<T> = std::result::Result<T, OrreryError>;
