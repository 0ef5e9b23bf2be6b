use thiserror::Error;

/// Top-level error type for the Curvelis curve engine.
#[derive(Debug, Error)]
pub enum CurvelisError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Sampling(#[from] SamplingError),

    #[error(transparent)]
    Style(#[from] StyleError),

    #[error(transparent)]
    Scene(#[from] SceneError),
}

/// Errors related to geometric input.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("non-finite coordinate in point ({x}, {y})")]
    NonFinitePoint { x: f64, y: f64 },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Errors related to curve sampling parameters.
#[derive(Debug, Error)]
pub enum SamplingError {
    #[error("segment count must be at least 1")]
    ZeroSegments,

    #[error("segment count {count} exceeds the maximum of {max}")]
    TooManySegments { count: usize, max: usize },

    #[error("degenerate domain: t_min = t_max = {0}")]
    DegenerateDomain(f64),

    #[error("non-finite domain bound: [{t_min}, {t_max}]")]
    NonFiniteDomain { t_min: f64, t_max: f64 },
}

/// Errors related to drawing styles.
#[derive(Debug, Error)]
pub enum StyleError {
    #[error("stroke width must be positive and finite, got {0}")]
    InvalidWidth(f64),

    #[error("invalid color: {0:?}")]
    InvalidColor(String),
}

/// Errors related to the shape store and handles.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("shape not found")]
    ShapeNotFound,

    #[error("shape has no control slot {0}")]
    InvalidSlot(String),
}

/// Convenience type alias for results using [`CurvelisError`].
pub type Result<T> = std::result::Result<T, CurvelisError>;
