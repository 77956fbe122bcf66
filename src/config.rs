use thiserror::Error;

/// Errors raised when building an invalid [`SatConfig`].
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("degenerate tolerance {0} must be finite and in [0, 1)")]
    InvalidDegenerateTolerance(f32),
}

/// Tuning of the separating axis test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SatConfig {
    degenerate_tolerance: f32,
}

impl SatConfig {
    pub const DEFAULT_DEGENERATE_TOLERANCE: f32 = 1.0e-6;

    /// Sets the relative threshold under which a candidate axis counts as degenerate.
    ///
    /// An axis built from a cross product is skipped when its length is at most
    /// `tolerance * |u| * |v|`, where `u` and `v` are the crossed vectors. Skipped
    /// axes never separate and are never picked for the translation.
    ///
    /// `tolerance` must be finite and in `[0, 1)`: since `|u × v| <= |u| * |v|`,
    /// a value of 1 or more would skip every cross product axis.
    pub fn with_degenerate_tolerance(mut self, tolerance: f32) -> Result<Self, ConfigError> {
        if !(tolerance.is_finite() && (0.0..1.0).contains(&tolerance)) {
            return Err(ConfigError::InvalidDegenerateTolerance(tolerance));
        }
        self.degenerate_tolerance = tolerance;
        Ok(self)
    }

    pub fn degenerate_tolerance(&self) -> f32 {
        self.degenerate_tolerance
    }
}

impl Default for SatConfig {
    fn default() -> Self {
        SatConfig {
            degenerate_tolerance: Self::DEFAULT_DEGENERATE_TOLERANCE,
        }
    }
}
