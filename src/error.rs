use thiserror::Error;

/// Errors raised while constructing a [`SwarmOptimizer`](crate::SwarmOptimizer).
///
/// Once an optimizer has been built, stepping it cannot fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SwarmError {
    /// The dimension, particle count, bounds, or [`PSOConfig`](crate::PSOConfig) coefficients
    /// cannot describe a valid swarm.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl SwarmError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration(reason.into())
    }
}
