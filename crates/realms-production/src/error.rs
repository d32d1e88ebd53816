//! Error types for the `realms-production` crate.
//!
//! Every variant is a contract violation by the caller or a configuration
//! mistake. Missing records are never errors at this layer; callers decide
//! what absence means before calling in.

/// Errors that can occur while computing production.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProductionError {
    /// The labor cycle length must be at least one second.
    #[error("labor cycle length must be positive")]
    InvalidCycleLength,

    /// The labor configuration is unusable.
    #[error("invalid labor configuration: {reason}")]
    InvalidConfig {
        /// Explanation of what is wrong with the configuration.
        reason: String,
    },

    /// Fixed-point arithmetic overflowed.
    #[error("arithmetic overflow while computing {context}")]
    ArithmeticOverflow {
        /// What was being computed.
        context: String,
    },
}

impl ProductionError {
    pub(crate) fn overflow(context: &str) -> Self {
        Self::ArithmeticOverflow {
            context: context.to_owned(),
        }
    }
}
