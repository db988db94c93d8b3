use thiserror::Error;

/// Errors raised while validating engine configuration.
///
/// All variants are detected up front — a malformed payout schedule before
/// any enumeration, malformed catalog data at load. Once a [`crate::Catalog`]
/// and [`crate::PayoutSchedule`] exist, strategy generation cannot fail.
#[derive(Debug, Error)]
pub enum StrategyError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid card: {0}")]
    InvalidCard(String),

    #[error("Invalid category `{id}`: {reason}")]
    InvalidCategory { id: String, reason: String },
}
