pub mod compounding;
pub mod error;
pub mod memo;
pub mod types;

#[cfg(feature = "amortization")]
pub mod amortization;

#[cfg(feature = "growth")]
pub mod growth;

#[cfg(feature = "inflation")]
pub mod inflation;

#[cfg(feature = "scoring")]
pub mod scoring;

#[cfg(feature = "history")]
pub mod history;

pub use error::FinCalcError;
pub use types::*;

/// Standard result type for all fincalc operations
pub type FinCalcResult<T> = Result<T, FinCalcError>;
