pub mod amortization;
pub mod error;
pub mod types;

pub use error::PriceTableError;
pub use types::*;

/// Standard result type for fallible price-table operations
pub type PriceTableResult<T> = Result<T, PriceTableError>;
