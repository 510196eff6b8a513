//! System-wide constants for the splitledger engine.

use rust_decimal::Decimal;

/// Decimal places used for every presented money value (cents).
pub const CENT_PRECISION: u32 = 2;

/// Largest precision `rust_decimal` can represent.
pub const MAX_PRECISION: u32 = 28;

/// Balances within `[-DEAD_ZONE, +DEAD_ZONE]` count as settled (0.01).
pub const DEAD_ZONE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine name.
pub const ENGINE_NAME: &str = "splitledger";
