//! Execute handlers for the token bridge contract.
//!
//! - `bridge` - Deposit and Release handlers
//! - `admin` - Relayer trust, rate limit, and pause management

mod admin;
mod bridge;

pub use admin::*;
pub use bridge::*;
