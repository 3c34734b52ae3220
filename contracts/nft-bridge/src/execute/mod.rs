//! Execute handlers for the NFT bridge contract.
//!
//! - `bridge` - Deposit and Release handlers
//! - `admin` - Collection allow-list, relayer trust, rate limit, and pause
//!   management

mod admin;
mod bridge;

pub use admin::*;
pub use bridge::*;
