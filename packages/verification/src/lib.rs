//! Verification - Shared Trust Policy for Asset Bridge Contracts
//!
//! This package owns the verification state every bridge deployment carries:
//! - Relayer trust registry (admin-toggled, never deleted)
//! - Processed-message replay set (one successful release per message id)
//! - Sliding-window rate limiter (one window per deployment)
//!
//! Both the token bridge and the NFT bridge embed this state in their own
//! contract storage. Deployments never share state; the storage namespaces
//! below only collide within a single contract, which is intended.

pub mod error;
pub mod rate_limit;
pub mod relayers;
pub mod replay;

pub use error::VerificationError;
pub use rate_limit::{
    assert_and_consume_rate, current_window, set_rate_limit, RateLimitConfig, RateWindow,
};
pub use relayers::{assert_admin, assert_relayer, is_trusted, set_trusted_relayer};
pub use replay::{is_processed, mark_processed};
