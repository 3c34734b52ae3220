//! Sliding-window rate limiter.
//!
//! One window per bridge deployment (not per relayer). Both deposits and
//! releases consume from the same budget. A `window_seconds` of zero disables
//! limiting entirely.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Env, StdResult, Storage, Timestamp, Uint128};
use cw_storage_plus::Item;

use crate::error::VerificationError;

/// Rate limit configuration for a deployment
#[cw_serde]
pub struct RateLimitConfig {
    /// Maximum cumulative units per window
    pub limit: Uint128,
    /// Window duration in seconds (0 = rate limiting disabled)
    pub window_seconds: u64,
}

/// Live window tracking
#[cw_serde]
pub struct RateWindow {
    /// Timestamp when the current window started
    pub window_start: Timestamp,
    /// Units consumed in the current window
    pub used: Uint128,
}

/// Rate limit configuration storage
pub const RATE_LIMIT: Item<RateLimitConfig> = Item::new("rate_limit");

/// Current window storage
pub const RATE_WINDOW: Item<RateWindow> = Item::new("rate_window");

/// Replace the rate limit configuration. Initializes the window start to now
/// if no window exists yet; an unexpired window keeps its accumulated amount.
pub fn set_rate_limit(
    storage: &mut dyn Storage,
    env: &Env,
    limit: Uint128,
    window_seconds: u64,
) -> StdResult<()> {
    RATE_LIMIT.save(
        storage,
        &RateLimitConfig {
            limit,
            window_seconds,
        },
    )?;

    if RATE_WINDOW.may_load(storage)?.is_none() {
        RATE_WINDOW.save(
            storage,
            &RateWindow {
                window_start: env.block.time,
                used: Uint128::zero(),
            },
        )?;
    }

    Ok(())
}

/// Consume `amount` from the current window, resetting it first if expired.
/// All-or-nothing: an over-limit request leaves the window untouched.
pub fn assert_and_consume_rate(
    storage: &mut dyn Storage,
    env: &Env,
    amount: Uint128,
) -> Result<(), VerificationError> {
    let Some(config) = RATE_LIMIT.may_load(storage)? else {
        return Ok(());
    };

    if config.window_seconds == 0 {
        return Ok(());
    }

    let now = env.block.time;
    let mut window = RATE_WINDOW.may_load(storage)?.unwrap_or(RateWindow {
        window_start: now,
        used: Uint128::zero(),
    });

    // Boundary counts as expired
    if now.seconds() >= window.window_start.seconds() + config.window_seconds {
        window = RateWindow {
            window_start: now,
            used: Uint128::zero(),
        };
    }

    // Overflowing the counter is over any limit by definition
    let candidate = window.used.checked_add(amount).map_err(|_| {
        VerificationError::RateLimitExceeded {
            limit: config.limit,
            requested: amount,
        }
    })?;
    if candidate > config.limit {
        return Err(VerificationError::RateLimitExceeded {
            limit: config.limit,
            requested: amount,
        });
    }

    window.used = candidate;
    RATE_WINDOW.save(storage, &window)?;

    Ok(())
}

/// Current configuration and window state, for queries.
pub fn current_window(
    storage: &dyn Storage,
) -> StdResult<(Option<RateLimitConfig>, Option<RateWindow>)> {
    Ok((
        RATE_LIMIT.may_load(storage)?,
        RATE_WINDOW.may_load(storage)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::{mock_env, MockStorage};

    fn env_at(seconds: u64) -> Env {
        let mut env = mock_env();
        env.block.time = Timestamp::from_seconds(seconds);
        env
    }

    #[test]
    fn no_config_means_no_limit() {
        let mut storage = MockStorage::new();
        let env = env_at(1_000);
        assert_and_consume_rate(&mut storage, &env, Uint128::new(u128::MAX)).unwrap();
    }

    #[test]
    fn zero_window_disables_limiting() {
        let mut storage = MockStorage::new();
        let env = env_at(1_000);
        set_rate_limit(&mut storage, &env, Uint128::new(10), 0).unwrap();

        assert_and_consume_rate(&mut storage, &env, Uint128::new(1_000_000)).unwrap();
    }

    #[test]
    fn consumption_accumulates_and_rejects_over_limit() {
        let mut storage = MockStorage::new();
        let env = env_at(1_000);
        set_rate_limit(&mut storage, &env, Uint128::new(150), 60).unwrap();

        assert_and_consume_rate(&mut storage, &env, Uint128::new(100)).unwrap();

        // 100 + 60 > 150: rejected, window untouched
        let err = assert_and_consume_rate(&mut storage, &env, Uint128::new(60)).unwrap_err();
        assert_eq!(
            err,
            VerificationError::RateLimitExceeded {
                limit: Uint128::new(150),
                requested: Uint128::new(60),
            }
        );

        let (_, window) = current_window(&storage).unwrap();
        assert_eq!(window.unwrap().used, Uint128::new(100));

        // Exactly reaching the limit is allowed
        assert_and_consume_rate(&mut storage, &env, Uint128::new(50)).unwrap();
        let (_, window) = current_window(&storage).unwrap();
        assert_eq!(window.unwrap().used, Uint128::new(150));
    }

    #[test]
    fn overflowing_amount_is_rejected_not_panicking() {
        let mut storage = MockStorage::new();
        let env = env_at(1_000);
        set_rate_limit(&mut storage, &env, Uint128::new(150), 60).unwrap();
        assert_and_consume_rate(&mut storage, &env, Uint128::new(100)).unwrap();

        // used + amount would overflow u128: rejected, window untouched
        let err =
            assert_and_consume_rate(&mut storage, &env, Uint128::new(u128::MAX)).unwrap_err();
        assert_eq!(
            err,
            VerificationError::RateLimitExceeded {
                limit: Uint128::new(150),
                requested: Uint128::new(u128::MAX),
            }
        );

        let (_, window) = current_window(&storage).unwrap();
        assert_eq!(window.unwrap().used, Uint128::new(100));
    }

    #[test]
    fn window_resets_at_boundary() {
        let mut storage = MockStorage::new();
        let env = env_at(1_000);
        set_rate_limit(&mut storage, &env, Uint128::new(150), 60).unwrap();
        assert_and_consume_rate(&mut storage, &env, Uint128::new(150)).unwrap();

        // One second short: still the old window
        let late = env_at(1_059);
        assert!(assert_and_consume_rate(&mut storage, &late, Uint128::new(1)).is_err());

        // now == window_start + duration counts as expired
        let boundary = env_at(1_060);
        assert_and_consume_rate(&mut storage, &boundary, Uint128::new(150)).unwrap();

        let (_, window) = current_window(&storage).unwrap();
        let window = window.unwrap();
        assert_eq!(window.window_start, Timestamp::from_seconds(1_060));
        assert_eq!(window.used, Uint128::new(150));
    }

    #[test]
    fn reconfigure_keeps_unexpired_window_usage() {
        let mut storage = MockStorage::new();
        let env = env_at(1_000);
        set_rate_limit(&mut storage, &env, Uint128::new(150), 60).unwrap();
        assert_and_consume_rate(&mut storage, &env, Uint128::new(100)).unwrap();

        // Raising the limit mid-window does not clear accumulated usage
        set_rate_limit(&mut storage, &env, Uint128::new(500), 60).unwrap();
        let (_, window) = current_window(&storage).unwrap();
        assert_eq!(window.unwrap().used, Uint128::new(100));

        assert_and_consume_rate(&mut storage, &env, Uint128::new(400)).unwrap();
        assert!(assert_and_consume_rate(&mut storage, &env, Uint128::new(1)).is_err());
    }
}
