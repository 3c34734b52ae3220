//! Processed-message replay set.
//!
//! A message id moves from unseen to processed exactly once and the set is
//! append-only. Callers must mark a message processed before emitting any
//! asset transfer so a replayed release fails fast with no side effects.

use cosmwasm_std::{StdResult, Storage};
use cw_storage_plus::Map;

use crate::error::VerificationError;

/// Processed message ids
/// Key: caller-chosen message id (hash of source tx + nonce), Value: processed
pub const PROCESSED_MESSAGES: Map<&str, bool> = Map::new("processed_messages");

/// Whether a message id has already been consumed by a release.
pub fn is_processed(storage: &dyn Storage, message_id: &str) -> StdResult<bool> {
    Ok(PROCESSED_MESSAGES
        .may_load(storage, message_id)?
        .unwrap_or(false))
}

/// Mark a message id processed. Fails if it already was; the transition is
/// terminal.
pub fn mark_processed(storage: &mut dyn Storage, message_id: &str) -> Result<(), VerificationError> {
    if is_processed(storage, message_id)? {
        return Err(VerificationError::AlreadyProcessed {
            message_id: message_id.to_string(),
        });
    }
    PROCESSED_MESSAGES.save(storage, message_id, &true)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::MockStorage;

    #[test]
    fn unseen_message_is_unprocessed() {
        let storage = MockStorage::new();
        assert!(!is_processed(&storage, "0xabc").unwrap());
    }

    #[test]
    fn mark_processed_is_terminal() {
        let mut storage = MockStorage::new();

        mark_processed(&mut storage, "0xabc").unwrap();
        assert!(is_processed(&storage, "0xabc").unwrap());

        let err = mark_processed(&mut storage, "0xabc").unwrap_err();
        assert_eq!(
            err,
            VerificationError::AlreadyProcessed {
                message_id: "0xabc".to_string()
            }
        );
    }

    #[test]
    fn message_ids_are_independent() {
        let mut storage = MockStorage::new();

        mark_processed(&mut storage, "0xabc").unwrap();
        assert!(!is_processed(&storage, "0xdef").unwrap());
        mark_processed(&mut storage, "0xdef").unwrap();
    }
}
