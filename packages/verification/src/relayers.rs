//! Relayer trust registry and capability checks.
//!
//! Relayer entries are created on first trust grant and never removed, only
//! toggled, so the full history of addresses that ever held trust stays
//! queryable on chain.

use cosmwasm_std::{Addr, StdResult, Storage};
use cw_storage_plus::Map;

use crate::error::VerificationError;

/// Relayer trust flags
/// Key: relayer address, Value: whether currently trusted
pub const RELAYERS: Map<&Addr, bool> = Map::new("relayers");

/// Toggle trust for a relayer. Idempotent.
pub fn set_trusted_relayer(
    storage: &mut dyn Storage,
    relayer: &Addr,
    trusted: bool,
) -> StdResult<()> {
    RELAYERS.save(storage, relayer, &trusted)
}

/// Whether an address is currently a trusted relayer. Unknown addresses are
/// untrusted.
pub fn is_trusted(storage: &dyn Storage, relayer: &Addr) -> StdResult<bool> {
    Ok(RELAYERS.may_load(storage, relayer)?.unwrap_or(false))
}

/// Require that `sender` is the contract admin.
pub fn assert_admin(sender: &Addr, admin: &Addr) -> Result<(), VerificationError> {
    if sender != admin {
        return Err(VerificationError::Unauthorized);
    }
    Ok(())
}

/// Require that `sender` may trigger a release: a trusted relayer, or the
/// admin acting as implicit superuser.
pub fn assert_relayer(
    storage: &dyn Storage,
    sender: &Addr,
    admin: &Addr,
) -> Result<(), VerificationError> {
    if sender == admin || is_trusted(storage, sender)? {
        return Ok(());
    }
    Err(VerificationError::UntrustedRelayer {
        relayer: sender.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::MockStorage;

    #[test]
    fn unknown_relayer_is_untrusted() {
        let storage = MockStorage::new();
        let relayer = Addr::unchecked("relayer");
        assert!(!is_trusted(&storage, &relayer).unwrap());
    }

    #[test]
    fn trust_toggles_without_deletion() {
        let mut storage = MockStorage::new();
        let relayer = Addr::unchecked("relayer");

        set_trusted_relayer(&mut storage, &relayer, true).unwrap();
        assert!(is_trusted(&storage, &relayer).unwrap());

        set_trusted_relayer(&mut storage, &relayer, false).unwrap();
        assert!(!is_trusted(&storage, &relayer).unwrap());
        // Entry stays behind as an audit record
        assert!(RELAYERS.may_load(&storage, &relayer).unwrap().is_some());
    }

    #[test]
    fn assert_relayer_allows_admin_and_trusted_only() {
        let mut storage = MockStorage::new();
        let admin = Addr::unchecked("admin");
        let relayer = Addr::unchecked("relayer");
        let stranger = Addr::unchecked("stranger");

        set_trusted_relayer(&mut storage, &relayer, true).unwrap();

        assert!(assert_relayer(&storage, &admin, &admin).is_ok());
        assert!(assert_relayer(&storage, &relayer, &admin).is_ok());
        assert_eq!(
            assert_relayer(&storage, &stranger, &admin),
            Err(VerificationError::UntrustedRelayer {
                relayer: "stranger".to_string()
            })
        );
    }

    #[test]
    fn revoking_trust_blocks_immediately() {
        let mut storage = MockStorage::new();
        let admin = Addr::unchecked("admin");
        let relayer = Addr::unchecked("relayer");

        set_trusted_relayer(&mut storage, &relayer, true).unwrap();
        assert!(assert_relayer(&storage, &relayer, &admin).is_ok());

        set_trusted_relayer(&mut storage, &relayer, false).unwrap();
        assert!(assert_relayer(&storage, &relayer, &admin).is_err());
    }
}
