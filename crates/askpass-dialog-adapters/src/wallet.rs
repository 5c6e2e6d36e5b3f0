use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::info;

use askpass_dialog_core::{PortError, SecretBuffer, WalletModel};

use crate::crypto::{generate_master_key, unwrap_key, wrap_key, KdfParams, MasterKey, WrappedKey};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalletStatus {
    pub encrypted: bool,
    pub locked: bool,
    pub anonymize_only: bool,
}

struct WalletState {
    /// Plain master key; absent while the encrypted wallet is locked.
    unlocked_key: Option<MasterKey>,
    wrapped: Option<WrappedKey>,
    anonymize_only: bool,
}

/// Wallet model that keeps its master key in memory and wraps it with the
/// passphrase when encrypted. Shared with the UI through `Arc`.
pub struct InMemoryWallet {
    state: Mutex<WalletState>,
    kdf: KdfParams,
}

impl InMemoryWallet {
    pub fn new() -> Result<Self, PortError> {
        Self::with_kdf(KdfParams::default())
    }

    pub fn with_kdf(kdf: KdfParams) -> Result<Self, PortError> {
        Ok(Self {
            state: Mutex::new(WalletState {
                unlocked_key: Some(generate_master_key()?),
                wrapped: None,
                anonymize_only: false,
            }),
            kdf,
        })
    }

    pub fn status(&self) -> WalletStatus {
        let state = self.lock_state();
        WalletStatus {
            encrypted: state.wrapped.is_some(),
            locked: state.unlocked_key.is_none(),
            anonymize_only: state.anonymize_only,
        }
    }

    /// Fingerprint of the master key for display; `None` while locked.
    pub fn key_fingerprint(&self) -> Option<String> {
        let state = self.lock_state();
        state
            .unlocked_key
            .as_ref()
            .map(|key| key[..4].iter().map(|b| format!("{b:02x}")).collect())
    }

    pub fn lock(&self) -> Result<(), PortError> {
        self.set_locked(true, &SecretBuffer::with_limit(0), false)
    }

    fn lock_state(&self) -> MutexGuard<'_, WalletState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl WalletModel for InMemoryWallet {
    fn is_anonymize_only_unlocked(&self) -> bool {
        self.lock_state().anonymize_only
    }

    fn set_encrypted(&self, enable: bool, passphrase: &SecretBuffer) -> Result<(), PortError> {
        let mut state = self.lock_state();
        if enable {
            if state.wrapped.is_some() {
                return Err(PortError::InvalidState("wallet is already encrypted".to_owned()));
            }
            let key = state
                .unlocked_key
                .take()
                .ok_or_else(|| PortError::InvalidState("master key missing".to_owned()))?;
            match wrap_key(&key, passphrase.as_bytes(), self.kdf) {
                Ok(wrapped) => {
                    state.wrapped = Some(wrapped);
                    state.anonymize_only = false;
                    info!("wallet encrypted and locked");
                    Ok(())
                }
                Err(e) => {
                    state.unlocked_key = Some(key);
                    Err(e)
                }
            }
        } else {
            let wrapped = state
                .wrapped
                .as_ref()
                .ok_or_else(|| PortError::InvalidState("wallet is not encrypted".to_owned()))?;
            let key = unwrap_key(wrapped, passphrase.as_bytes())?;
            state.unlocked_key = Some(key);
            state.wrapped = None;
            state.anonymize_only = false;
            info!("wallet decrypted");
            Ok(())
        }
    }

    fn set_locked(
        &self,
        locked: bool,
        passphrase: &SecretBuffer,
        anonymize_only: bool,
    ) -> Result<(), PortError> {
        let mut state = self.lock_state();
        let Some(wrapped) = state.wrapped.as_ref() else {
            return Err(PortError::InvalidState(
                "an unencrypted wallet cannot be locked or unlocked".to_owned(),
            ));
        };
        if locked {
            state.unlocked_key = None;
            state.anonymize_only = false;
            info!("wallet locked");
            return Ok(());
        }
        let key = unwrap_key(wrapped, passphrase.as_bytes())?;
        state.unlocked_key = Some(key);
        state.anonymize_only = anonymize_only;
        info!(anonymize_only, "wallet unlocked");
        Ok(())
    }

    fn change_passphrase(
        &self,
        old_passphrase: &SecretBuffer,
        new_passphrase: &SecretBuffer,
    ) -> Result<(), PortError> {
        let mut state = self.lock_state();
        let wrapped = state
            .wrapped
            .as_ref()
            .ok_or_else(|| PortError::InvalidState("wallet is not encrypted".to_owned()))?;
        let key = unwrap_key(wrapped, old_passphrase.as_bytes())?;
        state.wrapped = Some(wrap_key(&key, new_passphrase.as_bytes(), self.kdf)?);
        info!("wallet passphrase changed");
        Ok(())
    }
}
