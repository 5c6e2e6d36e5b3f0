use std::rc::Rc;
use std::sync::Arc;

use thiserror::Error;

use crate::secret::SecretBuffer;

#[derive(Debug, Error)]
pub enum PortError {
    #[error("incorrect passphrase")]
    IncorrectPassphrase,
    #[error("invalid wallet state: {0}")]
    InvalidState(String),
    #[error("crypto error: {0}")]
    Crypto(String),
}

/// Wallet operations the passphrase dialog drives. The wallet is owned by the
/// host application; the dialog only ever sees a shared handle.
pub trait WalletModel {
    fn is_anonymize_only_unlocked(&self) -> bool;
    fn set_encrypted(&self, enable: bool, passphrase: &SecretBuffer) -> Result<(), PortError>;
    fn set_locked(
        &self,
        locked: bool,
        passphrase: &SecretBuffer,
        anonymize_only: bool,
    ) -> Result<(), PortError>;
    fn change_passphrase(
        &self,
        old_passphrase: &SecretBuffer,
        new_passphrase: &SecretBuffer,
    ) -> Result<(), PortError>;
}

macro_rules! forward_wallet_model {
    ($($handle:ty),*) => {$(
        impl<T: WalletModel + ?Sized> WalletModel for $handle {
            fn is_anonymize_only_unlocked(&self) -> bool {
                (**self).is_anonymize_only_unlocked()
            }

            fn set_encrypted(&self, enable: bool, passphrase: &SecretBuffer) -> Result<(), PortError> {
                (**self).set_encrypted(enable, passphrase)
            }

            fn set_locked(
                &self,
                locked: bool,
                passphrase: &SecretBuffer,
                anonymize_only: bool,
            ) -> Result<(), PortError> {
                (**self).set_locked(locked, passphrase, anonymize_only)
            }

            fn change_passphrase(
                &self,
                old_passphrase: &SecretBuffer,
                new_passphrase: &SecretBuffer,
            ) -> Result<(), PortError> {
                (**self).change_passphrase(old_passphrase, new_passphrase)
            }
        }
    )*};
}

forward_wallet_model!(&T, Rc<T>, Arc<T>);
