use serde::{Deserialize, Serialize};

use crate::secret::{SecretBuffer, MAX_PASSPHRASE_SIZE};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DialogConfig {
    pub max_passphrase_chars: usize,
    /// Shown in the "will close now" notice after encryption.
    pub app_name: String,
    /// Currency unit used in the loss-of-funds warning.
    pub coin_unit: String,
}

impl Default for DialogConfig {
    fn default() -> Self {
        Self {
            max_passphrase_chars: MAX_PASSPHRASE_SIZE,
            app_name: "Askpass Wallet".to_owned(),
            coin_unit: "coins".to_owned(),
        }
    }
}

impl DialogConfig {
    /// Effective character limit, never above [`MAX_PASSPHRASE_SIZE`].
    pub fn passphrase_limit(&self) -> usize {
        self.max_passphrase_chars.min(MAX_PASSPHRASE_SIZE)
    }

    pub fn new_buffer(&self) -> SecretBuffer {
        SecretBuffer::with_limit(self.passphrase_limit())
    }
}
