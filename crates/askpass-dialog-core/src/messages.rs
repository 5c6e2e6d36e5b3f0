//! Modal message catalog.

use crate::config::DialogConfig;
use crate::domain::ModalKind;

pub const CAPS_LOCK_WARNING: &str = "Warning: The Caps Lock key is on!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: ModalKind,
    pub title: String,
    pub body: String,
}

impl Notice {
    fn new(kind: ModalKind, title: &str, body: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.to_owned(),
            body: body.into(),
        }
    }
}

pub fn confirm_encryption(config: &DialogConfig) -> Notice {
    Notice::new(
        ModalKind::Question,
        "Confirm wallet encryption",
        format!(
            "Warning: If you encrypt your wallet and lose your passphrase, you will LOSE ALL OF YOUR {}!\n\nAre you sure you wish to encrypt your wallet?",
            config.coin_unit.to_uppercase()
        ),
    )
}

pub fn wallet_encrypted(config: &DialogConfig) -> Notice {
    Notice::new(
        ModalKind::Warning,
        "Wallet encrypted",
        format!(
            "{app} will close now to finish the encryption process. Remember that encrypting your wallet cannot fully protect your {unit} from being stolen by malware infecting your computer.\n\nIMPORTANT: Any previous backups you have made of your wallet file should be replaced with the newly generated, encrypted wallet file. For security reasons, previous backups of the unencrypted wallet file will become useless as soon as you start using the new, encrypted wallet.",
            app = config.app_name,
            unit = config.coin_unit,
        ),
    )
}

pub fn encryption_failed() -> Notice {
    Notice::new(
        ModalKind::Critical,
        "Wallet encryption failed",
        "Wallet encryption failed due to an internal error. Your wallet was not encrypted.",
    )
}

pub fn passphrases_do_not_match() -> Notice {
    Notice::new(
        ModalKind::Critical,
        "Wallet encryption failed",
        "The supplied passphrases do not match.",
    )
}

pub fn unlock_failed() -> Notice {
    Notice::new(
        ModalKind::Critical,
        "Wallet unlock failed",
        "The passphrase entered for the wallet decryption was incorrect.",
    )
}

pub fn decryption_failed() -> Notice {
    Notice::new(
        ModalKind::Critical,
        "Wallet decryption failed",
        "The passphrase entered for the wallet decryption was incorrect.",
    )
}

pub fn passphrase_changed() -> Notice {
    Notice::new(
        ModalKind::Information,
        "Wallet encrypted",
        "Wallet passphrase was successfully changed.",
    )
}

pub fn change_failed() -> Notice {
    Notice::new(
        ModalKind::Critical,
        "Wallet encryption failed",
        "The passphrase entered for the wallet decryption was incorrect.",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_come_from_config() {
        let config = DialogConfig {
            app_name: "DarkPayCoin".to_owned(),
            coin_unit: "dkpc".to_owned(),
            ..DialogConfig::default()
        };
        assert!(confirm_encryption(&config).body.contains("LOSE ALL OF YOUR DKPC"));
        assert!(wallet_encrypted(&config).body.starts_with("DarkPayCoin will close now"));
    }
}
