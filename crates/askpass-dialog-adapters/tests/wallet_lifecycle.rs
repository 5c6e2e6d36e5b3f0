use std::sync::Arc;

use askpass_dialog_adapters::{InMemoryWallet, KdfParams, WalletStatus};
use askpass_dialog_core::{
    Answer, DialogConfig, DialogOutcome, FieldId, InputEvent, Mode, PassphraseDialog, PortError,
    SecretBuffer, WalletModel,
};

fn fast_kdf() -> KdfParams {
    KdfParams {
        memory_kib: 8,
        iterations: 1,
        parallelism: 1,
    }
}

fn secret(text: &str) -> SecretBuffer {
    SecretBuffer::from_str_bounded(text, 1024)
}

fn encrypted_wallet(passphrase: &str) -> InMemoryWallet {
    let wallet = InMemoryWallet::with_kdf(fast_kdf()).expect("wallet");
    wallet
        .set_encrypted(true, &secret(passphrase))
        .expect("encrypt wallet");
    wallet
}

#[test]
fn new_wallet_is_plain_and_unlocked() {
    let wallet = InMemoryWallet::with_kdf(fast_kdf()).expect("wallet");
    assert_eq!(
        wallet.status(),
        WalletStatus {
            encrypted: false,
            locked: false,
            anonymize_only: false,
        }
    );
    assert!(wallet.key_fingerprint().is_some());
}

#[test]
fn encrypting_locks_and_unlock_restores_same_key() {
    let wallet = InMemoryWallet::with_kdf(fast_kdf()).expect("wallet");
    let before = wallet.key_fingerprint().expect("fingerprint");
    wallet
        .set_encrypted(true, &secret("hunter2"))
        .expect("encrypt");
    assert!(wallet.status().encrypted);
    assert!(wallet.status().locked);
    assert!(wallet.key_fingerprint().is_none());

    wallet
        .set_locked(false, &secret("hunter2"), true)
        .expect("unlock");
    assert!(!wallet.status().locked);
    assert!(wallet.is_anonymize_only_unlocked());
    assert_eq!(wallet.key_fingerprint(), Some(before));
}

#[test]
fn wrong_passphrase_is_rejected() {
    let wallet = encrypted_wallet("right");
    let err = wallet
        .set_locked(false, &secret("wrong"), false)
        .expect_err("wrong passphrase");
    assert!(matches!(err, PortError::IncorrectPassphrase));
    assert!(wallet.status().locked);
}

#[test]
fn double_encrypt_is_invalid_state() {
    let wallet = encrypted_wallet("right");
    let err = wallet
        .set_encrypted(true, &secret("other"))
        .expect_err("already encrypted");
    assert!(err.to_string().contains("already encrypted"));
}

#[test]
fn unencrypted_wallet_cannot_unlock() {
    let wallet = InMemoryWallet::with_kdf(fast_kdf()).expect("wallet");
    wallet
        .set_locked(false, &secret("any"), false)
        .expect_err("nothing to unlock");
}

#[test]
fn change_passphrase_rewraps_key() {
    let wallet = encrypted_wallet("old");
    wallet
        .change_passphrase(&secret("wrong"), &secret("new"))
        .expect_err("old passphrase must match");
    wallet
        .change_passphrase(&secret("old"), &secret("new"))
        .expect("change passphrase");
    wallet
        .set_locked(false, &secret("old"), false)
        .expect_err("old passphrase no longer works");
    wallet
        .set_locked(false, &secret("new"), false)
        .expect("new passphrase unlocks");
}

#[test]
fn decrypt_then_lock_is_rejected() {
    let wallet = encrypted_wallet("pw");
    wallet
        .set_encrypted(false, &secret("pw"))
        .expect("decrypt");
    assert!(!wallet.status().encrypted);
    assert!(!wallet.status().locked);
    wallet.lock().expect_err("plain wallet cannot lock");
}

#[test]
fn relock_clears_anonymize_flag() {
    let wallet = encrypted_wallet("pw");
    wallet
        .set_locked(false, &secret("pw"), true)
        .expect("unlock");
    wallet.lock().expect("lock");
    assert!(wallet.status().locked);
    assert!(!wallet.is_anonymize_only_unlocked());
}

#[test]
fn dialog_drives_shared_wallet_through_encryption() {
    let wallet = Arc::new(InMemoryWallet::with_kdf(fast_kdf()).expect("wallet"));
    let mut dialog = PassphraseDialog::new(
        Mode::Encrypt,
        Some(Arc::clone(&wallet)),
        DialogConfig::default(),
    );
    for field in [FieldId::New, FieldId::Repeat] {
        dialog.handle(InputEvent::FieldEdited {
            field,
            text: "correct horse",
        });
    }
    dialog.handle(InputEvent::Confirm);
    dialog.handle(InputEvent::Answer(Answer::Yes));
    dialog.handle(InputEvent::DismissNotice);

    assert_eq!(dialog.outcome(), Some(DialogOutcome::Accepted));
    assert!(dialog.shutdown_requested());
    assert!(wallet.status().encrypted);
}

#[test]
fn dialog_reports_wrong_unlock_passphrase() {
    let wallet = Arc::new(encrypted_wallet("right"));
    let mut dialog =
        PassphraseDialog::new(Mode::Unlock, Some(Arc::clone(&wallet)), DialogConfig::default());
    dialog.handle(InputEvent::FieldEdited {
        field: FieldId::Old,
        text: "wrong",
    });
    dialog.handle(InputEvent::Confirm);

    let notice = dialog.modal().expect("error notice");
    assert!(notice.body.contains("incorrect"));
    assert!(wallet.status().locked);
}
