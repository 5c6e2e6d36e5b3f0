#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use askpass_dialog_core::{
    DialogConfig, DialogSignal, FieldId, InputEvent, Mode, PassphraseDialog, PortError,
    SecretBuffer, WalletModel,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletCall {
    SetEncrypted { enable: bool, passphrase: String },
    SetLocked { locked: bool, passphrase: String, anonymize_only: bool },
    ChangePassphrase { old: String, new: String },
}

/// Wallet double that records every call and answers with a fixed result.
#[derive(Debug, Default)]
pub struct RecordingWallet {
    pub anonymize_only: bool,
    pub fail: Cell<bool>,
    pub calls: RefCell<Vec<WalletCall>>,
}

impl RecordingWallet {
    pub fn succeeding() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        let wallet = Self::default();
        wallet.fail.set(true);
        wallet
    }

    pub fn calls(&self) -> Vec<WalletCall> {
        self.calls.borrow().clone()
    }

    fn result(&self) -> Result<(), PortError> {
        if self.fail.get() {
            Err(PortError::IncorrectPassphrase)
        } else {
            Ok(())
        }
    }
}

impl WalletModel for RecordingWallet {
    fn is_anonymize_only_unlocked(&self) -> bool {
        self.anonymize_only
    }

    fn set_encrypted(&self, enable: bool, passphrase: &SecretBuffer) -> Result<(), PortError> {
        self.calls.borrow_mut().push(WalletCall::SetEncrypted {
            enable,
            passphrase: passphrase.as_str().to_owned(),
        });
        self.result()
    }

    fn set_locked(
        &self,
        locked: bool,
        passphrase: &SecretBuffer,
        anonymize_only: bool,
    ) -> Result<(), PortError> {
        self.calls.borrow_mut().push(WalletCall::SetLocked {
            locked,
            passphrase: passphrase.as_str().to_owned(),
            anonymize_only,
        });
        self.result()
    }

    fn change_passphrase(
        &self,
        old_passphrase: &SecretBuffer,
        new_passphrase: &SecretBuffer,
    ) -> Result<(), PortError> {
        self.calls.borrow_mut().push(WalletCall::ChangePassphrase {
            old: old_passphrase.as_str().to_owned(),
            new: new_passphrase.as_str().to_owned(),
        });
        self.result()
    }
}

pub fn open(mode: Mode, wallet: &RecordingWallet) -> PassphraseDialog<&RecordingWallet> {
    PassphraseDialog::new(mode, Some(wallet), DialogConfig::default())
}

pub fn fill(
    dialog: &mut PassphraseDialog<&RecordingWallet>,
    old: &str,
    new: &str,
    repeat: &str,
) {
    for (field, text) in [(FieldId::Old, old), (FieldId::New, new), (FieldId::Repeat, repeat)] {
        dialog.handle(InputEvent::FieldEdited { field, text });
    }
}

pub fn record_signals<W: WalletModel>(
    dialog: &mut PassphraseDialog<W>,
) -> Rc<RefCell<Vec<DialogSignal>>> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    dialog.subscribe(move |signal| sink.borrow_mut().push(signal.clone()));
    seen
}
