//! Passphrase dialog controller.
//!
//! Holds the form state for one dialog instance and turns input events into
//! wallet calls and modal notices. Rendering is left to the host; it reads
//! back [`PassphraseDialog::confirm_enabled`], [`PassphraseDialog::modal`]
//! and friends, or subscribes to [`DialogSignal`]s.

use tracing::{debug, info, warn};

use crate::caps_lock::{CapsLockDetector, KeyPress};
use crate::config::DialogConfig;
use crate::domain::{Answer, DialogOutcome, FieldId, FormLayout, Mode};
use crate::events::{DialogSignal, InputEvent, Listener};
use crate::messages::{self, Notice, CAPS_LOCK_WARNING};
use crate::ports::{PortError, WalletModel};
use crate::secret::SecretBuffer;
use crate::state_machine::{phase_transition, DialogAction, DialogPhase};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AfterNotice {
    Stay,
    Accept,
    AcceptAndShutdown,
}

#[derive(Debug)]
struct PendingModal {
    notice: Notice,
    after: AfterNotice,
}

pub struct PassphraseDialog<W: WalletModel> {
    mode: Mode,
    layout: FormLayout,
    wallet: Option<W>,
    config: DialogConfig,
    fields: [SecretBuffer; 3],
    caps_lock: CapsLockDetector,
    anonymize_only: bool,
    confirm_enabled: bool,
    phase: DialogPhase,
    modal: Option<PendingModal>,
    shutdown_requested: bool,
    listeners: Vec<Listener>,
}

impl<W: WalletModel> PassphraseDialog<W> {
    pub fn new(mode: Mode, wallet: Option<W>, config: DialogConfig) -> Self {
        let anonymize_only = wallet
            .as_ref()
            .is_some_and(|w| w.is_anonymize_only_unlocked());
        let fields = [config.new_buffer(), config.new_buffer(), config.new_buffer()];
        let mut dialog = Self {
            mode,
            layout: mode.layout(),
            wallet,
            config,
            fields,
            caps_lock: CapsLockDetector::default(),
            anonymize_only,
            confirm_enabled: false,
            phase: DialogPhase::Editing,
            modal: None,
            shutdown_requested: false,
            listeners: Vec::new(),
        };
        dialog.validate_input();
        info!(?mode, has_wallet = dialog.wallet.is_some(), "passphrase dialog opened");
        dialog
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn layout(&self) -> &FormLayout {
        &self.layout
    }

    pub fn config(&self) -> &DialogConfig {
        &self.config
    }

    pub fn field(&self, field: FieldId) -> &SecretBuffer {
        &self.fields[field.index()]
    }

    pub fn confirm_enabled(&self) -> bool {
        self.confirm_enabled
    }

    pub fn caps_lock_on(&self) -> bool {
        self.caps_lock.is_on()
    }

    pub fn caps_lock_warning(&self) -> Option<&'static str> {
        self.caps_lock.is_on().then_some(CAPS_LOCK_WARNING)
    }

    pub fn anonymize_only(&self) -> bool {
        self.anonymize_only
    }

    pub fn modal(&self) -> Option<&Notice> {
        self.modal.as_ref().map(|m| &m.notice)
    }

    pub fn phase(&self) -> DialogPhase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        !self.phase.is_terminal()
    }

    pub fn outcome(&self) -> Option<DialogOutcome> {
        self.phase.outcome()
    }

    /// True once encryption succeeded and the host must exit to finish it.
    pub fn shutdown_requested(&self) -> bool {
        self.shutdown_requested
    }

    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&DialogSignal) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    pub fn handle(&mut self, event: InputEvent<'_>) {
        match event {
            InputEvent::FieldEdited { field, text } => self.set_field(field, text),
            InputEvent::KeyPressed { field, key } => self.key_pressed(field, &key),
            InputEvent::AnonymizeToggled(checked) => self.set_anonymize_only(checked),
            InputEvent::Confirm => self.confirm(),
            InputEvent::Cancel => self.cancel(),
            InputEvent::Answer(answer) => self.answer(answer),
            InputEvent::DismissNotice => self.dismiss_notice(),
        }
    }

    pub fn set_field(&mut self, field: FieldId, text: &str) {
        if self.phase != DialogPhase::Editing || !self.layout.shows(field) {
            return;
        }
        self.fields[field.index()].set(text);
        self.validate_input();
    }

    pub fn key_pressed(&mut self, field: FieldId, key: &KeyPress) {
        if self.phase != DialogPhase::Editing || !self.layout.shows(field) {
            return;
        }
        let before = self.caps_lock.is_on();
        let after = self.caps_lock.observe(key);
        if before != after {
            self.emit(DialogSignal::CapsLock(after));
        }
    }

    pub fn set_anonymize_only(&mut self, checked: bool) {
        if self.phase == DialogPhase::Editing && self.layout.anonymize_visible {
            self.anonymize_only = checked;
        }
    }

    /// Recomputes whether the mode's required fields are all filled in.
    pub fn validate_input(&mut self) {
        let acceptable = self
            .mode
            .required_fields()
            .iter()
            .all(|field| !self.fields[field.index()].is_empty());
        if acceptable != self.confirm_enabled {
            self.confirm_enabled = acceptable;
            debug!(acceptable, "confirm enablement changed");
            self.emit(DialogSignal::ConfirmEnabled(acceptable));
        }
    }

    pub fn confirm(&mut self) {
        if self.phase != DialogPhase::Editing || !self.confirm_enabled {
            return;
        }
        let Some(wallet) = self.wallet.as_ref() else {
            debug!("confirm ignored: no wallet model");
            return;
        };

        let old = self.fields[FieldId::Old.index()].clone();
        let new = self.fields[FieldId::New.index()].clone();
        let repeat = self.fields[FieldId::Repeat.index()].clone();

        match self.mode {
            Mode::Encrypt => {
                if new.is_empty() || repeat.is_empty() {
                    return;
                }
                let question = messages::confirm_encryption(&self.config);
                self.open_modal(DialogAction::AskConfirmation, question, AfterNotice::Stay);
            }
            Mode::Unlock | Mode::UnlockAnonymize => {
                let result = wallet.set_locked(false, &old, self.anonymize_only);
                self.finish_or_notify(result, None, messages::unlock_failed());
            }
            Mode::Decrypt => {
                let result = wallet.set_encrypted(false, &old);
                self.finish_or_notify(result, None, messages::decryption_failed());
            }
            Mode::ChangePass => {
                if new != repeat {
                    self.notify(messages::passphrases_do_not_match(), AfterNotice::Stay);
                    return;
                }
                let result = wallet.change_passphrase(&old, &new);
                self.finish_or_notify(
                    result,
                    Some(messages::passphrase_changed()),
                    messages::change_failed(),
                );
            }
        }
    }

    /// Answers the encryption confirmation question.
    pub fn answer(&mut self, answer: Answer) {
        if self.phase != DialogPhase::Confirming {
            return;
        }
        self.close_modal();

        if answer == Answer::Cancel {
            self.transition(DialogAction::Reject);
            return;
        }

        let new = self.fields[FieldId::New.index()].clone();
        let repeat = self.fields[FieldId::Repeat.index()].clone();
        if new != repeat {
            self.notify(messages::passphrases_do_not_match(), AfterNotice::Stay);
            return;
        }

        let result = match self.wallet.as_ref() {
            Some(wallet) => wallet.set_encrypted(true, &new),
            None => Err(PortError::InvalidState("wallet model missing".to_owned())),
        };
        match result {
            Ok(()) => {
                info!("wallet encrypted; application shutdown pending");
                let notice = messages::wallet_encrypted(&self.config);
                self.notify(notice, AfterNotice::AcceptAndShutdown);
            }
            Err(e) => {
                warn!(error = %e, "wallet encryption failed");
                self.notify(messages::encryption_failed(), AfterNotice::Stay);
            }
        }
    }

    pub fn dismiss_notice(&mut self) {
        if self.phase != DialogPhase::Notifying {
            return;
        }
        let Some(modal) = self.close_modal() else {
            return;
        };
        match modal.after {
            AfterNotice::Stay => {
                self.transition(DialogAction::DismissNotice);
            }
            AfterNotice::Accept => {
                self.transition(DialogAction::Accept);
            }
            AfterNotice::AcceptAndShutdown => {
                self.transition(DialogAction::Accept);
                self.shutdown_requested = true;
                self.emit(DialogSignal::ShutdownRequested);
            }
        }
    }

    /// Cancel button or window close. Ignored while a modal is open.
    pub fn cancel(&mut self) {
        if self.phase == DialogPhase::Editing {
            self.transition(DialogAction::Reject);
        }
    }

    /// Overwrites every field with a same-length placeholder.
    pub fn scrub_fields(&mut self) {
        for field in &mut self.fields {
            field.scrub();
        }
    }

    fn finish_or_notify(
        &mut self,
        result: Result<(), PortError>,
        success: Option<Notice>,
        failure: Notice,
    ) {
        match result {
            Ok(()) => match success {
                Some(notice) => self.notify(notice, AfterNotice::Accept),
                None => {
                    self.transition(DialogAction::Accept);
                }
            },
            Err(e) => {
                warn!(mode = ?self.mode, error = %e, "wallet operation failed");
                self.notify(failure, AfterNotice::Stay);
            }
        }
    }

    fn notify(&mut self, notice: Notice, after: AfterNotice) {
        self.open_modal(DialogAction::ShowNotice, notice, after);
    }

    fn open_modal(&mut self, action: DialogAction, notice: Notice, after: AfterNotice) {
        if !self.transition(action) {
            return;
        }
        self.emit(DialogSignal::ModalOpened(notice.clone()));
        self.modal = Some(PendingModal { notice, after });
    }

    fn close_modal(&mut self) -> Option<PendingModal> {
        let modal = self.modal.take();
        if modal.is_some() {
            self.emit(DialogSignal::ModalClosed);
        }
        modal
    }

    fn transition(&mut self, action: DialogAction) -> bool {
        match phase_transition(self.phase, action) {
            Ok((to, record)) => {
                debug!(from = ?record.from, to = ?record.to, reason = record.reason, "dialog transition");
                self.phase = to;
                if let Some(outcome) = to.outcome() {
                    info!(mode = ?self.mode, ?outcome, "passphrase dialog finished");
                    self.emit(DialogSignal::Finished(outcome));
                }
                true
            }
            Err(e) => {
                warn!(error = %e, "dialog transition rejected");
                false
            }
        }
    }

    fn emit(&mut self, signal: DialogSignal) {
        for listener in &mut self.listeners {
            listener(&signal);
        }
    }
}

impl<W: WalletModel> Drop for PassphraseDialog<W> {
    fn drop(&mut self) {
        self.scrub_fields();
    }
}
