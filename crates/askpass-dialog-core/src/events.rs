//! Notifications into and out of the dialog controller.
//!
//! A front end translates its widget callbacks into [`InputEvent`]s and
//! registers listeners for [`DialogSignal`]s, so the controller never sees
//! toolkit types.

use crate::caps_lock::KeyPress;
use crate::domain::{Answer, DialogOutcome, FieldId};
use crate::messages::Notice;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent<'a> {
    FieldEdited { field: FieldId, text: &'a str },
    KeyPressed { field: FieldId, key: KeyPress },
    AnonymizeToggled(bool),
    Confirm,
    Cancel,
    Answer(Answer),
    DismissNotice,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogSignal {
    ConfirmEnabled(bool),
    CapsLock(bool),
    ModalOpened(Notice),
    ModalClosed,
    Finished(DialogOutcome),
    /// Sent after `Finished(Accepted)` when the host must exit to complete encryption.
    ShutdownRequested,
}

pub type Listener = Box<dyn FnMut(&DialogSignal)>;
