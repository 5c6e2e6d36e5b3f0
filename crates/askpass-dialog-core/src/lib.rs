pub mod caps_lock;
pub mod config;
pub mod dialog;
pub mod domain;
pub mod events;
pub mod messages;
pub mod ports;
pub mod secret;
pub mod state_machine;

pub use caps_lock::{CapsLockDetector, KeyPress};
pub use config::DialogConfig;
pub use dialog::PassphraseDialog;
pub use domain::{Answer, DialogOutcome, FieldId, FormLayout, ModalKind, Mode};
pub use events::{DialogSignal, InputEvent};
pub use messages::Notice;
pub use ports::{PortError, WalletModel};
pub use secret::{SecretBuffer, MAX_PASSPHRASE_SIZE};
pub use state_machine::{phase_transition, DialogAction, DialogPhase, StateTransition, TransitionError};
