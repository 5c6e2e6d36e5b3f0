use thiserror::Error;

use crate::domain::DialogOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogPhase {
    Editing,
    /// Encryption confirmation question is open.
    Confirming,
    /// An informational or error notice is open.
    Notifying,
    Accepted,
    Rejected,
}

impl DialogPhase {
    pub fn is_terminal(self) -> bool {
        matches!(self, DialogPhase::Accepted | DialogPhase::Rejected)
    }

    pub fn outcome(self) -> Option<DialogOutcome> {
        match self {
            DialogPhase::Accepted => Some(DialogOutcome::Accepted),
            DialogPhase::Rejected => Some(DialogOutcome::Rejected),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogAction {
    AskConfirmation,
    ShowNotice,
    DismissNotice,
    Accept,
    Reject,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateTransition {
    pub from: DialogPhase,
    pub to: DialogPhase,
    pub reason: &'static str,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("illegal dialog transition: {from:?} --{action:?}-->")]
pub struct TransitionError {
    pub from: DialogPhase,
    pub action: DialogAction,
}

pub fn phase_transition(
    from: DialogPhase,
    action: DialogAction,
) -> Result<(DialogPhase, StateTransition), TransitionError> {
    use DialogAction as A;
    use DialogPhase as P;

    let (to, reason) = match (from, action) {
        (P::Editing, A::AskConfirmation) => (P::Confirming, "confirmation requested"),
        (P::Editing, A::ShowNotice) => (P::Notifying, "notice shown"),
        (P::Editing, A::Accept) => (P::Accepted, "accepted"),
        (P::Editing, A::Reject) => (P::Rejected, "rejected"),
        (P::Confirming, A::ShowNotice) => (P::Notifying, "confirmation answered"),
        (P::Confirming, A::Reject) => (P::Rejected, "confirmation cancelled"),
        (P::Notifying, A::DismissNotice) => (P::Editing, "notice dismissed"),
        (P::Notifying, A::Accept) => (P::Accepted, "accepted after notice"),
        _ => return Err(TransitionError { from, action }),
    };
    Ok((to, StateTransition { from, to, reason }))
}
