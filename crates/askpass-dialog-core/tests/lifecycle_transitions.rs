use askpass_dialog_core::{phase_transition, DialogAction, DialogOutcome, DialogPhase};

#[test]
fn encrypt_success_path_transitions() {
    let (s1, _) = phase_transition(DialogPhase::Editing, DialogAction::AskConfirmation)
        .expect("editing -> confirming");
    assert_eq!(s1, DialogPhase::Confirming);
    let (s2, _) =
        phase_transition(s1, DialogAction::ShowNotice).expect("confirming -> notifying");
    assert_eq!(s2, DialogPhase::Notifying);
    let (s3, record) = phase_transition(s2, DialogAction::Accept).expect("notifying -> accepted");
    assert_eq!(s3, DialogPhase::Accepted);
    assert_eq!(record.from, DialogPhase::Notifying);
    assert_eq!(s3.outcome(), Some(DialogOutcome::Accepted));
}

#[test]
fn failed_operation_returns_to_editing() {
    let (s1, _) = phase_transition(DialogPhase::Editing, DialogAction::ShowNotice)
        .expect("editing -> notifying");
    let (s2, record) =
        phase_transition(s1, DialogAction::DismissNotice).expect("notifying -> editing");
    assert_eq!(s2, DialogPhase::Editing);
    assert_eq!(record.reason, "notice dismissed");
}

#[test]
fn terminal_phases_reject_everything() {
    for phase in [DialogPhase::Accepted, DialogPhase::Rejected] {
        assert!(phase.is_terminal());
        for action in [
            DialogAction::AskConfirmation,
            DialogAction::ShowNotice,
            DialogAction::DismissNotice,
            DialogAction::Accept,
            DialogAction::Reject,
        ] {
            let err = phase_transition(phase, action).expect_err("terminal phase");
            assert!(err.to_string().contains("illegal dialog transition"));
        }
    }
}

#[test]
fn question_cannot_be_dismissed_like_a_notice() {
    let err = phase_transition(DialogPhase::Confirming, DialogAction::DismissNotice)
        .expect_err("must answer the question");
    assert_eq!(err.from, DialogPhase::Confirming);
}

#[test]
fn notice_cannot_reject() {
    phase_transition(DialogPhase::Notifying, DialogAction::Reject)
        .expect_err("notice must be dismissed first");
}
