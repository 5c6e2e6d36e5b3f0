use serde::{Deserialize, Serialize};

/// What the dialog is collecting a passphrase for. Fixed for the lifetime of a dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Encrypt,
    Unlock,
    UnlockAnonymize,
    Decrypt,
    ChangePass,
}

/// The three passphrase edits. Which ones are shown depends on the mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldId {
    Old,
    New,
    Repeat,
}

impl FieldId {
    pub fn index(self) -> usize {
        match self {
            FieldId::Old => 0,
            FieldId::New => 1,
            FieldId::Repeat => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FieldId::Old => "Enter passphrase",
            FieldId::New => "New passphrase",
            FieldId::Repeat => "Repeat new passphrase",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DialogOutcome {
    Accepted,
    Rejected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModalKind {
    Question,
    Information,
    Warning,
    Critical,
}

/// Buttons offered by the encryption confirmation question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Yes,
    Cancel,
}

/// Static presentation of a mode: window title, instructions and visible widgets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormLayout {
    pub title: &'static str,
    pub instructions: &'static str,
    pub fields: &'static [FieldId],
    pub anonymize_visible: bool,
}

impl FormLayout {
    pub fn shows(&self, field: FieldId) -> bool {
        self.fields.contains(&field)
    }
}

impl Mode {
    pub fn layout(self) -> FormLayout {
        match self {
            Mode::Encrypt => FormLayout {
                title: "Encrypt wallet",
                instructions: "Enter the new passphrase to the wallet.\nPlease use a passphrase of ten or more random characters, or eight or more words.",
                fields: &[FieldId::New, FieldId::Repeat],
                anonymize_visible: false,
            },
            Mode::Unlock | Mode::UnlockAnonymize => FormLayout {
                title: "Unlock wallet",
                instructions: "This operation needs your wallet passphrase to unlock the wallet.",
                fields: &[FieldId::Old],
                anonymize_visible: self == Mode::UnlockAnonymize,
            },
            Mode::Decrypt => FormLayout {
                title: "Decrypt wallet",
                instructions: "This operation needs your wallet passphrase to decrypt the wallet.",
                fields: &[FieldId::Old],
                anonymize_visible: false,
            },
            Mode::ChangePass => FormLayout {
                title: "Change passphrase",
                instructions: "Enter the old and new passphrase to the wallet.",
                fields: &[FieldId::Old, FieldId::New, FieldId::Repeat],
                anonymize_visible: false,
            },
        }
    }

    /// Fields that must be non-empty before confirm is enabled.
    pub fn required_fields(self) -> &'static [FieldId] {
        self.layout().fields
    }
}
