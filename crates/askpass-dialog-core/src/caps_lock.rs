//! Caps Lock inference from key presses.
//!
//! Toolkits have no portable way to query the Caps Lock state, but it shows
//! in what a key press produces: Shift held with a lowercase result, or Shift
//! released with an uppercase result, means Caps Lock is on. Any other letter
//! means it is off. Keys that do not produce a letter leave the state alone.

/// A single key press as seen by a passphrase field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPress {
    /// Text the key produced, empty for keys such as Caps Lock or arrows.
    pub text: String,
    pub shift: bool,
}

impl KeyPress {
    pub fn new(text: impl Into<String>, shift: bool) -> Self {
        Self {
            text: text.into(),
            shift,
        }
    }

    /// A key that produced no text.
    pub fn silent(shift: bool) -> Self {
        Self::new(String::new(), shift)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CapsLockDetector {
    on: bool,
}

impl CapsLockDetector {
    pub fn is_on(&self) -> bool {
        self.on
    }

    /// Feeds one key press and returns the inferred state afterwards.
    pub fn observe(&mut self, key: &KeyPress) -> bool {
        if let Some(c) = key.text.chars().next() {
            if (key.shift && c.is_ascii_lowercase()) || (!key.shift && c.is_ascii_uppercase()) {
                self.on = true;
            } else if c.is_alphabetic() {
                self.on = false;
            }
        }
        self.on
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_do_not_change_state() {
        let mut detector = CapsLockDetector::default();
        detector.observe(&KeyPress::new("A", false));
        assert!(detector.observe(&KeyPress::new("7", false)));
        assert!(detector.observe(&KeyPress::new("!", true)));
    }

    #[test]
    fn non_ascii_letter_turns_it_off() {
        let mut detector = CapsLockDetector::default();
        detector.observe(&KeyPress::new("Q", false));
        assert!(!detector.observe(&KeyPress::new("é", false)));
    }
}
