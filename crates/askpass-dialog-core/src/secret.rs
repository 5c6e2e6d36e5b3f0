//! Scoped passphrase storage.
//!
//! A [`SecretBuffer`] reserves its full capacity up front so editing never
//! reallocates (which would leave stale copies on the heap), compares in
//! constant time, and wipes itself on drop.

use std::fmt;

use subtle::ConstantTimeEq;
use zeroize::Zeroize;

/// Upper bound on passphrase length, in characters.
pub const MAX_PASSPHRASE_SIZE: usize = 1024;

const PLACEHOLDER: char = ' ';

pub struct SecretBuffer {
    text: String,
    max_chars: usize,
}

impl SecretBuffer {
    /// Limits above [`MAX_PASSPHRASE_SIZE`] are clamped to it.
    pub fn with_limit(max_chars: usize) -> Self {
        let max_chars = max_chars.min(MAX_PASSPHRASE_SIZE);
        // Four bytes covers the widest UTF-8 scalar.
        Self {
            text: String::with_capacity(max_chars.saturating_mul(4)),
            max_chars,
        }
    }

    pub fn from_str_bounded(text: &str, max_chars: usize) -> Self {
        let mut buffer = Self::with_limit(max_chars);
        buffer.set(text);
        buffer
    }

    /// Replaces the contents, truncating to the character limit.
    pub fn set(&mut self, text: &str) {
        self.text.zeroize();
        for c in text.chars().take(self.max_chars) {
            self.text.push(c);
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Overwrites every character with a placeholder, keeping the length.
    pub fn scrub(&mut self) {
        let len = self.char_count();
        self.text.zeroize();
        self.text.extend(std::iter::repeat(PLACEHOLDER).take(len));
    }
}

impl Default for SecretBuffer {
    fn default() -> Self {
        Self::with_limit(MAX_PASSPHRASE_SIZE)
    }
}

impl Clone for SecretBuffer {
    fn clone(&self) -> Self {
        Self::from_str_bounded(&self.text, self.max_chars)
    }
}

impl PartialEq for SecretBuffer {
    fn eq(&self, other: &Self) -> bool {
        self.text.as_bytes().ct_eq(other.text.as_bytes()).into()
    }
}

impl Eq for SecretBuffer {}

impl Drop for SecretBuffer {
    fn drop(&mut self) {
        self.text.zeroize();
    }
}

impl fmt::Debug for SecretBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretBuffer(<redacted>)")
    }
}
