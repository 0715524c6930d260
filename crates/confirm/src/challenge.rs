//! Verification code generation and per-dialog challenge state.

use rand::Rng;

/// Length of a verification code.
pub const CODE_LEN: usize = 5;

/// Code alphabet: uppercase letters and digits, minus the visually
/// confusable `0`/`O` and `1`/`I`.
const ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

/// Fixed notice shown when the entered code does not match.
pub const MISMATCH_MESSAGE: &str = "Verification code does not match. Please try again.";

/// Generate a fresh verification code from the process-wide random source.
pub fn generate() -> String {
    generate_with(&mut rand::thread_rng())
}

/// Generate a fresh verification code from the given random source.
///
/// Codes are drawn uniformly from the alphabet; a new code always requires a
/// new call (codes are never mutated in place).
pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..CODE_LEN)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}

/// The challenge attached to one open confirmation dialog.
///
/// Created when a destructive action is initiated, regenerated on mismatch,
/// discarded when the dialog closes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChallengeState {
    code: String,
    input: String,
    error: Option<String>,
}

impl ChallengeState {
    pub(crate) fn new_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            code: generate_with(rng),
            input: String::new(),
            error: None,
        }
    }

    /// The code currently displayed to the user.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The user's current input.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The mismatch notice, if the previous submit failed.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub(crate) fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub(crate) fn matches(&self) -> bool {
        self.input.to_uppercase() == self.code.to_uppercase()
    }

    /// Replace the code, clear the input, and record the mismatch notice.
    /// The old code is never reusable after this.
    pub(crate) fn regenerate_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.code = generate_with(rng);
        self.input.clear();
        self.error = Some(MISMATCH_MESSAGE.to_string());
    }
}
