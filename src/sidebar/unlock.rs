use super::text_input::TextInput;

pub const EMPTY_PASSWORD_MESSAGE: &str = "Please enter a password";
pub const WRONG_PASSWORD_MESSAGE: &str = "Wrong password. Please try again.";

/// Password prompt for an encrypted note
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnlockDialog {
    pub file_id: String,
    pub file_name: String,
    pub password: TextInput,
    /// Inline error shown under the password field
    pub error: Option<&'static str>,
}

impl UnlockDialog {
    pub fn new(file_id: &str, file_name: &str) -> Self {
        UnlockDialog {
            file_id: file_id.to_string(),
            file_name: file_name.to_string(),
            password: TextInput::default(),
            error: None,
        }
    }

    /// Apply an edit to the password field. The error is cleared once the
    /// password text changes; cursor movement leaves it up.
    pub fn edit_password<T>(&mut self, f: impl FnOnce(&mut TextInput) -> T) -> T {
        let before = self.password.buffer.clone();
        let result = f(&mut self.password);
        if self.password.buffer != before {
            self.error = None;
        }
        result
    }

    pub fn prompt(&self) -> String {
        format!("Enter password to unlock \u{201c}{}\u{201d}", self.file_name)
    }
}

/// Result of submitting the unlock dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnlockOutcome {
    /// Decrypted and selected; the dialog is closed
    Unlocked,
    /// Nothing was submitted
    MissingPassword,
    /// The host rejected the password; the note stays locked
    WrongPassword,
}
