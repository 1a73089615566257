//! Command Errors

use thiserror::Error;

/// Failure of a backend command call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// Arguments could not be converted to a JS value
    #[error("could not encode arguments for `{command}`: {message}")]
    Serialize { command: &'static str, message: String },

    /// The backend answered with something that is not the expected model
    #[error("unexpected response from `{command}`: {message}")]
    Deserialize { command: &'static str, message: String },

    /// The backend rejected the call
    #[error("`{command}` failed: {message}")]
    Rejected { command: &'static str, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_command() {
        let err = CommandError::Rejected {
            command: "delete_todo",
            message: "todo 4 not found".to_string(),
        };
        assert_eq!(err.to_string(), "`delete_todo` failed: todo 4 not found");
    }
}
