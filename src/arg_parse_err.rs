use std::{ffi::OsStr, num::ParseIntError};

/// Error reporting for positional argument parsing.
/// Use `.display_with_arg()` to properly present this error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArgParseErr {
    pub message: Option<String>,
}

impl ArgParseErr {
    pub fn display_with_arg(&self, arg_name: &str, value: &OsStr) -> String {
        let value = value.to_string_lossy();
        // if there is a specific message, show it to the user,
        // otherwise simply echo the value the user has passed
        let message = if let Some(msg) = &self.message {
            msg.as_str()
        } else {
            &value
        };

        format!("invalid argument `{arg_name}': {message}")
    }

    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_msg(str: impl ToString) -> Self {
        let string = str.to_string();
        Self {
            message: Some(string),
        }
    }
}

impl From<ParseIntError> for ArgParseErr {
    fn from(_value: ParseIntError) -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn echoes_value_without_message() {
        let err = ArgParseErr::new();
        assert_eq!(
            err.display_with_arg("width", OsStr::new("abc")),
            "invalid argument `width': abc"
        );
    }

    #[test]
    fn prefers_specific_message() {
        let err = ArgParseErr::with_msg("must be positive");
        assert_eq!(
            err.display_with_arg("height", OsStr::new("-3")),
            "invalid argument `height': must be positive"
        );
    }
}
