use std::fmt::{Debug, Display};

/// Which stage of the resize failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Wrong number of command-line arguments
    Usage,
    /// Width or height is not a valid dimension
    Parse,
    /// The input could not be read or decoded
    Decode,
    /// The resampled image would not fit in memory
    Resample,
    /// No encoder for the output, or the encoder rejected the image
    Encode,
    /// The result could not be written back to disk
    Write,
}

pub struct ResizeError {
    pub kind: ErrorKind,
    pub message: String,
}

impl ResizeError {
    pub fn new(kind: ErrorKind, message: String) -> Self {
        Self { kind, message }
    }
}

impl Display for ResizeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl Debug for ResizeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResizeError")
            .field("kind", &self.kind)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for ResizeError {}

#[macro_export]
macro_rules! rs_err {
    ($kind:expr, $($msg:tt)+) => {
        $crate::error::ResizeError::new(
            $kind,
            format!(
                "resize-image: {} @ {}:{}:{}",
                format_args!($($msg)+),
                file!(),
                line!(),
                column!()
            ),
        )
    };
}

#[macro_export]
macro_rules! rs_try {
    ($kind:expr, $expr:expr $(,)?) => {
        match $expr {
            std::result::Result::Ok(val) => val,
            std::result::Result::Err(err) => {
                return std::result::Result::Err($crate::rs_err!($kind, "{}", err));
            }
        }
    };
}
