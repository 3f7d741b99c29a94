//! Format-specific encoders for formats where the generic `image` path
//! would drop metadata or reject the pixel format.

pub mod common;
#[cfg(feature = "gif")]
pub mod gif;
#[cfg(feature = "jpeg")]
pub mod jpeg;
#[cfg(feature = "png")]
pub mod png;
#[cfg(feature = "tiff")]
pub mod tiff;
