//! The image capability the resize is built on.
//!
//! Everything that touches pixels or codecs sits behind [`ImageBackend`],
//! so the orchestration in [`crate::plan`] can be exercised without real images.

use std::path::Path;

use crate::{decode, encode, error::ResizeError, image::Image, operations};

pub trait ImageBackend {
    type Image;

    /// Reads and decodes the file at `path`.
    fn decode(&self, path: &Path) -> Result<Self::Image, ResizeError>;

    /// Resamples to exactly `width` x `height` with a high-quality filter.
    fn resample(
        &self,
        image: Self::Image,
        width: u32,
        height: u32,
    ) -> Result<Self::Image, ResizeError>;

    /// Encodes in the format implied by `path` (or the original one) and replaces the file.
    fn encode_and_overwrite(&self, image: &Self::Image, path: &Path) -> Result<(), ResizeError>;
}

/// Backend built on the `image` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct ImageRs;

impl ImageBackend for ImageRs {
    type Image = Image;

    fn decode(&self, path: &Path) -> Result<Image, ResizeError> {
        decode::decode(path)
    }

    fn resample(&self, mut image: Image, width: u32, height: u32) -> Result<Image, ResizeError> {
        operations::resize(&mut image, width, height)?;
        Ok(image)
    }

    fn encode_and_overwrite(&self, image: &Image, path: &Path) -> Result<(), ResizeError> {
        encode::encode_and_overwrite(image, path)
    }
}
