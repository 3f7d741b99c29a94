use std::path::Path;

use image::{DynamicImage, ImageDecoder, ImageReader};

use crate::{
    error::{ErrorKind, ResizeError},
    image::Image,
    rs_err, rs_try,
};

/// Guesses the format based on file contents and decodes the image,
/// keeping the embedded ICC profile so it can be written back out.
pub fn decode(path: &Path) -> Result<Image, ResizeError> {
    let reader = ImageReader::open(path).map_err(|error| {
        rs_err!(
            ErrorKind::Decode,
            "unable to open image `{}': {error}",
            path.display()
        )
    })?;
    let reader = rs_try!(ErrorKind::Decode, reader.with_guessed_format());
    let format = reader.format();
    let mut decoder = reader.into_decoder().map_err(|error| {
        rs_err!(
            ErrorKind::Decode,
            "no decode delegate for image `{}': {error}",
            path.display()
        )
    })?;
    // a broken profile is not worth failing the whole resize over
    let icc = decoder.icc_profile().unwrap_or_default();
    let pixels = rs_try!(ErrorKind::Decode, DynamicImage::from_decoder(decoder));
    tracing::debug!(
        path = %path.display(),
        width = pixels.width(),
        height = pixels.height(),
        ?format,
        "decoded image"
    );
    Ok(Image {
        format,
        icc,
        pixels,
    })
}
