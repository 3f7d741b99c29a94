use std::borrow::Cow;
use std::io::Write;

use image::codecs::jpeg::JpegEncoder;
use image::DynamicImage;

use crate::encoders::common::write_icc;
use crate::error::{ErrorKind, ResizeError};
use crate::{image::Image, rs_try};

/// Quality used when the caller expresses no preference
pub const DEFAULT_QUALITY: u8 = 75;

pub fn encode<W: Write>(image: &Image, writer: &mut W) -> Result<(), ResizeError> {
    let mut encoder = JpegEncoder::new_with_quality(writer, DEFAULT_QUALITY);
    let pixels = to_jpeg_compatible(&image.pixels);
    write_icc(&mut encoder, image, pixels.color());
    Ok(rs_try!(ErrorKind::Encode, pixels.write_with_encoder(encoder)))
}

/// JPEG only stores 8-bit grayscale or RGB, so alpha and extra precision are dropped.
fn to_jpeg_compatible(pixels: &DynamicImage) -> Cow<'_, DynamicImage> {
    use image::DynamicImage::*;
    match pixels {
        ImageLuma8(_) | ImageRgb8(_) => Cow::Borrowed(pixels),
        ImageLumaA8(_) | ImageLuma16(_) | ImageLumaA16(_) => {
            Cow::Owned(ImageLuma8(pixels.to_luma8()))
        }
        _ => Cow::Owned(ImageRgb8(pixels.to_rgb8())),
    }
}
