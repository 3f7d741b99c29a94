use std::borrow::Cow;
use std::io::Write;

use image::codecs::gif::GifEncoder;
use image::{DynamicImage, ExtendedColorType};

use crate::error::{ErrorKind, ResizeError};
use crate::{image::Image, rs_try};

/// Quantization speed, 1 (best palette) to 30 (fastest)
const SPEED: i32 = 10;

pub fn encode<W: Write>(image: &Image, writer: &mut W) -> Result<(), ResizeError> {
    let mut encoder = GifEncoder::new_with_speed(writer, SPEED);
    let width = image.width();
    let height = image.height();
    // GIF is palette-based; hand the quantizer 8-bit RGB(A) whatever the source precision
    Ok(match to_8bit_color(&image.pixels).as_ref() {
        DynamicImage::ImageRgb8(data) => {
            rs_try!(
                ErrorKind::Encode,
                encoder.encode(data.as_raw(), width, height, ExtendedColorType::Rgb8)
            )
        }
        DynamicImage::ImageRgba8(data) => {
            rs_try!(
                ErrorKind::Encode,
                encoder.encode(data.as_raw(), width, height, ExtendedColorType::Rgba8)
            )
        }
        _ => unreachable!(), // we've just converted it to RGB(A)
    })
}

fn to_8bit_color(pixels: &DynamicImage) -> Cow<'_, DynamicImage> {
    use image::DynamicImage::*;
    match pixels {
        ImageRgb8(_) | ImageRgba8(_) => Cow::Borrowed(pixels),
        _ if pixels.color().has_alpha() => Cow::Owned(ImageRgba8(pixels.to_rgba8())),
        _ => Cow::Owned(ImageRgb8(pixels.to_rgb8())),
    }
}
