use std::io::Write;

use image::codecs::png::PngEncoder;

use crate::encoders::common::write_icc;
use crate::error::{ErrorKind, ResizeError};
use crate::{image::Image, rs_try};

pub fn encode<W: Write>(image: &Image, writer: &mut W) -> Result<(), ResizeError> {
    let mut encoder = PngEncoder::new(writer);
    write_icc(&mut encoder, image, image.pixels.color());
    Ok(rs_try!(ErrorKind::Encode, image.pixels.write_with_encoder(encoder)))
}
