//! Helpers shared between all encoders

use crate::image::Image;
use image::{ColorType, ImageEncoder};

/// Attaches the source ICC profile, unless it describes a different color space
/// than the pixels being written (e.g. a CMYK profile on pixels decoded to RGB).
pub fn write_icc(encoder: &mut impl ImageEncoder, image: &Image, written: ColorType) {
    if let Some(icc) = image.icc.clone() {
        if icc_matches_color_type(&icc, written) {
            let _ = encoder.set_icc_profile(icc); // ignore UnsupportedError
        } else {
            tracing::debug!(?written, "dropping ICC profile for a different color space");
        }
    };
}

/// Checks the data color space field of the profile header against the pixel layout.
fn icc_matches_color_type(icc: &[u8], color: ColorType) -> bool {
    let Some(color_space) = icc.get(16..20) else {
        return false;
    };
    let expected: &[u8] = if color.has_color() { b"RGB " } else { b"GRAY" };
    color_space == expected
}
