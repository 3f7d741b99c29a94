use image::{imageops::FilterType, Limits};

use crate::{
    error::{ErrorKind, ResizeError},
    image::Image,
    rs_err,
};

/// Three-lobed Lanczos, the high-quality choice for both downscaling and upscaling
const RESAMPLING_FILTER: FilterType = FilterType::Lanczos3;

/// Resamples the image to exactly `dst_width` x `dst_height`, ignoring the aspect ratio.
pub fn resize(image: &mut Image, dst_width: u32, dst_height: u32) -> Result<(), ResizeError> {
    if image.width() == dst_width && image.height() == dst_height {
        return Ok(());
    }
    check_allocation(image, dst_width, dst_height)?;
    tracing::debug!(
        from_width = image.width(),
        from_height = image.height(),
        to_width = dst_width,
        to_height = dst_height,
        "resampling"
    );
    image.pixels = image
        .pixels
        .resize_exact(dst_width, dst_height, RESAMPLING_FILTER);
    Ok(())
}

/// Holds the output buffer to the same allocation limit the decoder applies to inputs.
fn check_allocation(image: &Image, dst_width: u32, dst_height: u32) -> Result<(), ResizeError> {
    let bytes_per_pixel = u64::from(image.pixels.color().bytes_per_pixel());
    let required = u64::from(dst_width)
        .checked_mul(u64::from(dst_height))
        .and_then(|pixels| pixels.checked_mul(bytes_per_pixel));
    let limit = Limits::default().max_alloc;
    match (required, limit) {
        (Some(required), Some(limit)) if required <= limit => Ok(()),
        (Some(_), None) => Ok(()),
        _ => Err(rs_err!(
            ErrorKind::Resample,
            "{dst_width}x{dst_height} image exceeds the memory limit of {} bytes",
            limit.unwrap_or(u64::MAX)
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, Rgb, RgbImage, Rgba, RgbaImage};
    use quickcheck_macros::quickcheck;

    fn image_from(pixels: DynamicImage) -> Image {
        Image {
            format: None,
            icc: None,
            pixels,
        }
    }

    fn gradient(width: u32, height: u32) -> Image {
        let pixels = RgbImage::from_fn(width, height, |x, y| {
            Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
        });
        image_from(DynamicImage::ImageRgb8(pixels))
    }

    #[test]
    fn downscale_ignores_aspect_ratio() {
        let mut image = gradient(1000, 500);
        resize(&mut image, 100, 50).unwrap();
        assert_eq!((image.width(), image.height()), (100, 50));

        let mut image = gradient(1000, 500);
        resize(&mut image, 10, 300).unwrap();
        assert_eq!((image.width(), image.height()), (10, 300));
    }

    #[test]
    fn upscale() {
        let mut image = gradient(4, 3);
        resize(&mut image, 40, 90).unwrap();
        assert_eq!((image.width(), image.height()), (40, 90));
    }

    #[test]
    fn same_size_leaves_pixels_untouched() {
        let mut image = gradient(17, 9);
        let before = image.pixels.clone();
        resize(&mut image, 17, 9).unwrap();
        assert_eq!(image.pixels, before);
    }

    #[test]
    fn keeps_color_type() {
        let mut image = image_from(DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            8,
            8,
            Rgba([10, 20, 30, 128]),
        )));
        resize(&mut image, 3, 5).unwrap();
        assert_eq!(image.pixels.color(), image::ColorType::Rgba8);
    }

    #[quickcheck]
    fn output_has_requested_dimensions(src: (u8, u8), dst: (u8, u8)) -> bool {
        let (src_w, src_h) = (u32::from(src.0.max(1)), u32::from(src.1.max(1)));
        let (dst_w, dst_h) = (u32::from(dst.0.max(1)), u32::from(dst.1.max(1)));
        let mut image = gradient(src_w, src_h);
        resize(&mut image, dst_w, dst_h).unwrap();
        image.width() == dst_w && image.height() == dst_h
    }

    #[test]
    fn oversized_target_is_an_error() {
        let mut image = gradient(2, 2);
        let err = resize(&mut image, u32::MAX, u32::MAX).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Resample);
        // untouched on failure
        assert_eq!((image.width(), image.height()), (2, 2));

        let limit = Limits::default().max_alloc.unwrap();
        let too_wide = u32::try_from(limit / 3 + 1).unwrap_or(u32::MAX);
        assert!(resize(&mut image, too_wide, 1).is_err());
    }
}
