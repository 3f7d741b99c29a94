#![no_main]

use std::{ffi::OsString, num::NonZeroU8};

use image::GenericImageView;
use libfuzzer_sys::fuzz_target;
use resize_image::{backend::ImageRs, plan::run};
use resize_image_fuzz::StructuredImage;

fuzz_target!(|input: (StructuredImage, NonZeroU8, NonZeroU8)| {
    let (image, new_width, new_height) = input;
    let new_width = new_width.get() as u32;
    let new_height = new_height.get() as u32;

    let temp_directory = tempfile::tempdir().expect("failed to create temporary directory");
    let path = temp_directory.path().join("input_image.png");
    image.save_as_png(&path).expect("failed to save image as PNG");

    let arguments = vec![
        OsString::from("resize-image"),
        path.clone().into_os_string(),
        OsString::from(new_width.to_string()),
        OsString::from(new_height.to_string()),
    ];
    assert_eq!(run(&ImageRs, arguments), 0);

    let (width, height) = image::open(&path)
        .expect("could not open the resized file")
        .dimensions();
    assert_eq!(width, new_width, "{}", path.display());
    assert_eq!(height, new_height, "{}", path.display());
});
