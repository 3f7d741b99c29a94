use image::{DynamicImage, ImageFormat};

#[derive(Debug, Clone)]
pub struct Image {
    /// Format the pixels were decoded from, if it could be determined
    pub format: Option<ImageFormat>,
    pub icc: Option<Vec<u8>>,
    pub pixels: DynamicImage,
}

impl Image {
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }
}
