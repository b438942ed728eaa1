use anyhow::{Context, Result};
use iced::widget::image;

#[derive(Clone)]
pub struct ImageInput {
    pub image_handle: image::Handle,
    pub width: u32,
    pub height: u32,
    raw_data: Vec<u8>,
}

impl std::fmt::Debug for ImageInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageInput")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.raw_data.len())
            .finish()
    }
}

impl ImageInput {
    pub fn build_from_raw_data(width_pixels: u32, height_pixels: u32, raw_rgba_data: Vec<u8>) -> Self {
        log::debug!(
            "[IMAGE_INPUT] building input: {}x{}, {} bytes",
            width_pixels,
            height_pixels,
            raw_rgba_data.len()
        );

        Self {
            image_handle: image::Handle::from_rgba(
                width_pixels,
                height_pixels,
                raw_rgba_data.clone(),
            ),
            width: width_pixels,
            height: height_pixels,
            raw_data: raw_rgba_data,
        }
    }

    pub fn decode_from_encoded_bytes(encoded_bytes: &[u8]) -> Result<Self> {
        if encoded_bytes.is_empty() {
            anyhow::bail!("Image file is empty");
        }

        let decoded = ::image::load_from_memory(encoded_bytes)
            .context("Failed to decode image data")?
            .to_rgba8();

        let (width, height) = decoded.dimensions();
        Ok(Self::build_from_raw_data(width, height, decoded.into_raw()))
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.raw_data.is_empty()
    }

    #[cfg(test)]
    pub fn raw_data(&self) -> &[u8] {
        &self.raw_data
    }

    pub fn encode_as_png(&self) -> Result<Vec<u8>> {
        let rgba_image =
            ::image::RgbaImage::from_raw(self.width, self.height, self.raw_data.clone())
                .ok_or_else(|| {
                    anyhow::anyhow!(
                        "Pixel buffer of {} bytes does not match {}x{} RGBA image",
                        self.raw_data.len(),
                        self.width,
                        self.height
                    )
                })?;

        let mut encoded = Vec::new();
        ::image::DynamicImage::ImageRgba8(rgba_image)
            .write_to(
                &mut std::io::Cursor::new(&mut encoded),
                ::image::ImageFormat::Png,
            )
            .context("Failed to convert image to PNG format")?;

        log::debug!(
            "[IMAGE_INPUT] encoded {}x{} image as {} PNG bytes",
            self.width,
            self.height,
            encoded.len()
        );
        Ok(encoded)
    }
}
