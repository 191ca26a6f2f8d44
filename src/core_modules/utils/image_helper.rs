pub mod image_helper {
    use image::ImageEncoder;
    use image::error::{ImageError, ParameterError, ParameterErrorKind};
    use std::path::Path;

    const CHANNELS: usize = 3;

    /// Encodes a tightly packed RGB8 buffer as a PNG file at `path`.
    pub fn save_png(
        path: impl AsRef<Path>,
        width: u32,
        height: u32,
        buffer: &[u8],
    ) -> Result<(), ImageError> {
        // The encoder panics on a size mismatch, so check up front.
        if buffer.len() != width as usize * height as usize * CHANNELS {
            return Err(ImageError::Parameter(ParameterError::from_kind(
                ParameterErrorKind::DimensionMismatch,
            )));
        }

        let output = std::io::BufWriter::new(std::fs::File::create(path)?);
        let encoder = image::codecs::png::PngEncoder::new(output);

        encoder.write_image(buffer, width, height, image::ExtendedColorType::Rgb8)?;

        Ok(())
    }
}
