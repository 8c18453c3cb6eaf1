use std::io::{BufRead, Seek};

use super::{Image, ImageReader};
use crate::error::Error;

/// Reads any format the image codecs recognise by its content and
/// normalises it to RGBA8. Sources without alpha become fully opaque.
pub struct DecodingImageReader<R: BufRead + Seek> {
    reader: R,
    source_name: String,
}

impl<R: BufRead + Seek> DecodingImageReader<R> {
    pub fn new(reader: R, source_name: &str) -> Self {
        Self {
            reader,
            source_name: source_name.to_owned(),
        }
    }
}

impl<R: BufRead + Seek> ImageReader for DecodingImageReader<R> {
    fn read_image(&mut self) -> crate::Result<Image> {
        let decoded = image::ImageReader::new(&mut self.reader)
            .with_guessed_format()
            .map_err(|e| Error::UnableToReadInputFile(self.source_name.clone(), e))?
            .decode()
            .map_err(|e| Error::UnableToDecodeInputImage(self.source_name.clone(), e))?;
        log::debug!(
            "Decoded '{}' with color type {:?}",
            self.source_name,
            decoded.color()
        );
        let rgba = decoded.to_rgba8();
        let (width, height) = rgba.dimensions();
        Ok(Image::new(width, height, rgba.into_raw()))
    }
}
