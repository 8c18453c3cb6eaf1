use std::io::Write;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};

use crate::error::Error;
use crate::raster::{Image, ImageWriter};

pub struct PngImageWriter<'a, T: Write> {
    writer: T,
    image: &'a Image,
    destination_name: String,
}

impl<'a, T: Write> PngImageWriter<'a, T> {
    pub fn new(writer: T, image: &'a Image, destination_name: &str) -> Self {
        Self {
            writer,
            image,
            destination_name: destination_name.to_owned(),
        }
    }
}

impl<T: Write> ImageWriter for PngImageWriter<'_, T> {
    fn write_image(&mut self) -> crate::Result<()> {
        PngEncoder::new(&mut self.writer)
            .write_image(
                self.image.dots(),
                self.image.width(),
                self.image.height(),
                ExtendedColorType::Rgba8,
            )
            .map_err(|e| Error::UnableToEncodeOutputImage(self.destination_name.clone(), e))?;
        self.writer
            .flush()
            .map_err(|e| Error::UnableToWriteOutputFile(self.destination_name.clone(), e))
    }
}

#[cfg(test)]
mod tests {
    use std::io::{self, Write};

    use super::PngImageWriter;
    use crate::error::Error;
    use crate::raster::{Image, ImageWriter};

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_rgba8_png() {
        let image = Image::new(2, 1, vec![255, 0, 0, 255, 0, 0, 255, 128]);
        let mut buffer = Vec::new();
        PngImageWriter::new(&mut buffer, &image, "memory")
            .write_image()
            .unwrap();
        let decoded = image::load_from_memory_with_format(&buffer, image::ImageFormat::Png)
            .unwrap();
        assert_eq!(decoded.color(), image::ColorType::Rgba8);
        assert_eq!(decoded.to_rgba8().into_raw(), image.dots());
    }

    #[test]
    fn report_write_failure() {
        let image = Image::filled(1, 1, [0, 0, 0, 255]);
        let result = PngImageWriter::new(FailingWriter, &image, "broken.png").write_image();
        match result {
            Err(Error::UnableToEncodeOutputImage(name, _)) => assert_eq!(name, "broken.png"),
            Err(other) => panic!("unexpected error {}", other),
            Ok(_) => panic!("write failure was not detected"),
        }
    }
}
