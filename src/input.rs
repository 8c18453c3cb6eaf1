use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::mask::ChannelMask;
use crate::raster::reader::DecodingImageReader;
use crate::raster::{Image, ImageReader};
use crate::Result;

/// An image path together with the mask its channels are merged with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageSource {
    pub path: PathBuf,
    pub mask: ChannelMask,
}

impl ImageSource {
    pub fn new(path: impl Into<PathBuf>, mask: ChannelMask) -> Self {
        Self {
            path: path.into(),
            mask,
        }
    }
}

pub struct InputImage {
    path: PathBuf,
    mask: ChannelMask,
    image: Image,
}

impl InputImage {
    pub fn new(path: impl Into<PathBuf>, mask: ChannelMask, image: Image) -> Self {
        Self {
            path: path.into(),
            mask,
            image,
        }
    }

    pub fn load(source: &ImageSource) -> Result<Self> {
        let input_file = open_input_file(&source.path)?;
        let mut reader = DecodingImageReader::new(
            BufReader::new(input_file),
            &source.path.display().to_string(),
        );
        let image = reader.read_image()?;
        log::debug!(
            "Loaded '{}' ({}x{}) with mask '{}'",
            source.path.display(),
            image.width(),
            image.height(),
            source.mask
        );
        Ok(Self::new(source.path.clone(), source.mask, image))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn mask(&self) -> &ChannelMask {
        &self.mask
    }

    pub fn image(&self) -> &Image {
        &self.image
    }
}

pub fn load_input_images(sources: &[ImageSource]) -> Result<Vec<InputImage>> {
    sources.iter().map(InputImage::load).collect()
}

fn open_input_file(file_path: &Path) -> Result<File> {
    let path = file_path.display().to_string();
    File::open(file_path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::InputFileNotFound(path),
        ErrorKind::PermissionDenied => Error::NoReadPermissionForInputFile(path),
        _ => Error::UnableToOpenInputFileForReading(path, e),
    })
}
