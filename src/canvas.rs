use crate::raster::{Image, COMPONENTS_PER_DOT};

/// opaque black
pub const BACKGROUND: [u8; COMPONENTS_PER_DOT] = [0, 0, 0, 255];

/// The output buffer every input image is merged into.
pub struct Canvas {
    image: Image,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: Image::filled(width, height, BACKGROUND),
        }
    }

    /// Creates a canvas large enough to hold each of the given images,
    /// i.e. the maximum width by the maximum height.
    pub fn enclosing<'a, I>(images: I) -> Self
    where
        I: IntoIterator<Item = &'a Image>,
    {
        let (width, height) = images
            .into_iter()
            .fold((0, 0), |(width, height), image| {
                (width.max(image.width()), height.max(image.height()))
            });
        Self::new(width, height)
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn image(&self) -> &Image {
        &self.image
    }

    pub fn dots_mut(&mut self) -> &mut [u8] {
        self.image.dots_mut()
    }
}
