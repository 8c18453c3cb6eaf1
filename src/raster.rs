pub mod reader;
pub mod writer;

pub const COMPONENTS_PER_DOT: usize = 4;

/// Interleaved 8 bit RGBA dots, row-major, non-premultiplied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
    width: u32,
    height: u32,
    dots: Vec<u8>,
}

impl Image {
    pub fn new(width: u32, height: u32, dots: Vec<u8>) -> Self {
        let expected_length = width as usize * height as usize * COMPONENTS_PER_DOT;
        if dots.len() != expected_length {
            panic!(
                "Image of {}x{} needs {} components, but got {}",
                width,
                height,
                expected_length,
                dots.len()
            );
        }
        Self {
            width,
            height,
            dots,
        }
    }

    pub fn filled(width: u32, height: u32, dot: [u8; COMPONENTS_PER_DOT]) -> Self {
        let number_of_dots = width as usize * height as usize;
        let dots = dot
            .iter()
            .copied()
            .cycle()
            .take(number_of_dots * COMPONENTS_PER_DOT)
            .collect();
        Self {
            width,
            height,
            dots,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dots(&self) -> &[u8] {
        &self.dots
    }

    pub fn dots_mut(&mut self) -> &mut [u8] {
        &mut self.dots
    }

    pub fn number_of_dots(&self) -> usize {
        self.dots.len() / COMPONENTS_PER_DOT
    }

    pub fn dot(&self, column_index: u32, row_index: u32) -> [u8; COMPONENTS_PER_DOT] {
        let index = (row_index as usize * self.width as usize + column_index as usize)
            * COMPONENTS_PER_DOT;
        let mut dot = [0; COMPONENTS_PER_DOT];
        dot.copy_from_slice(&self.dots[index..index + COMPONENTS_PER_DOT]);
        dot
    }
}

pub trait ImageReader {
    fn read_image(&mut self) -> crate::Result<Image>;
}

pub trait ImageWriter {
    fn write_image(&mut self) -> crate::Result<()>;
}
