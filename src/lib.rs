use std::{
    fs::{File, OpenOptions},
    io::BufWriter,
    path::{Path, PathBuf},
};

pub use canvas::{Canvas, BACKGROUND};
pub use cli::{parse_arguments, CLIParser};
pub use error::{Error, ErrorClass};
pub use input::{load_input_images, ImageSource, InputImage};
pub use mask::{Channel, ChannelMask, InvalidMask};
pub use merge::{merge_all, merge_channel};
pub use raster::{writer::OutputFormat, Image};
use raster::{writer::png::PngImageWriter, ImageWriter};

mod canvas;
mod cli;
mod error;
mod input;
mod logger;
mod mask;
mod merge;
mod raster;

pub type Result<T> = std::result::Result<T, error::Error>;

#[derive(Debug)]
pub struct Arguments {
    pub sources: Vec<ImageSource>,
    pub output_file: PathBuf,
    pub output_format: OutputFormat,
}

fn open_output_file(file_path: &Path) -> Result<File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(file_path)
        .map_err(|e| Error::UnableToOpenOutputFileForWriting(file_path.display().to_string(), e))
}

pub fn write_output_image(image: &Image, file_path: &Path, format: OutputFormat) -> Result<()> {
    let output_file = open_output_file(file_path)?;
    let output_file_writer = BufWriter::new(output_file);
    let destination_name = file_path.display().to_string();
    match format {
        OutputFormat::Png => {
            PngImageWriter::new(output_file_writer, image, &destination_name).write_image()
        }
    }
}

/// Loads every source, merges them in order onto a fresh canvas and writes
/// the result. The output file is only created once all inputs were merged.
pub fn merge_channels(arguments: &Arguments) -> Result<()> {
    let input_images = load_input_images(&arguments.sources)?;
    let mut canvas = Canvas::enclosing(input_images.iter().map(InputImage::image));
    log::info!(
        "Merging {} image(s) onto a {}x{} canvas",
        input_images.len(),
        canvas.width(),
        canvas.height()
    );
    merge_all(&input_images, &mut canvas);
    write_output_image(
        canvas.image(),
        &arguments.output_file,
        arguments.output_format,
    )?;
    log::info!("Wrote '{}'", arguments.output_file.display());
    Ok(())
}
