use std::fmt::Display;

use crate::mask::InvalidMask;

#[derive(Debug)]
pub enum Error {
    InvalidCommandLine(String),
    BadArgumentShape(usize),
    InvalidChannelMask(usize, String, InvalidMask),
    UnsupportedOutputFormat(String),
    InputFileNotFound(String),
    NoReadPermissionForInputFile(String),
    UnableToOpenInputFileForReading(String, std::io::Error),
    UnableToReadInputFile(String, std::io::Error),
    UnableToDecodeInputImage(String, image::ImageError),
    UnableToOpenOutputFileForWriting(String, std::io::Error),
    UnableToEncodeOutputImage(String, image::ImageError),
    UnableToWriteOutputFile(String, std::io::Error),
}

/// Failure classes that are reported with distinct exit codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorClass {
    Arguments,
    Input,
    Output,
}

impl ErrorClass {
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Arguments => 1,
            Self::Input => 2,
            Self::Output => 3,
        }
    }
}

impl Error {
    pub fn class(&self) -> ErrorClass {
        match self {
            Self::InvalidCommandLine(_)
            | Self::BadArgumentShape(_)
            | Self::InvalidChannelMask(..)
            | Self::UnsupportedOutputFormat(_) => ErrorClass::Arguments,
            Self::InputFileNotFound(_)
            | Self::NoReadPermissionForInputFile(_)
            | Self::UnableToOpenInputFileForReading(..)
            | Self::UnableToReadInputFile(..)
            | Self::UnableToDecodeInputImage(..) => ErrorClass::Input,
            Self::UnableToOpenOutputFileForWriting(..)
            | Self::UnableToEncodeOutputImage(..)
            | Self::UnableToWriteOutputFile(..) => ErrorClass::Output,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCommandLine(message) => write!(f, "{}", message.trim_end()),
            Self::BadArgumentShape(number_of_arguments) => {
                write!(
                    f,
                    "Wrong input format. Expected pairs of image path and channel mask followed by the output path, but got {} arguments",
                    number_of_arguments
                )
            }
            Self::InvalidChannelMask(pair_number, mask, reason) => {
                write!(
                    f,
                    "Channel mask '{}' of image {} is invalid: {}",
                    mask, pair_number, reason
                )
            }
            Self::UnsupportedOutputFormat(path) => {
                write!(
                    f,
                    "Output file '{}' is not supported. Only .png files are supported as output files",
                    path
                )
            }
            Self::InputFileNotFound(path) => {
                write!(f, "Input file '{}' not found", path)
            }
            Self::NoReadPermissionForInputFile(path) => {
                write!(
                    f,
                    "Unable open file '{}' for reading. Permission denied.",
                    path
                )
            }
            Self::UnableToOpenInputFileForReading(path, error) => {
                write!(
                    f,
                    "Unable to open input file '{}' for reading: {}",
                    path, error
                )
            }
            Self::UnableToReadInputFile(path, error) => {
                write!(f, "Unable to read input file '{}': {}", path, error)
            }
            Self::UnableToDecodeInputImage(path, error) => {
                write!(f, "Unable to decode input image '{}': {}", path, error)
            }
            Self::UnableToOpenOutputFileForWriting(path, error) => {
                write!(
                    f,
                    "Unable to open output file '{}' for writing: {}",
                    path, error
                )
            }
            Self::UnableToEncodeOutputImage(path, error) => {
                write!(f, "Unable to encode output image '{}': {}", path, error)
            }
            Self::UnableToWriteOutputFile(path, error) => {
                write!(f, "Unable to write output file '{}': {}", path, error)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidChannelMask(_, _, reason) => Some(reason),
            Self::UnableToOpenInputFileForReading(_, error)
            | Self::UnableToReadInputFile(_, error)
            | Self::UnableToOpenOutputFileForWriting(_, error)
            | Self::UnableToWriteOutputFile(_, error) => Some(error),
            Self::UnableToDecodeInputImage(_, error) | Self::UnableToEncodeOutputImage(_, error) => {
                Some(error)
            }
            _ => None,
        }
    }
}
