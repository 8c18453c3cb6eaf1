use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{
    crate_authors, crate_description, crate_name, crate_version, value_parser, Arg, ArgAction,
    ArgMatches, Command,
};

use crate::error::Error;
use crate::input::ImageSource;
use crate::mask::{ChannelMask, InvalidMask};
use crate::raster::writer::OutputFormat;
use crate::{Arguments, Result};

const USAGE: &str = "rgba-channel-merge <IMAGE> <MASK> [<IMAGE> <MASK>]... <OUTPUT>";

const LONG_ABOUT: &str = "A tool to merge specific color channels of multiple images into one RGBA image.

The channel masks for each image must match the regex [rgbax]{4}, with r, g, b and a \
representing the red, green, blue and alpha channel, and x meaning that this channel \
is ignored. E.g. the channel mask \"rbax\" means that the first (red) channel of the \
input image is used as the red channel of the output image, the second (green) is used \
as the blue channel, the third (blue) is used as the alpha channel and the fourth \
(alpha) is ignored.

The output image is as large as the largest input. Channels no input writes to are \
opaque black. Later images overwrite channels that earlier images wrote.";

const INPUTS_ARGUMENT_ID: &str = "inputs";

pub struct CLIParser {
    command: Command,
}

impl CLIParser {
    pub fn new() -> Self {
        let command = Self::create_base_command();
        let command = Self::register_arguments(command);
        CLIParser { command }
    }

    /// Parses the process arguments, the first item is the program name.
    /// Help and version requests print and exit the process.
    pub fn parse<I, T>(&mut self, itr: I) -> Result<Arguments>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = match self.command.try_get_matches_from_mut(itr) {
            Ok(matches) => matches,
            Err(e) if Self::is_informational(e.kind()) => e.exit(),
            Err(e) => return Err(Error::InvalidCommandLine(e.to_string())),
        };
        let values = Self::extract_inputs_argument(&matches);
        parse_arguments(&values)
    }

    fn is_informational(kind: ErrorKind) -> bool {
        matches!(
            kind,
            ErrorKind::DisplayHelp
                | ErrorKind::DisplayVersion
                | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
        )
    }

    fn register_arguments(command: Command) -> Command {
        Self::register_inputs_argument(command)
    }

    fn register_inputs_argument(command: Command) -> Command {
        command.arg(Self::create_inputs_argument())
    }

    fn create_base_command() -> Command {
        Command::new(crate_name!())
            .version(crate_version!())
            .author(crate_authors!())
            .about(crate_description!())
            .long_about(LONG_ABOUT)
            .override_usage(USAGE)
    }

    fn create_inputs_argument() -> Arg {
        Arg::new(INPUTS_ARGUMENT_ID)
            .help("Pairs of image path and channel mask, followed by the PNG output path")
            .value_name("ARGUMENT")
            .value_parser(value_parser!(OsString))
            .action(ArgAction::Append)
            .num_args(1..)
            .required(false)
    }

    fn extract_inputs_argument(matches: &ArgMatches) -> Vec<OsString> {
        matches
            .get_many::<OsString>(INPUTS_ARGUMENT_ID)
            .map(|values| values.cloned().collect())
            .unwrap_or_default()
    }
}

impl Default for CLIParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Validates `<image> <mask> [<image> <mask>]... <output>`.
///
/// Input files are not touched here, only the output extension is checked.
/// Paths are taken as they are, masks must be valid unicode.
pub fn parse_arguments<S: AsRef<OsStr>>(args: &[S]) -> Result<Arguments> {
    if args.len() < 3 || args.len() % 2 == 0 {
        return Err(Error::BadArgumentShape(args.len()));
    }

    let (output, pairs) = args
        .split_last()
        .ok_or(Error::BadArgumentShape(args.len()))?;
    let sources = pairs
        .chunks_exact(2)
        .enumerate()
        .map(|(index, pair)| parse_pair(index + 1, pair[0].as_ref(), pair[1].as_ref()))
        .collect::<Result<Vec<ImageSource>>>()?;

    let output_file = PathBuf::from(output.as_ref());
    let output_format = OutputFormat::from_path(&output_file)
        .ok_or_else(|| Error::UnsupportedOutputFormat(output_file.display().to_string()))?;

    Ok(Arguments {
        sources,
        output_file,
        output_format,
    })
}

fn parse_pair(pair_number: usize, path: &OsStr, raw_mask: &OsStr) -> Result<ImageSource> {
    let invalid_mask = |reason| {
        Error::InvalidChannelMask(pair_number, raw_mask.to_string_lossy().into_owned(), reason)
    };
    let mask = raw_mask
        .to_str()
        .ok_or_else(|| invalid_mask(InvalidMask::NotUnicode))?
        .parse::<ChannelMask>()
        .map_err(invalid_mask)?;
    Ok(ImageSource::new(path, mask))
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use clap::Command;

    use super::{parse_arguments, CLIParser};
    use crate::error::Error;
    use crate::mask::{Channel, InvalidMask};
    use crate::raster::writer::OutputFormat;

    const PROGRAM_NAME_ARGUMENT: &str = "test_program_name";

    #[test]
    fn parse_single_pair() {
        let arguments = parse_arguments(&["a.png", "rgba", "out.png"]).unwrap();
        assert_eq!(arguments.sources.len(), 1);
        assert_eq!(arguments.sources[0].path, Path::new("a.png"));
        assert_eq!(
            arguments.sources[0].mask.channels(),
            &[Channel::Red, Channel::Green, Channel::Blue, Channel::Alpha]
        );
        assert_eq!(arguments.output_file, Path::new("out.png"));
        assert_eq!(arguments.output_format, OutputFormat::Png);
    }

    #[test]
    fn parse_several_pairs_in_order() {
        let arguments =
            parse_arguments(&["first.png", "gbrx", "second.jpg", "xxxa", "output.png"]).unwrap();
        let paths: Vec<&Path> = arguments.sources.iter().map(|s| s.path.as_path()).collect();
        assert_eq!(paths, vec![Path::new("first.png"), Path::new("second.jpg")]);
        assert_eq!(arguments.sources[1].mask.to_string(), "xxxa");
    }

    #[test]
    fn reject_too_few_arguments() {
        for args in [vec![], vec!["a.png"], vec!["a.png", "rgba"]] {
            match parse_arguments(&args) {
                Err(Error::BadArgumentShape(n)) => assert_eq!(n, args.len()),
                _ => panic!("Bad shape of {:?} not detected", args),
            }
        }
    }

    #[test]
    fn reject_even_number_of_arguments() {
        let args = ["a.png", "rgba", "b.png", "out.png"];
        if let Err(Error::BadArgumentShape(4)) = parse_arguments(&args) {
            return;
        }
        panic!("Even number of arguments not detected");
    }

    #[test]
    fn reject_unsupported_output_format() {
        match parse_arguments(&["a.png", "rgba", "out.jpg"]) {
            Err(Error::UnsupportedOutputFormat(path)) => assert_eq!(path, "out.jpg"),
            _ => panic!("Unsupported output format not detected"),
        }
    }

    #[test]
    fn invalid_mask_names_failing_pair() {
        match parse_arguments(&["a.png", "rgba", "b.png", "rgbq", "out.png"]) {
            Err(Error::InvalidChannelMask(pair, mask, reason)) => {
                assert_eq!(pair, 2);
                assert_eq!(mask, "rgbq");
                assert_eq!(reason, InvalidMask::IllegalCharacter('q'));
            }
            _ => panic!("Invalid mask not detected"),
        }
    }

    #[test]
    fn mask_is_checked_before_output_format() {
        match parse_arguments(&["a.png", "rg", "out.jpg"]) {
            Err(Error::InvalidChannelMask(1, _, InvalidMask::WrongLength(2))) => {}
            _ => panic!("Invalid mask not reported first"),
        }
    }

    #[test]
    fn parse_inputs_argument() {
        let command = Command::new("test");
        let command = CLIParser::register_inputs_argument(command);
        let matches =
            command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT, "a.png", "rgba", "out.png"]);
        let values = CLIParser::extract_inputs_argument(&matches);
        assert_eq!(values, vec!["a.png", "rgba", "out.png"]);
    }

    #[test]
    fn parse_without_inputs_is_bad_shape() {
        let mut cli_parser = CLIParser::default();
        match cli_parser.parse(vec![PROGRAM_NAME_ARGUMENT]) {
            Err(Error::BadArgumentShape(0)) => {}
            _ => panic!("Missing arguments not detected"),
        }
    }

    #[test]
    fn parse_process_arguments() {
        let mut cli_parser = CLIParser::default();
        let arguments = cli_parser
            .parse(vec![
                PROGRAM_NAME_ARGUMENT,
                "/input_directory/first.png",
                "rxxx",
                "/input_directory/second.png",
                "xgxx",
                "/output_directory/merged.png",
            ])
            .unwrap();
        assert_eq!(arguments.sources.len(), 2);
        assert_eq!(
            arguments.output_file.file_name().unwrap(),
            "merged.png",
            "output file does not match"
        );
    }

    #[cfg(unix)]
    #[test]
    fn accept_non_unicode_paths() {
        use std::ffi::OsString;
        use std::os::unix::ffi::OsStringExt;

        let input_file = OsString::from_vec(b"f\xff.png".to_vec());
        let output_file = OsString::from_vec(b"out\xfe.png".to_vec());
        let mut cli_parser = CLIParser::default();
        let arguments = cli_parser
            .parse(vec![
                OsString::from(PROGRAM_NAME_ARGUMENT),
                input_file.clone(),
                OsString::from("rgba"),
                output_file.clone(),
            ])
            .unwrap();
        assert_eq!(arguments.sources[0].path.as_os_str(), input_file.as_os_str());
        assert_eq!(arguments.output_file.as_os_str(), output_file.as_os_str());
        assert_eq!(arguments.output_format, OutputFormat::Png);
    }

    #[cfg(unix)]
    #[test]
    fn reject_non_unicode_mask() {
        use std::ffi::OsString;
        use std::os::unix::ffi::OsStringExt;

        let args = vec![
            OsString::from("a.png"),
            OsString::from_vec(b"rg\xffa".to_vec()),
            OsString::from("out.png"),
        ];
        match parse_arguments(&args) {
            Err(Error::InvalidChannelMask(1, _, InvalidMask::NotUnicode)) => {}
            _ => panic!("Non unicode mask not detected"),
        }
    }

    #[test]
    fn accept_hidden_png_output() {
        let arguments = parse_arguments(&["a.png", "rgba", "dir/.png"]).unwrap();
        assert_eq!(arguments.output_file, Path::new("dir/.png"));
        assert_eq!(arguments.output_format, OutputFormat::Png);
    }

    #[test]
    fn unknown_flag_is_invalid_command_line() {
        let mut cli_parser = CLIParser::default();
        match cli_parser.parse(vec![PROGRAM_NAME_ARGUMENT, "--bogus", "a.png"]) {
            Err(Error::InvalidCommandLine(message)) => assert!(message.contains("--bogus")),
            _ => panic!("Unknown flag not detected"),
        }
    }
}
