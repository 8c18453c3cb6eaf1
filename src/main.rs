use std::env::args_os;
use std::process::ExitCode;

use rgba_channel_merge::{merge_channels, CLIParser};

fn main() -> ExitCode {
    let mut cli_parser = CLIParser::default();
    let result = cli_parser
        .parse(args_os())
        .and_then(|arguments| merge_channels(&arguments));
    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Channel merge failed because of: {}", e);
            ExitCode::from(e.class().exit_code())
        }
    }
}
