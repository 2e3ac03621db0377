use std::{fs, io};

use clap::Parser;
use softmath::get_result;

/// Runs calculator scripts against math functions rebuilt from plain
/// arithmetic.
///
/// The script comes from the command line, from a file with `--file`, or from
/// standard input when no contents are given.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat CONTENTS as the path of a script file.
    #[arg(short, long, requires = "contents")]
    file: bool,

    /// Print the value of the script's last statement.
    #[arg(short, long)]
    pipe_mode: bool,

    /// The script itself (or its path with `--file`). Read from standard
    /// input when omitted.
    contents: Option<String>,
}

/// Loads the script text the arguments point at.
fn read_script(args: &Args) -> Result<String, String> {
    match (&args.contents, args.file) {
        (Some(path), true) => {
            fs::read_to_string(path).map_err(|e| format!("Could not read script file '{path}': {e}"))
        },
        (Some(script), false) => Ok(script.clone()),
        (None, _) => {
            io::read_to_string(io::stdin()).map_err(|e| format!("Could not read standard input: {e}"))
        },
    }
}

fn main() {
    let args = Args::parse();

    let script = read_script(&args).unwrap_or_else(|message| {
                                        eprintln!("{message}");
                                        std::process::exit(2);
                                    });

    if let Err(e) = get_result(&script, args.pipe_mode) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
