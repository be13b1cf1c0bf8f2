use std::fs;

use clap::Parser;
use minijs::run;

/// minijs is an interpreter for a small JavaScript-like scripting language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells minijs to look at a file instead of an inline script.
    #[arg(short, long)]
    file: bool,

    /// The script itself, or a path to it when `--file` is given.
    contents: String,
}

fn main() {
    let args = Args::parse();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    if let Err(e) = run(&script) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
