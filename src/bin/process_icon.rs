use std::error::Error as _;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use icon_transparency::{process_file, ProcessOptions};

const USAGE: &str = "Usage: process_icon <input> <output>";

#[derive(Parser)]
#[command(
    name = "process_icon",
    about = "Make the white background of an icon transparent and crop it to its content",
    version,
    after_help = "Pixels with red, green and blue all above 240 become transparent.\n\
                  The output format follows the output file extension."
)]
struct Cli {
    /// Input image file
    input: Option<PathBuf>,

    /// Output image file
    output: Option<PathBuf>,

    /// Ignored extra arguments
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    _extra: Vec<String>,

    /// Suppress progress output
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    // Missing arguments are not an error: print usage and exit 0.
    let (Some(input), Some(output)) = (cli.input, cli.output) else {
        println!("{USAGE}");
        return;
    };

    let opts = ProcessOptions { quiet: cli.quiet };

    match process_file(&input, &output, &opts) {
        Ok(report) => {
            log::debug!(
                "{}x{} -> {}x{}",
                report.original_size.0,
                report.original_size.1,
                report.output_size.0,
                report.output_size.1
            );
        }
        Err(e) => {
            eprintln!("Error: {e}");
            let mut source = e.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            process::exit(1);
        }
    }
}
