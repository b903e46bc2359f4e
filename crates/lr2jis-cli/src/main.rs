mod cli;
mod generate_cmd;
mod shared;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();
    shared::init_logging(cli.verbose);

    let (chars, font) = cli.input_paths().unwrap_or_else(|e| e.exit());

    let result = generate_cmd::run(
        chars,
        font,
        cli.ordering,
        cli.sizing,
        &cli.header,
        cli.debug_map,
    );

    if let Err(code) = result {
        std::process::exit(code);
    }
}
