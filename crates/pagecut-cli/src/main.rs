mod cli;
mod cut_cmd;
mod presets_cmd;
mod shared;
mod slice_cmd;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();
    shared::init_logging(cli.verbose);

    let result = match cli.command {
        cli::Commands::Cut {
            ref file,
            ref preset,
            skip_render,
            ref convert,
            ref cut,
        } => cut_cmd::run(file, preset.as_deref(), skip_render, convert, cut),
        cli::Commands::Slice {
            ref pages,
            ref preset,
            ref output,
            ref cut,
        } => slice_cmd::run(pages, preset, output, cut),
        cli::Commands::Presets { ref format } => presets_cmd::run(format),
    };

    if let Err(code) = result {
        std::process::exit(code);
    }
}
