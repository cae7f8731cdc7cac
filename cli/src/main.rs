mod commands;
mod terminal;

use std::process::ExitCode;

use commands::{CommandLine, Commands, about, convert, form, systems};
use ghcoord_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<ExitCode> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose);

    let cfg = Config {
        quiet: commands.quiet,
        no_banner: commands.no_banner,
    };

    print::banner(cfg.no_banner, cfg.quiet);

    match commands.command {
        Commands::Convert {
            x,
            y,
            transformation,
            output,
        } => {
            print::header("coordinate transformation", cfg.quiet);
            convert::convert(&x, &y, &transformation, output, &cfg)
        }
        Commands::Form => {
            print::header("conversion form", cfg.quiet);
            form::form(&cfg)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Systems => {
            print::header("reference systems", cfg.quiet);
            systems::systems(&cfg);
            Ok(ExitCode::SUCCESS)
        }
        Commands::About => {
            print::header("about the tool", cfg.quiet);
            about::about();
            Ok(ExitCode::SUCCESS)
        }
    }
}
