use ants_vs_bees::prelude::*;
use ants_vs_bees::shell::{run_shell, ShellOptions};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufReader};

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    if args.no_color {
        colored::control::set_override(false);
    }

    let mut game = Game::from_config(&args.config())?;
    let options = ShellOptions {
        suppress_events: args.suppress_events,
    };

    // Play from the script if given, interactively otherwise
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match &args.script {
        Some(path) => {
            let reader = BufReader::new(File::open(path)?);
            run_shell(&mut game, reader, &mut out, &options)?;
        }
        None => {
            run_shell(&mut game, io::stdin().lock(), &mut out, &options)?;
        }
    }

    Ok(())
}
