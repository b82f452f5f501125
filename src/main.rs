// quadlab main: subcommands, TUI lesson browser by default.
mod cli;
mod commands;
mod config;
mod core;
mod format;
mod lessons;
mod plot;
mod tui;

use clap::Parser;

use crate::cli::{Command, QuadlabCli};
use crate::config::{load_settings, resolve_config_path};

fn main() -> anyhow::Result<()> {
    let args = QuadlabCli::parse();

    let cfg_path = resolve_config_path(&args.config);
    let settings = load_settings(cfg_path.as_deref())?;

    // No subcommand: open the lesson browser, the default interactive mode.
    match args.cmd {
        None => commands::learn::main(None, &settings),
        Some(Command::Solve { a, b, c, target }) => {
            commands::solve::main(a, b, c, target, &settings)
        }
        Some(Command::Describe { form, p1, p2, p3 }) => {
            commands::describe::main(form, p1, p2, p3, &settings)
        }
        Some(Command::Sample {
            a,
            b,
            c,
            from,
            to,
            points,
        }) => commands::sample::main(a, b, c, from, to, points, &settings),
        Some(Command::Practice { count }) => commands::practice::main(count),
        Some(Command::Learn { lesson }) => commands::learn::main(lesson, &settings),
    }
}
