mod cli;
mod command;
mod config;
mod error;
mod form;
mod prompt;
mod target;

use error::WrapErr;

use clap::CommandFactory;
use clap::Parser;
use tracing::Level;

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> error::Result<()> {
    color_eyre::install()?;

    let command_line = cli::Cli::parse();
    init_tracing(command_line.verbose);

    let cfg = config::Config::load().context("Load configuration error")?;
    let target = target::Target::new(&cfg, &command_line);

    if let Some(command) = command_line.command {
        let cmd: Box<dyn command::Command> = match command {
            cli::Commands::Locate => Box::new(command::LocateCommand::new(target)),
            cli::Commands::Show { json } => Box::new(command::ShowCommand::new(target, json)),
            cli::Commands::Set(args) => Box::new(command::SetCommand::new(target, args)),
            cli::Commands::Edit => Box::new(command::EditCommand::new(target)),
        };
        cmd.execute()?;
    } else {
        cli::Cli::command().print_help()?;
    }

    Ok(())
}
