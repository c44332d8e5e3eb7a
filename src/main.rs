use clap::{Parser, Subcommand};

mod cmd;
mod gst;
mod history;

#[derive(Parser)]
#[command(name = "gstc", version, about = "Indian GST calculator with session history")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert between GST-inclusive and GST-exclusive prices
    Calc(cmd::calc::CalcCommand),
    /// Show the GST rate slabs
    Rates(cmd::rates::RatesCommand),
    /// Interactive calculator session with history and exports
    Session(cmd::session::SessionCommand),
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Calc(cmd) => cmd.exec(),
        Commands::Rates(cmd) => cmd.exec(),
        Commands::Session(cmd) => cmd.exec(),
    }
}
