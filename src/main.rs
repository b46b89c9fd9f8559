use clap::Parser;
use tick::cli::commands::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = tick::tui::run(&cli.list) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
