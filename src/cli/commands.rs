use clap::Parser;

#[derive(Parser)]
#[command(name = "tick", about = concat!("[x] tick v", env!("CARGO_PKG_VERSION"), " - a to-do list that lives in your terminal"), version)]
pub struct Cli {
    /// Name of the list to open
    #[arg(default_value = "to-do")]
    pub list: String,
}
