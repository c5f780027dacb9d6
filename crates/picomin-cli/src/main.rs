// crates/picomin-cli/src/main.rs

use clap::Parser;

mod cmd;
mod io;

#[derive(Parser)]
#[command(name = "picomin-cli")]
#[command(about = "PICO-8 cart code compactor", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub minify: cmd::minify::MinifyArgs,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cmd::minify::run(cli.minify)
}
