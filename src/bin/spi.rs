//! Sets a solid color on the strip through the SPI backend.
//!
//! ```text
//! stripctl-spi "#00FF00" 10
//! stripctl-spi --off
//! ```

use clap::Parser;
use std::process;
use stripctl::cli::{self, Args};
use stripctl::{Config, SpiStrip};

fn main() {
    env_logger::init();
    let args = Args::parse();
    let config = Config::default();
    if let Err(err) = cli::run(&args, &config, SpiStrip::new) {
        eprintln!("{err}");
        process::exit(1);
    }
}
