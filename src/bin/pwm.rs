//! Sets a solid color on the strip through the PWM/DMA backend.
//!
//! ```text
//! sudo stripctl-pwm "#00FF00" 10
//! sudo stripctl-pwm --off
//! ```

use clap::Parser;
use std::process;
use stripctl::cli::{self, Args};
use stripctl::{Config, PwmStrip};

fn main() {
    env_logger::init();
    let args = Args::parse();
    let config = Config::default();
    if let Err(err) = cli::run(&args, &config, PwmStrip::new) {
        eprintln!("{err}");
        process::exit(1);
    }
}
