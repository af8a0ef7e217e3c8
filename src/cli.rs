//! The command-line surface shared by both binaries.
//!
//! The binaries differ only in the backend they hand to [run]; arguments,
//! validation, and the write sequence live here:
//!
//! ```
//! use clap::Parser;
//! use stripctl::cli::{self, Args};
//! use stripctl::{Config, SimulatedStrip};
//!
//! let args = Args::try_parse_from(["stripctl", "#00FF00", "10"]).unwrap();
//! let config = Config::default();
//! cli::run(&args, &config, |config| Ok(SimulatedStrip::new(config))).unwrap();
//! ```

use crate::{Config, Frame, Result, Strip};
use clap::Parser;
use log::info;

/// Control WS2812B LEDs.
#[derive(Debug, Parser)]
#[command(version)]
pub struct Args {
    /// Color in hex format (e.g. "#FF0000" for red)
    #[arg(required_unless_present = "off")]
    color: Option<String>,

    /// Number of LEDs to light up
    #[arg(required_unless_present = "off", allow_negative_numbers = true)]
    count: Option<i64>,

    /// Turn every LED off instead of setting a color
    #[arg(long, conflicts_with_all = ["color", "count"])]
    off: bool,
}

impl Args {
    /// Builds the frame these arguments ask for.
    ///
    /// This is the whole validation step: the color string must parse and
    /// the count must fit the strip. `--off` skips both and produces an
    /// all-black frame.
    ///
    /// # Examples
    ///
    /// ```
    /// use clap::Parser;
    /// use stripctl::Config;
    /// use stripctl::cli::Args;
    ///
    /// let config = Config::default();
    /// let args = Args::try_parse_from(["stripctl", "#00FF00", "10"]).unwrap();
    /// assert!(args.frame(&config).is_ok());
    /// let args = Args::try_parse_from(["stripctl", "#00FF00", "61"]).unwrap();
    /// assert!(args.frame(&config).is_err());
    /// ```
    pub fn frame(&self, config: &Config) -> Result<Frame> {
        // clap requires both positionals unless --off was given
        let (Some(color), Some(count), false) = (self.color.as_deref(), self.count, self.off)
        else {
            return Ok(Frame::off(config.length));
        };
        Frame::solid(color.parse()?, count, config.length)
    }
}

/// Validates the arguments, then initializes a strip and writes the frame.
///
/// The backend is only initialized once validation has passed, so rejected
/// input never touches the hardware.
pub fn run<S, F>(args: &Args, config: &Config, init: F) -> Result<()>
where
    S: Strip,
    F: FnOnce(&Config) -> Result<S>,
{
    let frame = args.frame(config)?;
    let mut strip = init(config)?;
    strip.write(&frame)?;
    info!("updated {} pixels", frame.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, SimulatedStrip};

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("stripctl").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn frame_from_color_and_count() {
        let config = Config::default();
        let frame = parse(&["#00FF00", "10"]).frame(&config).unwrap();
        assert_eq!(Color::new(0, 255, 0), frame[0]);
        assert_eq!(Color::new(0, 255, 0), frame[9]);
        assert_eq!(Color::BLACK, frame[10]);
    }

    #[test]
    fn frame_without_hash() {
        let config = Config::default();
        assert!(parse(&["FF00FF", "1"]).frame(&config).is_ok());
    }

    #[test]
    fn frame_off() {
        let config = Config::default();
        let frame = parse(&["--off"]).frame(&config).unwrap();
        assert_eq!(config.length, frame.len());
        assert!(frame.iter().all(|color| color == Color::BLACK));
    }

    #[test]
    fn off_conflicts_with_positionals() {
        assert!(Args::try_parse_from(["stripctl", "--off", "#FF0000", "1"]).is_err());
    }

    #[test]
    fn positionals_are_required() {
        assert!(Args::try_parse_from(["stripctl"]).is_err());
        assert!(Args::try_parse_from(["stripctl", "#FF0000"]).is_err());
    }

    #[test]
    fn run_writes_and_shows() {
        let args = parse(&["#FF0000", "3"]);
        let config = Config::default();
        run(&args, &config, |config| Ok(SimulatedStrip::new(config))).unwrap();
    }

    #[test]
    fn bad_color_never_touches_the_strip() {
        let args = parse(&["GG0000", "5"]);
        let config = Config::default();
        let mut initialized = false;
        let result = run(&args, &config, |config| {
            initialized = true;
            Ok(SimulatedStrip::new(config))
        });
        assert!(result.is_err());
        assert!(!initialized);
    }

    #[test]
    fn bad_count_never_touches_the_strip() {
        let config = Config::default();
        for count in ["0", "-1", "61"] {
            let args = parse(&["#FFFFFF", count]);
            let mut initialized = false;
            let result = run(&args, &config, |config| {
                initialized = true;
                Ok(SimulatedStrip::new(config))
            });
            assert!(result.is_err(), "count {count}");
            assert!(!initialized, "count {count}");
        }
    }
}
