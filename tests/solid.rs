//! End-to-end runs of the validate-build-write sequence against the
//! simulated strip.

use clap::Parser;
use stripctl::cli::{self, Args};
use stripctl::{Color, Config, SimulatedStrip, Strip};

fn args(args: &[&str]) -> Args {
    Args::try_parse_from(std::iter::once("stripctl").chain(args.iter().copied())).unwrap()
}

#[test]
fn ten_green_pixels() {
    let config = Config::default();
    let frame = args(&["#00FF00", "10"]).frame(&config).unwrap();
    let mut strip = SimulatedStrip::new(&config);
    strip.write(&frame).unwrap();
    assert_eq!(1, strip.shows());
    for (index, &pixel) in strip.pixels().iter().enumerate() {
        let expected = if index < 10 {
            Color::new(0, 255, 0)
        } else {
            Color::BLACK
        };
        assert_eq!(expected, pixel, "pixel {index}");
    }
}

#[test]
fn full_strip() {
    let config = Config::default();
    let frame = args(&["#FFFFFF", "60"]).frame(&config).unwrap();
    let mut strip = SimulatedStrip::new(&config);
    strip.write(&frame).unwrap();
    assert!(
        strip
            .pixels()
            .iter()
            .all(|&pixel| pixel == Color::new(255, 255, 255))
    );
}

#[test]
fn off_blacks_out_the_strip() {
    let config = Config::default();
    let frame = args(&["--off"]).frame(&config).unwrap();
    let mut strip = SimulatedStrip::new(&config);
    strip.write(&frame).unwrap();
    assert!(strip.pixels().iter().all(|&pixel| pixel == Color::BLACK));
}

#[test]
fn invalid_color_message() {
    let config = Config::default();
    let err = args(&["GG0000", "5"]).frame(&config).unwrap_err();
    assert_eq!(
        "Invalid color format. Use hex format like '#FF0000'.",
        err.to_string()
    );
}

#[test]
fn count_zero_message() {
    let config = Config::default();
    let err = args(&["#FFFFFF", "0"]).frame(&config).unwrap_err();
    assert_eq!("LED count must be between 1 and 60", err.to_string());
}

#[test]
fn count_past_the_end_message() {
    let config = Config::default();
    let err = args(&["FF00FF", "61"]).frame(&config).unwrap_err();
    assert_eq!("LED count must be between 1 and 60", err.to_string());
}

#[test]
fn run_succeeds_with_simulated_strip() {
    let config = Config::default();
    assert!(
        cli::run(&args(&["#123456", "60"]), &config, |config| Ok(
            SimulatedStrip::new(config)
        ))
        .is_ok()
    );
}

#[test]
fn run_fails_without_initializing_on_bad_input() {
    let config = Config::default();
    for bad in [&["GG0000", "5"][..], &["#FFFFFF", "0"], &["FF00FF", "61"]] {
        let mut initialized = false;
        let result = cli::run(&args(bad), &config, |config| {
            initialized = true;
            Ok(SimulatedStrip::new(config))
        });
        assert!(result.is_err(), "{bad:?}");
        assert!(!initialized, "{bad:?}");
    }
}
