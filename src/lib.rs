//! Set a solid color on the leading pixels of a [WS2812B](https://cdn-shop.adafruit.com/datasheets/WS2812B.pdf)
//! LED strip.
//!
//! The crate ships two small binaries, `stripctl-pwm` and `stripctl-spi`,
//! which share everything in this library and differ only in the hardware
//! backend used to push the frame out:
//!
//! - `stripctl-pwm` drives the strip through the Raspberry Pi's PWM/DMA
//!   peripheral via [rs_ws281x] (feature `pwm`).
//! - `stripctl-spi` bit-bangs the WS2812B signal over the SPI bus via
//!   [ws2812_spi] on top of [rppal] (feature `spi`, on by default).
//!
//! Both do the same thing: parse a hex color and an LED count, light the
//! first `count` pixels, black out the rest, and show the frame once.
//!
//! # Colors
//!
//! A [Color] is parsed from six hex digits, with or without a leading `#`:
//!
//! ```
//! use stripctl::Color;
//! let color: Color = "#00FF00".parse().unwrap();
//! assert_eq!(Color::new(0, 255, 0), color);
//! assert!("GG0000".parse::<Color>().is_err());
//! ```
//!
//! # Frames
//!
//! A [Frame] holds one color per pixel for the whole strip. The only frames
//! this crate builds are a solid prefix with a black tail, and all-black:
//!
//! ```
//! use stripctl::{Color, Frame};
//! let frame = Frame::solid(Color::new(0, 255, 0), 10, 60).unwrap();
//! assert_eq!(60, frame.len());
//! assert_eq!(Color::new(0, 255, 0), frame[9]);
//! assert_eq!(Color::BLACK, frame[10]);
//! assert!(Frame::solid(Color::BLACK, 61, 60).is_err());
//! ```
//!
//! # Strips
//!
//! A [Strip] writes every pixel of a frame and then shows it exactly once.
//! [SimulatedStrip] does that in memory, which is all you can do without the
//! hardware:
//!
//! ```
//! use stripctl::{Color, Config, Frame, SimulatedStrip, Strip};
//! let config = Config::default();
//! let frame = Frame::solid(Color::new(255, 0, 0), 1, config.length).unwrap();
//! let mut strip = SimulatedStrip::new(&config);
//! strip.write(&frame).unwrap();
//! assert_eq!(Color::new(255, 0, 0), strip.pixels()[0]);
//! ```

#![deny(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod cli;
pub mod strip;

mod color;
mod config;
mod error;
mod frame;

pub use color::Color;
pub use config::Config;
pub use error::Error;
pub use frame::Frame;
#[cfg(feature = "pwm")]
pub use strip::PwmStrip;
pub use strip::SimulatedStrip;
#[cfg(feature = "spi")]
pub use strip::SpiStrip;
pub use strip::Strip;

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, Error>;
