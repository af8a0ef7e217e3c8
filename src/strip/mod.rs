//! Drive WS2812B strips.
//!
//! Every backend implements [Strip], so the binaries only differ in which
//! backend they construct. A backend takes its wiring from [Config](crate::Config)
//! when it is built, buffers pixel writes, and pushes the whole frame to the
//! hardware in one [show](Strip::show).
//!
//! Without the hardware, use [SimulatedStrip]:
//!
//! ```
//! use stripctl::{Color, Config, Frame, SimulatedStrip, Strip};
//! let config = Config::default();
//! let frame = Frame::solid(Color::new(0, 0, 255), 2, config.length).unwrap();
//! let mut strip = SimulatedStrip::new(&config);
//! strip.write(&frame).unwrap();
//! assert_eq!(Color::new(0, 0, 255), strip.pixels()[1]);
//! assert_eq!(Color::BLACK, strip.pixels()[2]);
//! ```

#[cfg(feature = "pwm")]
mod pwm;
mod sim;
#[cfg(feature = "spi")]
mod spi;

#[cfg(feature = "pwm")]
pub use pwm::PwmStrip;
pub use sim::SimulatedStrip;
#[cfg(feature = "spi")]
pub use spi::SpiStrip;

use crate::{Color, Frame, Result};

/// An initialized LED strip.
///
/// Pixel writes go to a buffer, [show](Strip::show) transmits the buffer to
/// the strip. [write](Strip::write) is the whole contract of this crate:
/// every pixel of the frame, then exactly one show.
pub trait Strip {
    /// Buffers one pixel.
    ///
    /// Indexes past the end of the strip are ignored.
    fn set_pixel(&mut self, index: usize, color: Color) -> Result<()>;

    /// Transmits the buffered pixels to the strip.
    fn show(&mut self) -> Result<()>;

    /// Writes every pixel of the frame, then shows it once.
    ///
    /// # Examples
    ///
    /// ```
    /// use stripctl::{Config, Frame, SimulatedStrip, Strip};
    /// let config = Config::default();
    /// let mut strip = SimulatedStrip::new(&config);
    /// strip.write(&Frame::off(config.length)).unwrap();
    /// ```
    fn write(&mut self, frame: &Frame) -> Result<()> {
        for (index, color) in frame.iter().enumerate() {
            self.set_pixel(index, color)?;
        }
        self.show()
    }
}
