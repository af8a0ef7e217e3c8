use crate::{Color, Config, Result, Strip};
use log::debug;
use rppal::spi::{Bus, Mode, SlaveSelect, Spi};
use smart_leds::{RGB8, SmartLedsWrite, brightness};
use std::fmt;
use ws2812_spi::Ws2812;

// Each WS2812B bit is stretched over three SPI bits, so the bus has to run
// in the 3 to 3.8MHz window regardless of the configured signal frequency.
const SPI_CLOCK_HZ: u32 = 3_800_000;

/// A strip driven over the SPI bus.
///
/// This is the board-abstraction path: [ws2812_spi] encodes pixels into SPI
/// words behind the [smart_leds] write trait, and [rppal] provides the bus.
/// MOSI (GPIO 10) carries the data line, no root required.
pub struct SpiStrip {
    link: Ws2812<Spi>,
    pixels: Vec<RGB8>,
    brightness: u8,
}

impl SpiStrip {
    /// Opens the SPI bus and initializes a pixel buffer for the strip.
    pub fn new(config: &Config) -> Result<SpiStrip> {
        let spi = Spi::new(Bus::Spi0, SlaveSelect::Ss0, SPI_CLOCK_HZ, Mode::Mode0)?;
        debug!("initialized {} pixels on spi0", config.length);
        Ok(SpiStrip {
            link: Ws2812::new(spi),
            pixels: vec![RGB8::default(); config.length],
            brightness: config.brightness,
        })
    }
}

impl fmt::Debug for SpiStrip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpiStrip")
            .field("pixels", &self.pixels.len())
            .field("brightness", &self.brightness)
            .finish_non_exhaustive()
    }
}

impl Strip for SpiStrip {
    fn set_pixel(&mut self, index: usize, color: Color) -> Result<()> {
        if let Some(pixel) = self.pixels.get_mut(index) {
            *pixel = RGB8::new(color.red, color.green, color.blue);
        }
        Ok(())
    }

    fn show(&mut self) -> Result<()> {
        self.link
            .write(brightness(self.pixels.iter().copied(), self.brightness))?;
        debug!("rendered frame");
        Ok(())
    }
}
