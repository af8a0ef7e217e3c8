use crate::{Color, Config, Result, Strip};
use log::{debug, info};

/// A strip that only exists in memory.
///
/// Takes the place of the hardware backends on machines without a strip
/// attached, and doubles as the test double for the write-then-show contract.
///
/// # Examples
///
/// ```
/// use stripctl::{Config, SimulatedStrip};
/// let strip = SimulatedStrip::new(&Config::default());
/// assert_eq!(60, strip.pixels().len());
/// ```
#[derive(Clone, Debug)]
pub struct SimulatedStrip {
    pixels: Vec<Color>,
    shows: usize,
}

impl SimulatedStrip {
    /// Creates a simulated strip of the configured length, all pixels off.
    ///
    /// Unlike the hardware backends this cannot fail, there is nothing to
    /// claim.
    pub fn new(config: &Config) -> SimulatedStrip {
        debug!(
            "running in simulation, nothing will be written to hardware ({} pixels)",
            config.length
        );
        SimulatedStrip {
            pixels: vec![Color::BLACK; config.length],
            shows: 0,
        }
    }

    /// Returns the pixels as of the last write.
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Returns the number of times this strip has been shown.
    pub fn shows(&self) -> usize {
        self.shows
    }
}

impl Strip for SimulatedStrip {
    fn set_pixel(&mut self, index: usize, color: Color) -> Result<()> {
        if let Some(pixel) = self.pixels.get_mut(index) {
            *pixel = color;
        }
        Ok(())
    }

    fn show(&mut self) -> Result<()> {
        self.shows += 1;
        info!("simulation: would show {} pixels", self.pixels.len());
        Ok(())
    }
}
