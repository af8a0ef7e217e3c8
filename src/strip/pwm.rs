use crate::{Color, Config, Result, Strip};
use log::debug;
use rs_ws281x::{ChannelBuilder, Controller, ControllerBuilder, StripType};
use std::fmt;

/// A strip driven directly through the PWM/DMA peripheral.
///
/// This wraps the [rs_ws281x] controller, which generates the WS2812B signal
/// with the same `rpi_ws281x` library most Raspberry Pi LED setups use. It
/// needs access to `/dev/mem`, so binaries built on it run as root.
pub struct PwmStrip {
    controller: Controller,
    channel: usize,
}

impl fmt::Debug for PwmStrip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PwmStrip")
            .field("channel", &self.channel)
            .finish_non_exhaustive()
    }
}

impl PwmStrip {
    /// Initializes the strip described by the config.
    ///
    /// This claims the PWM peripheral and the configured DMA channel, so it
    /// fails when another process is already driving the strip.
    pub fn new(config: &Config) -> Result<PwmStrip> {
        let controller = ControllerBuilder::new()
            .freq(config.frequency)
            .dma(config.dma)
            .channel(
                config.channel,
                ChannelBuilder::new()
                    .pin(config.pin)
                    .count(config.length as i32)
                    .strip_type(StripType::Ws2812)
                    .brightness(config.brightness)
                    .invert(config.invert)
                    .build(),
            )
            .build()?;
        debug!(
            "initialized {} pixels on gpio {} (dma channel {})",
            config.length, config.pin, config.dma
        );
        Ok(PwmStrip {
            controller,
            channel: config.channel,
        })
    }
}

impl Strip for PwmStrip {
    fn set_pixel(&mut self, index: usize, color: Color) -> Result<()> {
        // raw leds are laid out [blue, green, red, white]
        if let Some(led) = self.controller.leds_mut(self.channel).get_mut(index) {
            *led = [color.blue, color.green, color.red, 0];
        }
        Ok(())
    }

    fn show(&mut self) -> Result<()> {
        self.controller.render()?;
        debug!("rendered frame");
        Ok(())
    }
}
