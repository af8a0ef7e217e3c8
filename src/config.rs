/// Static strip configuration.
///
/// These values are fixed by how the strip is wired to the board, so they are
/// baked into the deployment rather than taken from the command line. The
/// defaults match a 60-pixel strip on GPIO 18, the usual PWM-capable data pin
/// on a Raspberry Pi.
///
/// # Examples
///
/// ```
/// use stripctl::Config;
/// let config = Config::default();
/// assert_eq!(60, config.length);
/// assert_eq!(18, config.pin);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// The number of pixels on the strip.
    pub length: usize,

    /// The GPIO pin connected to the data line.
    pub pin: i32,

    /// The signal frequency in hertz, usually 800kHz.
    pub frequency: u32,

    /// The DMA channel used to generate the signal.
    pub dma: i32,

    /// Global brightness, 0-255.
    pub brightness: u8,

    /// Invert the signal, for strips behind an NPN transistor level shifter.
    pub invert: bool,

    /// The PWM channel index.
    pub channel: usize,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            length: 60,
            pin: 18,
            frequency: 800_000,
            dma: 10,
            brightness: 255,
            invert: false,
            channel: 0,
        }
    }
}
