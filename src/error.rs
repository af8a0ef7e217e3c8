use thiserror::Error;

/// Crate-specific error enum.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The color string is not six hex digits with an optional leading `#`.
    #[error("Invalid color format. Use hex format like '#FF0000'.")]
    InvalidColorFormat(String),

    /// The requested LED count does not fit the strip.
    #[error("LED count must be between 1 and {length}")]
    CountOutOfRange {
        /// The rejected count.
        count: i64,
        /// The fixed strip length.
        length: usize,
    },

    /// [rs_ws281x::WS2811Error]
    #[cfg(feature = "pwm")]
    #[error(transparent)]
    Ws2811(#[from] rs_ws281x::WS2811Error),

    /// [rppal::spi::Error]
    #[cfg(feature = "spi")]
    #[error(transparent)]
    Spi(#[from] rppal::spi::Error),
}
