use crate::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// A RGB color value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Color {
    /// Red channel.
    pub red: u8,

    /// Green channel.
    pub green: u8,

    /// Blue channel.
    pub blue: u8,
}

impl Color {
    /// All channels off.
    pub const BLACK: Color = Color {
        red: 0,
        green: 0,
        blue: 0,
    };

    /// Creates a new color.
    ///
    /// # Examples
    ///
    /// ```
    /// use stripctl::Color;
    /// let color = Color::new(1, 2, 3);
    /// assert_eq!(1, color.red);
    /// assert_eq!(2, color.green);
    /// assert_eq!(3, color.blue);
    /// ```
    pub fn new(red: u8, green: u8, blue: u8) -> Color {
        Color { red, green, blue }
    }
}

impl FromStr for Color {
    type Err = Error;

    /// Parses a color from six hex digits, with an optional leading `#`.
    ///
    /// # Examples
    ///
    /// ```
    /// use stripctl::Color;
    /// assert_eq!(Color::new(255, 0, 0), "#FF0000".parse().unwrap());
    /// assert_eq!(Color::new(255, 0, 0), "ff0000".parse().unwrap());
    /// assert!("#FF00".parse::<Color>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Color> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::InvalidColorFormat(s.to_string()));
        }
        let mut channels = [0; 3];
        for (i, channel) in channels.iter_mut().enumerate() {
            *channel = u8::from_str_radix(&digits[i * 2..i * 2 + 2], 16)
                .map_err(|_| Error::InvalidColorFormat(s.to_string()))?;
        }
        Ok(Color::new(channels[0], channels[1], channels[2]))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }
}
