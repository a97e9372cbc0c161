//! A [`Color`] is a triplet of red, green and blue samples stored at a given
//! bit depth.

use std::fmt;
use std::ops::Index;

use crate::error::{Error, Quantity, Result};

/// The storage type of a single channel sample.
pub type Sample = u32;

/// The total number of bits spanned by the three channels of a color.
pub type Depth = u8;

#[cfg(not(feature = "f64"))]
/// A 32-bit floating point value that HSV quantities are reported as.
pub type Component = f32;

#[cfg(feature = "f64")]
/// A 64-bit floating point value that HSV quantities are reported as.
pub type Component = f64;

/// The depth used when none is given: 8 bits per channel.
pub const DEFAULT_DEPTH: Depth = 24;

/// The widest depth supported: 32 bits per channel.
pub const MAX_DEPTH: Depth = 96;

/// Names one of the three channels of a [`Color`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    /// The red sample.
    Red,
    /// The green sample.
    Green,
    /// The blue sample.
    Blue,
}

impl Channel {
    /// All channels in storage order.
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// The position of the channel inside the RGB triplet.
    pub const fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
        })
    }
}

/// A color made of three integer samples at a fixed bit depth.
///
/// Each sample lies within `0..=2^(depth / 3) - 1`. Every constructor and
/// setter validates against that range and leaves the color untouched when it
/// fails.
///
/// ```rust
/// use tincture::Color;
/// let mut color = Color::new(218, 165, 32).unwrap();
/// assert_eq!(color.to_hex().unwrap(), "#daa520");
/// assert!(color.set_red(256).is_err());
/// assert_eq!(color.red(), 218);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    red: Sample,
    green: Sample,
    blue: Sample,
    depth: Depth,
}

/// Check that `depth` is a positive multiple of 3 that fits in a [`Sample`].
pub(crate) fn validate_depth(depth: i64) -> Result<Depth> {
    if depth <= 0 || depth % 3 != 0 || depth > i64::from(MAX_DEPTH) {
        tracing::debug!(depth, "rejected depth");
        return Err(Error::InvalidDepth(depth));
    }
    Ok(depth as Depth)
}

/// The largest sample representable at `depth`.
pub(crate) fn max_sample_for(depth: Depth) -> Sample {
    ((1_u64 << (depth / 3)) - 1) as Sample
}

fn validate_sample(channel: Channel, value: i64, depth: Depth) -> Result<Sample> {
    let max = max_sample_for(depth);
    if value < 0 || value > i64::from(max) {
        tracing::debug!(%channel, value, max, "rejected sample");
        return Err(Error::OutOfRange {
            quantity: Quantity::Channel(channel),
            value: value as f64,
            min: 0.0,
            max: f64::from(max),
        });
    }
    Ok(value as Sample)
}

impl Color {
    /// Create a new color with 8 bits per channel.
    pub fn new(red: i64, green: i64, blue: i64) -> Result<Self> {
        Self::with_depth(red, green, blue, i64::from(DEFAULT_DEPTH))
    }

    /// Create a new color where the three channels together span `depth`
    /// bits.
    pub fn with_depth(red: i64, green: i64, blue: i64, depth: i64) -> Result<Self> {
        let depth = validate_depth(depth)?;

        Ok(Self {
            red: validate_sample(Channel::Red, red, depth)?,
            green: validate_sample(Channel::Green, green, depth)?,
            blue: validate_sample(Channel::Blue, blue, depth)?,
            depth,
        })
    }

    /// Create a color with 8 bits per channel. Every `u8` is a legal sample at
    /// that depth, so this can never fail.
    pub const fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red: red as Sample,
            green: green as Sample,
            blue: blue as Sample,
            depth: DEFAULT_DEPTH,
        }
    }

    /// The red sample.
    pub fn red(&self) -> Sample {
        self.red
    }

    /// The green sample.
    pub fn green(&self) -> Sample {
        self.green
    }

    /// The blue sample.
    pub fn blue(&self) -> Sample {
        self.blue
    }

    /// The total bit depth of the three channels.
    pub fn depth(&self) -> Depth {
        self.depth
    }

    /// The number of bits of a single channel.
    pub fn channel_bits(&self) -> u8 {
        self.depth / 3
    }

    /// The largest legal sample at the current depth.
    pub fn max_sample(&self) -> Sample {
        max_sample_for(self.depth)
    }

    /// The samples as a `(red, green, blue)` tuple.
    pub fn rgb(&self) -> (Sample, Sample, Sample) {
        (self.red, self.green, self.blue)
    }

    /// The sample of the given channel.
    pub fn channel(&self, channel: Channel) -> Sample {
        match channel {
            Channel::Red => self.red,
            Channel::Green => self.green,
            Channel::Blue => self.blue,
        }
    }

    /// The sample at position `index` (0 = red, 1 = green, 2 = blue).
    pub fn get(&self, index: usize) -> Option<Sample> {
        Channel::ALL.get(index).map(|&c| self.channel(c))
    }

    /// Replace the sample of `channel`.
    pub fn set_channel(&mut self, channel: Channel, value: i64) -> Result<()> {
        let value = validate_sample(channel, value, self.depth)?;
        match channel {
            Channel::Red => self.red = value,
            Channel::Green => self.green = value,
            Channel::Blue => self.blue = value,
        }
        Ok(())
    }

    /// Replace the red sample.
    pub fn set_red(&mut self, value: i64) -> Result<()> {
        self.set_channel(Channel::Red, value)
    }

    /// Replace the green sample.
    pub fn set_green(&mut self, value: i64) -> Result<()> {
        self.set_channel(Channel::Green, value)
    }

    /// Replace the blue sample.
    pub fn set_blue(&mut self, value: i64) -> Result<()> {
        self.set_channel(Channel::Blue, value)
    }

    /// Change the depth while keeping the samples as they are. Fails if any
    /// sample does not fit the new range.
    pub fn set_depth(&mut self, depth: i64) -> Result<()> {
        *self = Self::with_depth(
            i64::from(self.red),
            i64::from(self.green),
            i64::from(self.blue),
            depth,
        )?;
        Ok(())
    }

    /// Return this color at another depth, with every sample scaled so that
    /// it keeps its relative intensity.
    pub fn to_depth(&self, depth: i64) -> Result<Self> {
        let depth = validate_depth(depth)?;

        let from = u128::from(self.max_sample());
        let to = u128::from(max_sample_for(depth));
        // Round half up: (2 * s * to + from) / (2 * from).
        let scale = |s: Sample| ((2 * u128::from(s) * to + from) / (2 * from)) as Sample;

        Ok(Self {
            red: scale(self.red),
            green: scale(self.green),
            blue: scale(self.blue),
            depth,
        })
    }
}

impl Index<usize> for Color {
    type Output = Sample;

    /// Panics if `index` is not 0, 1 or 2, like indexing an array.
    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.red,
            1 => &self.green,
            2 => &self.blue,
            _ => panic!("color index out of range: {index}"),
        }
    }
}

impl Index<Channel> for Color {
    type Output = Sample;

    fn index(&self, channel: Channel) -> &Self::Output {
        &self[channel.index()]
    }
}

impl IntoIterator for Color {
    type Item = Sample;
    type IntoIter = std::array::IntoIter<Sample, 3>;

    fn into_iter(self) -> Self::IntoIter {
        [self.red, self.green, self.blue].into_iter()
    }
}

impl IntoIterator for &Color {
    type Item = Sample;
    type IntoIter = std::array::IntoIter<Sample, 3>;

    fn into_iter(self) -> Self::IntoIter {
        (*self).into_iter()
    }
}

impl From<Color> for [Sample; 3] {
    fn from(value: Color) -> Self {
        [value.red, value.green, value.blue]
    }
}

impl From<Color> for (Sample, Sample, Sample) {
    fn from(value: Color) -> Self {
        value.rgb()
    }
}

impl TryFrom<[i64; 3]> for Color {
    type Error = Error;

    fn try_from([red, green, blue]: [i64; 3]) -> Result<Self> {
        Self::new(red, green, blue)
    }
}

impl TryFrom<[i64; 4]> for Color {
    type Error = Error;

    fn try_from([red, green, blue, depth]: [i64; 4]) -> Result<Self> {
        Self::with_depth(red, green, blue, depth)
    }
}
