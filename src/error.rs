//! Errors reported when a [`Color`](crate::Color) is constructed or updated
//! with values outside of its legal domain.

use std::fmt;

use thiserror::Error;

use crate::color::{Channel, Depth};

/// The quantity that an [`Error::OutOfRange`] refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Quantity {
    /// One of the three RGB samples.
    Channel(Channel),
    /// The HSV hue, in degrees.
    Hue,
    /// The HSV saturation, in percent.
    Saturation,
    /// The HSV value, in percent.
    Value,
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantity::Channel(channel) => write!(f, "{channel}"),
            Quantity::Hue => f.write_str("hue"),
            Quantity::Saturation => f.write_str("saturation"),
            Quantity::Value => f.write_str("value"),
        }
    }
}

/// Everything that can go wrong when working with a [`Color`](crate::Color).
#[derive(Error, Clone, Debug, PartialEq)]
pub enum Error {
    /// Hexadecimal text that does not describe a color.
    #[error("invalid hex color {input:?}: {reason}")]
    InvalidFormat {
        /// The text that was rejected.
        input: String,
        /// What is wrong with it.
        reason: &'static str,
    },

    /// A depth that is not a positive multiple of 3, or is wider than 96 bits.
    #[error("invalid depth {0}: must be a positive multiple of 3 no greater than 96")]
    InvalidDepth(i64),

    /// A sample or HSV quantity outside of its legal range.
    #[error("{quantity} must be within {min} to {max}, got {value}")]
    OutOfRange {
        /// What was being set.
        quantity: Quantity,
        /// The rejected value.
        value: f64,
        /// The smallest legal value.
        min: f64,
        /// The largest legal value.
        max: f64,
    },

    /// Hexadecimal text was requested for a depth that does not map to whole
    /// hex digits per channel.
    #[error("a depth of {0} cannot be written as hexadecimal, it must be divisible by 12")]
    UnsupportedDepth(Depth),
}

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
