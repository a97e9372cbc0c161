//! tincture provides an RGB color value with a configurable bit depth, hex
//! text conversion, HSV accessors and a catalog of named colors.
//!
//! ```rust
//! use tincture::Color;
//!
//! let mut color: Color = "#daa520".parse().unwrap();
//! assert_eq!(color, Color::GOLDENROD);
//!
//! color.set_hue(-30.0).unwrap();
//! assert_eq!(color.to_hex().unwrap(), "#da207d");
//! ```

#![deny(missing_docs)]

mod color;
mod error;
mod hex;
mod hsv;
mod math;
mod named;

pub use color::{Channel, Color, Component, Depth, Sample, DEFAULT_DEPTH, MAX_DEPTH};
pub use error::{Error, Quantity, Result};
pub use hsv::Hsv;
pub use named::Named;
