//! Hue, saturation and value of a [`Color`].
//!
//! Samples are normalized to [0, 1] using the maximum sample of the color's
//! depth before converting. Hue is reported in degrees [0, 360), saturation
//! and value in percent [0, 100].
//!
//! Writing any HSV quantity converts back to samples, rounding to the nearest
//! integer, so all three channels may change.

use crate::{
    color::{Color, Component},
    error::{Error, Quantity, Result},
    math::{in_range, wrap_hue},
};

/// A color in the HSV notation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsv {
    /// Hue in degrees.
    pub hue: Component,
    /// Saturation in percent.
    pub saturation: Component,
    /// Value in percent.
    pub value: Component,
}

impl Hsv {
    /// Create a new HSV triplet. Nothing is validated until it is applied to
    /// a [`Color`].
    pub fn new(hue: Component, saturation: Component, value: Component) -> Self {
        Self {
            hue,
            saturation,
            value,
        }
    }
}

/// Turn a percentage into a fraction of 1, rejecting anything outside
/// [0, 100].
fn percent(quantity: Quantity, value: f64) -> Result<f64> {
    if !in_range(value, 0.0, 100.0) {
        tracing::debug!(%quantity, value, "rejected percentage");
        return Err(Error::OutOfRange {
            quantity,
            value,
            min: 0.0,
            max: 100.0,
        });
    }
    Ok(value / 100.0)
}

fn degrees(hue: f64) -> Result<f64> {
    if !hue.is_finite() {
        tracing::debug!(hue, "rejected hue");
        return Err(Error::OutOfRange {
            quantity: Quantity::Hue,
            value: hue,
            min: 0.0,
            max: 360.0,
        });
    }
    Ok(wrap_hue(hue))
}

impl Color {
    /// Build a color at `depth` from an HSV triplet. The hue wraps around,
    /// saturation and value must be within [0, 100].
    pub fn from_hsv(hsv: Hsv, depth: i64) -> Result<Self> {
        let mut color = Self::with_depth(0, 0, 0, depth)?;
        color.set_hsv(hsv)?;
        Ok(color)
    }

    /// Hue in degrees [0, 360). Achromatic colors report 0.
    pub fn hue(&self) -> Component {
        self.hsv().hue
    }

    /// Saturation in percent [0, 100].
    pub fn saturation(&self) -> Component {
        self.hsv().saturation
    }

    /// Value in percent [0, 100].
    pub fn value(&self) -> Component {
        self.hsv().value
    }

    /// Hue, saturation and value together.
    pub fn hsv(&self) -> Hsv {
        let (hue, saturation, value) = self.hsv_f64();
        // Narrowing can round a hue just below 360 up to 360.
        Hsv::new(
            wrap_hue(hue as Component),
            saturation as Component,
            value as Component,
        )
    }

    /// Hue in degrees, saturation and value in percent, at full `f64`
    /// precision whatever [`Component`] is. Wide depths need this to
    /// round-trip samples within one unit.
    pub fn hsv_f64(&self) -> (f64, f64, f64) {
        let (hue, saturation, value) = self.unit_hsv();
        (wrap_hue(hue), saturation * 100.0, value * 100.0)
    }

    /// Set the hue in degrees. Any finite angle is accepted and wrapped into
    /// [0, 360), so -30 is the same as 330.
    pub fn set_hue(&mut self, hue: Component) -> Result<()> {
        self.set_hue_f64(f64::from(hue))
    }

    /// Set the saturation in percent.
    pub fn set_saturation(&mut self, saturation: Component) -> Result<()> {
        self.set_saturation_f64(f64::from(saturation))
    }

    /// Set the value in percent.
    pub fn set_value(&mut self, value: Component) -> Result<()> {
        self.set_value_f64(f64::from(value))
    }

    /// Set all three HSV quantities at once.
    pub fn set_hsv(&mut self, hsv: Hsv) -> Result<()> {
        let hue = degrees(f64::from(hsv.hue))?;
        let saturation = percent(Quantity::Saturation, f64::from(hsv.saturation))?;
        let value = percent(Quantity::Value, f64::from(hsv.value))?;
        self.apply_hsv(hue, saturation, value)
    }

    /// [`Color::set_hue`] at `f64` precision.
    pub fn set_hue_f64(&mut self, hue: f64) -> Result<()> {
        let hue = degrees(hue)?;
        let (_, saturation, value) = self.unit_hsv();
        self.apply_hsv(hue, saturation, value)
    }

    /// [`Color::set_saturation`] at `f64` precision.
    pub fn set_saturation_f64(&mut self, saturation: f64) -> Result<()> {
        let saturation = percent(Quantity::Saturation, saturation)?;
        let (hue, _, value) = self.unit_hsv();
        self.apply_hsv(hue, saturation, value)
    }

    /// [`Color::set_value`] at `f64` precision.
    pub fn set_value_f64(&mut self, value: f64) -> Result<()> {
        let value = percent(Quantity::Value, value)?;
        let (hue, saturation, _) = self.unit_hsv();
        self.apply_hsv(hue, saturation, value)
    }

    /// Hue in degrees, saturation and value as fractions of 1.
    fn unit_hsv(&self) -> (f64, f64, f64) {
        let max = f64::from(self.max_sample());
        util::rgb_to_hsv(
            f64::from(self.red()) / max,
            f64::from(self.green()) / max,
            f64::from(self.blue()) / max,
        )
    }

    /// Convert back to samples and store them, or leave the color untouched if
    /// the result is not representable.
    fn apply_hsv(&mut self, hue: f64, saturation: f64, value: f64) -> Result<()> {
        let (red, green, blue) = util::hsv_to_rgb(hue, saturation, value);

        let max = f64::from(self.max_sample());
        let sample = |c: f64| (c * max).round() as i64;

        let updated = Self::with_depth(
            sample(red),
            sample(green),
            sample(blue),
            i64::from(self.depth()),
        )?;

        tracing::trace!(before = ?self.rgb(), after = ?updated.rgb(), "applied hsv");
        *self = updated;
        Ok(())
    }
}

mod util {
    use crate::math::almost_zero;

    /// Convert from RGB to HSV. All components are in [0, 1] except the
    /// returned hue, which is in degrees.
    pub fn rgb_to_hsv(red: f64, green: f64, blue: f64) -> (f64, f64, f64) {
        let value = red.max(green).max(blue);
        let chroma = value - red.min(green).min(blue);

        if almost_zero(chroma) {
            return (0.0, 0.0, value);
        }

        // Position on the hexagon, in sixths of a turn.
        let sector = match value {
            v if v == red => ((green - blue) / chroma).rem_euclid(6.0),
            v if v == green => (blue - red) / chroma + 2.0,
            _ => (red - green) / chroma + 4.0,
        };

        (sector * 60.0, chroma / value, value)
    }

    /// Convert from HSV to RGB. The hue is in degrees, everything else is in
    /// [0, 1].
    pub fn hsv_to_rgb(hue: f64, saturation: f64, value: f64) -> (f64, f64, f64) {
        macro_rules! f {
            ($n:expr) => {{
                let k = ($n + hue / 60.0) % 6.0;
                value - value * saturation * k.min(4.0 - k).clamp(0.0, 1.0)
            }};
        }

        (f!(5.0), f!(3.0), f!(1.0))
    }
}
