/// Rounding applied to a value before it is shown.
///
/// Rounding is a terminal display step: the engines compute at full `f64` precision and
/// only the values handed to the user are rounded. Ties round toward positive infinity, so
/// `-0.5` shows as `0` and `2.5` as `3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Precision {
    /// Round to the nearest integer.
    Integer,
    /// Round to a fixed number of decimal places.
    Decimals(u32),
}

impl Precision {
    /// Round a single value.
    ///
    /// Non-finite values pass through unchanged and a negative zero result becomes `0.0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linex_matrix::Precision;
    ///
    /// assert_eq!(Precision::Integer.round(2.6), 3.0);
    /// assert_eq!(Precision::Decimals(2).round(1.23456), 1.23);
    /// assert_eq!(Precision::Integer.round(-0.2), 0.0);
    /// ```
    pub fn round(self, value: f64) -> f64 {
        if !value.is_finite() {
            return value;
        }
        let rounded = match self {
            Precision::Integer => round_half_up(value),
            Precision::Decimals(d) => {
                let scale = 10f64.powi(d as i32);
                let scaled = value * scale;
                // values too large to carry the requested decimals are already exact
                if !scaled.is_finite() {
                    value
                } else {
                    round_half_up(scaled) / scale
                }
            }
        };
        if rounded == 0.0 {
            0.0
        } else {
            rounded
        }
    }

    /// Round a value and render it without trailing zeros.
    ///
    /// ```
    /// use linex_matrix::Precision;
    ///
    /// assert_eq!(Precision::Decimals(6).format(0.5), "0.5");
    /// assert_eq!(Precision::Decimals(6).format(1.0 / 3.0), "0.333333");
    /// assert_eq!(Precision::Integer.format(-0.4), "0");
    /// ```
    pub fn format(self, value: f64) -> String {
        Self::format_full(self.round(value))
    }

    /// Render a value at full precision, printing negative zero as `0`.
    pub fn format_full(value: f64) -> String {
        if value == 0.0 {
            return "0".to_string();
        }
        format!("{value}")
    }
}

fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    // exact for every f64: the fractional part of a float is representable
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_integer() {
        assert_eq!(Precision::Integer.round(0.4999), 0.0);
        assert_eq!(Precision::Integer.round(1.5), 2.0);
        assert_eq!(Precision::Integer.round(-3.2), -3.0);
        assert_eq!(Precision::Integer.round(0.49999999999999994), 0.0);
    }

    #[test]
    fn test_round_ties_toward_positive_infinity() {
        assert_eq!(Precision::Integer.round(2.5), 3.0);
        assert_eq!(Precision::Integer.round(-1.5), -1.0);
        assert_eq!(Precision::Integer.round(-2.5), -2.0);

        let r = Precision::Integer.round(-0.5);
        assert_eq!(r, 0.0);
        assert!(r.is_sign_positive());

        assert_eq!(Precision::Decimals(2).round(-1.125), -1.12);
        assert_eq!(Precision::Decimals(2).round(1.125), 1.13);
        assert_eq!(Precision::Integer.format(-0.5), "0");
    }

    #[test]
    fn test_round_decimals() {
        assert_eq!(Precision::Decimals(2).round(2.0), 2.0);
        assert_eq!(Precision::Decimals(2).round(-5.372), -5.37);
        assert_eq!(Precision::Decimals(6).round(0.1234567), 0.123457);
        assert_eq!(Precision::Decimals(6).round(1e-9), 0.0);
    }

    #[test]
    fn test_round_negative_zero() {
        let r = Precision::Decimals(6).round(-1e-12);
        assert_eq!(r, 0.0);
        assert!(r.is_sign_positive());
    }

    #[test]
    fn test_round_non_finite() {
        assert!(Precision::Integer.round(f64::NAN).is_nan());
        assert_eq!(Precision::Decimals(2).round(f64::INFINITY), f64::INFINITY);
        assert_eq!(Precision::Decimals(6).round(1e305), 1e305);
    }

    #[test]
    fn test_format() {
        assert_eq!(Precision::Integer.format(3.0), "3");
        assert_eq!(Precision::Integer.format(-2.7), "-3");
        assert_eq!(Precision::Decimals(2).format(2.006), "2.01");
        assert_eq!(Precision::Decimals(6).format(-0.0000001), "0");
        assert_eq!(Precision::format_full(-0.0), "0");
        assert_eq!(Precision::format_full(0.25), "0.25");
    }

    #[test]
    fn test_serde() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!(serde_json::to_string(&Precision::Integer)?, "\"integer\"");
        assert_eq!(
            serde_json::to_string(&Precision::Decimals(6))?,
            "{\"decimals\":6}"
        );
        Ok(())
    }
}
