use crate::error::{LikertError, LikertResult};

/// Linear map from a data domain onto a pixel range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(
        domain_start: f64,
        domain_end: f64,
        range_start: f64,
        range_end: f64,
    ) -> LikertResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(LikertError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(LikertError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            range_start,
            range_end,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        let (low, high) = if self.domain_start <= self.domain_end {
            (self.domain_start, self.domain_end)
        } else {
            (self.domain_end, self.domain_start)
        };
        (low..=high).contains(&value)
    }

    pub fn domain_to_pixel(self, value: f64) -> LikertResult<f64> {
        if !value.is_finite() {
            return Err(LikertError::InvalidData("value must be finite".to_owned()));
        }

        let normalized = (value - self.domain_start) / (self.domain_end - self.domain_start);
        Ok(self.range_start + normalized * (self.range_end - self.range_start))
    }

    /// Pixel length of a data-space distance.
    pub fn span_to_pixels(self, span: f64) -> LikertResult<f64> {
        if !span.is_finite() {
            return Err(LikertError::InvalidData("span must be finite".to_owned()));
        }
        let ratio = (self.range_end - self.range_start) / (self.domain_end - self.domain_start);
        Ok(span * ratio.abs())
    }
}

#[cfg(test)]
mod tests {
    use super::LinearScale;

    #[test]
    fn maps_domain_onto_offset_range() {
        let scale = LinearScale::new(0.0, 10.0, 100.0, 300.0).expect("scale");
        assert_eq!(scale.domain_to_pixel(5.0).expect("px"), 200.0);
        assert_eq!(scale.span_to_pixels(2.5).expect("span"), 50.0);
    }

    #[test]
    fn rejects_zero_width_domain() {
        assert!(LinearScale::new(1.0, 1.0, 0.0, 10.0).is_err());
    }
}
