use crate::error::{ChartError, ChartResult};

/// Proportional mapping from a value domain onto a pixel extent.
///
/// `domain_start` maps to pixel `0` and `domain_end` maps to `extent_px`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64) -> ChartResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ChartError::InvalidOptions(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
        })
    }

    pub fn domain_to_pixel(self, value: f64, extent_px: f64) -> ChartResult<f64> {
        validate_extent(extent_px)?;
        if !value.is_finite() {
            return Err(ChartError::InvalidDataset("value must be finite".to_owned()));
        }

        let span = self.domain_end - self.domain_start;
        let normalized = (value - self.domain_start) / span;
        Ok(normalized * extent_px)
    }
}

fn validate_extent(extent_px: f64) -> ChartResult<()> {
    if !extent_px.is_finite() || extent_px < 0.0 {
        return Err(ChartError::InvalidOptions(
            "pixel extent must be finite and >= 0".to_owned(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::LinearScale;

    #[test]
    fn domain_maps_proportionally_onto_extent() {
        let scale = LinearScale::new(10.0, 110.0).expect("valid scale");

        assert_eq!(scale.domain_to_pixel(10.0, 1000.0).expect("start"), 0.0);
        assert_eq!(scale.domain_to_pixel(60.0, 1000.0).expect("middle"), 500.0);
        assert_eq!(scale.domain_to_pixel(110.0, 1000.0).expect("end"), 1000.0);
    }

    #[test]
    fn collapsed_domain_is_rejected() {
        assert!(LinearScale::new(5.0, 5.0).is_err());
        assert!(LinearScale::new(0.0, f64::NAN).is_err());
    }

    #[test]
    fn negative_extent_is_rejected() {
        let scale = LinearScale::new(0.0, 1.0).expect("valid scale");
        assert!(scale.domain_to_pixel(0.5, -1.0).is_err());
    }
}
