use crate::error::{ChartError, ChartResult};

use super::LayoutOptions;

pub(super) fn validate_layout_options(options: &LayoutOptions) -> ChartResult<()> {
    if options.id.trim().is_empty() {
        return Err(ChartError::InvalidOptions(
            "primitive id prefix must not be empty".to_owned(),
        ));
    }
    if !options.svg_padding.is_valid() {
        return Err(ChartError::InvalidOptions(
            "svg padding sides must be finite and >= 0".to_owned(),
        ));
    }
    if !options.chart_padding.is_valid() {
        return Err(ChartError::InvalidOptions(
            "chart padding sides must be finite and >= 0".to_owned(),
        ));
    }
    if !options.bar_margin_right.is_finite() || options.bar_margin_right < 0.0 {
        return Err(ChartError::InvalidOptions(
            "bar margin must be finite and >= 0".to_owned(),
        ));
    }
    if !options.centroid_padding.is_finite() || options.centroid_padding < 0.0 {
        return Err(ChartError::InvalidOptions(
            "centroid padding must be finite and >= 0".to_owned(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::validate_layout_options;
    use crate::api::LayoutOptions;
    use crate::core::Padding;

    #[test]
    fn defaults_are_valid() {
        assert!(validate_layout_options(&LayoutOptions::default()).is_ok());
    }

    #[test]
    fn negative_padding_is_rejected() {
        let options = LayoutOptions::default().with_svg_padding(Padding::new(1.0, -1.0, 1.0, 1.0));
        assert!(validate_layout_options(&options).is_err());
    }

    #[test]
    fn blank_id_is_rejected() {
        assert!(validate_layout_options(&LayoutOptions::default().with_id("  ")).is_err());
    }
}
