use proptest::prelude::*;
use svg_charts::api::{ChartType, LayoutEngine, LayoutOptions};
use svg_charts::core::{ChartPadding, DataSet, Padding, Viewport, project_bar_layout, project_sectors};
use svg_charts::render::Primitive;

fn dataset_from(values: &[f64]) -> DataSet {
    DataSet::from_pairs(
        values
            .iter()
            .enumerate()
            .map(|(index, value)| (format!("k{index}"), *value)),
    )
    .expect("generated dataset is valid")
}

proptest! {
    #[test]
    fn sector_spans_sum_to_full_circle(
        values in proptest::collection::vec(0.0f64..1_000.0, 1..64)
    ) {
        let total: f64 = values.iter().sum();
        prop_assume!(total > 0.0);

        let layout = project_sectors(
            &dataset_from(&values),
            Viewport::new(400, 400),
            Padding::uniform(5.0),
            0.0,
        )
        .expect("layout");

        let span_sum: f64 = layout.sectors.iter().map(|s| s.span()).sum();
        prop_assert!((span_sum - 360.0).abs() <= 1e-6);
        prop_assert_eq!(layout.sectors.len(), values.len());

        let mut previous_end = 0.0;
        for (sector, value) in layout.sectors.iter().zip(&values) {
            prop_assert_eq!(sector.value, *value);
            prop_assert!(sector.start_angle >= previous_end - 1e-9);
            prop_assert!(sector.end_angle >= sector.start_angle);
            prop_assert_eq!(sector.large_arc, sector.span() > 180.0);
            prop_assert!(sector.outer_start.is_finite() && sector.outer_end.is_finite());
            previous_end = sector.end_angle;
        }
    }

    #[test]
    fn bar_heights_are_monotonic_in_value(
        values in proptest::collection::vec(0.0f64..10_000.0, 1..24)
    ) {
        let layout = project_bar_layout(
            &dataset_from(&values),
            Viewport::new(1_200, 400),
            Padding::uniform(5.0),
            ChartPadding::default(),
            5.0,
        )
        .expect("layout");

        for (i, a) in layout.bars.iter().enumerate() {
            prop_assert!(a.height >= 0.0 && a.height <= layout.chart_height);
            prop_assert_eq!(a.y + a.height, layout.baseline_y);
            for b in &layout.bars[i + 1..] {
                if a.value > b.value {
                    prop_assert!(a.height >= b.height);
                } else if b.value > a.value {
                    prop_assert!(b.height >= a.height);
                }
            }
        }
    }

    #[test]
    fn bars_follow_dataset_order(
        values in proptest::collection::vec(0.0f64..100.0, 1..24)
    ) {
        let primitives = LayoutEngine::new()
            .compute(
                ChartType::Bar,
                &dataset_from(&values),
                &LayoutOptions::default().with_height(300),
                1_200.0,
            )
            .expect("layout");

        let rects = primitives
            .iter()
            .filter_map(|p| match p {
                Primitive::Rect(rect) => Some(rect),
                _ => None,
            })
            .collect::<Vec<_>>();
        prop_assert_eq!(rects.len(), values.len());
        for (index, rect) in rects.iter().enumerate() {
            let annotation = rect.annotation.as_ref().expect("annotation");
            prop_assert_eq!(&annotation.label, &format!("k{index}"));
        }
        for pair in rects.windows(2) {
            prop_assert!(pair[0].x < pair[1].x);
        }
    }

    #[test]
    fn compute_is_idempotent(
        values in proptest::collection::vec(0.5f64..500.0, 1..32),
        chart_type in prop_oneof![Just(ChartType::Bar), Just(ChartType::Pie), Just(ChartType::Doughnut)],
        container_width in 800.0f64..1_600.0
    ) {
        let dataset = dataset_from(&values);
        let options = LayoutOptions::new(chart_type).with_centroid_padding(30.0);
        let engine = LayoutEngine::new();

        let first = engine.compute(chart_type, &dataset, &options, container_width).expect("first");
        let second = engine.compute(chart_type, &dataset, &options, container_width).expect("second");
        prop_assert_eq!(&first, &second);
        prop_assert!(first.iter().all(|p| p.validate().is_ok()));
    }
}
