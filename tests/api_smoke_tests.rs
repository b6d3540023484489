use svg_charts::api::{ChartType, LayoutEngine, LayoutOptions};
use svg_charts::core::{DataSet, Viewport};
use svg_charts::error::ChartError;
use svg_charts::render::{
    NullRenderer, RectPrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive,
};

#[test]
fn engine_smoke_flow() {
    let engine = LayoutEngine::new();
    let dataset = DataSet::from_json_str(r#"{ "Mon": 3, "Tue": 7, "Wed": 0, "Thu": 4 }"#)
        .expect("dataset");
    let options = LayoutOptions::from_json_str(r#"{ "height": 240, "id": "week" }"#)
        .expect("options");
    let mut renderer = NullRenderer::default();

    let frame = engine
        .render_into(&mut renderer, ChartType::Bar, &dataset, &options, 480.0)
        .expect("render bar");
    assert_eq!(renderer.last_rect_count, 4);
    assert_eq!(renderer.last_text_count, 4 + 3);
    assert_eq!(frame.viewport.width, 480);
    assert_eq!(frame.viewport.height, 240);

    // Resize passes are independent calls.
    let narrower = engine
        .render_into(&mut renderer, ChartType::Bar, &dataset, &options, 360.0)
        .expect("render narrower");
    assert_eq!(renderer.frames_rendered, 2);
    let wide_width = frame.rects().next().expect("rect").width;
    let narrow_width = narrower.rects().next().expect("rect").width;
    assert!(narrow_width < wide_width);

    let y_labels = frame
        .texts()
        .filter(|text| text.id.starts_with("week-y-label"))
        .map(|text| text.text.as_str())
        .collect::<Vec<_>>();
    assert_eq!(y_labels, ["7", "3.5", "0"]);

    let pie = engine
        .render_into(&mut renderer, ChartType::Pie, &dataset, &options, 480.0)
        .expect("render pie");
    assert_eq!(renderer.last_path_count, 4);
    assert_eq!(renderer.last_text_count, 0);
    let labels = pie
        .primitives
        .iter()
        .filter_map(|primitive| primitive.annotation())
        .map(|annotation| annotation.label.as_str())
        .collect::<Vec<_>>();
    assert_eq!(labels, ["Mon", "Tue", "Wed", "Thu"]);
    assert_eq!(pie.arc_paths().count(), 4);
    assert!(pie.arc_paths().all(|path| path.to_svg_path_data().starts_with("M ")));
}

#[test]
fn unsupported_chart_type_is_reported() {
    let dataset = DataSet::from_pairs([("a", 1.0)]).expect("dataset");
    let err = LayoutEngine::new()
        .compute_named("radar", &dataset, &LayoutOptions::default(), 300.0)
        .expect_err("radar is not supported");
    assert_eq!(err, ChartError::UnsupportedChartType("radar".to_owned()));
}

#[test]
fn inputs_are_left_untouched() {
    let dataset = DataSet::from_pairs([("a", 1.0), ("b", 2.0)]).expect("dataset");
    let options = LayoutOptions::new(ChartType::Doughnut).with_centroid_padding(12.0);
    let (dataset_before, options_before) = (dataset.clone(), options.clone());

    let _ = LayoutEngine::new()
        .compute_configured(&dataset, &options, 200.0)
        .expect("layout");
    assert_eq!(dataset, dataset_before);
    assert_eq!(options, options_before);
}

#[test]
fn null_renderer_rejects_invalid_frames() {
    let mut renderer = NullRenderer::default();
    let frame = RenderFrame::new(Viewport::new(0, 10));
    assert!(renderer.render(&frame).is_err());
    assert_eq!(renderer.frames_rendered, 0);

    let frame = RenderFrame::new(Viewport::new(100, 100))
        .with_primitive(RectPrimitive::new("ok", 0.0, 0.0, 10.0, 10.0))
        .with_primitive(TextPrimitive::new("bad", "x", f64::INFINITY, 0.0, TextHAlign::Left));
    let err = renderer.render(&frame).expect_err("non-finite text");
    assert!(matches!(err, ChartError::InvalidPrimitive(ref reason) if reason.contains("`bad`")));
    assert_eq!(renderer.frames_rendered, 0);
}
