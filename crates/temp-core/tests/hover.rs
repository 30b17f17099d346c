// File: crates/temp-core/tests/hover.rs
// Purpose: Hover state machine over the statistics fixture with the default chart layout.

use approx::assert_relative_eq;
use temp_core::hover::{bisect_left, HoverState, LabelKind, TextAnchor};
use temp_core::{samples_from_text, ChartConfig, ChartModel, HoverConfig, HoverController, IngestConfig, Sample, SensorField};

fn load() -> (Vec<Sample>, ChartModel) {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/stats.csv");
    let text = std::fs::read_to_string(path).expect("fixture");
    let samples = samples_from_text(&text, &IngestConfig::default()).expect("samples");
    let model = ChartModel::build(&samples, &ChartConfig::default()).expect("model");
    (samples, model)
}

fn readout(state: &HoverState) -> &temp_core::HoverReadout {
    match state {
        HoverState::Engaged(r) => r,
        HoverState::Idle => panic!("expected engaged hover"),
    }
}

#[test]
fn lower_bound_over_sample_times() {
    let (samples, _) = load();
    let times = samples.iter().map(Sample::time_ms).collect::<Vec<_>>();
    assert_eq!(bisect_left(&times, times[3]), 3);
    assert_eq!(bisect_left(&times, times[3] + 1.0), 4);
    assert_eq!(bisect_left(&times, times[0] - 60_000.0), 0);
    assert_eq!(bisect_left(&times, times[6] + 60_000.0), 7);
}

#[test]
fn pointer_on_a_sample_focuses_it() {
    let (samples, model) = load();
    let mut hover = HoverController::new(&model, &samples, HoverConfig::default());
    for (i, s) in samples.iter().enumerate() {
        let x = model.time_scale.datetime_px(&s.timestamp);
        let r = readout(hover.pointer_move(x, 100.0));
        assert_eq!(r.focus.index, i, "sample {i} at x={x}");
    }
}

#[test]
fn pointer_outside_domain_clamps() {
    let (samples, model) = load();
    let mut hover = HoverController::new(&model, &samples, HoverConfig::default());
    assert_eq!(readout(hover.pointer_enter(-25.0, 10.0)).focus.index, 0);
    assert_eq!(readout(hover.pointer_move(900.0, 10.0)).focus.index, samples.len() - 1);
}

#[test]
fn labels_format_time_and_values() {
    let (samples, model) = load();
    let mut hover = HoverController::new(&model, &samples, HoverConfig::default());
    let x = model.time_scale.datetime_px(&samples[3].timestamp);
    let r = readout(hover.pointer_enter(x, 50.0));

    let texts = r.labels.iter().map(|l| l.text.as_str()).collect::<Vec<_>>();
    assert_eq!(texts, vec!["Time: 09:20:05", "Cabin Temp: 95.79°F", "Outside Temp: 89.10°F", "Light: 78.00%"]);
    assert_eq!(r.labels[0].kind, LabelKind::Time);
    assert_eq!(r.labels[3].kind, LabelKind::Sensor(SensorField::Light));
    assert_eq!(r.focus.x, x);
}

#[test]
fn anchor_flips_past_two_thirds() {
    let (samples, model) = load();
    let cfg = HoverConfig::default();
    let mut hover = HoverController::new(&model, &samples, cfg.clone());
    let w = model.plot.width();

    let left = readout(hover.pointer_move(w * 0.5, 0.0)).clone();
    assert!(left.labels.iter().all(|l| l.anchor == TextAnchor::Start));
    assert_eq!(left.labels[0].x, left.focus.x + cfg.label_offset);

    let right = readout(hover.pointer_move(w * 0.9, 0.0)).clone();
    assert!(right.labels.iter().all(|l| l.anchor == TextAnchor::End));
    assert_eq!(right.labels[0].x, right.focus.x - cfg.label_offset);
}

#[test]
fn label_stack_starts_at_lowest_reading_and_is_floored() {
    let (samples, model) = load();
    let cfg = HoverConfig::default();
    let mut hover = HoverController::new(&model, &samples, cfg.clone());
    let h = model.plot.height();

    // sample 3: light 78% is the smallest reading; light axis niced to 0..100
    assert_eq!(model.light_scale.vmax, 100.0);
    let x3 = model.time_scale.datetime_px(&samples[3].timestamp);
    let r = readout(hover.pointer_move(x3, 0.0)).clone();
    assert_relative_eq!(r.labels[0].y, h - 0.78 * h, epsilon = 1e-9);
    assert_relative_eq!(r.labels[1].y, r.labels[0].y + cfg.line_height, epsilon = 1e-9);

    // sample 0: light 12% sits near the bottom, so the stack is clamped up
    let r = readout(hover.pointer_move(0.0, 0.0)).clone();
    assert_relative_eq!(r.labels[0].y, h * 2.0 / 3.0, epsilon = 1e-9);
    let bottom = r.labels.last().map(|l| l.y).unwrap_or_default();
    assert!(bottom < h, "labels must stay above the x-axis");
}

#[test]
fn leave_hides_but_refreshes_focus() {
    let (samples, model) = load();
    let mut hover = HoverController::new(&model, &samples, HoverConfig::default());
    assert!(!hover.is_engaged());
    hover.pointer_enter(10.0, 10.0);
    assert!(hover.is_engaged());
    assert_eq!(hover.last_focus().map(|f| f.index), Some(1));

    let state = hover.pointer_leave(model.plot.width());
    assert_eq!(*state, HoverState::Idle);
    assert_eq!(hover.last_focus().map(|f| f.index), Some(samples.len() - 1));

    hover.reset();
    assert!(hover.last_focus().is_none());
}
