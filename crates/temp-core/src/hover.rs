// File: crates/temp-core/src/hover.rs
// Summary: Hover interaction state machine; pointer x to nearest sample and a stacked label readout.

use crate::chart::ChartModel;
use crate::config::HoverConfig;
use crate::field::{SensorField, TIME_LABEL};
use crate::geometry::clamp;
use crate::sample::Sample;
use crate::stats::round_to;

/// Text alignment of readout labels relative to their anchor x.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    /// Left-aligned, drawn to the right of the hover line.
    Start,
    /// Right-aligned, drawn to the left of the hover line.
    End,
}

/// Which row of the readout a label belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelKind {
    Time,
    Sensor(SensorField),
}

#[derive(Clone, Debug, PartialEq)]
pub struct HoverLabel {
    pub kind: LabelKind,
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub anchor: TextAnchor,
}

/// The sample under the pointer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FocusedSample {
    pub index: usize,
    pub sample: Sample,
    /// Plot-local x of the sample (where the hover line is drawn).
    pub x: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HoverReadout {
    pub focus: FocusedSample,
    pub pointer_x: f64,
    pub labels: Vec<HoverLabel>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum HoverState {
    Idle,
    Engaged(HoverReadout),
}

/// First index whose value is `>= target` (`values.len()` when none is).
pub fn bisect_left(values: &[f64], target: f64) -> usize {
    values.partition_point(|v| *v < target)
}

/// Drives the hover line and readout for one chart model.
///
/// ```text
/// Idle --enter--> Engaged --move--> Engaged --leave--> Idle
/// ```
///
/// Pointer coordinates are plot-local (see [`PlotRect::to_plot`](crate::geometry::PlotRect::to_plot)).
/// Build a fresh controller whenever the chart model is rebuilt.
pub struct HoverController<'a> {
    model: &'a ChartModel,
    samples: &'a [Sample],
    times: Vec<f64>,
    cfg: HoverConfig,
    state: HoverState,
    last_focus: Option<FocusedSample>,
}

impl<'a> HoverController<'a> {
    pub fn new(model: &'a ChartModel, samples: &'a [Sample], cfg: HoverConfig) -> Self {
        let times = samples.iter().map(Sample::time_ms).collect();
        Self { model, samples, times, cfg, state: HoverState::Idle, last_focus: None }
    }

    pub fn state(&self) -> &HoverState {
        &self.state
    }

    pub fn is_engaged(&self) -> bool {
        matches!(self.state, HoverState::Engaged(_))
    }

    /// Sample focused by the most recent pointer event, including a leave.
    pub fn last_focus(&self) -> Option<&FocusedSample> {
        self.last_focus.as_ref()
    }

    pub fn pointer_enter(&mut self, x: f64, y: f64) -> &HoverState {
        self.pointer_move(x, y)
    }

    pub fn pointer_move(&mut self, x: f64, _y: f64) -> &HoverState {
        self.state = match self.readout(x) {
            Some(r) => {
                self.last_focus = Some(r.focus);
                HoverState::Engaged(r)
            }
            None => HoverState::Idle,
        };
        &self.state
    }

    /// Hide the readout. The focus is still refreshed from the exit position.
    pub fn pointer_leave(&mut self, x: f64) -> &HoverState {
        if let Some(focus) = self.focus_at(x) {
            self.last_focus = Some(focus);
        }
        self.state = HoverState::Idle;
        &self.state
    }

    pub fn reset(&mut self) {
        self.state = HoverState::Idle;
        self.last_focus = None;
    }

    /// Nearest sample at or after the time under `x`, clamped to the last sample.
    pub fn focus_at(&self, x: f64) -> Option<FocusedSample> {
        if self.samples.is_empty() {
            return None;
        }
        // sample times are whole milliseconds
        let t = self.model.time_scale.from_px(x).round();
        let index = bisect_left(&self.times, t).min(self.samples.len() - 1);
        let sample = self.samples[index];
        Some(FocusedSample { index, sample, x: self.model.time_scale.datetime_px(&sample.timestamp) })
    }

    pub fn readout(&self, x: f64) -> Option<HoverReadout> {
        let focus = self.focus_at(x)?;
        let plot_w = self.model.plot.width();
        let plot_h = self.model.plot.height();

        let anchor = if x > plot_w * self.cfg.flip_fraction { TextAnchor::End } else { TextAnchor::Start };
        let label_x = match anchor {
            TextAnchor::Start => focus.x + self.cfg.label_offset,
            TextAnchor::End => focus.x - self.cfg.label_offset,
        };

        // stack from the lowest reading, but never start below the floor line
        let lowest = SensorField::ALL
            .iter()
            .copied()
            .min_by(|a, b| a.value(&focus.sample).total_cmp(&b.value(&focus.sample)))
            .unwrap_or(SensorField::Internal);
        let lowest_y = self.model.value_scale(lowest).to_px(lowest.value(&focus.sample));
        let top = clamp(lowest_y, 0.0, plot_h * self.cfg.floor_fraction);

        let rows = std::iter::once((LabelKind::Time, format!("{TIME_LABEL}: {}", focus.sample.timestamp.format("%H:%M:%S"))))
            .chain(SensorField::ALL.iter().map(|&f| {
                let info = f.display_info();
                (LabelKind::Sensor(f), format!("{}: {:.2}{}", info.label, round_to(f.value(&focus.sample), 2), f.unit()))
            }));
        let labels = rows
            .enumerate()
            .map(|(i, (kind, text))| HoverLabel { kind, text, x: label_x, y: top + i as f64 * self.cfg.line_height, anchor })
            .collect();

        Some(HoverReadout { focus, pointer_x: x, labels })
    }
}
