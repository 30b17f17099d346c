// File: crates/temp-core/src/chart.rs
// Summary: Chart coordinate model; scales, axes and line geometry built from samples.

use crate::axis::{Axis, AxisPosition};
use crate::config::ChartConfig;
use crate::downsample::lttb;
use crate::error::EmptyDatasetError;
use crate::field::{AxisSide, SensorField, TIME_LABEL};
use crate::geometry::PlotRect;
use crate::sample::Sample;
use crate::scale::{TimeScale, ValueScale};
use crate::stats;

/// Plot-local polyline for one tracked field.
#[derive(Clone, Debug, PartialEq)]
pub struct LinePath {
    pub field: SensorField,
    pub points: Vec<(f64, f64)>,
}

impl LinePath {
    /// SVG path data (`M x,y L x,y ...`).
    pub fn to_svg_d(&self) -> String {
        let mut d = String::with_capacity(self.points.len() * 16);
        for (i, (x, y)) in self.points.iter().enumerate() {
            let cmd = if i == 0 { 'M' } else { 'L' };
            if i > 0 { d.push(' '); }
            d.push_str(&format!("{cmd}{x:.2},{y:.2}"));
        }
        d
    }
}

/// Everything needed to draw one dataset. Built whole; a new dataset gets a
/// new model rather than an update of the old one.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartModel {
    pub plot: PlotRect,
    pub time_scale: TimeScale,
    /// Left axis, temperatures.
    pub temperature_scale: ValueScale,
    /// Right axis, light percent.
    pub light_scale: ValueScale,
    pub time_axis: Axis,
    pub temperature_axis: Axis,
    pub light_axis: Axis,
    pub lines: Vec<LinePath>,
}

impl ChartModel {
    pub fn build(samples: &[Sample], cfg: &ChartConfig) -> Result<Self, EmptyDatasetError> {
        let (first, last) = match (samples.first(), samples.last()) {
            (Some(f), Some(l)) => (f, l),
            _ => return Err(EmptyDatasetError),
        };
        let plot = cfg.plot_rect();
        let (w, h) = (plot.width(), plot.height());

        let time_scale = TimeScale::new(first.timestamp, last.timestamp, 0.0, w);
        let temperature_scale = ValueScale::new_linear(0.0, h, 0.0, cfg.temperature_ceiling);
        let light_max = stats::max(&samples.iter().map(|s| s.light_percent).collect::<Vec<_>>())?;
        let light_scale = ValueScale::new_nice(0.0, h, 0.0, light_max.max(0.0), cfg.nice_ticks);

        let mut model = Self {
            plot,
            time_axis: Axis::time(TIME_LABEL, &time_scale, cfg.time_ticks),
            temperature_axis: Axis::value("Temperature (°F)", AxisPosition::Left, &temperature_scale, cfg.nice_ticks),
            light_axis: Axis::value("Light (%)", AxisPosition::Right, &light_scale, cfg.nice_ticks),
            time_scale,
            temperature_scale,
            light_scale,
            lines: Vec::with_capacity(SensorField::ALL.len()),
        };
        for field in SensorField::ALL {
            let mut points = samples.iter().map(|s| model.point(field, s)).collect::<Vec<_>>();
            if let Some(cap) = cfg.max_points {
                if points.len() > cap && cap >= 2 {
                    points = lttb(&points, cap);
                }
            }
            model.lines.push(LinePath { field, points });
        }
        tracing::debug!(samples = samples.len(), light_max, light_ceiling = model.light_scale.vmax, "built chart model");
        Ok(model)
    }

    pub fn value_scale(&self, field: SensorField) -> &ValueScale {
        match field.axis() {
            AxisSide::Left => &self.temperature_scale,
            AxisSide::Right => &self.light_scale,
        }
    }

    /// Plot-local position of one field of one sample.
    #[inline]
    pub fn point(&self, field: SensorField, s: &Sample) -> (f64, f64) {
        (self.time_scale.datetime_px(&s.timestamp), self.value_scale(field).to_px(field.value(s)))
    }

    pub fn line(&self, field: SensorField) -> Option<&LinePath> {
        self.lines.iter().find(|l| l.field == field)
    }
}
