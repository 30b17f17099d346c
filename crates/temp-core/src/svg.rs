// File: crates/temp-core/src/svg.rs
// Summary: Headless SVG rendering of a chart model and an optional hover readout.

use std::fmt::Write as _;
use std::path::Path;

use crate::axis::{Axis, AxisPosition};
use crate::chart::ChartModel;
use crate::field::SensorField;
use crate::hover::{HoverReadout, LabelKind, TextAnchor};

pub struct SvgOptions {
    pub background: &'static str,
    pub grid: &'static str,
    pub axis: &'static str,
    pub text: &'static str,
    pub hover_line: &'static str,
    pub draw_labels: bool,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            background: "#ffffff",
            grid: "#e6e6eb",
            axis: "#3c3c46",
            text: "#14141e",
            hover_line: "#999999",
            draw_labels: true,
        }
    }
}

/// Render the chart to an SVG document.
pub fn render(model: &ChartModel, hover: Option<&HoverReadout>, opts: &SvgOptions) -> String {
    let w = model.plot.outer_width;
    let h = model.plot.outer_height;
    let (pw, ph) = (model.plot.width(), model.plot.height());
    let mut out = String::new();

    // fmt::Write into a String cannot fail
    let _ = writeln!(out, r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#);
    let _ = writeln!(out, r#"<rect width="{w}" height="{h}" fill="{}"/>"#, opts.background);
    let _ = writeln!(out, r#"<g transform="translate({},{})">"#, model.plot.insets.left, model.plot.insets.top);

    draw_grid(&mut out, model, opts);
    draw_axis(&mut out, &model.time_axis, pw, ph, opts);
    draw_axis(&mut out, &model.temperature_axis, pw, ph, opts);
    draw_axis(&mut out, &model.light_axis, pw, ph, opts);

    for line in &model.lines {
        let info = line.field.display_info();
        let _ = writeln!(
            out,
            r#"<path class="line {:?}" d="{}" fill="none" stroke="{}" stroke-width="1.5"/>"#,
            line.field,
            line.to_svg_d(),
            info.color
        );
    }

    if let Some(r) = hover {
        draw_hover(&mut out, r, ph, opts);
    }

    out.push_str("</g>\n</svg>\n");
    out
}

pub fn render_to_file(
    model: &ChartModel,
    hover: Option<&HoverReadout>,
    opts: &SvgOptions,
    path: impl AsRef<Path>,
) -> std::io::Result<()> {
    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, render(model, hover, opts))
}

// ---- helpers ----------------------------------------------------------------

fn draw_grid(out: &mut String, model: &ChartModel, opts: &SvgOptions) {
    let pw = model.plot.width();
    for t in &model.time_axis.ticks {
        let _ = writeln!(out, r#"<line x1="{0:.2}" y1="0" x2="{0:.2}" y2="{1:.2}" stroke="{2}"/>"#, t.px, model.plot.height(), opts.grid);
    }
    for t in &model.temperature_axis.ticks {
        let _ = writeln!(out, r#"<line x1="0" y1="{0:.2}" x2="{1:.2}" y2="{0:.2}" stroke="{2}"/>"#, t.px, pw, opts.grid);
    }
}

fn draw_axis(out: &mut String, axis: &Axis, pw: f64, ph: f64, opts: &SvgOptions) {
    let (x1, y1, x2, y2) = match axis.position {
        AxisPosition::Bottom => (0.0, ph, pw, ph),
        AxisPosition::Left => (0.0, 0.0, 0.0, ph),
        AxisPosition::Right => (pw, 0.0, pw, ph),
    };
    let _ = writeln!(out, r#"<line x1="{x1:.2}" y1="{y1:.2}" x2="{x2:.2}" y2="{y2:.2}" stroke="{}"/>"#, opts.axis);
    if !opts.draw_labels {
        return;
    }
    for t in &axis.ticks {
        let (x, y, anchor) = match axis.position {
            AxisPosition::Bottom => (t.px, ph + 16.0, "middle"),
            AxisPosition::Left => (-6.0, t.px + 4.0, "end"),
            AxisPosition::Right => (pw + 6.0, t.px + 4.0, "start"),
        };
        let _ = writeln!(
            out,
            r#"<text x="{x:.2}" y="{y:.2}" font-size="10" text-anchor="{anchor}" fill="{}">{}</text>"#,
            opts.text,
            escape(&t.text)
        );
    }
}

fn draw_hover(out: &mut String, r: &HoverReadout, ph: f64, opts: &SvgOptions) {
    let _ = writeln!(out, r#"<line class="hover" x1="{0:.2}" y1="0" x2="{0:.2}" y2="{1:.2}" stroke="{2}"/>"#, r.focus.x, ph, opts.hover_line);
    for l in &r.labels {
        let anchor = match l.anchor {
            TextAnchor::Start => "start",
            TextAnchor::End => "end",
        };
        let fill = match l.kind {
            LabelKind::Time => opts.text,
            LabelKind::Sensor(f) => field_color(f),
        };
        let _ = writeln!(
            out,
            r#"<text class="hover-label" x="{:.2}" y="{:.2}" font-size="11" text-anchor="{anchor}" fill="{fill}">{}</text>"#,
            l.x,
            l.y,
            escape(&l.text)
        );
    }
}

fn field_color(f: SensorField) -> &'static str {
    f.display_info().color
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
