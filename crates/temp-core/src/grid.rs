// File: crates/temp-core/src/grid.rs
// Summary: Tick layout helpers: linspace, human-friendly tick steps, domain nicing.

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = 1.4142135623730951; // sqrt(2)

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Step between roughly `count` ticks over `[start, stop]`, snapped to 1, 2 or 5
/// times a power of ten.
///
/// Positive results are the step itself. Steps below one are returned as the
/// negated inverse (e.g. -5 for 0.2) so that callers can divide instead of
/// multiply and stay exact.
pub fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    let step = (stop - start) / (count.max(1) as f64);
    if !(step.is_finite() && step > 0.0) {
        return f64::NAN;
    }
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };
    if power >= 0.0 {
        factor * 10f64.powf(power)
    } else {
        -(10f64.powf(-power)) / factor
    }
}

/// Extend `[start, stop]` outward so both ends land on tick boundaries.
pub fn nice(mut start: f64, mut stop: f64, count: usize) -> (f64, f64) {
    let mut prestep = f64::NAN;
    for _ in 0..10 {
        let step = tick_increment(start, stop, count);
        if step == prestep || step.is_nan() {
            break;
        }
        if step > 0.0 {
            start = (start / step).floor() * step;
            stop = (stop / step).ceil() * step;
        } else {
            start = (start * step).ceil() / step;
            stop = (stop * step).floor() / step;
        }
        prestep = step;
    }
    (start, stop)
}

/// Tick values inside `[start, stop]` (ascending input only).
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    let step = tick_increment(start, stop, count);
    if step.is_nan() || step == 0.0 {
        return if start == stop { vec![start] } else { Vec::new() };
    }
    if step > 0.0 {
        let i0 = (start / step).ceil() as i64;
        let i1 = (stop / step).floor() as i64;
        (i0..=i1).map(|i| i as f64 * step).collect()
    } else {
        let inv = -step;
        let i0 = (start * inv).ceil() as i64;
        let i1 = (stop * inv).floor() as i64;
        (i0..=i1).map(|i| i as f64 / inv).collect()
    }
}
