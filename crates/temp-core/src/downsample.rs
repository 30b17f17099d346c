// File: crates/temp-core/src/downsample.rs
// Summary: Largest-Triangle-Three-Buckets downsampling for line geometry.

/// Largest-Triangle-Three-Buckets downsampling for XY points.
/// Returns up to `threshold` points preserving overall shape; the first and
/// last points are always kept.
pub fn lttb(points: &[(f64, f64)], threshold: usize) -> Vec<(f64, f64)> {
    let n = points.len();
    if threshold == 0 || n == 0 { return Vec::new(); }
    if threshold >= n || n <= 2 { return points.to_vec(); }
    if threshold == 1 { return vec![points[0]]; }
    if threshold == 2 { return vec![points[0], points[n - 1]]; }

    let bucket_size = (n - 2) as f64 / (threshold - 2) as f64;
    let mut sampled = Vec::with_capacity(threshold);
    sampled.push(points[0]);

    let mut a = 0usize; // index of the point kept from the previous bucket

    for i in 0..(threshold - 2) {
        let start = (1.0 + (i as f64) * bucket_size).floor() as usize;
        let end = (1.0 + ((i + 1) as f64) * bucket_size).floor().min((n - 1) as f64) as usize;

        // average of the next bucket
        let next_end = (1.0 + ((i + 2) as f64) * bucket_size).floor().min(n as f64) as usize;
        let (avg_x, avg_y) = average(&points[end.min(n - 1)..next_end.max(end + 1).min(n)]);

        let (a_x, a_y) = points[a];
        let mut max_area = -1.0f64;
        let mut max_idx = start;
        for (k, &(x, y)) in points.iter().enumerate().take(end.max(start + 1)).skip(start) {
            let area = ((a_x - x) * (avg_y - a_y) - (a_x - avg_x) * (y - a_y)).abs();
            if area > max_area {
                max_area = area;
                max_idx = k;
            }
        }
        sampled.push(points[max_idx]);
        a = max_idx;
    }

    sampled.push(points[n - 1]);
    sampled
}

fn average(points: &[(f64, f64)]) -> (f64, f64) {
    let n = points.len().max(1) as f64;
    let (sx, sy) = points.iter().fold((0.0, 0.0), |(sx, sy), &(x, y)| (sx + x, sy + y));
    (sx / n, sy / n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_endpoints_and_threshold() {
        let pts = (0..1000).map(|i| (i as f64, ((i as f64) * 0.05).sin())).collect::<Vec<_>>();
        let out = lttb(&pts, 100);
        assert_eq!(out.len(), 100);
        assert_eq!(out[0], pts[0]);
        assert_eq!(out[99], pts[999]);
        assert!(out.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn small_inputs_pass_through() {
        let pts = vec![(0.0, 1.0), (1.0, 2.0), (2.0, 0.5)];
        assert_eq!(lttb(&pts, 10), pts);
        assert_eq!(lttb(&pts, 2), vec![(0.0, 1.0), (2.0, 0.5)]);
        assert!(lttb(&pts, 0).is_empty());
    }

    #[test]
    fn keeps_a_spike() {
        let mut pts = (0..200).map(|i| (i as f64, 0.0)).collect::<Vec<_>>();
        pts[77].1 = 50.0;
        let out = lttb(&pts, 20);
        assert!(out.iter().any(|p| p.1 == 50.0));
    }
}
