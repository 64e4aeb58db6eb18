// File: crates/rowplot-core/src/grid.rs
// Summary: Tick layout helpers.

/// Round `raw` up to 1, 2, 2.5, 5 or 10 times a power of ten.
pub fn nice_step(raw: f64) -> f64 {
    if !raw.is_finite() || raw <= 0.0 { return 1.0; }
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let nice = if norm <= 1.0 {
        1.0
    } else if norm <= 2.0 {
        2.0
    } else if norm <= 2.5 {
        2.5
    } else if norm <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * mag
}

/// Tick positions at a nice step covering `[min, max]`, about `target` of them.
/// Returns the positions and the step.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> (Vec<f64>, f64) {
    if !min.is_finite() || !max.is_finite() || target < 2 {
        return (Vec::new(), 0.0);
    }
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    let step = nice_step((hi - lo).max(1e-12) / (target - 1) as f64);
    let eps = step * 1e-9;

    let first = (lo / step - 1e-9).ceil() * step;
    let mut ticks = Vec::new();
    let mut i = 0usize;
    loop {
        let v = first + step * i as f64;
        if v > hi + eps || i > 1000 { break; }
        // snap accumulated error around zero
        ticks.push(if v.abs() < eps { 0.0 } else { v });
        i += 1;
    }
    (ticks, step)
}
