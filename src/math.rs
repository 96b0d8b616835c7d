/// Sum of `weights[i] * values[i]`.
pub fn weighted_sum(values: &[f64], weights: &[f64]) -> f64 {
    assert_eq!(values.len(), weights.len());
    let mut o = 0.;
    for (&v, &w) in values.iter().zip(weights) {
        o += w * v;
    }
    o
}

/// Round to `decimals` decimal places, ties to even.
///
/// `x` is scaled by `10^decimals`, rounded to the nearest integer (halves go to the even
/// neighbour) and scaled back, so `round_decimals(0.5, 0) == 0.` and
/// `round_decimals(1.5, 0) == 2.`.
/// When the scaling overflows or underflows `x` is returned unchanged.
pub fn round_decimals(x: f64, decimals: i32) -> f64 {
    if !x.is_finite() {
        return x;
    }
    let scale = 10f64.powi(decimals);
    let scaled = x * scale;
    if scale == 0. || !scaled.is_finite() {
        return x;
    }
    scaled.round_ties_even() / scale
}
