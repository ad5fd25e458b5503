/// Rounds to `places` decimals, sending exact halves to the even neighbour
/// (0.625 -> 0.62, 6.25 -> 6.2).
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    round_half_even(value * factor) / factor
}

// f64::round_ties_even needs 1.77; the crate still builds on 1.75.
fn round_half_even(x: f64) -> f64 {
    let rounded = x.round();
    if (rounded - x).abs() == 0.5 {
        2.0 * (x / 2.0).round()
    } else {
        rounded
    }
}
