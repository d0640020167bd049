/// Aggregate feedback ratings into an advisor rating
///
/// Arithmetic mean rounded to one decimal place, half away from zero.
/// Returns `None` when there is nothing to aggregate.
pub fn aggregate_rating<I>(ratings: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = ratings
        .into_iter()
        .fold((0.0_f64, 0_usize), |(sum, count), r| (sum + r, count + 1));

    if count == 0 {
        return None;
    }

    Some(round_to_tenth(sum / count as f64))
}

/// Round to one decimal place; `f64::round` rounds half away from zero
#[inline]
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
