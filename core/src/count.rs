pub const MIN_COUNT: usize = 1;
pub const DEFAULT_MAX_COUNT: usize = 200;

/// Coerces user text into a usable group count. Anything that is not an
/// integer >= 1 becomes 1; values above `max` are capped.
pub fn parse_count(raw: &str, max: usize) -> usize {
    let max = max.max(MIN_COUNT);
    match raw.trim().parse::<i64>() {
        Ok(value) if value < MIN_COUNT as i64 => MIN_COUNT,
        Ok(value) => usize::try_from(value).map_or(max, |count| count.min(max)),
        Err(_) => match raw.trim().trim_start_matches('+').parse::<u128>() {
            // Digits too long for i64 are still "a large number".
            Ok(_) => max,
            Err(_) => MIN_COUNT,
        },
    }
}
