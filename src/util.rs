/// Clamp `i` into `min..=max`.
///
/// Values equal to a bound pass through. With `min > max` anything below
/// `min` becomes `min` and everything else becomes `max`.
pub fn clamp<T: PartialOrd>(i: T, min: T, max: T) -> T {
    if i < min {
        min
    } else if i > max {
        max
    } else {
        i
    }
}
