/// Checks that a numerical value is in the provided interval `[a,b]`, returning early with an
/// [`Error::Configuration`](crate::error::Error::Configuration) if not
///
/// ### Example
/// ```ignore
/// let value = 2.0;
/// check_interval!(value, 0.0, 1.0);
/// ```
/// This returns the error "invalid configuration: Invalid value for \`value\` (2). Must be in the interval \[0, 1\]."
#[macro_export]
macro_rules! check_interval {
    ($var:expr, $a:expr, $b:expr) => {
        if !($var >= $a && $var <= $b) {
            return Err($crate::error::Error::Configuration {
                message: format!(
                    "Invalid value for `{}` ({}). Must be in the interval [{}, {}].",
                    stringify!($var),
                    $var,
                    $a,
                    $b,
                ),
            });
        }
    };
}

/// Index of the largest value in `values`, ties broken by the lowest index
///
/// **Panics** if `values` is empty
pub fn argmax(values: &[f64]) -> usize {
    values
        .iter()
        .enumerate()
        .fold((0, f64::NEG_INFINITY), |(best, best_value), (i, &value)| {
            if value > best_value {
                (i, value)
            } else {
                (best, best_value)
            }
        })
        .0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, Result};

    fn check(value: f64) -> Result<()> {
        check_interval!(value, 0.0, 1.0);
        Ok(())
    }

    #[test]
    fn check_interval_bounds() {
        assert!(check(0.0).is_ok());
        assert!(check(1.0).is_ok());
        assert!(matches!(check(1.5), Err(Error::Configuration { .. })));
        assert!(matches!(check(-0.1), Err(Error::Configuration { .. })));
        assert!(check(f64::NAN).is_err());
    }

    #[test]
    fn argmax_prefers_lowest_index() {
        assert_eq!(argmax(&[0.0, 0.0, 0.0]), 0);
        assert_eq!(argmax(&[0.1, 0.5, 0.5]), 1);
        assert_eq!(argmax(&[-1.0, -0.5, -2.0]), 1);
    }
}
