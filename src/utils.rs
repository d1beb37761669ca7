// utils.rs - uniform sampling helpers for the mock metric generators
use rand::Rng;

/// Sample an integer uniformly from the half-open range [lo, hi).
pub fn rand_int(lo: i64, hi: i64) -> i64 {
    rand::thread_rng().gen_range(lo..hi)
}

/// Sample a float uniformly from the half-open range [lo, hi).
pub fn rand_float(lo: f64, hi: f64) -> f64 {
    rand::thread_rng().gen_range(lo..hi)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rand_int_stays_in_range() {
        for _ in 0..1000 {
            let n = rand_int(140, 160);
            assert!((140..160).contains(&n), "sampled {} outside [140, 160)", n);
        }
    }

    #[test]
    fn test_rand_float_stays_in_range() {
        for _ in 0..1000 {
            let x = rand_float(0.0, 0.5);
            assert!((0.0..0.5).contains(&x), "sampled {} outside [0.0, 0.5)", x);
        }
    }
}
