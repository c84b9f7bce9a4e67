// one tolerance scale for every interactively edited 3-variable system:
// anything closer to zero than EPSILON is zero.
pub const EPSILON: f64 = 1e-6;
// for comparisons against squared lengths
pub const SQ_EPSILON: f64 = EPSILON * EPSILON;

pub fn is_negligible(value: f64) -> bool {
    value.abs() < EPSILON
}

pub fn is_approximately_one(value: f64) -> bool {
    (value - 1.0).abs() < EPSILON
}

pub fn snap_to_zero(value: f64) -> f64 {
    if is_negligible(value) {
        0.0
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snaps_floating_residue() {
        assert_eq!(snap_to_zero(1e-9), 0.0);
        assert_eq!(snap_to_zero(-3e-7), 0.0);
        assert_eq!(snap_to_zero(2e-6), 2e-6);
        assert_eq!(snap_to_zero(-4.5), -4.5);
    }

    #[test]
    fn recognises_values_near_one() {
        assert!(is_approximately_one(1.0));
        assert!(is_approximately_one(1.0 + 5e-7));
        assert!(!is_approximately_one(1.0 + 5e-6));
        assert!(!is_approximately_one(-1.0));
    }
}
