pub mod general;
pub mod geometry;

#[cfg(test)]
mod general_tests {
    use crate::general::{
        clamped_lower_bound, is_non_decreasing, lin_rescale, lower_bound, min_max, round_half_up,
    };
    use approx::assert_ulps_eq;

    #[test]
    fn test_lower_bound_ties() {
        let x: Vec<f64> = vec![0.0, 1.0, 2.0, 5.0, 5.0, 8.0];
        assert_eq!(lower_bound(&x, 5.0), 3);
    }
    #[test]
    fn test_lower_bound_between() {
        let x: Vec<f64> = vec![0.0, 1.0, 2.0, 5.0, 5.0, 8.0];
        assert_eq!(lower_bound(&x, 3.5), 3);
        assert_eq!(lower_bound(&x, 6.0), 5);
    }
    #[test]
    fn test_lower_bound_out_of_range() {
        let x: Vec<f64> = vec![0.0, 1.0, 2.0, 5.0, 5.0, 8.0];
        assert_eq!(lower_bound(&x, -1.0), 0);
        assert_eq!(lower_bound(&x, 9.0), 6);
    }
    #[test]
    fn test_clamped_lower_bound() {
        let x: Vec<f64> = vec![0.0, 1.0, 2.0, 5.0, 5.0, 8.0];
        assert_eq!(clamped_lower_bound(&x, -1.0), 0);
        assert_eq!(clamped_lower_bound(&x, 9.0), 5);
    }

    #[test]
    fn test_is_non_decreasing_1() {
        assert!(is_non_decreasing(&[0.0, 0.5, 0.5, 2.0]));
        assert!(is_non_decreasing(&[]));
    }
    #[test]
    fn test_is_non_decreasing_2() {
        assert!(!is_non_decreasing(&[0.0, 0.5, 0.4]));
        assert!(!is_non_decreasing(&[0.0, f64::NAN, 1.0]));
    }

    #[test]
    fn test_round_half_up() {
        assert_ulps_eq!(round_half_up(2.5), 3.0);
        assert_ulps_eq!(round_half_up(2.4), 2.0);
        assert_ulps_eq!(round_half_up(-2.5), -2.0);
        assert_ulps_eq!(round_half_up(-2.6), -3.0);
    }

    #[test]
    fn test_min_max_1() {
        let x: Vec<f64> = vec![3.0, -1.0, 5.0, 8.0, -2.0];
        assert_eq!(min_max(&x), Some((-2.0, 8.0)));
    }
    #[test]
    fn test_min_max_2() {
        assert_eq!(min_max(&[]), None);
        assert_eq!(min_max(&[f64::NAN, 1.0]), Some((1.0, 1.0)));
    }

    #[test]
    fn test_lin_rescale_1() {
        assert_ulps_eq!(lin_rescale(5.0, 0.0, 10.0, 8.0, 9.0), 8.5);
        assert_ulps_eq!(lin_rescale(10.0, 0.0, 10.0, 8.0, 9.0), 9.0);
    }
    #[test]
    fn test_lin_rescale_degenerate() {
        assert_ulps_eq!(lin_rescale(3.0, 3.0, 3.0, 50.0, 52.0), 51.0);
    }
}
