use super::*;

#[test]
fn test_quantiles() {
    let v = vec![1.0f32, 2.0, 3.0, 4.0, 5.0];
    assert_eq!(median(&v), 3.0);
    assert_eq!(p90(&v), 5.0);
    assert_eq!(quantile_indexed(&v, 0.0), 1.0);
}

#[test]
fn test_quantiles_unsorted_and_empty() {
    let v = vec![12.0f32, 3.0, 3.0];
    assert_eq!(median(&v), 3.0);
    assert_eq!(p90(&v), 12.0);
    assert_eq!(median(&[]), 0.0);
}

#[test]
fn test_bool_fraction() {
    assert_eq!(bool_fraction(&[]), 0.0);
    assert_eq!(bool_fraction(&[true, false, false, true]), 0.5);
}

#[test]
fn test_format_f32_6() {
    assert_eq!(format_f32_6(0.25), "0.250000");
}
