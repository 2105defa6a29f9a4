use super::*;

#[test]
fn scale_is_largest_absolute_value() {
    assert_eq!(magnitude_scale(&[-10.0, 0.0, 10.0, 5.0]), 10.0);
    assert_eq!(magnitude_scale(&[-12.0, 3.0]), 12.0);
    assert_eq!(magnitude_scale(&[1.0, 7.5, 2.0]), 7.5);
    assert_eq!(magnitude_scale(&[-1.0, -3.0]), 3.0);
}

#[test]
fn all_zero_row_has_zero_scale() {
    assert_eq!(magnitude_scale(&[0.0, 0.0, 0.0]), 0.0);
    assert_eq!(magnitude_scale(&[-0.0]), 0.0);
}

#[test]
fn single_element_rows() {
    assert_eq!(magnitude_scale(&[4.0]), 4.0);
    assert_eq!(magnitude_scale(&[-4.0]), 4.0);
}

#[test]
fn empty_row_has_zero_scale() {
    assert_eq!(magnitude_scale(&[]), 0.0);
}
