use super::*;

#[test]
fn empty_ring_offsets_full_circumference() {
    assert!((dash_offset(0.0) - circumference()).abs() < 1e-9);
}

#[test]
fn full_ring_has_no_offset() {
    assert!(dash_offset(100.0).abs() < 1e-9);
}

#[test]
fn half_ring_offsets_half_circumference() {
    assert!((dash_offset(50.0) - circumference() / 2.0).abs() < 1e-9);
}

#[test]
fn out_of_range_percentages_are_clamped() {
    assert!(dash_offset(150.0).abs() < 1e-9);
    assert!((dash_offset(-5.0) - circumference()).abs() < 1e-9);
    assert!((dash_offset(f64::NAN) - circumference()).abs() < 1e-9);
}
