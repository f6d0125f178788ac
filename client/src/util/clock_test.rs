use super::*;

#[test]
fn current_year_is_plausible() {
    let year = current_year();
    assert!((2025..3000).contains(&year), "unexpected year {year}");
}
