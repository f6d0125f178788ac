use super::*;

#[test]
fn active_tab_is_white_and_scaled() {
    let style = tab_style(true);
    assert!(style.contains("color: #ffffff"));
    assert!(style.contains("scale(1.05)"));
}

#[test]
fn inactive_tab_is_dim_and_unscaled() {
    let style = tab_style(false);
    assert!(style.contains("color: #333333"));
    assert!(style.contains("scale(1)"));
}

#[test]
fn indicator_covers_half_for_each_category() {
    assert!(indicator_style(Category::Passenger).starts_with("top: 0; height: 50%;"));
    assert!(indicator_style(Category::Commercial).starts_with("top: 50%; height: 50%;"));
}

#[test]
fn only_active_variants_are_opaque() {
    assert!(thumbnail_class(true).ends_with("opacity-100"));
    assert!(thumbnail_class(false).contains("opacity-50"));
    assert!(carousel_layer_class(true).ends_with("opacity-100"));
    assert!(carousel_layer_class(false).ends_with("opacity-0"));
    assert!(dot_class(true).contains("w-8"));
    assert!(!dot_class(false).contains("w-8"));
}
