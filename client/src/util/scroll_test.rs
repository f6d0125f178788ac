use super::*;

const VIEWPORT: f64 = 800.0;

#[test]
fn fully_inside_viewport_is_hundred_percent() {
    let rect = SectionRect { top: 0.0, height: 800.0 };
    assert_eq!(visible_percent(rect, VIEWPORT), Some(100.0));
}

#[test]
fn section_below_fold_is_partially_visible() {
    let rect = SectionRect { top: 400.0, height: 800.0 };
    assert_eq!(visible_percent(rect, VIEWPORT), Some(50.0));
}

#[test]
fn section_scrolled_past_top_is_partially_visible() {
    let rect = SectionRect { top: -200.0, height: 800.0 };
    assert_eq!(visible_percent(rect, VIEWPORT), Some(75.0));
}

#[test]
fn section_out_of_view_clamps_to_zero() {
    assert_eq!(visible_percent(SectionRect { top: 1_200.0, height: 800.0 }, VIEWPORT), Some(0.0));
    assert_eq!(visible_percent(SectionRect { top: -1_000.0, height: 800.0 }, VIEWPORT), Some(0.0));
}

#[test]
fn hidden_section_yields_no_sample() {
    assert_eq!(visible_percent(SectionRect { top: 10.0, height: 0.0 }, VIEWPORT), None);
    assert_eq!(visible_percent(SectionRect { top: 0.0, height: -1.0 }, VIEWPORT), None);
}

#[test]
fn hidden_section_does_not_flip_commercial_back() {
    use crate::content::videos::Category;
    use crate::state::product::ProductState;

    let mut state = ProductState::default();
    state.select_category(Category::Commercial);
    if let Some(percent) = visible_percent(SectionRect { top: 0.0, height: 0.0 }, VIEWPORT) {
        state.on_visible_percent(percent);
    }
    assert_eq!(state.category, Category::Commercial);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn window_scroll_is_zero_without_browser() {
    assert_eq!(window_scroll_y(), 0.0);
}
