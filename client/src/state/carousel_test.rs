use super::*;

fn fully_loaded(category: Category) -> CarouselState {
    let mut state = CarouselState::new(category);
    for i in 0..state.videos().len() {
        state.mark_loaded(i);
    }
    state
}

#[test]
fn new_carousel_starts_at_first_clip_unloaded() {
    let state = CarouselState::new(Category::Passenger);
    assert_eq!(state.index, 0);
    assert_eq!(state.loaded, vec![false; 5]);
    assert!(!state.should_play_current());
}

#[test]
fn mark_loaded_sets_only_that_flag() {
    let mut state = CarouselState::new(Category::Commercial);
    state.mark_loaded(1);
    assert_eq!(state.loaded, vec![false, true, false]);
}

#[test]
fn mark_loaded_out_of_range_is_ignored() {
    let mut state = CarouselState::new(Category::Commercial);
    state.mark_loaded(7);
    assert_eq!(state.loaded, vec![false; 3]);
    assert!(!state.is_loaded(7));
}

#[test]
fn ended_before_load_does_not_advance() {
    let mut state = CarouselState::new(Category::Passenger);
    assert!(!state.on_ended(0));
    assert_eq!(state.index, 0);
}

#[test]
fn ended_advances_by_one_after_load() {
    let mut state = CarouselState::new(Category::Passenger);
    state.mark_loaded(0);
    assert!(state.on_ended(0));
    assert_eq!(state.index, 1);
    // Clip 1 has not loaded yet.
    assert!(!state.on_ended(1));
    assert_eq!(state.index, 1);
}

#[test]
fn ended_wraps_modulo_category_length() {
    for category in Category::ALL {
        let mut state = fully_loaded(category);
        let len = state.videos().len();
        for step in 1..=(len * 2) {
            let before = state.index;
            assert!(state.on_ended(before));
            assert_eq!(state.index, (before + 1) % len, "step {step}");
        }
        assert_eq!(state.index, 0);
    }
}

#[test]
fn ended_from_hidden_clip_after_dot_click_is_ignored() {
    let mut state = fully_loaded(Category::Passenger);
    state.select(2);
    assert!(!state.on_ended(0));
    assert_eq!(state.index, 2);
    assert!(state.on_ended(2));
    assert_eq!(state.index, 3);
}

#[test]
fn ended_with_out_of_range_clip_is_ignored() {
    let mut state = fully_loaded(Category::Commercial);
    assert!(!state.on_ended(9));
    assert_eq!(state.index, 0);
}

#[test]
fn select_jumps_to_dot_and_ignores_out_of_range() {
    let mut state = CarouselState::new(Category::Commercial);
    state.select(2);
    assert_eq!(state.index, 2);
    assert_eq!(state.current().name, "Cabin");
    state.select(3);
    assert_eq!(state.index, 2);
}

#[test]
fn carousels_are_independent() {
    let mut carousels = MobileCarousels::default();
    carousels.get_mut(Category::Passenger).mark_loaded(0);
    carousels.get_mut(Category::Passenger).on_ended(0);
    assert_eq!(carousels.get(Category::Passenger).index, 1);
    assert_eq!(carousels.get(Category::Commercial).index, 0);
    assert!(!carousels.get(Category::Commercial).is_loaded(0));
}
