use super::*;

#[test]
fn header_starts_visible_at_top() {
    let state = HeaderState::default();
    assert!(state.visible);
    assert_eq!(state.last_offset, 0.0);
}

#[test]
fn scrolling_down_hides_header() {
    let mut state = HeaderState::default();
    assert!(!state.on_scroll(120.0));
    assert!(!state.visible);
    assert_eq!(state.last_offset, 120.0);
}

#[test]
fn scrolling_up_shows_header() {
    let mut state = HeaderState::default();
    state.on_scroll(300.0);
    assert!(state.on_scroll(250.0));
}

#[test]
fn equal_offset_counts_as_visible() {
    let mut state = HeaderState::default();
    state.on_scroll(80.0);
    assert!(state.on_scroll(80.0));
}

#[test]
fn visibility_tracks_pairwise_comparison_over_sequence() {
    let offsets = [0.0, 10.0, 40.0, 35.0, 35.0, 900.0, 12.0, 0.0, 5.0];
    let mut state = HeaderState::default();
    let mut previous = 0.0;
    for offset in offsets {
        let visible = state.on_scroll(offset);
        assert_eq!(visible, offset <= previous, "offset {offset} after {previous}");
        previous = offset;
    }
}
