use super::*;

fn playing_mid_clip(category: Category, index: usize) -> ProductState {
    let mut state = ProductState::default();
    state.select_category(category);
    state.select_video(index);
    state.playing = true;
    state.progress_percent = 42.0;
    state
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn product_state_default_is_first_passenger_clip_paused() {
    let state = ProductState::default();
    assert_eq!(state.category, Category::Passenger);
    assert_eq!(state.active_video, 0);
    assert!(!state.playing);
    assert_eq!(state.progress_percent, 0.0);
    assert_eq!(state.active_entry().src, "/passenger/passenger-complete-body.mp4");
}

// =============================================================
// Category and clip selection
// =============================================================

#[test]
fn select_category_resets_index_and_progress() {
    for from in Category::ALL {
        for to in Category::ALL {
            let mut state = playing_mid_clip(from, 2);
            state.select_category(to);
            assert_eq!(state.category, to);
            assert_eq!(state.active_video, 0);
            assert_eq!(state.progress_percent, 0.0);
        }
    }
}

#[test]
fn select_video_sets_index_and_resets_progress() {
    let mut state = playing_mid_clip(Category::Passenger, 0);
    state.select_video(3);
    assert_eq!(state.active_video, 3);
    assert_eq!(state.progress_percent, 0.0);
    assert_eq!(state.active_entry().name, "Trunk");
}

#[test]
fn select_video_out_of_range_is_ignored() {
    let mut state = playing_mid_clip(Category::Commercial, 1);
    state.select_video(3);
    assert_eq!(state.active_video, 1);
    assert_eq!(state.progress_percent, 42.0);
}

// =============================================================
// Scroll hysteresis
// =============================================================

#[test]
fn passenger_switches_to_commercial_above_upper_threshold() {
    let mut state = playing_mid_clip(Category::Passenger, 4);
    assert!(state.on_visible_percent(95.5));
    assert_eq!(state.category, Category::Commercial);
    assert_eq!(state.active_video, 0);
    assert_eq!(state.progress_percent, 0.0);
}

#[test]
fn commercial_switches_back_below_lower_threshold() {
    let mut state = playing_mid_clip(Category::Commercial, 2);
    assert!(state.on_visible_percent(74.9));
    assert_eq!(state.category, Category::Passenger);
    assert_eq!(state.active_video, 0);
}

#[test]
fn thresholds_are_strict() {
    let mut passenger = ProductState::default();
    assert!(!passenger.on_visible_percent(SWITCH_TO_COMMERCIAL_ABOVE));
    assert_eq!(passenger.category, Category::Passenger);

    let mut commercial = ProductState::default();
    commercial.select_category(Category::Commercial);
    assert!(!commercial.on_visible_percent(SWITCH_TO_PASSENGER_BELOW));
    assert_eq!(commercial.category, Category::Commercial);
}

#[test]
fn band_between_thresholds_holds_either_category() {
    for category in Category::ALL {
        let mut state = playing_mid_clip(category, 1);
        for percent in [75.0, 80.0, 88.8, 95.0] {
            assert!(!state.on_visible_percent(percent));
            assert_eq!(state.category, category);
            assert_eq!(state.active_video, 1);
        }
    }
}

#[test]
fn passenger_ignores_low_visibility_and_commercial_ignores_high() {
    let mut passenger = ProductState::default();
    assert!(!passenger.on_visible_percent(10.0));
    assert_eq!(passenger.category, Category::Passenger);

    let mut commercial = ProductState::default();
    commercial.select_category(Category::Commercial);
    assert!(!commercial.on_visible_percent(100.0));
    assert_eq!(commercial.category, Category::Commercial);
}

#[test]
fn visibility_sequence_follows_hysteresis() {
    let mut state = ProductState::default();
    let samples = [
        (50.0, Category::Passenger),
        (90.0, Category::Passenger),
        (96.0, Category::Commercial),
        (85.0, Category::Commercial),
        (76.0, Category::Commercial),
        (74.0, Category::Passenger),
        (94.0, Category::Passenger),
        (100.0, Category::Commercial),
    ];
    for (percent, expected) in samples {
        state.on_visible_percent(percent);
        assert_eq!(state.category, expected, "after {percent}%");
    }
}

// =============================================================
// Playback
// =============================================================

#[test]
fn toggle_playback_alternates_commands() {
    let mut state = ProductState::default();
    assert_eq!(state.toggle_playback(), PlaybackCommand::Play);
    assert!(state.playing);
    assert_eq!(state.toggle_playback(), PlaybackCommand::Pause);
    assert!(!state.playing);
}

#[test]
fn media_events_mirror_playing_flag() {
    let mut state = ProductState::default();
    state.on_media_play();
    assert!(state.playing);
    state.on_media_pause();
    assert!(!state.playing);
}

#[test]
fn media_ended_stops_and_clears_progress() {
    let mut state = playing_mid_clip(Category::Passenger, 1);
    state.on_media_ended();
    assert!(!state.playing);
    assert_eq!(state.progress_percent, 0.0);
}

#[test]
fn metadata_load_resets_progress_and_reports_resume() {
    let mut state = playing_mid_clip(Category::Passenger, 1);
    assert!(state.on_metadata_loaded());
    assert_eq!(state.progress_percent, 0.0);

    state.playing = false;
    assert!(!state.on_metadata_loaded());
}

#[test]
fn progress_sample_updates_percentage() {
    let mut state = ProductState::default();
    state.on_progress_sample(2.5, 10.0);
    assert_eq!(state.progress_percent, 25.0);
}

#[test]
fn progress_sample_without_duration_is_dropped() {
    let mut state = playing_mid_clip(Category::Passenger, 0);
    state.on_progress_sample(3.0, 0.0);
    state.on_progress_sample(3.0, f64::NAN);
    assert_eq!(state.progress_percent, 42.0);
}

#[test]
fn progress_percent_is_clamped() {
    assert_eq!(progress_percent(12.0, 10.0), Some(100.0));
    assert_eq!(progress_percent(-1.0, 10.0), Some(0.0));
    assert_eq!(progress_percent(1.0, f64::INFINITY), None);
}
