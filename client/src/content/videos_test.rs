use super::*;

#[test]
fn category_default_is_passenger() {
    assert_eq!(Category::default(), Category::Passenger);
}

#[test]
fn catalogue_sizes_match_site_layout() {
    assert_eq!(Category::Passenger.videos().len(), 5);
    assert_eq!(Category::Commercial.videos().len(), 3);
}

#[test]
fn every_category_starts_with_complete_body() {
    for category in Category::ALL {
        assert_eq!(category.videos()[0].name, "Complete body");
    }
}

#[test]
fn video_paths_live_under_their_category_directory() {
    for category in Category::ALL {
        let prefix = format!("/{}/", category.key());
        for video in category.videos() {
            assert!(video.src.starts_with(&prefix), "{} outside {prefix}", video.src);
            assert!(video.thumbnail.starts_with(&prefix), "{} outside {prefix}", video.thumbnail);
            assert!(video.src.ends_with(".mp4"));
        }
    }
}

#[test]
fn category_keys_are_distinct() {
    assert_ne!(Category::Passenger.key(), Category::Commercial.key());
    assert_ne!(Category::Passenger.title(), Category::Commercial.title());
}
