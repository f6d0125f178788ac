//! Product video catalogue.
//!
//! SYSTEM CONTEXT
//! ==============
//! Static, read-only media references grouped by vehicle category. The files
//! themselves are served from the public asset directory and never parsed.

#[cfg(test)]
#[path = "videos_test.rs"]
mod videos_test;

/// Product grouping shown as a tab on desktop and a stacked carousel on mobile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Category {
    #[default]
    Passenger,
    Commercial,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Passenger, Category::Commercial];

    /// Stable lowercase key, used for DOM keys and log labels.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Passenger => "passenger",
            Self::Commercial => "commercial",
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Passenger => "Passenger Vehicles",
            Self::Commercial => "Commercial Vehicles",
        }
    }

    #[must_use]
    pub fn tagline(self) -> &'static str {
        match self {
            Self::Passenger => "Revving up innovation from interior to exterior.",
            Self::Commercial => "Advancing engineering for heavy-duty vehicles.",
        }
    }

    /// Ordered videos for this category.
    #[must_use]
    pub fn videos(self) -> &'static [VideoEntry] {
        match self {
            Self::Passenger => PASSENGER_VIDEOS,
            Self::Commercial => COMMERCIAL_VIDEOS,
        }
    }
}

/// A single showcase clip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VideoEntry {
    pub src: &'static str,
    pub name: &'static str,
    pub thumbnail: &'static str,
}

pub const BANNER_VIDEO: &str = "/banner.mp4";

const PASSENGER_VIDEOS: &[VideoEntry] = &[
    VideoEntry {
        src: "/passenger/passenger-complete-body.mp4",
        name: "Complete body",
        thumbnail: "/passenger/passenger-body-thumbmail.webp",
    },
    VideoEntry {
        src: "/passenger/passenger-front.mp4",
        name: "Front",
        thumbnail: "/passenger/passenger-front-thumbmail.webp",
    },
    VideoEntry {
        src: "/passenger/passenger-cabin.mp4",
        name: "Cabin",
        thumbnail: "/passenger/passenger-cabin-thumb.webp",
    },
    VideoEntry {
        src: "/passenger/passenger-trunk.mp4",
        name: "Trunk",
        thumbnail: "/passenger/passenger-trunk-thumb.webp",
    },
    VideoEntry {
        src: "/passenger/passenger-exterior.mp4",
        name: "Exterior",
        thumbnail: "/passenger/passenger-exterior-thumbmail.webp",
    },
];

const COMMERCIAL_VIDEOS: &[VideoEntry] = &[
    VideoEntry {
        src: "/commercial/commercial-complete-body.mp4",
        name: "Complete body",
        thumbnail: "/commercial/commercial-body-thumbmail.svg",
    },
    VideoEntry {
        src: "/commercial/commercial-engine.mp4",
        name: "Engine",
        thumbnail: "/commercial/commercial-engine-thumbmail.svg",
    },
    VideoEntry {
        src: "/commercial/commercial-cabin.mp4",
        name: "Cabin",
        thumbnail: "/commercial/commercial-cabin-thumbmail.svg",
    },
];
