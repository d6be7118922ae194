use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Minimum intersection ratio before a section counts as "in view".
pub const VISIBILITY_THRESHOLD: f64 = 0.1;
pub const OBSERVER_THRESHOLDS: [f64; 6] = [0.0, 0.1, 0.2, 0.3, 0.4, 0.5];
/// Only the top 30% of the viewport counts, so the section under the nav wins.
pub const OBSERVER_ROOT_MARGIN: &str = "0px 0px -70% 0px";

/// Named page regions, in document order.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Home,
    About,
    Certificates,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Certificates,
        Section::Projects,
        Section::Contact,
    ];

    /// DOM id of the section element, also used as the nav label.
    pub const fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Certificates => "certificates",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.id() == id)
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// One visibility change reported by the observer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionCrossing {
    pub section: Section,
    pub is_intersecting: bool,
    pub ratio: f64,
}

impl SectionCrossing {
    pub fn qualifies(&self) -> bool {
        self.is_intersecting && self.ratio > VISIBILITY_THRESHOLD
    }
}

/// Section to adopt from one observer batch. Several qualifying crossings in
/// the same batch resolve to the topmost one.
pub fn pick_active(batch: &[SectionCrossing]) -> Option<Section> {
    batch
        .iter()
        .filter(|c| c.qualifies())
        .map(|c| c.section)
        .min()
}

pub trait VisibleSections {
    fn currently_visible_sections(&self) -> BTreeSet<Section>;
}

impl VisibleSections for BTreeSet<Section> {
    fn currently_visible_sections(&self) -> BTreeSet<Section> {
        self.clone()
    }
}

impl VisibleSections for [SectionCrossing] {
    fn currently_visible_sections(&self) -> BTreeSet<Section> {
        self.iter()
            .filter(|c| c.qualifies())
            .map(|c| c.section)
            .collect()
    }
}

/// Polling variant of active-section tracking: remembers what was visible
/// last time and adopts whichever section newly appeared.
#[derive(Debug, Clone, Default)]
pub struct SectionTracker {
    visible: BTreeSet<Section>,
    active: Section,
}

impl SectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Section {
        self.active
    }

    pub fn poll<V: VisibleSections + ?Sized>(&mut self, source: &V) -> Section {
        let now = source.currently_visible_sections();
        if let Some(newest) = now.difference(&self.visible).next() {
            self.active = *newest;
        }
        self.visible = now;
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crossing(section: Section, ratio: f64) -> SectionCrossing {
        SectionCrossing {
            section,
            is_intersecting: ratio > 0.0,
            ratio,
        }
    }

    #[test]
    fn test_ids_round_trip() {
        for section in Section::ALL {
            assert_eq!(Section::from_id(section.id()), Some(section));
        }
        assert_eq!(Section::from_id("blog"), None);
        assert_eq!(Section::Projects.href(), "#projects");
        assert_eq!(Section::Contact.to_string(), "contact");
    }

    #[test]
    fn test_threshold_is_exclusive() {
        assert!(!crossing(Section::About, 0.1).qualifies());
        assert!(crossing(Section::About, 0.11).qualifies());
        let leaving = SectionCrossing {
            section: Section::About,
            is_intersecting: false,
            ratio: 0.4,
        };
        assert!(!leaving.qualifies());
    }

    #[test]
    fn test_pick_active_topmost_wins() {
        let batch = [
            crossing(Section::Contact, 0.5),
            crossing(Section::Projects, 0.2),
            crossing(Section::Home, 0.05),
        ];
        assert_eq!(pick_active(&batch), Some(Section::Projects));
        assert_eq!(pick_active(&[crossing(Section::Home, 0.05)]), None);
        assert_eq!(pick_active(&[]), None);
    }

    #[test]
    fn test_tracker_adopts_newly_visible() {
        let mut tracker = SectionTracker::new();
        assert_eq!(tracker.active(), Section::Home);

        let visible = BTreeSet::from([Section::Home]);
        assert_eq!(tracker.poll(&visible), Section::Home);

        // about scrolls in while home is still partly visible
        let visible = BTreeSet::from([Section::Home, Section::About]);
        assert_eq!(tracker.poll(&visible), Section::About);

        // nothing new appeared: keep the last crossing
        let visible = BTreeSet::from([Section::About]);
        assert_eq!(tracker.poll(&visible), Section::About);

        // scrolling back up makes home new again
        let visible = BTreeSet::from([Section::Home, Section::About]);
        assert_eq!(tracker.poll(&visible), Section::Home);
    }

    #[test]
    fn test_tracker_same_poll_tie_break() {
        let mut tracker = SectionTracker::new();
        let visible = BTreeSet::from([Section::Contact, Section::Projects]);
        assert_eq!(tracker.poll(&visible), Section::Projects);

        let empty = BTreeSet::new();
        assert_eq!(tracker.poll(&empty), Section::Projects);
    }

    #[test]
    fn test_tracker_from_crossings() {
        let mut tracker = SectionTracker::new();
        let batch = [
            crossing(Section::Certificates, 0.3),
            crossing(Section::About, 0.1),
        ];
        assert_eq!(tracker.poll(&batch[..]), Section::Certificates);
    }
}
