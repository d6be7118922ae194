//! Transient UI state for the portfolio page.
//!
//! Every user interaction is turned into a [`ViewEvent`] and fed through
//! [`ViewState::apply`]. The page keeps a single `ViewState` in a signal, and
//! the DOM side effects (scroll lock, smooth scrolling) are derived from it,
//! so the transitions here can be tested without a browser.

mod sections;

pub use sections::{
    pick_active, Section, SectionCrossing, SectionTracker, VisibleSections, OBSERVER_ROOT_MARGIN,
    OBSERVER_THRESHOLDS, VISIBILITY_THRESHOLD,
};

use serde::{Deserialize, Serialize};

use crate::content::{Certificate, Project};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    SectionsCrossed(Vec<SectionCrossing>),
    OpenProject(usize),
    CloseProject,
    ToggleCertificate(usize),
    ToggleMobileMenu,
    OpenMobileMenu,
    CloseMobileMenu,
    NavigateTo(Section),
    PointerMoved { x: f64, y: f64 },
    Teardown,
}

/// Work the view layer has to carry out after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewEffect {
    ScrollTo(Section),
    ReleaseScrollLock,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    project_count: usize,
    certificate_count: usize,
    active_section: Section,
    selected_project: Option<usize>,
    selected_certificate: Option<usize>,
    mobile_menu_open: bool,
    pointer: PointerPosition,
}

impl ViewState {
    pub fn new(project_count: usize, certificate_count: usize) -> Self {
        Self {
            project_count,
            certificate_count,
            active_section: Section::default(),
            selected_project: None,
            selected_certificate: None,
            mobile_menu_open: false,
            pointer: PointerPosition::default(),
        }
    }

    pub fn active_section(&self) -> Section {
        self.active_section
    }

    pub fn selected_project(&self) -> Option<usize> {
        self.selected_project
    }

    pub fn selected_certificate(&self) -> Option<usize> {
        self.selected_certificate
    }

    pub fn mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    pub fn pointer(&self) -> PointerPosition {
        self.pointer
    }

    /// Page scrolling is suspended exactly while a project is open.
    pub fn scroll_locked(&self) -> bool {
        self.selected_project.is_some()
    }

    pub fn apply(&mut self, event: ViewEvent) -> Option<ViewEffect> {
        match event {
            ViewEvent::SectionsCrossed(batch) => {
                if let Some(section) = pick_active(&batch) {
                    self.active_section = section;
                }
                None
            }
            ViewEvent::OpenProject(index) => {
                debug_assert!(
                    index < self.project_count,
                    "project index {index} out of range"
                );
                if index < self.project_count {
                    self.selected_project = Some(index);
                } else {
                    log::warn!("ignoring out of range project index {index}");
                }
                None
            }
            ViewEvent::CloseProject => {
                self.selected_project = None;
                None
            }
            ViewEvent::ToggleCertificate(index) => {
                debug_assert!(
                    index < self.certificate_count,
                    "certificate index {index} out of range"
                );
                if index >= self.certificate_count {
                    log::warn!("ignoring out of range certificate index {index}");
                } else if self.selected_certificate == Some(index) {
                    self.selected_certificate = None;
                } else {
                    self.selected_certificate = Some(index);
                }
                None
            }
            ViewEvent::ToggleMobileMenu => {
                self.mobile_menu_open = !self.mobile_menu_open;
                None
            }
            ViewEvent::OpenMobileMenu => {
                self.mobile_menu_open = true;
                None
            }
            ViewEvent::CloseMobileMenu => {
                self.mobile_menu_open = false;
                None
            }
            ViewEvent::NavigateTo(section) => {
                self.mobile_menu_open = false;
                Some(ViewEffect::ScrollTo(section))
            }
            ViewEvent::PointerMoved { x, y } => {
                self.pointer = PointerPosition { x, y };
                None
            }
            ViewEvent::Teardown => {
                self.selected_project = None;
                self.mobile_menu_open = false;
                Some(ViewEffect::ReleaseScrollLock)
            }
        }
    }

    pub fn open_project(&mut self, index: usize) {
        self.apply(ViewEvent::OpenProject(index));
    }

    pub fn close_project(&mut self) {
        self.apply(ViewEvent::CloseProject);
    }

    pub fn toggle_certificate(&mut self, index: usize) {
        self.apply(ViewEvent::ToggleCertificate(index));
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.apply(ViewEvent::ToggleMobileMenu);
    }

    pub fn open_mobile_menu(&mut self) {
        self.apply(ViewEvent::OpenMobileMenu);
    }

    pub fn close_mobile_menu(&mut self) {
        self.apply(ViewEvent::CloseMobileMenu);
    }

    pub fn navigate_to(&mut self, section: Section) -> Option<ViewEffect> {
        self.apply(ViewEvent::NavigateTo(section))
    }
}

/// Cards for the certificate gallery, given the currently expanded index.
///
/// Takes the selection rather than the whole [`ViewState`] so callers can
/// key on it alone; pointer movement must not rebuild the cards.
pub fn certificate_cards(
    certificates: &[Certificate],
    selected: Option<usize>,
) -> Vec<CertificateCard<'_>> {
    certificates
        .iter()
        .enumerate()
        .map(|(index, certificate)| CertificateCard {
            index,
            certificate,
            expanded: selected == Some(index),
        })
        .collect()
}

pub fn project_detail(
    projects: &[Project],
    selected: Option<usize>,
) -> Option<ProjectDetail<'_>> {
    let index = selected?;
    let project = projects.get(index)?;
    Some(ProjectDetail {
        index,
        title: &project.title,
        description: &project.description,
        roles: &project.roles,
        technologies: &project.technologies,
        features: project.features_or_default(),
        challenges: project.challenges_or_default(),
        image: project.image.as_deref(),
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct CertificateCard<'a> {
    pub index: usize,
    pub certificate: &'a Certificate,
    pub expanded: bool,
}

impl CertificateCard<'_> {
    /// Image to show, only once the card is expanded.
    pub fn visible_image(&self) -> Option<&str> {
        if self.expanded {
            self.certificate.image.as_deref()
        } else {
            None
        }
    }
}

/// Everything the project overlay renders.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectDetail<'a> {
    pub index: usize,
    pub title: &'a str,
    pub description: &'a str,
    pub roles: &'a [String],
    pub technologies: &'a [String],
    pub features: Vec<&'a str>,
    pub challenges: &'a str,
    pub image: Option<&'a str>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Portfolio, FALLBACK_FEATURES};

    fn portfolio() -> Portfolio {
        Portfolio::from_json(
            r#"{
                "certificates": [
                    { "title": "One", "issuer": "A", "year": 2021, "image": "/one.png" },
                    { "title": "Two", "issuer": "B", "year": 2022, "image": "/two.png" },
                    { "title": "Three", "issuer": "C", "year": 2023 }
                ],
                "projects": [
                    {
                        "title": "Alpha",
                        "description": "first",
                        "technologies": ["Rust"],
                        "roles": ["Lead", "Designer"],
                        "features": ["Fast"]
                    },
                    { "title": "Beta", "description": "second", "roles": ["Dev"] }
                ]
            }"#,
        )
        .unwrap()
    }

    fn state_for(p: &Portfolio) -> ViewState {
        ViewState::new(p.projects.len(), p.certificates.len())
    }

    #[test]
    fn test_initial_state() {
        let state = ViewState::new(2, 3);
        assert_eq!(state.active_section(), Section::Home);
        assert_eq!(state.selected_project(), None);
        assert_eq!(state.selected_certificate(), None);
        assert!(!state.mobile_menu_open());
        assert!(!state.scroll_locked());
        assert_eq!(state.pointer(), PointerPosition::default());
    }

    #[test]
    fn test_open_close_restores_scroll_lock() {
        let p = portfolio();
        for i in 0..p.projects.len() {
            let mut state = state_for(&p);
            let before = state.scroll_locked();
            state.open_project(i);
            assert!(state.scroll_locked());
            assert_eq!(state.selected_project(), Some(i));
            state.close_project();
            assert_eq!(state.scroll_locked(), before);
        }
    }

    #[test]
    fn test_interleaved_open_close() {
        let mut state = ViewState::new(2, 0);
        state.open_project(0);
        state.open_project(1);
        assert_eq!(state.selected_project(), Some(1));
        state.close_project();
        state.close_project();
        assert!(!state.scroll_locked());
        state.open_project(0);
        assert_eq!(
            state.apply(ViewEvent::Teardown),
            Some(ViewEffect::ReleaseScrollLock)
        );
        assert!(!state.scroll_locked());
        // teardown twice is harmless
        assert_eq!(
            state.apply(ViewEvent::Teardown),
            Some(ViewEffect::ReleaseScrollLock)
        );
        assert!(!state.scroll_locked());
    }

    #[test]
    #[cfg_attr(debug_assertions, should_panic(expected = "out of range"))]
    fn test_open_project_out_of_range() {
        let mut state = ViewState::new(2, 0);
        state.open_project(2);
        assert_eq!(state.selected_project(), None);
    }

    #[test]
    fn test_toggle_certificate_round_trip() {
        let mut state = ViewState::new(0, 3);
        let original = state.clone();
        state.toggle_certificate(1);
        assert_eq!(state.selected_certificate(), Some(1));
        state.toggle_certificate(1);
        assert_eq!(state, original);

        state.toggle_certificate(2);
        let expanded = state.clone();
        state.toggle_certificate(0);
        state.toggle_certificate(0);
        assert_eq!(state.selected_certificate(), None);
        assert_ne!(state, expanded);
    }

    #[test]
    fn test_toggle_other_certificate_switches() {
        let mut state = ViewState::new(0, 3);
        state.toggle_certificate(0);
        state.toggle_certificate(2);
        assert_eq!(state.selected_certificate(), Some(2));
    }

    #[test]
    fn test_mobile_menu() {
        let mut state = ViewState::new(0, 0);
        state.toggle_mobile_menu();
        assert!(state.mobile_menu_open());
        state.toggle_mobile_menu();
        assert!(!state.mobile_menu_open());

        state.open_mobile_menu();
        state.open_mobile_menu();
        assert!(state.mobile_menu_open());
        state.close_mobile_menu();
        assert!(!state.mobile_menu_open());
    }

    #[test]
    fn test_navigate_closes_menu() {
        let mut state = ViewState::new(0, 0);
        state.open_mobile_menu();
        let effect = state.navigate_to(Section::Certificates);
        assert_eq!(effect, Some(ViewEffect::ScrollTo(Section::Certificates)));
        assert!(!state.mobile_menu_open());

        // navigating with the menu closed only scrolls
        assert_eq!(
            state.navigate_to(Section::Home),
            Some(ViewEffect::ScrollTo(Section::Home))
        );
        assert!(!state.mobile_menu_open());
        // scroll highlighting comes from the observer, not from the click
        assert_eq!(state.active_section(), Section::Home);
    }

    #[test]
    fn test_sections_crossed() {
        let mut state = ViewState::new(0, 0);
        state.apply(ViewEvent::SectionsCrossed(vec![SectionCrossing {
            section: Section::Projects,
            is_intersecting: true,
            ratio: 0.3,
        }]));
        assert_eq!(state.active_section(), Section::Projects);

        state.apply(ViewEvent::SectionsCrossed(vec![
            SectionCrossing {
                section: Section::Contact,
                is_intersecting: true,
                ratio: 0.05,
            },
            SectionCrossing {
                section: Section::About,
                is_intersecting: false,
                ratio: 0.0,
            },
        ]));
        assert_eq!(state.active_section(), Section::Projects);
    }

    #[test]
    fn test_pointer_moved() {
        let mut state = ViewState::new(0, 0);
        assert_eq!(
            state.apply(ViewEvent::PointerMoved { x: 12.0, y: 340.5 }),
            None
        );
        assert_eq!(state.pointer(), PointerPosition { x: 12.0, y: 340.5 });
    }

    #[test]
    fn test_certificate_cards_start_collapsed() {
        let p = portfolio();
        let mut state = state_for(&p);
        let cards = certificate_cards(&p.certificates, state.selected_certificate());
        assert_eq!(cards.len(), p.certificates.len());
        assert!(cards.iter().all(|c| !c.expanded));
        assert!(cards.iter().all(|c| c.visible_image().is_none()));

        state.toggle_certificate(1);
        let cards = certificate_cards(&p.certificates, state.selected_certificate());
        let expanded: Vec<usize> = cards
            .iter()
            .filter(|c| c.expanded)
            .map(|c| c.index)
            .collect();
        assert_eq!(expanded, vec![1]);
        assert_eq!(cards[1].visible_image(), Some("/two.png"));
    }

    #[test]
    fn test_project_detail() {
        let p = portfolio();
        let mut state = state_for(&p);
        assert_eq!(project_detail(&p.projects, state.selected_project()), None);

        state.open_project(0);
        let detail = project_detail(&p.projects, state.selected_project()).unwrap();
        assert_eq!(detail.title, "Alpha");
        assert_eq!(detail.roles, ["Lead".to_string(), "Designer".to_string()]);
        assert_eq!(detail.technologies, ["Rust".to_string()]);
        assert_eq!(detail.features, vec!["Fast"]);

        state.open_project(1);
        let detail = project_detail(&p.projects, state.selected_project()).unwrap();
        assert_eq!(detail.title, "Beta");
        assert!(detail.technologies.is_empty());
        assert_eq!(detail.features, FALLBACK_FEATURES.to_vec());
    }

    #[test]
    fn test_pointer_moves_keep_view_models() {
        let p = portfolio();
        let mut state = state_for(&p);
        state.open_project(0);
        state.toggle_certificate(2);
        let cards = certificate_cards(&p.certificates, state.selected_certificate());
        let detail = project_detail(&p.projects, state.selected_project());

        for i in 0..50 {
            let x = f64::from(i) * 7.5;
            state.apply(ViewEvent::PointerMoved { x, y: 300.0 - x });
        }
        assert_eq!(state.selected_certificate(), Some(2));
        assert_eq!(state.selected_project(), Some(0));
        assert_eq!(
            certificate_cards(&p.certificates, state.selected_certificate()),
            cards
        );
        assert_eq!(
            project_detail(&p.projects, state.selected_project()),
            detail
        );
    }

    #[test]
    fn test_state_snapshot() {
        let mut state = ViewState::new(1, 1);
        state.open_project(0);
        state.toggle_certificate(0);
        let json = serde_json::to_string(&state).unwrap();
        assert!(json.contains("\"active_section\":\"home\""));
        let back: ViewState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
