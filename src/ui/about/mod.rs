// SPDX-License-Identifier: MPL-2.0
//! About section: tabbed skills/experience/education panel and resume export.
//!
//! The tab set is a closed enum, so activating an unknown panel is
//! unrepresentable; exactly one tab is active at all times and only the
//! active tab's content is built during `view`.

pub mod profile;
mod view;

pub use profile::Profile;
pub use view::{view, ViewContext};

/// The fixed tab set of the about panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AboutTab {
    #[default]
    Skills,
    Experience,
    Education,
}

impl AboutTab {
    /// All tabs in display order.
    pub const ALL: [AboutTab; 3] = [AboutTab::Skills, AboutTab::Experience, AboutTab::Education];

    /// i18n key for the tab label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            AboutTab::Skills => "about-tab-skills",
            AboutTab::Experience => "about-tab-experience",
            AboutTab::Education => "about-tab-education",
        }
    }
}

/// Messages emitted by the about section.
#[derive(Debug, Clone)]
pub enum Message {
    TabSelected(AboutTab),
    ExportResume,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// The user pressed the resume download button.
    ExportResumeRequested,
}

/// About section view state.
#[derive(Debug, Default)]
pub struct State {
    active_tab: AboutTab,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently active tab. Never empty.
    #[must_use]
    pub fn active_tab(&self) -> AboutTab {
        self.active_tab
    }

    /// Makes `tab` the active panel. Re-activating the active tab is a no-op.
    pub fn activate(&mut self, tab: AboutTab) {
        self.active_tab = tab;
    }
}

/// Process an about-section message and return the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::TabSelected(tab) => {
            state.activate(tab);
            Event::None
        }
        Message::ExportResume => Event::ExportResumeRequested,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skills_tab_is_active_by_default() {
        let state = State::new();
        assert_eq!(state.active_tab(), AboutTab::Skills);
    }

    #[test]
    fn activate_switches_the_active_tab() {
        let mut state = State::new();

        let event = update(&mut state, Message::TabSelected(AboutTab::Education));
        assert!(matches!(event, Event::None));
        assert_eq!(state.active_tab(), AboutTab::Education);
    }

    #[test]
    fn exactly_one_tab_is_active_after_any_sequence() {
        let mut state = State::new();
        for tab in [
            AboutTab::Experience,
            AboutTab::Skills,
            AboutTab::Education,
            AboutTab::Skills,
        ] {
            update(&mut state, Message::TabSelected(tab));
            assert_eq!(state.active_tab(), tab);
        }
    }

    #[test]
    fn reactivating_the_active_tab_is_a_no_op() {
        let mut state = State::new();
        update(&mut state, Message::TabSelected(AboutTab::Skills));
        assert_eq!(state.active_tab(), AboutTab::Skills);
    }

    #[test]
    fn export_resume_emits_event() {
        let mut state = State::new();
        let event = update(&mut state, Message::ExportResume);
        assert!(matches!(event, Event::ExportResumeRequested));
    }

    #[test]
    fn all_tabs_have_distinct_labels() {
        let keys: Vec<&str> = AboutTab::ALL.iter().map(|t| t.label_key()).collect();
        let mut deduped = keys.clone();
        deduped.dedup();
        assert_eq!(keys.len(), deduped.len());
    }
}
