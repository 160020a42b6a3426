// SPDX-License-Identifier: MPL-2.0
//! Project gallery component: category filter, card grid, and detail view.
//!
//! The gallery owns two pieces of view state: the active category filter and
//! the currently detail-viewed project. Both are mutated only through
//! [`update`], keeping a single entrypoint like every other component.

mod view;

pub use view::{view, ViewContext};

use crate::catalog::{Catalog, Category, CategoryFilter, ProjectId};

/// Messages emitted by the gallery.
#[derive(Debug, Clone)]
pub enum Message {
    /// Show every project.
    ShowAll,
    /// Restrict the grid to one category.
    FilterSelected(Category),
    /// A project card was pressed; open its detail view.
    ProjectPressed(ProjectId),
    /// Close the detail view.
    CloseDetail,
    /// The detail view's call-to-action was pressed.
    CaseStudyPressed(ProjectId),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// The user asked for the full case study of a project.
    CaseStudyRequested(ProjectId),
}

/// Gallery view state.
#[derive(Debug, Default)]
pub struct State {
    filter: CategoryFilter,
    selection: Option<ProjectId>,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The active filter.
    #[must_use]
    pub fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    /// The detail-viewed project, if any.
    #[must_use]
    pub fn selection(&self) -> Option<ProjectId> {
        self.selection
    }

    /// Whether the detail view is visible.
    #[must_use]
    pub fn detail_open(&self) -> bool {
        self.selection.is_some()
    }

    /// Replaces the active filter unconditionally.
    ///
    /// The filter is not validated against the catalog: a category with no
    /// matches simply shows an empty grid.
    pub fn set_filter(&mut self, filter: CategoryFilter) {
        self.filter = filter;
    }

    /// Opens the detail view for `id`.
    ///
    /// Selecting while a detail view is already open replaces the shown
    /// project directly. Ids not present in the catalog are ignored.
    pub fn open(&mut self, catalog: &Catalog, id: ProjectId) {
        if catalog.get(id).is_some() {
            self.selection = Some(id);
        }
    }

    /// Closes the detail view. Idempotent.
    pub fn close(&mut self) {
        self.selection = None;
    }
}

/// Process a gallery message and return the corresponding event.
pub fn update(state: &mut State, catalog: &Catalog, message: Message) -> Event {
    match message {
        Message::ShowAll => {
            state.set_filter(CategoryFilter::All);
            Event::None
        }
        Message::FilterSelected(category) => {
            state.set_filter(CategoryFilter::Only(category));
            Event::None
        }
        Message::ProjectPressed(id) => {
            state.open(catalog, id);
            Event::None
        }
        Message::CloseDetail => {
            state.close();
            Event::None
        }
        Message::CaseStudyPressed(id) => Event::CaseStudyRequested(id),
    }
}
