// SPDX-License-Identifier: MPL-2.0
//! Gallery filtering types.
//!
//! This module contains the pure filter model for the project gallery.
//! Filtering is a synchronous function of `(projects, filter)` with no
//! caching, so a filter change can never show a stale subset.

use super::{Category, Project};

// =============================================================================
// Category Set
// =============================================================================

/// The distinct categories present in a catalog, in first-seen order.
///
/// Computed once when the catalog is built rather than re-derived by each
/// control that needs it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CategorySet {
    categories: Vec<Category>,
}

impl CategorySet {
    /// Derives the set from a project list, preserving first-seen order.
    #[must_use]
    pub fn from_projects(projects: &[Project]) -> Self {
        let mut categories: Vec<Category> = Vec::new();
        for project in projects {
            if !categories.contains(project.category()) {
                categories.push(project.category().clone());
            }
        }
        Self { categories }
    }

    /// Returns `true` if the category appears in the catalog.
    #[must_use]
    pub fn contains(&self, category: &Category) -> bool {
        self.categories.contains(category)
    }

    /// Iterates the categories in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

// =============================================================================
// Category Filter
// =============================================================================

/// The active gallery filter.
///
/// `All` matches every project. `Only` restricts the gallery to a single
/// category; a category that does not exist in the catalog simply matches
/// nothing rather than being rejected, since the control surface is built
/// from the catalog itself.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Returns `true` if this filter matches the given project.
    ///
    /// This is a pure domain check without side effects.
    #[must_use]
    pub fn matches(&self, project: &Project) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => project.category() == category,
        }
    }

    /// Returns `true` if this filter is active (not `All`).
    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::All)
    }

    /// Resets the filter to its default (show everything).
    pub fn clear(&mut self) {
        *self = Self::All;
    }
}

// =============================================================================
// Derived View
// =============================================================================

/// Returns the projects visible under `filter`, preserving catalog order.
#[must_use]
pub fn visible_projects<'a>(projects: &'a [Project], filter: &CategoryFilter) -> Vec<&'a Project> {
    projects.iter().filter(|p| filter.matches(p)).collect()
}

// =============================================================================
// Tests
// =============================================================================
