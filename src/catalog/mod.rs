// SPDX-License-Identifier: MPL-2.0
//! Portfolio catalog types and the built-in project set.
//!
//! These types represent pure data without any presentation dependencies.
//! The catalog is assembled once at startup and never mutated; every view
//! borrows from it for the lifetime of the application.

pub mod filter;

pub use filter::{visible_projects, CategoryFilter, CategorySet};

/// Stable identifier of a portfolio project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProjectId(u32);

impl ProjectId {
    #[must_use]
    pub fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw numeric value.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }
}

/// Discipline a project belongs to.
///
/// Categories are data, not code: the set of valid categories is whatever the
/// catalog actually contains, so this is a string newtype rather than an enum.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Category(String);

impl Category {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One portfolio project record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    id: ProjectId,
    title: String,
    category: Category,
    summary: String,
    detail: String,
    tags: Vec<String>,
}

impl Project {
    #[must_use]
    pub fn new(
        id: u32,
        title: impl Into<String>,
        category: impl Into<String>,
        summary: impl Into<String>,
        detail: impl Into<String>,
        tags: &[&str],
    ) -> Self {
        Self {
            id: ProjectId::new(id),
            title: title.into(),
            category: Category::new(category),
            summary: summary.into(),
            detail: detail.into(),
            tags: tags.iter().map(|t| (*t).to_string()).collect(),
        }
    }

    #[must_use]
    pub fn id(&self) -> ProjectId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn category(&self) -> &Category {
        &self.category
    }

    /// Short teaser shown on the gallery card.
    #[must_use]
    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// Full description shown in the detail view.
    #[must_use]
    pub fn detail(&self) -> &str {
        &self.detail
    }

    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }
}

/// Immutable project catalog plus its derived category set.
///
/// The category set is computed exactly once here, when the catalog is
/// constructed, and reused everywhere a filter control needs the available
/// categories.
#[derive(Debug, Clone)]
pub struct Catalog {
    projects: Vec<Project>,
    categories: CategorySet,
}

impl Catalog {
    /// Builds a catalog from a project list, deriving the category set.
    #[must_use]
    pub fn new(projects: Vec<Project>) -> Self {
        let categories = CategorySet::from_projects(&projects);
        Self {
            projects,
            categories,
        }
    }

    /// All projects, in authoring order.
    #[must_use]
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// The distinct categories present in the catalog, in first-seen order.
    #[must_use]
    pub fn categories(&self) -> &CategorySet {
        &self.categories
    }

    /// Looks up a project by id.
    #[must_use]
    pub fn get(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| p.id() == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

/// The built-in project set shown by the application.
#[must_use]
pub fn builtin() -> Catalog {
    Catalog::new(vec![
        Project::new(
            1,
            "Eco Fashion Brand Identity",
            "Branding",
            "Complete brand identity design for a sustainable fashion company.",
            "Complete brand identity design for a sustainable fashion company, \
             including logo design, color palette development, typography selection, \
             and comprehensive brand guidelines to ensure consistent application \
             across all touchpoints.",
            &["Logo Design", "Brand Guidelines", "Sustainability"],
        ),
        Project::new(
            2,
            "Wellness App UI Design",
            "UI Design",
            "User interface design for a wellness tracking mobile application.",
            "User interface design for a wellness tracking mobile application with \
             a focus on accessibility and user experience. The project included user \
             research, wireframing, prototyping, and final UI design with a \
             comprehensive component library.",
            &["Mobile App", "UI/UX", "Prototyping"],
        ),
        Project::new(
            3,
            "Summer Collection Campaign",
            "Marketing",
            "Digital marketing campaign assets for a summer collection launch.",
            "Digital marketing campaign assets including social media graphics, \
             email templates, and landing page design for a fashion brand's summer \
             collection launch, resulting in a 40% increase in online engagement.",
            &["Social Media", "Email Design", "Campaign"],
        ),
        Project::new(
            4,
            "Tech Startup Website Redesign",
            "Web Design",
            "Complete website redesign for a tech startup.",
            "Complete website redesign for a tech startup, focusing on modern \
             aesthetics and improved user flow. The project included information \
             architecture, wireframing, visual design, and collaboration with \
             developers for implementation.",
            &["Web Design", "UX Design", "Responsive"],
        ),
        Project::new(
            5,
            "Organic Skincare Packaging",
            "Packaging",
            "Sustainable packaging design for an organic skincare line.",
            "Sustainable packaging design for an organic skincare line, \
             incorporating eco-friendly materials and elegant typography. The design \
             focused on communicating the brand's natural ingredients and \
             environmental commitment.",
            &["Packaging", "Sustainability", "Print Design"],
        ),
        Project::new(
            6,
            "Fashion Magazine Layout",
            "Print",
            "Magazine layout and editorial design for a quarterly publication.",
            "Magazine layout and editorial design for a quarterly fashion \
             publication, featuring custom typography and photo editing. The project \
             included cover design, feature spreads, and establishing a cohesive \
             visual language throughout.",
            &["Editorial", "Typography", "Layout"],
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_has_six_projects() {
        let catalog = builtin();
        assert_eq!(catalog.len(), 6);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn builtin_catalog_ids_are_unique() {
        let catalog = builtin();
        let mut ids: Vec<ProjectId> = catalog.projects().iter().map(Project::id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn builtin_catalog_derives_six_categories() {
        let catalog = builtin();
        // Every built-in project has a distinct category
        assert_eq!(catalog.categories().len(), 6);
    }

    #[test]
    fn get_finds_project_by_id() {
        let catalog = builtin();
        let project = catalog.get(ProjectId::new(3)).expect("project 3 exists");
        assert_eq!(project.title(), "Summer Collection Campaign");
        assert_eq!(project.category().name(), "Marketing");
    }

    #[test]
    fn get_returns_none_for_unknown_id() {
        let catalog = builtin();
        assert!(catalog.get(ProjectId::new(999)).is_none());
    }

    #[test]
    fn projects_carry_tags_in_order() {
        let catalog = builtin();
        let project = catalog.get(ProjectId::new(1)).expect("project 1 exists");
        assert_eq!(
            project.tags(),
            &["Logo Design", "Brand Guidelines", "Sustainability"]
        );
    }
}
