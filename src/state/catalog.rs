// Project catalog - loading, lookup, tag filtering and search
use crate::error::{FolioError, Result};
use crate::i18n::Lang;
use crate::model::Project;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

const BUILTIN_PROJECTS: &str = include_str!("../../assets/projects.toml");

/// Curated filter chips shown above the gallery.
pub const TECH_TAGS: [&str; 8] = [
    "HubSpot CMS",
    "React",
    "Next.js",
    "Node.js",
    "TypeScript",
    "AWS",
    "Serverless",
    "PHP",
];

#[derive(Deserialize)]
struct CatalogFile {
    #[serde(default)]
    projects: Vec<Project>,
}

#[derive(Clone, Debug, Default)]
pub struct ProjectCatalog {
    projects: Vec<Project>,
}

impl ProjectCatalog {
    pub fn from_toml(contents: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(contents)?;
        Self::new(file.projects)
    }

    pub fn new(projects: Vec<Project>) -> Result<Self> {
        let mut seen = HashSet::new();
        for project in &projects {
            if project.id.trim().is_empty() {
                return Err(FolioError::MissingProjectId);
            }
            if !seen.insert(project.id.as_str()) {
                return Err(FolioError::DuplicateProject(project.id.clone()));
            }
        }
        Ok(Self { projects })
    }

    pub fn builtin() -> Result<Self> {
        Self::from_toml(BUILTIN_PROJECTS)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// User file if given and valid, otherwise the built-in data.
    pub fn load(path: Option<&Path>) -> Self {
        if let Some(path) = path {
            match Self::from_file(path) {
                Ok(catalog) => {
                    info!(path = %path.display(), count = catalog.len(), "Loaded projects");
                    return catalog;
                }
                Err(e) => warn!(path = %path.display(), "Failed to load projects: {}", e),
            }
        }
        Self::builtin().unwrap_or_else(|e| {
            warn!("Built-in projects are invalid: {}", e);
            Self::default()
        })
    }

    pub fn find(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Distinct categories in first-seen order, compared without case.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for project in &self.projects {
            let category = project.category.trim();
            if !category.is_empty() && !categories.iter().any(|c| c.eq_ignore_ascii_case(category)) {
                categories.push(category);
            }
        }
        categories
    }

    /// Matching projects in catalog order.
    pub fn filter(&self, filter: &ProjectFilter, lang: Lang) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|p| filter.matches(p, lang))
            .collect()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TagFilter {
    All,
    Tag(String),
}

impl Default for TagFilter {
    fn default() -> Self {
        Self::All
    }
}

impl TagFilter {
    pub fn matches(&self, project: &Project) -> bool {
        match self {
            Self::All => true,
            Self::Tag(tag) => {
                let needle = tag.to_lowercase();
                project.category.eq_ignore_ascii_case(tag)
                    || project
                        .technologies
                        .iter()
                        .any(|tech| tech.to_lowercase().contains(&needle))
            }
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct ProjectFilter {
    pub tag: TagFilter,
    pub query: String,
}

impl ProjectFilter {
    pub fn matches(&self, project: &Project, lang: Lang) -> bool {
        self.tag.matches(project) && Self::matches_query(project, self.query.trim(), lang)
    }

    fn matches_query(project: &Project, query: &str, lang: Lang) -> bool {
        if query.is_empty() {
            return true;
        }
        let needle = query.to_lowercase();
        project.title(lang).to_lowercase().contains(&needle)
            || project.description(lang).to_lowercase().contains(&needle)
            || project.category.to_lowercase().contains(&needle)
            || project
                .technologies
                .iter()
                .any(|tech| tech.to_lowercase().contains(&needle))
    }

    pub fn is_active(&self) -> bool {
        self.tag != TagFilter::All || !self.query.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Localized;

    fn project(id: &str, category: &str, techs: &[&str]) -> Project {
        Project {
            id: id.to_string(),
            title: Localized::text(&format!("Proyecto {}", id), &format!("Project {}", id)),
            description: Localized::text("Tienda en línea", "Online shop"),
            long_description: Localized::text("", ""),
            category: category.to_string(),
            icon: "🧪".to_string(),
            image: String::new(),
            images: Vec::new(),
            technologies: techs.iter().map(|t| t.to_string()).collect(),
            url: None,
            github: None,
            features: Localized::default(),
        }
    }

    fn catalog() -> ProjectCatalog {
        ProjectCatalog::new(vec![
            project("shop", "web", &["PHP", "MySQL"]),
            project("crm", "crm", &["HubSpot CMS", "Node.js"]),
            project("app", "web", &["Next.js", "TypeScript", "React"]),
        ])
        .unwrap()
    }

    fn ids(projects: Vec<&Project>) -> Vec<&str> {
        projects.into_iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_builtin_catalog_parses() {
        let catalog = ProjectCatalog::builtin().unwrap();
        assert!(!catalog.is_empty());
        assert!(catalog.contains("lemon-dapp"));
        let lemon = catalog.find("lemon-dapp").unwrap();
        assert_eq!(lemon.title(Lang::En), "Lemon dApp");
        assert!(!lemon.features(Lang::Es).is_empty());
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let result = ProjectCatalog::new(vec![project("a", "web", &[]), project("a", "web", &[])]);
        assert!(matches!(result, Err(FolioError::DuplicateProject(id)) if id == "a"));
        assert!(matches!(
            ProjectCatalog::new(vec![project(" ", "web", &[])]),
            Err(FolioError::MissingProjectId)
        ));
    }

    #[test]
    fn test_tag_filter() {
        let catalog = catalog();
        let all = ProjectFilter::default();
        assert_eq!(ids(catalog.filter(&all, Lang::En)), vec!["shop", "crm", "app"]);

        let by_tech = ProjectFilter {
            tag: TagFilter::Tag("React".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(catalog.filter(&by_tech, Lang::En)), vec!["app"]);

        // Case-insensitive substring on technologies
        let node = ProjectFilter {
            tag: TagFilter::Tag("node".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(catalog.filter(&node, Lang::En)), vec!["crm"]);

        let by_category = ProjectFilter {
            tag: TagFilter::Tag("web".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(catalog.filter(&by_category, Lang::En)), vec!["shop", "app"]);
    }

    #[test]
    fn test_category_match_ignores_case() {
        let catalog = ProjectCatalog::new(vec![
            project("site", "Web", &["PHP"]),
            project("sync", "CRM", &["Node.js"]),
        ])
        .unwrap();
        let lower = ProjectFilter {
            tag: TagFilter::Tag("web".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(catalog.filter(&lower, Lang::En)), vec!["site"]);

        let upper = ProjectFilter {
            tag: TagFilter::Tag("crm".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(catalog.filter(&upper, Lang::En)), vec!["sync"]);
    }

    #[test]
    fn test_categories() {
        assert_eq!(catalog().categories(), vec!["web", "crm"]);

        let mixed = ProjectCatalog::new(vec![
            project("a", "Web", &[]),
            project("b", "web", &[]),
            project("c", " ", &[]),
            project("d", "crm", &[]),
        ])
        .unwrap();
        assert_eq!(mixed.categories(), vec!["Web", "crm"]);

        let builtin = ProjectCatalog::builtin().unwrap();
        assert_eq!(builtin.categories(), vec!["web", "crm"]);
    }

    #[test]
    fn test_search_query() {
        let catalog = catalog();
        let filter = ProjectFilter {
            tag: TagFilter::All,
            query: "  typescript ".to_string(),
        };
        assert_eq!(ids(catalog.filter(&filter, Lang::En)), vec!["app"]);

        let localized = ProjectFilter {
            tag: TagFilter::All,
            query: "tienda".to_string(),
        };
        assert_eq!(catalog.filter(&localized, Lang::Es).len(), 3);
        assert!(catalog.filter(&localized, Lang::En).is_empty());
    }

    #[test]
    fn test_tag_and_query_combine() {
        let catalog = catalog();
        let filter = ProjectFilter {
            tag: TagFilter::Tag("web".to_string()),
            query: "php".to_string(),
        };
        assert!(filter.is_active());
        assert_eq!(ids(catalog.filter(&filter, Lang::En)), vec!["shop"]);
        assert!(!ProjectFilter::default().is_active());
    }

    #[test]
    fn test_load_falls_back_to_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("projects.toml");
        fs::write(&path, "[[projects]]\nid = 3").unwrap();
        let catalog = ProjectCatalog::load(Some(&path));
        assert!(catalog.contains("wlh-grandes-alturas"));

        let missing = dir.path().join("missing.toml");
        assert!(!ProjectCatalog::load(Some(&missing)).is_empty());
    }
}
