use crate::error::{FolioError, Result};
use crate::i18n::{Lang, Localized};
use std::collections::HashSet;

#[derive(Clone, Debug, PartialEq)]
pub struct SectionDescriptor {
    pub id: String,
    pub label: Localized<String>,
}

impl SectionDescriptor {
    pub fn new(id: &str, es: &str, en: &str) -> Self {
        Self {
            id: id.to_string(),
            label: Localized::text(es, en),
        }
    }

    pub fn label(&self, lang: Lang) -> &str {
        self.label.get(lang)
    }
}

/// Sections of the home view, top to bottom. Never empty, ids unique.
#[derive(Clone, Debug)]
pub struct SectionList {
    sections: Vec<SectionDescriptor>,
}

impl SectionList {
    pub fn new(sections: Vec<SectionDescriptor>) -> Result<Self> {
        if sections.is_empty() {
            return Err(FolioError::EmptySections);
        }

        let mut seen = HashSet::new();
        for section in &sections {
            if !seen.insert(section.id.as_str()) {
                return Err(FolioError::DuplicateSection(section.id.clone()));
            }
        }

        Ok(Self { sections })
    }

    pub fn first_id(&self) -> &str {
        // Non-empty by construction
        &self.sections[0].id
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.id == id)
    }

    pub fn get(&self, index: usize) -> Option<&SectionDescriptor> {
        self.sections.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SectionDescriptor> {
        self.sections.iter()
    }
}

impl Default for SectionList {
    fn default() -> Self {
        Self {
            sections: vec![
                SectionDescriptor::new("hero", "Inicio", "Home"),
                SectionDescriptor::new("about", "Sobre mí", "About"),
                SectionDescriptor::new("projects", "Proyectos", "Projects"),
                SectionDescriptor::new("contact", "Contacto", "Contact"),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_order() {
        let list = SectionList::default();
        let ids: Vec<&str> = list.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["hero", "about", "projects", "contact"]);
        assert_eq!(list.first_id(), "hero");
        assert_eq!(list.position("contact"), Some(3));
        assert_eq!(list.get(1).map(|s| s.label(Lang::En)), Some("About"));
    }

    #[test]
    fn test_rejects_empty() {
        assert!(matches!(
            SectionList::new(Vec::new()),
            Err(FolioError::EmptySections)
        ));
    }

    #[test]
    fn test_rejects_duplicates() {
        let result = SectionList::new(vec![
            SectionDescriptor::new("hero", "Inicio", "Home"),
            SectionDescriptor::new("hero", "Otra", "Other"),
        ]);
        assert!(matches!(result, Err(FolioError::DuplicateSection(id)) if id == "hero"));
    }
}
