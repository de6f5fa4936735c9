use crate::i18n::{Lang, Localized};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: Localized<String>,
    pub description: Localized<String>,
    pub long_description: Localized<String>,
    pub category: String,
    pub icon: String,
    pub image: String,
    #[serde(default)]
    pub images: Vec<String>,
    pub technologies: Vec<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub features: Localized<Vec<String>>,
}

impl Project {
    pub fn title(&self, lang: Lang) -> &str {
        self.title.get(lang)
    }

    pub fn description(&self, lang: Lang) -> &str {
        self.description.get(lang)
    }

    pub fn features(&self, lang: Lang) -> &[String] {
        self.features.get(lang)
    }

    /// Gallery images, falling back to the cover image.
    pub fn gallery(&self) -> Vec<&str> {
        if self.images.is_empty() {
            vec![self.image.as_str()]
        } else {
            self.images.iter().map(String::as_str).collect()
        }
    }
}
