// Language selection and the static text tables for both languages
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    Es,
    En,
}

impl Default for Lang {
    fn default() -> Self {
        Self::Es
    }
}

impl Lang {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Es => "es",
            Self::En => "en",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "es" => Some(Self::Es),
            "en" => Some(Self::En),
            _ => None,
        }
    }

    /// Spanish for any `es*` locale, English for everything else.
    pub fn from_locale(locale: &str) -> Self {
        if locale.starts_with("es") {
            Self::Es
        } else {
            Self::En
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            Self::Es => Self::En,
            Self::En => Self::Es,
        }
    }
}

/// A value with one variant per supported language.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Localized<T> {
    pub es: T,
    pub en: T,
}

impl<T> Localized<T> {
    pub fn new(es: T, en: T) -> Self {
        Self { es, en }
    }

    pub fn get(&self, lang: Lang) -> &T {
        match lang {
            Lang::Es => &self.es,
            Lang::En => &self.en,
        }
    }
}

impl Localized<String> {
    pub fn text(es: &str, en: &str) -> Self {
        Self::new(es.to_string(), en.to_string())
    }
}

/// Locale reported by the OS, then the first non-empty of LC_ALL,
/// LC_MESSAGES and LANG.
pub fn platform_locale() -> String {
    resolve_locale(sys_locale::get_locale(), |key| env::var(key).ok())
}

fn resolve_locale(os_locale: Option<String>, env_var: impl Fn(&str) -> Option<String>) -> String {
    os_locale
        .filter(|locale| !locale.is_empty())
        .or_else(|| {
            ["LC_ALL", "LC_MESSAGES", "LANG"]
                .iter()
                .filter_map(|key| env_var(key))
                .find(|value| !value.is_empty())
        })
        .unwrap_or_default()
}

pub struct UiStrings {
    pub name: &'static str,
    pub role: &'static str,
    pub about_button: &'static str,
    pub about_title: &'static str,
    pub about_subtitle: &'static str,
    pub about_description: &'static str,
    pub stats: [(&'static str, &'static str); 2],
    pub projects_title: &'static str,
    pub all_projects: &'static str,
    pub search_hint: &'static str,
    pub no_projects: &'static str,
    pub clear_filters: &'static str,
    pub view_details: &'static str,
    pub back_to_projects: &'static str,
    pub features: &'static str,
    pub technologies: &'static str,
    pub visit_site: &'static str,
    pub source_code: &'static str,
    pub contact_title: &'static str,
    pub contact_subtitle: &'static str,
    pub socials_title: &'static str,
    pub name_label: &'static str,
    pub email_label: &'static str,
    pub message_label: &'static str,
    pub send: &'static str,
    pub sending: &'static str,
    pub sent: &'static str,
    pub send_failed: &'static str,
    pub dark_mode: &'static str,
    pub light_mode: &'static str,
}

pub const SKILL_GROUPS: [(&str, &[&str]); 3] = [
    ("Frontend", &["React", "Next.js", "TypeScript", "Tailwind CSS"]),
    ("Backend", &["Node.js", "Serverless", "AWS SAM", "Stripe API"]),
    ("CRM Platforms", &["HubSpot CMS", "CRM Objects", "API Integrations"]),
];

/// Direct contact channels: (icon, name, link).
pub const CONTACT_LINKS: [(&str, &str, &str); 3] = [
    ("✉", "Email", "mailto:bescobar2321@gmail.com"),
    ("💻", "GitHub", "https://github.com/Beck2301"),
    ("🔗", "LinkedIn", "https://www.linkedin.com/in/bryan-escobar-guevara/"),
];

const ES: UiStrings = UiStrings {
    name: "Bryan Escobar",
    role: "Desarrollador Web",
    about_button: "Sobre mí",
    about_title: "Sobre mí",
    about_subtitle: "Desarrollador enfocado en soluciones escalables e integraciones CRM.",
    about_description: "Desarrollador que conecta el diseño con funcionalidad técnica compleja, entre el frontend moderno y ecosistemas CRM.",
    stats: [("Años de Exp.", "3+"), ("Proyectos", "20+")],
    projects_title: "Proyectos",
    all_projects: "Todos",
    search_hint: "Buscar proyectos…",
    no_projects: "No hay proyectos para este filtro.",
    clear_filters: "Limpiar filtros",
    view_details: "Ver Detalles",
    back_to_projects: "Volver a proyectos",
    features: "Características",
    technologies: "Tecnologías",
    visit_site: "Visitar sitio",
    source_code: "Código fuente",
    contact_title: "Contacto",
    contact_subtitle: "¿Tienes un proyecto en mente?",
    socials_title: "Redes sociales",
    name_label: "Nombre",
    email_label: "Correo electrónico",
    message_label: "Tu mensaje",
    send: "Enviar mensaje",
    sending: "Enviando...",
    sent: "¡Mensaje enviado! Te contactaré pronto.",
    send_failed: "Ocurrió un error. Inténtalo de nuevo.",
    dark_mode: "Modo oscuro",
    light_mode: "Modo claro",
};

const EN: UiStrings = UiStrings {
    name: "Bryan Escobar",
    role: "Web Developer",
    about_button: "About me",
    about_title: "About Me",
    about_subtitle: "Developer focused on scalable solutions and CRM integrations.",
    about_description: "Developer connecting design with complex technical functionality, between the modern frontend and CRM ecosystems.",
    stats: [("Years Exp.", "3+"), ("Projects", "20+")],
    projects_title: "Projects",
    all_projects: "All",
    search_hint: "Search projects…",
    no_projects: "No projects match this filter.",
    clear_filters: "Clear filters",
    view_details: "View Details",
    back_to_projects: "Back to projects",
    features: "Features",
    technologies: "Technologies",
    visit_site: "Visit site",
    source_code: "Source code",
    contact_title: "Contact",
    contact_subtitle: "Got a project in mind?",
    socials_title: "Social Media",
    name_label: "Name",
    email_label: "Email address",
    message_label: "Your message",
    send: "Send message",
    sending: "Sending...",
    sent: "Message sent! I'll be in touch soon.",
    send_failed: "Something went wrong. Please try again.",
    dark_mode: "Dark mode",
    light_mode: "Light mode",
};

pub fn strings(lang: Lang) -> &'static UiStrings {
    match lang {
        Lang::Es => &ES,
        Lang::En => &EN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_locale() {
        assert_eq!(Lang::from_locale("es_ES.UTF-8"), Lang::Es);
        assert_eq!(Lang::from_locale("es"), Lang::Es);
        assert_eq!(Lang::from_locale("en_US.UTF-8"), Lang::En);
        assert_eq!(Lang::from_locale("de_DE"), Lang::En);
        assert_eq!(Lang::from_locale(""), Lang::En);
    }

    #[test]
    fn test_codes() {
        assert_eq!(Lang::from_code("es"), Some(Lang::Es));
        assert_eq!(Lang::from_code("en"), Some(Lang::En));
        assert_eq!(Lang::from_code("fr"), None);
        assert_eq!(Lang::Es.code(), "es");
        assert_eq!(Lang::Es.toggle(), Lang::En);
        assert_eq!(Lang::En.toggle(), Lang::Es);
    }

    #[test]
    fn test_locale_lookup_order() {
        let env = |key: &str| match key {
            "LC_MESSAGES" => Some("en_GB.UTF-8".to_string()),
            "LANG" => Some("es_ES.UTF-8".to_string()),
            _ => None,
        };
        // OS locale wins
        assert_eq!(resolve_locale(Some("es-MX".to_string()), env), "es-MX");
        // Then the environment, first non-empty
        assert_eq!(resolve_locale(None, env), "en_GB.UTF-8");
        assert_eq!(resolve_locale(Some(String::new()), env), "en_GB.UTF-8");
        let empty_all = |key: &str| match key {
            "LC_ALL" => Some(String::new()),
            "LANG" => Some("es_AR".to_string()),
            _ => None,
        };
        assert_eq!(resolve_locale(None, empty_all), "es_AR");
        assert_eq!(resolve_locale(None, |_: &str| None), "");
        assert_eq!(Lang::from_locale(&resolve_locale(Some("es-MX".to_string()), env)), Lang::Es);
    }

    #[test]
    fn test_contact_links() {
        let targets: Vec<&str> = CONTACT_LINKS.iter().map(|(_, _, url)| *url).collect();
        assert!(targets[0].starts_with("mailto:"));
        assert!(targets[1..].iter().all(|url| url.starts_with("https://")));
        assert_eq!(CONTACT_LINKS[1].1, "GitHub");
        assert_eq!(strings(Lang::Es).socials_title, "Redes sociales");
    }

    #[test]
    fn test_localized_get() {
        let label = Localized::text("Contacto", "Contact");
        assert_eq!(label.get(Lang::Es), "Contacto");
        assert_eq!(label.get(Lang::En), "Contact");
        assert_eq!(strings(Lang::En).send, "Send message");
    }
}
