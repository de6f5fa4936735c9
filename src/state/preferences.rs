// Preferences - language and dark mode, backed by a key-value store
use crate::error::Result;
use crate::i18n::Lang;
use crate::io::store::PreferenceStore;
use crate::style::AppTheme;
use tracing::{debug, warn};

pub const LANG_KEY: &str = "lang";
pub const DARK_MODE_KEY: &str = "dark-mode";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Preferences {
    pub lang: Lang,
    pub dark_mode: bool,
}

impl Preferences {
    /// Read both keys once. A missing or invalid language falls back to the
    /// platform locale and is written back immediately.
    pub fn load(store: &mut dyn PreferenceStore, platform_locale: &str) -> Self {
        let lang = match store.get(LANG_KEY).as_deref().and_then(Lang::from_code) {
            Some(lang) => lang,
            None => {
                let lang = Lang::from_locale(platform_locale);
                debug!(locale = platform_locale, lang = lang.code(), "No stored language");
                if let Err(e) = store.set(LANG_KEY, lang.code()) {
                    warn!("Failed to persist language: {}", e);
                }
                lang
            }
        };

        let dark_mode = store.get(DARK_MODE_KEY).as_deref() == Some("true");

        Self { lang, dark_mode }
    }

    pub fn theme(&self) -> AppTheme {
        AppTheme::from_dark_mode(self.dark_mode)
    }

    pub fn set_lang(&mut self, lang: Lang, store: &mut dyn PreferenceStore) -> Result<()> {
        self.lang = lang;
        store.set(LANG_KEY, lang.code())
    }

    pub fn toggle_lang(&mut self, store: &mut dyn PreferenceStore) -> Result<()> {
        self.set_lang(self.lang.toggle(), store)
    }

    pub fn toggle_dark_mode(&mut self, store: &mut dyn PreferenceStore) -> Result<()> {
        self.dark_mode = !self.dark_mode;
        store.set(DARK_MODE_KEY, if self.dark_mode { "true" } else { "false" })
    }
}
