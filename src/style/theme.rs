use eframe::egui;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AppTheme {
    Light,
    Dark,
}

impl Default for AppTheme {
    fn default() -> Self {
        Self::Light
    }
}

impl AppTheme {
    pub fn from_dark_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Self::Dark
        } else {
            Self::Light
        }
    }

    pub fn is_dark(&self) -> bool {
        *self == Self::Dark
    }

    pub fn toggle(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn visuals(&self) -> egui::Visuals {
        let mut visuals = match self {
            Self::Light => egui::Visuals::light(),
            Self::Dark => egui::Visuals::dark(),
        };
        visuals.selection.bg_fill = self.accent();
        visuals.hyperlink_color = self.accent();
        visuals
    }

    pub fn accent(&self) -> egui::Color32 {
        match self {
            Self::Light => egui::Color32::from_rgb(249, 115, 22),
            Self::Dark => egui::Color32::from_rgb(253, 186, 116),
        }
    }

    pub fn muted(&self) -> egui::Color32 {
        match self {
            Self::Light => egui::Color32::from_gray(110),
            Self::Dark => egui::Color32::from_gray(160),
        }
    }

    pub fn success(&self) -> egui::Color32 {
        egui::Color32::from_rgb(34, 197, 94)
    }

    pub fn error(&self) -> egui::Color32 {
        egui::Color32::from_rgb(239, 68, 68)
    }

    /// Icon shown on the toggle: the mode it switches to.
    pub fn toggle_icon(&self) -> &'static str {
        match self {
            Self::Light => "🌙",
            Self::Dark => "☀",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        assert_eq!(AppTheme::Light.toggle(), AppTheme::Dark);
        assert_eq!(AppTheme::Dark.toggle(), AppTheme::Light);
        assert_eq!(AppTheme::from_dark_mode(true), AppTheme::Dark);
        assert!(!AppTheme::from_dark_mode(false).is_dark());
    }

    #[test]
    fn test_visuals_follow_mode() {
        assert!(AppTheme::Dark.visuals().dark_mode);
        assert!(!AppTheme::Light.visuals().dark_mode);
    }
}
