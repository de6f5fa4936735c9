use eframe::egui;

pub mod theme;

pub use theme::AppTheme;

// --- Sizing ---
pub const HEADER_HEIGHT: f32 = 48.0;
pub const SECTION_MIN_HEIGHT: f32 = 480.0;
pub const CONTENT_MAX_WIDTH: f32 = 960.0;
pub const CARD_WIDTH: f32 = 280.0;
pub const CARD_IMAGE_HEIGHT: f32 = 150.0;
pub const CAROUSEL_STEP: f32 = 450.0;

// --- Trigger band (fractions of viewport height) ---
pub const BAND_TOP: f32 = 0.2;
pub const BAND_BOTTOM: f32 = 0.7;

// --- Timing ---
pub const NAV_SCROLL_DELAY_MS: u64 = 300;
pub const CONTACT_RESET_SECS: u64 = 5;

// --- Window ---
pub const WINDOW_WIDTH: f32 = 1200.0;
pub const WINDOW_HEIGHT: f32 = 800.0;

// --- Helper functions ---

pub fn content_width(ui: &egui::Ui) -> f32 {
    ui.available_width().min(CONTENT_MAX_WIDTH)
}

/// Render a label that truncates overflowing text with an ellipsis.
pub fn truncated_label(
    ui: &mut egui::Ui,
    text: impl Into<egui::WidgetText>,
) -> egui::Response {
    ui.add(egui::Label::new(text).truncate())
}

/// Scroll progress of a horizontal strip, in percent.
pub fn carousel_progress(offset: f32, content_width: f32, viewport_width: f32) -> f32 {
    let scrollable = content_width - viewport_width;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (offset / scrollable * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_carousel_progress() {
        assert_eq!(carousel_progress(0.0, 1000.0, 500.0), 0.0);
        assert_eq!(carousel_progress(250.0, 1000.0, 500.0), 50.0);
        assert_eq!(carousel_progress(500.0, 1000.0, 500.0), 100.0);
        assert_eq!(carousel_progress(900.0, 1000.0, 500.0), 100.0);
        // Content fits, nothing to scroll
        assert_eq!(carousel_progress(10.0, 400.0, 500.0), 0.0);
    }
}
