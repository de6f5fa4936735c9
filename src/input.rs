// Input handling for Folio
// Keyboard shortcuts mapped to messages

use crate::app::Folio;
use crate::message::Message;
use crate::state::RouteKind;
use eframe::egui;

impl Folio {
    pub(crate) fn handle_input(&self, ctx: &egui::Context) -> Vec<Message> {
        let mut messages = Vec::new();

        // Typing into the search box or the contact form
        if ctx.wants_keyboard_input() {
            return messages;
        }

        // 1. History keys
        if ctx.input(|i| i.modifiers.alt && i.key_pressed(egui::Key::ArrowLeft)) {
            messages.push(Message::HistoryBack);
            return messages;
        }
        if ctx.input(|i| i.modifiers.alt && i.key_pressed(egui::Key::ArrowRight)) {
            messages.push(Message::HistoryForward);
            return messages;
        }

        // 2. Section stepping
        if ctx.input(|i| i.key_pressed(egui::Key::ArrowDown) || i.key_pressed(egui::Key::J)) {
            messages.push(Message::NextSection);
        }
        if ctx.input(|i| i.key_pressed(egui::Key::ArrowUp) || i.key_pressed(egui::Key::K)) {
            messages.push(Message::PrevSection);
        }

        if self.router.current().kind() == RouteKind::ProjectDetail
            && ctx.input(|i| i.key_pressed(egui::Key::Escape))
        {
            messages.push(Message::BackToProjects);
        }

        // 3. Preferences
        if ctx.input(|i| i.key_pressed(egui::Key::T) && !i.modifiers.command) {
            messages.push(Message::ToggleTheme);
        }
        if ctx.input(|i| i.key_pressed(egui::Key::L) && !i.modifiers.command) {
            messages.push(Message::ToggleLang);
        }

        messages
    }
}
