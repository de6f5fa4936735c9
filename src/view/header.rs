// Header and status bar rendering for Folio
// Section controls, preference toggles and transient messages

use crate::app::Folio;
use crate::i18n;
use crate::message::Message;
use crate::style;
use eframe::egui;

impl Folio {
    pub(crate) fn render_header(&self, ctx: &egui::Context, messages: &mut Vec<Message>) {
        let lang = self.prefs.lang;
        let strings = i18n::strings(lang);
        let theme = self.theme();
        let active = self.tracker.active_section();

        egui::TopBottomPanel::top("header")
            .exact_height(style::HEADER_HEIGHT)
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    let brand = ui.add(
                        egui::Label::new(
                            egui::RichText::new(strings.name)
                                .strong()
                                .size(18.0)
                                .color(theme.accent()),
                        )
                        .sense(egui::Sense::click()),
                    );
                    if brand.clicked() {
                        messages.push(Message::NavigateTo(
                            self.tracker.sections().first_id().to_string(),
                        ));
                    }

                    ui.add_space(16.0);

                    for section in self.tracker.sections().iter() {
                        let is_active = section.id == active;
                        if ui
                            .selectable_label(is_active, section.label(lang))
                            .clicked()
                        {
                            messages.push(Message::NavigateTo(section.id.clone()));
                        }
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let theme_hint = if theme.is_dark() {
                            strings.light_mode
                        } else {
                            strings.dark_mode
                        };
                        if ui
                            .button(theme.toggle_icon())
                            .on_hover_text(format!("{} (t)", theme_hint))
                            .clicked()
                        {
                            messages.push(Message::ToggleTheme);
                        }

                        let other = lang.toggle();
                        if ui
                            .button(other.code().to_uppercase())
                            .on_hover_text("(l)")
                            .clicked()
                        {
                            messages.push(Message::ToggleLang);
                        }
                    });
                });
            });
    }

    pub(crate) fn render_status_bar(&self, ctx: &egui::Context) {
        let theme = self.theme();
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(self.router.current().path())
                        .monospace()
                        .color(theme.muted()),
                );
                if let Some((err, _)) = &self.error_message {
                    ui.colored_label(theme.error(), format!(" | {}", err));
                } else if let Some((info, _)) = &self.info_message {
                    ui.colored_label(theme.success(), format!(" | {}", info));
                }
            });
        });
    }
}
