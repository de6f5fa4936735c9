// Home view rendering for Folio
// Stacked sections, region measurement and section tracking

use crate::app::Folio;
use crate::i18n::{self, CONTACT_LINKS, SKILL_GROUPS};
use crate::message::Message;
use crate::state::ContactStatus;
use crate::style;
use crate::subscription::SectionRegion;
use eframe::egui;

impl Folio {
    pub(crate) fn render_home(&mut self, ui: &mut egui::Ui, messages: &mut Vec<Message>) {
        let section_height = ui.available_height().max(style::SECTION_MIN_HEIGHT);
        let scroll_target = self.scroll_target.take();
        let section_ids: Vec<String> = self
            .tracker
            .sections()
            .iter()
            .map(|s| s.id.clone())
            .collect();
        let mut rects: Vec<(String, egui::Rect)> = Vec::with_capacity(section_ids.len());

        let output = egui::ScrollArea::vertical()
            .id_salt("home_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for id in &section_ids {
                    let rect = ui
                        .vertical(|ui| {
                            ui.set_min_height(section_height);
                            ui.set_width(ui.available_width());
                            self.render_section(ui, id, messages);
                        })
                        .response
                        .rect;

                    if scroll_target.as_deref() == Some(id.as_str()) {
                        ui.scroll_to_rect(rect, Some(egui::Align::TOP));
                    }
                    rects.push((id.clone(), rect));
                }
            });

        // Regions relative to the top of the visible area
        let viewport = output.inner_rect;
        let regions: Vec<SectionRegion> = rects
            .iter()
            .map(|(id, rect)| {
                SectionRegion::new(id, rect.top() - viewport.top(), rect.bottom() - viewport.top())
            })
            .collect();

        self.laid_out = rects.into_iter().collect();
        self.tracker.observe(&regions, viewport.height());
        self.tracker.mark_home_mounted();
    }

    fn render_section(&mut self, ui: &mut egui::Ui, id: &str, messages: &mut Vec<Message>) {
        match id {
            "hero" => self.render_hero(ui, messages),
            "about" => self.render_about(ui),
            "projects" => {
                ui.add_space(32.0);
                self.render_gallery(ui, messages);
            }
            "contact" => self.render_contact(ui, messages),
            other => {
                if let Some(section) = self.tracker.sections().iter().find(|s| s.id == other) {
                    ui.heading(section.label(self.prefs.lang));
                }
            }
        }
    }

    fn render_hero(&self, ui: &mut egui::Ui, messages: &mut Vec<Message>) {
        let strings = i18n::strings(self.prefs.lang);
        let theme = self.theme();

        ui.vertical_centered(|ui| {
            ui.add_space(160.0);
            ui.label(
                egui::RichText::new(strings.name)
                    .size(48.0)
                    .strong()
                    .color(theme.accent()),
            );
            ui.label(egui::RichText::new(strings.role).size(22.0).color(theme.muted()));
            ui.add_space(24.0);
            if ui
                .button(egui::RichText::new(strings.about_button).size(16.0))
                .clicked()
            {
                messages.push(Message::NavigateTo("about".to_string()));
            }
        });
    }

    fn render_about(&self, ui: &mut egui::Ui) {
        let strings = i18n::strings(self.prefs.lang);
        let theme = self.theme();
        let width = style::content_width(ui);

        ui.add_space(48.0);
        ui.vertical_centered(|ui| {
            ui.set_max_width(width);
            ui.heading(egui::RichText::new(strings.about_title).size(32.0));
            ui.label(egui::RichText::new(strings.about_subtitle).color(theme.muted()));
            ui.add_space(16.0);
            ui.label(strings.about_description);
            ui.add_space(24.0);

            ui.horizontal(|ui| {
                for (label, value) in strings.stats {
                    ui.vertical(|ui| {
                        ui.label(
                            egui::RichText::new(value)
                                .size(28.0)
                                .strong()
                                .color(theme.accent()),
                        );
                        ui.label(egui::RichText::new(label).color(theme.muted()));
                    });
                    ui.add_space(32.0);
                }
            });

            ui.add_space(24.0);
            egui::Grid::new("skills_grid")
                .num_columns(2)
                .spacing([24.0, 8.0])
                .show(ui, |ui| {
                    for (group, skills) in SKILL_GROUPS {
                        ui.label(egui::RichText::new(group).strong());
                        ui.label(skills.join(" · "));
                        ui.end_row();
                    }
                });
        });
    }

    fn render_contact(&mut self, ui: &mut egui::Ui, messages: &mut Vec<Message>) {
        let strings = i18n::strings(self.prefs.lang);
        let theme = self.theme();
        let width = style::content_width(ui).min(560.0);
        let sending = self.contact.is_sending();

        ui.add_space(48.0);
        ui.vertical_centered(|ui| {
            ui.set_max_width(width);
            ui.heading(egui::RichText::new(strings.contact_title).size(32.0));
            ui.label(egui::RichText::new(strings.contact_subtitle).color(theme.muted()));
            ui.add_space(16.0);

            ui.label(egui::RichText::new(strings.socials_title).small().color(theme.muted()));
            ui.horizontal(|ui| {
                for (icon, name, link) in CONTACT_LINKS {
                    if ui.button(icon).on_hover_text(name).clicked() {
                        messages.push(Message::OpenUrl(link.to_string()));
                    }
                }
            });
            ui.add_space(16.0);

            ui.add_enabled_ui(!sending, |ui| {
                let form = &mut self.contact.form;
                ui.label(strings.name_label);
                ui.add(egui::TextEdit::singleline(&mut form.name).desired_width(width));
                ui.label(strings.email_label);
                ui.add(egui::TextEdit::singleline(&mut form.email).desired_width(width));
                ui.label(strings.message_label);
                ui.add(
                    egui::TextEdit::multiline(&mut form.message)
                        .desired_rows(5)
                        .desired_width(width),
                );
                ui.add_space(8.0);

                let label = if sending { strings.sending } else { strings.send };
                if ui.button(label).clicked() {
                    messages.push(Message::SubmitContact);
                }
            });

            match &self.contact.status {
                ContactStatus::Sent { .. } => {
                    ui.colored_label(theme.success(), strings.sent);
                }
                ContactStatus::Failed(reason) => {
                    ui.colored_label(theme.error(), strings.send_failed)
                        .on_hover_text(reason.as_str());
                }
                ContactStatus::Idle | ContactStatus::Sending => {}
            }
        });
    }
}
