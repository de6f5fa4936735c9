// Project detail rendering for Folio

use crate::app::Folio;
use crate::i18n;
use crate::message::Message;
use crate::style;
use crate::view::image_uri;
use eframe::egui;

impl Folio {
    pub(crate) fn render_detail(
        &mut self,
        ui: &mut egui::Ui,
        project_id: &str,
        messages: &mut Vec<Message>,
    ) {
        let lang = self.prefs.lang;
        let strings = i18n::strings(lang);
        let theme = self.theme();

        let mut area = egui::ScrollArea::vertical()
            .id_salt("detail_scroll")
            .auto_shrink([false, false]);
        if std::mem::take(&mut self.reset_scroll) {
            area = area.vertical_scroll_offset(0.0);
        }

        // Unknown ids are redirected before a frame is drawn
        let Some(project) = self.catalog.find(project_id) else {
            return;
        };

        area.show(ui, |ui| {
            let width = style::content_width(ui);
            ui.add_space(16.0);
            if ui.button(format!("← {}", strings.back_to_projects)).clicked() {
                messages.push(Message::BackToProjects);
            }
            ui.add_space(16.0);

            ui.vertical_centered(|ui| {
                ui.set_max_width(width);
                ui.label(egui::RichText::new(&project.icon).size(48.0));
                ui.heading(egui::RichText::new(project.title(lang)).size(32.0));
                ui.label(egui::RichText::new(&project.category).color(theme.accent()));
                ui.add_space(12.0);
                ui.label(project.long_description.get(lang));
                ui.add_space(16.0);

                ui.horizontal_wrapped(|ui| {
                    for source in project.gallery() {
                        if let Some(uri) = image_uri(source) {
                            ui.add(
                                egui::Image::new(uri)
                                    .max_width(width / 2.0)
                                    .corner_radius(egui::CornerRadius::same(6)),
                            );
                        }
                    }
                });
            });

            let features = project.features(lang);
            if !features.is_empty() {
                ui.add_space(24.0);
                ui.heading(strings.features);
                for feature in features {
                    ui.label(format!("• {}", feature));
                }
            }

            ui.add_space(24.0);
            ui.heading(strings.technologies);
            ui.horizontal_wrapped(|ui| {
                for tech in &project.technologies {
                    ui.label(egui::RichText::new(tech).color(theme.muted()));
                }
            });

            ui.add_space(24.0);
            ui.horizontal(|ui| {
                if let Some(url) = &project.url {
                    if ui.button(format!("🌐 {}", strings.visit_site)).clicked() {
                        messages.push(Message::OpenUrl(url.clone()));
                    }
                }
                if let Some(github) = &project.github {
                    if ui.button(format!("💻 {}", strings.source_code)).clicked() {
                        messages.push(Message::OpenUrl(github.clone()));
                    }
                }
            });
        });
    }
}
