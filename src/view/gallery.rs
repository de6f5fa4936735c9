// Project gallery rendering for Folio
// Tag chips, search box, carousel and the full project list

use crate::app::Folio;
use crate::i18n::{self, Lang};
use crate::message::Message;
use crate::model::Project;
use crate::state::{TagFilter, TECH_TAGS};
use crate::style::{self, AppTheme};
use crate::view::image_uri;
use eframe::egui;

impl Folio {
    /// Gallery section of the home view.
    pub(crate) fn render_gallery(&mut self, ui: &mut egui::Ui, messages: &mut Vec<Message>) {
        let lang = self.prefs.lang;
        let strings = i18n::strings(lang);
        let theme = self.theme();
        let width = style::content_width(ui);

        ui.vertical_centered(|ui| {
            ui.heading(egui::RichText::new(strings.projects_title).size(32.0));
        });
        ui.add_space(16.0);
        self.render_filter_bar(ui, messages);
        ui.add_space(12.0);

        let projects = self.catalog.filter(&self.filter, lang);
        if projects.is_empty() {
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new(strings.no_projects).color(theme.muted()));
            });
            return;
        }

        let mut area = egui::ScrollArea::horizontal()
            .id_salt("carousel")
            .auto_shrink([false, true]);
        if let Some(offset) = self.carousel_jump.take() {
            area = area.horizontal_scroll_offset(offset);
        }
        let output = area.show(ui, |ui| {
            ui.horizontal(|ui| {
                for project in &projects {
                    project_card(ui, project, lang, theme, messages);
                }
            });
        });

        let viewport_width = output.inner_rect.width();
        let max_offset = (output.content_size.x - viewport_width).max(0.0);
        self.carousel_offset = output.state.offset.x;
        let progress =
            style::carousel_progress(self.carousel_offset, output.content_size.x, viewport_width);

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            if ui.button("◀").clicked() {
                self.carousel_jump = Some((self.carousel_offset - style::CAROUSEL_STEP).max(0.0));
            }
            ui.add(egui::ProgressBar::new(progress / 100.0).desired_width((width - 80.0).max(40.0)));
            if ui.button("▶").clicked() {
                self.carousel_jump =
                    Some((self.carousel_offset + style::CAROUSEL_STEP).min(max_offset));
            }
        });
    }

    /// The `/projects` route: every matching project in a wrapped grid.
    pub(crate) fn render_project_list(&mut self, ui: &mut egui::Ui, messages: &mut Vec<Message>) {
        let lang = self.prefs.lang;
        let strings = i18n::strings(lang);
        let theme = self.theme();

        let mut area = egui::ScrollArea::vertical()
            .id_salt("project_list_scroll")
            .auto_shrink([false, false]);
        if std::mem::take(&mut self.reset_scroll) {
            area = area.vertical_scroll_offset(0.0);
        }

        area.show(ui, |ui| {
            ui.add_space(24.0);
            ui.vertical_centered(|ui| {
                ui.heading(egui::RichText::new(strings.projects_title).size(32.0));
            });
            ui.add_space(16.0);
            self.render_filter_bar(ui, messages);
            ui.add_space(12.0);

            let projects = self.catalog.filter(&self.filter, lang);
            if projects.is_empty() {
                ui.label(egui::RichText::new(strings.no_projects).color(theme.muted()));
                return;
            }
            ui.horizontal_wrapped(|ui| {
                for project in projects {
                    project_card(ui, project, lang, theme, messages);
                }
            });
        });
    }

    fn render_filter_bar(&self, ui: &mut egui::Ui, messages: &mut Vec<Message>) {
        let strings = i18n::strings(self.prefs.lang);

        ui.horizontal_wrapped(|ui| {
            if ui
                .selectable_label(self.filter.tag == TagFilter::All, strings.all_projects)
                .clicked()
            {
                messages.push(Message::SelectTag(TagFilter::All));
            }
            for category in self.catalog.categories() {
                let selected =
                    matches!(&self.filter.tag, TagFilter::Tag(t) if t.eq_ignore_ascii_case(category));
                if ui.selectable_label(selected, category.to_uppercase()).clicked() {
                    messages.push(Message::SelectTag(TagFilter::Tag(category.to_string())));
                }
            }
            ui.separator();
            for tag in TECH_TAGS {
                let selected = matches!(&self.filter.tag, TagFilter::Tag(t) if t == tag);
                if ui.selectable_label(selected, format!("#{}", tag)).clicked() {
                    messages.push(Message::SelectTag(TagFilter::Tag(tag.to_string())));
                }
            }
        });

        ui.add_space(8.0);
        let mut query = self.filter.query.clone();
        let response = ui.add(
            egui::TextEdit::singleline(&mut query)
                .hint_text(strings.search_hint)
                .desired_width(style::content_width(ui).min(360.0)),
        );
        if response.changed() {
            messages.push(Message::SearchChanged(query));
        }
        if self.filter.is_active() && ui.small_button(strings.clear_filters).clicked() {
            messages.push(Message::ClearFilter);
        }
    }
}

fn project_card(
    ui: &mut egui::Ui,
    project: &Project,
    lang: Lang,
    theme: AppTheme,
    messages: &mut Vec<Message>,
) {
    let strings = i18n::strings(lang);

    egui::Frame::group(ui.style())
        .corner_radius(egui::CornerRadius::same(8))
        .inner_margin(egui::Margin::same(10))
        .show(ui, |ui| {
            ui.set_width(style::CARD_WIDTH);
            ui.vertical(|ui| {
                let cover_size = egui::vec2(style::CARD_WIDTH, style::CARD_IMAGE_HEIGHT);
                match image_uri(&project.image) {
                    Some(uri) => {
                        ui.add(egui::Image::new(uri).fit_to_exact_size(cover_size));
                    }
                    None => {
                        ui.add_sized(
                            cover_size,
                            egui::Label::new(egui::RichText::new(&project.icon).size(56.0)),
                        );
                    }
                }

                ui.add_space(6.0);
                style::truncated_label(
                    ui,
                    egui::RichText::new(project.title(lang)).strong().size(16.0),
                );
                ui.label(egui::RichText::new(&project.category).small().color(theme.accent()));
                ui.label(project.description(lang));

                ui.horizontal_wrapped(|ui| {
                    for tech in &project.technologies {
                        ui.label(egui::RichText::new(tech).small().color(theme.muted()));
                    }
                });

                ui.add_space(4.0);
                if ui.button(strings.view_details).clicked() {
                    messages.push(Message::OpenProject(project.id.clone()));
                }
            });
        });
}
