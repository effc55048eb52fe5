//! Top-level portfolio window: section navigation, the page scroll area,
//! a status bar, and the gallery modal wiring.

use chrono::{Datelike, Local};
use eframe::egui::{self, Color32, RichText};
use log::debug;
use strum::IntoEnumIterator;

use crate::{
    gallery::GalleryModal,
    gui::{ACCENT, Section, dividend_board::DividendBoardView, gallery_overlay, str_to_color},
    profile::{self, ContactForm, Experience, Profile, Project, SkillGroup},
};

pub struct PortfolioViewer {
    section: Section,

    profile: Profile,
    skills: Vec<SkillGroup>,
    experiences: Vec<Experience>,
    projects: Vec<Project>,

    dividends: DividendBoardView,
    gallery: GalleryModal,

    contact_form: ContactForm,
    contact_notice: Option<String>,
}

impl PortfolioViewer {
    pub fn new(cc: &eframe::CreationContext, section: Section) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());

        Self {
            section,

            profile: profile::profile(),
            skills: profile::skills(),
            experiences: profile::experiences(),
            projects: profile::projects(),

            dividends: DividendBoardView::default(),
            gallery: GalleryModal::default(),

            contact_form: ContactForm::default(),
            contact_notice: None,
        }
    }

    fn home_ui(&mut self, ui: &mut egui::Ui) {
        ui.add_space(24.0);

        ui.label(
            RichText::new("WELCOME TO MY PORTFOLIO")
                .size(11.0)
                .color(ACCENT),
        );
        ui.add_space(8.0);
        ui.heading(RichText::new(&self.profile.name).size(36.0).strong());
        ui.label(
            RichText::new(&self.profile.headline)
                .size(18.0)
                .color(str_to_color(&self.profile.headline)),
        );
        ui.horizontal(|ui| {
            ui.label(RichText::new("●").size(10.0).color(ACCENT));
            ui.label(
                RichText::new(&self.profile.availability)
                    .size(12.0)
                    .color(Color32::GRAY),
            );
        });
        ui.add_space(12.0);
        ui.label(RichText::new(&self.profile.summary).color(Color32::GRAY));
        ui.add_space(16.0);

        ui.horizontal(|ui| {
            if ui.button("View Projects").clicked() {
                self.section = Section::Projects;
            }
            if ui.button("Contact Me").clicked() {
                self.section = Section::Contact;
            }
        });

        ui.add_space(12.0);
        ui.horizontal(|ui| {
            ui.hyperlink_to("GitHub ↗", &self.profile.github_url);
            ui.hyperlink_to("LinkedIn ↗", &self.profile.linkedin_url);
            ui.label(
                RichText::new(format!("Resume: {}", self.profile.resume_path))
                    .monospace()
                    .size(12.0)
                    .color(Color32::DARK_GRAY),
            );
        });
    }

    fn about_ui(&mut self, ui: &mut egui::Ui) {
        ui.add_space(24.0);
        ui.heading(RichText::new("About Me").size(26.0).strong());
        ui.add_space(8.0);
        ui.label(RichText::new(&self.profile.about).color(Color32::GRAY));
        ui.add_space(16.0);

        egui::Grid::new("about_info")
            .num_columns(2)
            .spacing([24.0, 6.0])
            .show(ui, |ui| {
                for (label, value) in [
                    ("Name", &self.profile.name),
                    ("Nationality", &self.profile.nationality),
                    ("Experience", &self.profile.experience_years),
                    ("Location", &self.profile.location),
                    ("Email", &self.profile.email),
                ] {
                    ui.label(RichText::new(label).color(Color32::DARK_GRAY));
                    ui.label(value);
                    ui.end_row();
                }
            });

        ui.add_space(16.0);
        ui.heading(RichText::new("Skills").size(18.0).strong());
        ui.add_space(8.0);
        ui.columns(2, |columns| {
            for (i, group) in self.skills.iter().enumerate() {
                let ui = &mut columns[i % 2];
                ui.group(|ui| {
                    ui.set_width(ui.available_width());
                    ui.label(
                        RichText::new(&group.title)
                            .strong()
                            .color(str_to_color(&group.title)),
                    );
                    ui.label(RichText::new(&group.stack).size(12.0).color(Color32::GRAY));
                });
            }
        });
    }

    fn experience_ui(&mut self, ui: &mut egui::Ui) {
        ui.add_space(24.0);
        ui.heading(RichText::new("Experience").size(26.0).strong());
        ui.label(
            RichText::new(
                "A timeline of my professional career, showcasing my roles and contributions \
                 in software development across various industries.",
            )
            .color(Color32::GRAY),
        );
        ui.add_space(12.0);

        for experience in &self.experiences {
            ui.group(|ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.label(RichText::new(&experience.period).size(12.0).color(ACCENT));
                    ui.label(
                        RichText::new(&experience.location)
                            .size(12.0)
                            .color(Color32::DARK_GRAY),
                    );
                });
                ui.label(RichText::new(&experience.company).size(16.0).strong());
                ui.label(RichText::new(&experience.role).color(Color32::GRAY));
                ui.add_space(4.0);

                for detail in &experience.details {
                    ui.label(RichText::new(format!("• {detail}")).size(13.0));
                }

                ui.add_space(4.0);
                ui.horizontal_wrapped(|ui| {
                    for tag in &experience.tags {
                        ui.label(RichText::new(tag).size(11.0).color(str_to_color(tag)));
                    }
                });
            });
            ui.add_space(8.0);
        }

        ui.label(
            RichText::new(format!("Resume: {}", self.profile.resume_path))
                .monospace()
                .size(12.0)
                .color(Color32::DARK_GRAY),
        );
    }

    fn projects_ui(&mut self, ui: &mut egui::Ui) {
        ui.add_space(24.0);
        ui.heading(RichText::new("Projects").size(26.0).strong());
        ui.label(
            RichText::new(
                "A showcase of my work, featuring web applications and mobile apps \
                 that I've built and contributed to.",
            )
            .color(Color32::GRAY),
        );
        ui.add_space(12.0);

        for project in &self.projects {
            ui.group(|ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.label(RichText::new(&project.title).size(16.0).strong());
                    ui.label(
                        RichText::new(project.kind.to_string())
                            .size(11.0)
                            .color(str_to_color(&project.kind.to_string())),
                    );
                    if project.featured {
                        ui.label(RichText::new("Featured").size(11.0).color(ACCENT));
                    }
                });
                ui.label(
                    RichText::new(&project.description)
                        .size(13.0)
                        .color(Color32::GRAY),
                );
                ui.add_space(4.0);

                ui.horizontal_wrapped(|ui| {
                    for tag in &project.tags {
                        ui.label(RichText::new(tag).size(11.0).color(str_to_color(tag)));
                    }
                });

                ui.add_space(6.0);
                ui.horizontal(|ui| {
                    if !project.gallery.is_empty()
                        && ui
                            .button(format!("View Gallery ({})", project.gallery.len()))
                            .clicked()
                    {
                        self.gallery.open(project.gallery.clone());
                    }

                    if let Some(url) = &project.url {
                        ui.hyperlink_to("Visit ↗", url);
                    }
                });
            });
            ui.add_space(8.0);
        }
    }

    fn contact_ui(&mut self, ui: &mut egui::Ui) {
        ui.add_space(24.0);
        ui.heading(RichText::new("Let's Work Together").size(26.0).strong());
        ui.label(
            RichText::new(
                "Have a project in mind? I'm always open to discussing new opportunities \
                 and bringing ideas to life.",
            )
            .color(Color32::GRAY),
        );
        ui.add_space(12.0);

        ui.horizontal(|ui| {
            ui.hyperlink_to(
                &self.profile.email,
                format!("mailto:{}", self.profile.email),
            );
            ui.hyperlink_to("GitHub ↗", &self.profile.github_url);
            ui.hyperlink_to("LinkedIn ↗", &self.profile.linkedin_url);
        });
        ui.label(
            RichText::new(format!(
                "{} · {}",
                self.profile.location, self.profile.availability
            ))
            .size(12.0)
            .color(Color32::GRAY),
        );
        ui.add_space(12.0);

        egui::Grid::new("contact_form")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.label("Name");
                ui.add(egui::TextEdit::singleline(&mut self.contact_form.name).desired_width(320.0));
                ui.end_row();

                ui.label("Email");
                ui.add(
                    egui::TextEdit::singleline(&mut self.contact_form.email).desired_width(320.0),
                );
                ui.end_row();

                ui.label("Subject");
                ui.add(
                    egui::TextEdit::singleline(&mut self.contact_form.subject)
                        .desired_width(320.0)
                        .hint_text(profile::MAILTO_SUBJECT_DEFAULT),
                );
                ui.end_row();

                ui.label("Message");
                ui.add(
                    egui::TextEdit::multiline(&mut self.contact_form.message)
                        .desired_width(320.0)
                        .desired_rows(5),
                );
                ui.end_row();
            });

        ui.add_space(8.0);
        if ui.button("✉ Send Message").clicked() {
            match self.profile.mailto_link(&self.contact_form) {
                Ok(link) => {
                    ui.ctx().open_url(egui::OpenUrl::new_tab(link));
                    self.contact_notice =
                        Some("Opening your email client, complete sending there".to_string());
                }
                Err(err) => {
                    debug!("Compose mailto failed: {err}");
                    self.contact_notice = Some("Could not compose the email link".to_string());
                }
            }
        }

        if let Some(notice) = &self.contact_notice {
            ui.label(RichText::new(notice).size(12.0).color(ACCENT));
        }
    }
}

impl eframe::App for PortfolioViewer {
    fn update(&mut self, ctx: &egui::Context, _: &mut eframe::Frame) {
        gallery_overlay::handle_keys(ctx, &mut self.gallery);

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::TopBottomPanel::top("nav_panel")
                .show_separator_line(false)
                .show_inside(ui, |ui| {
                    ui.horizontal_centered(|ui| {
                        ui.label(RichText::new("◆").color(ACCENT));
                        ui.label(RichText::new(&self.profile.name).strong());
                        ui.add_space(12.0);

                        for section in Section::iter() {
                            if ui
                                .selectable_label(self.section == section, section.to_string())
                                .clicked()
                            {
                                self.section = section;
                            }
                        }
                    });
                });

            egui::TopBottomPanel::bottom("status_panel")
                .show_separator_line(false)
                .show_inside(ui, |ui| {
                    ui.horizontal_centered(|ui| {
                        ui.label(
                            RichText::new(format!(
                                "© {} Johnley Mark D. Delgado Portfolio",
                                Local::now().year()
                            ))
                            .color(Color32::DARK_GRAY)
                            .size(12.0),
                        );

                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.label(
                                RichText::new(if self.gallery.is_open() {
                                    "← → navigate · Esc close"
                                } else {
                                    ""
                                })
                                .color(Color32::DARK_GRAY)
                                .size(12.0),
                            );
                        });
                    });
                });

            egui::CentralPanel::default().show_inside(ui, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .enable_scrolling(!self.gallery.scroll_locked())
                    .show(ui, |ui| match self.section {
                        Section::Home => self.home_ui(ui),
                        Section::About => self.about_ui(ui),
                        Section::Experience => self.experience_ui(ui),
                        Section::Projects => self.projects_ui(ui),
                        Section::Contact => self.contact_ui(ui),
                        Section::Dividends => self.dividends.ui(ui),
                    });
            });
        });

        gallery_overlay::show(ctx, &mut self.gallery);
    }
}
