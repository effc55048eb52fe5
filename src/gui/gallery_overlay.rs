//! Modal overlay for project galleries. Keyboard bindings are live only
//! while the modal is open; closing through any path releases the page
//! scroll lock exactly once.

use eframe::egui::{self, Color32, RichText};

use crate::{
    gallery::{GalleryKey, GalleryModal},
    gui::str_to_color,
};

/// Translate raw key presses into gallery actions. A closed modal consumes
/// nothing, so page-level shortcuts keep working.
pub fn handle_keys(ctx: &egui::Context, modal: &mut GalleryModal) {
    if !modal.is_open() {
        return;
    }

    let (previous, next, close) = ctx.input(|input| {
        (
            input.key_pressed(egui::Key::ArrowLeft),
            input.key_pressed(egui::Key::ArrowRight),
            input.key_pressed(egui::Key::Escape),
        )
    });

    if previous {
        modal.on_key(GalleryKey::Previous);
    }
    if next {
        modal.on_key(GalleryKey::Next);
    }
    if close {
        modal.on_key(GalleryKey::Close);
    }
}

pub fn show(ctx: &egui::Context, modal: &mut GalleryModal) {
    if !modal.is_open() {
        return;
    }

    let response = egui::Modal::new(egui::Id::new("gallery_modal")).show(ctx, |ui| {
        ui.set_width(560.0);

        let Some((index, len)) = modal.position() else {
            return;
        };
        let (src, title) = match modal.current() {
            Some(image) => (image.src.clone(), image.title.clone()),
            None => return,
        };

        ui.horizontal(|ui| {
            ui.label(RichText::new(&title).size(16.0).strong());

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("✕").clicked() {
                    modal.close();
                }
                ui.label(
                    RichText::new(format!("{} / {}", index + 1, len))
                        .size(12.0)
                        .color(Color32::GRAY),
                );
            });
        });

        ui.add_space(6.0);
        slide_ui(ui, &src, &title);
        ui.add_space(6.0);

        ui.horizontal(|ui| {
            if ui.button("←").clicked() {
                modal.previous();
            }
            if ui.button("→").clicked() {
                modal.next();
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                // Laid out right to left, so emit in reverse to read 1..n
                for i in (0..len).rev() {
                    if ui
                        .selectable_label(i == index, format!("{}", i + 1))
                        .clicked()
                    {
                        modal.select(i);
                    }
                }
            });
        });
    });

    // Backdrop click
    if response.should_close() {
        modal.close();
    }
}

fn slide_ui(ui: &mut egui::Ui, src: &str, title: &str) {
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), 320.0),
        egui::Sense::hover(),
    );

    let painter = ui.painter();
    painter.rect_filled(rect, egui::CornerRadius::same(6), Color32::from_gray(22));
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        title,
        egui::FontId::proportional(20.0),
        str_to_color(title),
    );
    painter.text(
        rect.center_bottom() - egui::vec2(0.0, 14.0),
        egui::Align2::CENTER_BOTTOM,
        src,
        egui::FontId::monospace(11.0),
        Color32::DARK_GRAY,
    );
}
