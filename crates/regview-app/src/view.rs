use eframe::epaint::textures::TextureOptions;
use eframe::epaint::{ColorImage, TextureHandle};
use egui::Color32;
use regview_core::Surface;

// Transparent pixels show this through, so "nothing drawn" reads as paper
const BACKGROUND: Color32 = Color32::from_gray(235);

pub struct UiCtx<'a> {
    pub surface: &'a Surface,
    pub texture: &'a mut Option<TextureHandle>,
    pub uploaded: &'a mut Option<u64>,
}

pub fn render(egui_ctx: &egui::Context, ui_ctx: &mut UiCtx<'_>) {
    egui::CentralPanel::default()
        .frame(egui::Frame::default().fill(BACKGROUND))
        .show(egui_ctx, |ui| {
            let surface = ui_ctx.surface;
            let generation = surface.generation();

            let stale = *ui_ctx.uploaded != Some(generation);
            if stale || ui_ctx.texture.is_none() {
                let color_image =
                    ColorImage::from_rgba_unmultiplied(surface.size(), surface.as_rgba());
                match ui_ctx.texture.as_mut() {
                    Some(tex) => tex.set(color_image, TextureOptions::NEAREST),
                    None => {
                        *ui_ctx.texture = Some(ui.ctx().load_texture(
                            "register_display",
                            color_image,
                            TextureOptions::NEAREST,
                        ));
                    }
                }
                *ui_ctx.uploaded = Some(generation);
            }

            let Some(tex) = ui_ctx.texture.as_ref() else {
                return;
            };

            // Scale while maintaining aspect
            let [width, height] = surface.size();
            let avail = ui.available_size();
            let aspect = width as f32 / height.max(1) as f32;
            let (w, h) = if avail.x / avail.y > aspect {
                (avail.y * aspect, avail.y)
            } else {
                (avail.x, avail.x / aspect)
            };

            ui.vertical_centered(|ui| {
                ui.image((tex.id(), egui::vec2(w, h)));
            });
        });
}
