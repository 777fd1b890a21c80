use crate::config::ViewerConfig;
use crate::dispatch::Dispatcher;
use crate::input;
use crate::link::Link;
use crate::view::{self, UiCtx};
use eframe::epaint::TextureHandle;
use regview_core::{KeyCode, KeyEvent, Surface};

pub struct App<L: Link> {
    dispatcher: Dispatcher<L>,
    config: ViewerConfig,
    texture: Option<TextureHandle>,
    uploaded_generation: Option<u64>,
}

impl<L: Link> App<L> {
    pub fn new(link: L, config: ViewerConfig) -> Self {
        let surface = Surface::new(config.width, config.height);
        log::info!(
            "viewer for {} ({}x{})",
            config.url,
            config.width,
            config.height
        );
        Self {
            dispatcher: Dispatcher::new(link, surface),
            config,
            texture: None,
            uploaded_generation: None,
        }
    }

    fn forward_keys(&mut self, ctx: &egui::Context) {
        for (identifier, down) in input::collect_key_events(ctx) {
            self.dispatcher.handle_key(&identifier, down);
        }
    }

    fn status_bar(&self, ctx: &egui::Context) {
        let stats = self.dispatcher.stats();
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!(
                    "{} [{}]",
                    self.config.url,
                    self.dispatcher.state().label()
                ));
                ui.separator();
                ui.label(format!(
                    "strips {}  dropped {}  keys {}",
                    stats.strips_rendered, stats.messages_dropped, stats.keys_sent
                ));
                if let Some(event) = self.dispatcher.last_key() {
                    ui.separator();
                    ui.label(format!("last key {}", describe_key(event)));
                }
                if let Some(diagnostic) = self.dispatcher.last_diagnostic() {
                    ui.separator();
                    ui.weak(diagnostic);
                }
            });
        });
    }
}

impl<L: Link> eframe::App for App<L> {
    /// Serves as the main UI loop
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.dispatcher.pump();
        self.forward_keys(ctx);

        self.status_bar(ctx);
        let mut ui_ctx = UiCtx {
            surface: self.dispatcher.surface(),
            texture: &mut self.texture,
            uploaded: &mut self.uploaded_generation,
        };
        view::render(ctx, &mut ui_ctx);

        ctx.request_repaint();
    }
}

fn describe_key(event: KeyEvent) -> String {
    let what = match KeyCode::from(event.key) {
        KeyCode::Char(c) => format!("{c:?}"),
        KeyCode::Named(named) => named.name().to_owned(),
        KeyCode::Unmapped => "unmapped".to_owned(),
    };
    let edge = if event.down { "down" } else { "up" };
    format!("{what} ({}) {edge}", event.key)
}
