#![cfg(target_arch = "wasm32")]
#![warn(clippy::all, rust_2018_idioms)]
use link::WebLink;
use regview_app::{App, ViewerConfig};
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

mod link;

const CANVAS_ID: &str = "regview_canvas";

static INITIALIZED: AtomicBool = AtomicBool::new(false);

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    eframe::WebLogger::init(log::LevelFilter::Debug).ok();
    if INITIALIZED.swap(true, Ordering::SeqCst) {
        log::info!("Already initialized, skipping");
        return;
    }
    spawn_eframe(config_from_page());
}

/// Defaults, with `?ws=<url>` on the page overriding the endpoint.
fn config_from_page() -> ViewerConfig {
    let config = ViewerConfig::default();
    match endpoint_override() {
        Some(url) => config.with_url(url),
        None => config,
    }
}

fn endpoint_override() -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    web_sys::UrlSearchParams::new_with_str(&search).ok()?.get("ws")
}

fn spawn_eframe(config: ViewerConfig) {
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(e) = run(config).await {
            log::error!("viewer failed to start: {e:?}");
        }
    });
}

async fn run(config: ViewerConfig) -> Result<(), JsValue> {
    let canvas = get_canvas(CANVAS_ID)?;
    let link = WebLink::connect(&config.url)?;
    let web_options = eframe::WebOptions::default();

    eframe::WebRunner::new()
        .start(
            canvas,
            web_options,
            Box::new(move |_cc| Ok(Box::new(App::new(link, config)))),
        )
        .await
}

fn get_canvas(id: &str) -> Result<web_sys::HtmlCanvasElement, JsValue> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("No document"))?
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("Canvas #{id} not found")))?
        .dyn_into()
        .map_err(|_| JsValue::from_str(&format!("#{id} is not a canvas")))
}
