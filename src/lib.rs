#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod mount;
mod render;
mod visibility;

thread_local! {
    static BACKDROP: RefCell<Option<mount::Backdrop>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("backdrop-web starting");

    if let Err(e) = mount() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

/// (Re)mount the backdrop layers onto the current document.
#[wasm_bindgen]
pub fn mount() -> Result<(), JsValue> {
    init().map_err(|e| JsValue::from_str(&format!("{:?}", e)))
}

/// Stop every loop and detach every listener, e.g. when the hero section
/// leaves the page.
#[wasm_bindgen]
pub fn unmount() {
    BACKDROP.with(|b| drop(b.borrow_mut().take()));
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    // tear down the old mount before the new one attaches listeners
    unmount();
    let backdrop = mount::mount_backdrop(&document);
    BACKDROP.with(|b| *b.borrow_mut() = backdrop);
    Ok(())
}
