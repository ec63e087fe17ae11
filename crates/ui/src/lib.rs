mod console;
mod dom;
mod events;
mod network;
pub mod panel;

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::window;

use motor_panel_protocol::{PanelClient, Setting};

pub use crate::console::BrowserConsole;
pub use crate::network::FetchTransport;
pub use crate::panel::{Button, Console, Control, Display, Panel, SettingField};

/// The panel as mounted in a browser page
pub type BrowserPanel = Panel<FetchTransport, BrowserConsole>;

#[wasm_bindgen(start)]
pub fn main_js() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    if let Err(err) = mount() {
        web_sys::console::error_2(&"[Panel] Mount failed:".into(), &err);
        return Err(err);
    }

    Ok(())
}

/// Bind the panel to the page's controls and start listening
fn mount() -> Result<(), JsValue> {
    let win = window().ok_or("No window")?;
    let doc = dom::get_document().ok_or("No document")?;

    let panel = Rc::new(Panel::new(
        dom::setting_field(&doc, Setting::RotationSpeed)?,
        dom::setting_field(&doc, Setting::IntervalTime)?,
        PanelClient::same_origin(FetchTransport),
        BrowserConsole,
    ));

    panel.init_displays();
    events::bind_all(&panel, &doc, &win)?;

    web_sys::console::log_1(&"[Panel] Ready".into());
    Ok(())
}
