//! DOM event wiring for the panel.
//!
//! Every listener lives for the page lifetime, so closures are leaked with
//! `forget()`. Network work is spawned with `spawn_local` and never awaited
//! by the listener.

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Window};

use motor_panel_protocol::{Command, Setting};

use crate::dom::element;
use crate::panel::Button;
use crate::BrowserPanel;

/// Attach input, click and load listeners
pub fn bind_all(panel: &Rc<BrowserPanel>, doc: &Document, win: &Window) -> Result<(), JsValue> {
    for setting in Setting::ALL {
        bind_input(panel, doc, setting)?;
    }
    for button in Button::ALL {
        bind_button(panel, doc, button)?;
    }
    bind_load(panel, doc, win)
}

fn bind_input(panel: &Rc<BrowserPanel>, doc: &Document, setting: Setting) -> Result<(), JsValue> {
    let el = element(doc, setting.key())?;
    let panel = Rc::clone(panel);
    let cb = Closure::wrap(Box::new(move || {
        if let Some(command) = panel.on_input(setting) {
            spawn_dispatch(&panel, command);
        }
    }) as Box<dyn FnMut()>);
    el.add_event_listener_with_callback("input", cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

fn bind_button(panel: &Rc<BrowserPanel>, doc: &Document, button: Button) -> Result<(), JsValue> {
    let el = element(doc, button.id())?;
    let panel = Rc::clone(panel);
    let cb = Closure::wrap(Box::new(move || {
        if let Some(command) = panel.on_click(button) {
            spawn_dispatch(&panel, command);
        }
    }) as Box<dyn FnMut()>);
    el.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// The wasm module may finish instantiating after `load` already fired;
/// in that case fetch immediately.
fn bind_load(panel: &Rc<BrowserPanel>, doc: &Document, win: &Window) -> Result<(), JsValue> {
    if doc.ready_state() == "complete" {
        spawn_load(panel);
        return Ok(());
    }

    let panel = Rc::clone(panel);
    let cb = Closure::once(Box::new(move || {
        spawn_load(&panel);
    }) as Box<dyn FnOnce()>);
    win.add_event_listener_with_callback("load", cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

fn spawn_dispatch(panel: &Rc<BrowserPanel>, command: Command) {
    let panel = Rc::clone(panel);
    spawn_local(async move {
        panel.dispatch(command).await;
    });
}

fn spawn_load(panel: &Rc<BrowserPanel>) {
    let panel = Rc::clone(panel);
    spawn_local(async move {
        panel.load_settings().await;
    });
}
