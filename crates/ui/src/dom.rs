use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, Document, Element, HtmlInputElement};

use motor_panel_protocol::Setting;

use crate::panel::{Control, Display, SettingField};

/// Get document helper
pub fn get_document() -> Option<Document> {
    window().and_then(|w| w.document())
}

/// Look up a required element by id
pub fn element(doc: &Document, id: &str) -> Result<Element, JsValue> {
    doc.get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("element #{id} not found")))
}

/// Look up a required `<input>` by id
pub fn input(doc: &Document, id: &str) -> Result<HtmlInputElement, JsValue> {
    element(doc, id)?
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| JsValue::from_str(&format!("element #{id} is not an <input>")))
}

/// Slider (or any input) backing a setting
pub struct InputControl(HtmlInputElement);

impl Control for InputControl {
    fn value(&self) -> String {
        self.0.value()
    }

    fn set_value(&self, value: &str) {
        self.0.set_value(value);
    }
}

/// Element whose text mirrors a setting
pub struct TextDisplay(Element);

impl Display for TextDisplay {
    fn set_text(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }
}

/// Bind a setting to its `<input id="key">` and `<span id="key_disp">`
pub fn setting_field(doc: &Document, setting: Setting) -> Result<SettingField, JsValue> {
    let control = InputControl(input(doc, setting.key())?);
    let display = TextDisplay(element(doc, setting.display_id())?);
    Ok(SettingField::new(setting, control, display))
}
