use crate::panel::Console;

/// Browser devtools console
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserConsole;

impl Console for BrowserConsole {
    fn log(&self, message: &str) {
        web_sys::console::log_1(&message.into());
    }

    fn error(&self, message: &str) {
        web_sys::console::error_1(&message.into());
    }
}
