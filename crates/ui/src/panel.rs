//! Settings panel controller.
//!
//! Holds the two setting fields and the device client. Event handlers are
//! split in two: `on_input`/`on_click` run synchronously inside the DOM event
//! (display updates, reading control values) and return the [`Command`] to
//! send; `dispatch` performs the request and logs the outcome. The browser
//! spawns each dispatch independently, so requests are never ordered or
//! coalesced.

use motor_panel_protocol::{Command, PanelClient, ProtocolError, Setting, Settings, Transport};

/// An input control with a readable/writable value
pub trait Control {
    fn value(&self) -> String;
    fn set_value(&self, value: &str);
}

/// An element showing a control's value
pub trait Display {
    fn set_text(&self, text: &str);
}

/// Log sink; the panel reports request outcomes here and nowhere else
pub trait Console {
    fn log(&self, message: &str);
    fn error(&self, message: &str);
}

/// A setting's input control paired with its display element
pub struct SettingField {
    setting: Setting,
    control: Box<dyn Control>,
    display: Box<dyn Display>,
}

impl SettingField {
    pub fn new(
        setting: Setting,
        control: impl Control + 'static,
        display: impl Display + 'static,
    ) -> Self {
        Self {
            setting,
            control: Box::new(control),
            display: Box::new(display),
        }
    }

    pub const fn setting(&self) -> Setting {
        self.setting
    }

    pub fn value(&self) -> String {
        self.control.value()
    }

    /// Mirror the control's current value into the display
    pub fn refresh(&self) {
        let text = self.setting.unit().format(self.control.value());
        self.display.set_text(&text);
    }

    /// Set the control and its display from a server value
    pub fn apply(&self, value: i64) {
        self.control.set_value(&value.to_string());
        self.display.set_text(&self.setting.unit().format(value));
    }
}

/// Motor buttons on the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Start,
    Stop,
    Save,
}

impl Button {
    pub const ALL: [Self; 3] = [Self::Start, Self::Stop, Self::Save];

    pub const fn id(self) -> &'static str {
        match self {
            Self::Start => "start_button",
            Self::Stop => "stop_button",
            Self::Save => "save_button",
        }
    }
}

pub struct Panel<T, L> {
    rotation_speed: SettingField,
    interval_time: SettingField,
    client: PanelClient<T>,
    console: L,
}

impl<T: Transport, L: Console> Panel<T, L> {
    pub fn new(
        rotation_speed: SettingField,
        interval_time: SettingField,
        client: PanelClient<T>,
        console: L,
    ) -> Self {
        Self {
            rotation_speed,
            interval_time,
            client,
            console,
        }
    }

    pub const fn field(&self, setting: Setting) -> &SettingField {
        match setting {
            Setting::RotationSpeed => &self.rotation_speed,
            Setting::IntervalTime => &self.interval_time,
        }
    }

    pub const fn client(&self) -> &PanelClient<T> {
        &self.client
    }

    /// Write both controls' markup values into their displays. No network.
    pub fn init_displays(&self) {
        for setting in Setting::ALL {
            self.field(setting).refresh();
        }
    }

    /// Settings as currently held by the controls
    pub fn current_settings(&self) -> Result<Settings, ProtocolError> {
        Settings::from_raw(&self.rotation_speed.value(), &self.interval_time.value())
    }

    /// Input event on a setting control: refresh its display, then push both values
    pub fn on_input(&self, setting: Setting) -> Option<Command> {
        self.field(setting).refresh();
        self.settings_command(Command::Update)
    }

    /// Click on a motor button. Save captures the control values at click time.
    pub fn on_click(&self, button: Button) -> Option<Command> {
        match button {
            Button::Start => Some(Command::Start),
            Button::Stop => Some(Command::Stop),
            Button::Save => self.settings_command(Command::Save),
        }
    }

    fn settings_command(&self, build: fn(Settings) -> Command) -> Option<Command> {
        match self.current_settings() {
            Ok(settings) => Some(build(settings)),
            Err(err) => {
                self.console
                    .error(&format!("Cannot read settings from controls: {err}"));
                None
            }
        }
    }

    /// Send a command and log the result. Never fails outward.
    pub async fn dispatch(&self, command: Command) {
        match self.client.send(&command).await {
            Ok(()) => self.console.log(command.success_message()),
            Err(err) => self
                .console
                .error(&format!("{}: {err}", command.failure_message())),
        }
    }

    /// Push the current control values to `/update`
    pub async fn push_settings(&self) {
        if let Some(command) = self.settings_command(Command::Update) {
            self.dispatch(command).await;
        }
    }

    /// Page load: pull settings from the device. On failure the controls keep
    /// their markup defaults.
    pub async fn load_settings(&self) {
        match self.client.fetch_settings().await {
            Ok(settings) => {
                for setting in Setting::ALL {
                    self.field(setting).apply(settings.get(setting));
                }
            }
            Err(err) => self
                .console
                .error(&format!("Failed to load settings: {err}")),
        }
    }
}
