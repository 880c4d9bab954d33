use crate::view_model::AppViewModel;

/// Notification shown when conversion is requested without any input.
pub const EMPTY_INPUT_MESSAGE: &str = "input is empty";

/// Harness state. Holds only the raw strings shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    input: String,
    output: Option<String>,
    notification: Option<String>,
    converting: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            output: self.output.clone(),
            notification: self.notification.clone(),
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn has_input(&self) -> bool {
        !self.input.trim().is_empty()
    }

    pub fn is_converting(&self) -> bool {
        self.converting
    }

    pub(crate) fn set_input(&mut self, input: String) {
        self.input = input;
    }

    pub(crate) fn begin_conversion(&mut self) {
        self.converting = true;
        self.notification = None;
    }

    pub(crate) fn finish_conversion(&mut self, output: String) {
        self.converting = false;
        self.output = Some(output);
    }

    pub(crate) fn notify(&mut self, message: &str) {
        self.notification = Some(message.to_string());
    }
}
