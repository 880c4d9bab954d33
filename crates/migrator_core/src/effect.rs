#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Run the engine on `input` and report back with `Msg::ConversionFinished`.
    Convert { input: String },
    /// Show a blocking notification to the user.
    Notify { message: String },
}
