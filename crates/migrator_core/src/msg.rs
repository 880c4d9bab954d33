#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the post input.
    InputChanged(String),
    /// User asked for the current input to be converted.
    ConvertClicked,
    /// Engine returned the converted text.
    ConversionFinished(String),
}
