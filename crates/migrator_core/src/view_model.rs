#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub output: Option<String>,
    pub notification: Option<String>,
}
