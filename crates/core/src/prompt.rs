/// The user-facing side of the journal: blocking confirmations and alerts.
///
/// A GUI, a terminal, or a test double implements this; the journal calls it
/// before destructive actions and when a mutation fails.
pub trait UserPrompt {
    /// Ask a yes/no question. `false` aborts the action.
    fn confirm(&self, message: &str) -> bool;

    /// Show a blocking notification.
    fn alert(&self, message: &str);
}
