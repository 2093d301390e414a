#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Session begins; the menu has not been shown yet.
    Started,
    /// One line read from the user, without its line terminator.
    LineEntered(String),
    /// Input stream reached end of file.
    InputClosed,
}
