/// The recommended table action.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum Action {
    Fold,
    Call,
    Raise,
    BluffRaise,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Action::Fold => "Fold",
                Action::Call => "Call",
                Action::Raise => "Raise",
                Action::BluffRaise => "Bluff Raise",
            }
        )
    }
}
