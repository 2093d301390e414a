/// Output the session runner must produce after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    ShowMenu,
    RejectChoice,
    PromptItemName,
    RejectItemName,
    LookUp { item: String },
    ListAll,
    Histogram,
    Farewell,
}
