use crate::{parse_item_name, Effect, MenuChoice, Msg, Phase, SessionState};

/// Pure update function: applies a message to the session and returns the effects to run.
pub fn update(mut state: SessionState, msg: Msg) -> (SessionState, Vec<Effect>) {
    if state.is_finished() {
        return (state, Vec::new());
    }

    let effects = match msg {
        Msg::Started => vec![Effect::ShowMenu],
        Msg::InputClosed => {
            state.set_phase(Phase::Finished);
            Vec::new()
        }
        Msg::LineEntered(line) => match state.phase() {
            Phase::AwaitingChoice => match line.parse::<MenuChoice>() {
                Ok(MenuChoice::LookUp) => {
                    state.set_phase(Phase::AwaitingItemName);
                    vec![Effect::PromptItemName]
                }
                Ok(MenuChoice::ListAll) => vec![Effect::ListAll, Effect::ShowMenu],
                Ok(MenuChoice::Histogram) => vec![Effect::Histogram, Effect::ShowMenu],
                Ok(MenuChoice::Exit) => {
                    state.set_phase(Phase::Finished);
                    vec![Effect::Farewell]
                }
                Err(_) => {
                    state.note_rejection();
                    vec![Effect::RejectChoice]
                }
            },
            Phase::AwaitingItemName => match parse_item_name(&line) {
                Ok(item) => {
                    state.set_phase(Phase::AwaitingChoice);
                    vec![Effect::LookUp { item }, Effect::ShowMenu]
                }
                Err(_) => {
                    state.note_rejection();
                    vec![Effect::RejectItemName]
                }
            },
            Phase::Finished => Vec::new(),
        },
    };

    (state, effects)
}
