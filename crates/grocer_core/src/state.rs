#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    AwaitingChoice,
    AwaitingItemName,
    /// Terminal: later messages are ignored.
    Finished,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionState {
    phase: Phase,
    rejected_inputs: usize,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    /// Lines rejected by validation so far.
    pub fn rejected_inputs(&self) -> usize {
        self.rejected_inputs
    }

    pub(crate) fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }

    pub(crate) fn note_rejection(&mut self) {
        self.rejected_inputs += 1;
    }
}
