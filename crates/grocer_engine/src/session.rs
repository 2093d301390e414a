use std::io::{self, BufRead, Write};

use grocer_core::{update, Effect, FrequencyStore, Msg, SessionState, DEFAULT_HISTOGRAM_SYMBOL};
use grocer_logging::{grocer_debug, grocer_info, grocer_warn};

use crate::prompts::{EMPTY_ITEM_PROMPT, FAREWELL, INVALID_CHOICE_PROMPT, ITEM_PROMPT, MENU};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// User picked Exit.
    Exited,
    /// Input reached end of file before Exit.
    InputClosed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOutcome {
    pub end: SessionEnd,
    pub rejected_inputs: usize,
}

/// Drives the menu loop: reads lines, feeds them to [`update`], and runs the effects.
pub struct SessionRunner<'a, R, W> {
    store: &'a FrequencyStore,
    histogram_symbol: char,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> SessionRunner<'a, R, W> {
    pub fn new(store: &'a FrequencyStore, input: R, output: W) -> Self {
        Self {
            store,
            histogram_symbol: DEFAULT_HISTOGRAM_SYMBOL,
            input,
            output,
        }
    }

    pub fn with_histogram_symbol(mut self, symbol: char) -> Self {
        self.histogram_symbol = symbol;
        self
    }

    pub fn run(mut self) -> io::Result<SessionOutcome> {
        let (mut state, effects) = update(SessionState::new(), Msg::Started);
        self.apply(effects)?;

        let mut end = SessionEnd::Exited;
        while !state.is_finished() {
            let msg = match self.read_line()? {
                Some(line) => {
                    grocer_debug!("Input line {:?} in phase {:?}", line, state.phase());
                    Msg::LineEntered(line)
                }
                None => {
                    grocer_warn!("Input closed before Exit was chosen");
                    end = SessionEnd::InputClosed;
                    Msg::InputClosed
                }
            };
            let (next, effects) = update(state, msg);
            state = next;
            self.apply(effects)?;
        }

        grocer_info!(
            "Session ended ({:?}) after {} rejected inputs",
            end,
            state.rejected_inputs()
        );
        Ok(SessionOutcome {
            end,
            rejected_inputs: state.rejected_inputs(),
        })
    }

    /// Next line without its terminator, or `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_owned()))
    }

    fn apply(&mut self, effects: Vec<Effect>) -> io::Result<()> {
        for effect in effects {
            match effect {
                Effect::ShowMenu => write!(self.output, "{MENU}")?,
                Effect::RejectChoice => {
                    grocer_info!("Rejected menu choice");
                    write!(self.output, "{INVALID_CHOICE_PROMPT}")?;
                }
                Effect::PromptItemName => write!(self.output, "{ITEM_PROMPT}")?,
                Effect::RejectItemName => {
                    grocer_info!("Rejected empty item name");
                    write!(self.output, "{EMPTY_ITEM_PROMPT}")?;
                }
                Effect::LookUp { item } => {
                    let count = self.store.frequency_of(&item);
                    grocer_info!("Look up {:?} -> {}", item, count);
                    writeln!(self.output, "{item} {count}")?;
                }
                Effect::ListAll => {
                    grocer_info!("List all {} items", self.store.len());
                    write!(self.output, "{}", self.store.render_all())?;
                }
                Effect::Histogram => {
                    grocer_info!("Histogram of {} items", self.store.len());
                    write!(
                        self.output,
                        "{}",
                        self.store.render_histogram(self.histogram_symbol)
                    )?;
                }
                Effect::Farewell => writeln!(self.output, "{FAREWELL}")?,
            }
        }
        self.output.flush()
    }
}
