//! Grocer engine: file IO for the frequency store and the interactive session runner.
mod error;
mod load;
mod persist;
mod prompts;
mod session;
mod startup;

pub use error::StoreIoError;
pub use load::{count_reader, load_backup, load_frequencies};
pub use persist::{persist_frequencies, AtomicFileWriter};
pub use prompts::{
    EMPTY_ITEM_PROMPT, FAREWELL, INVALID_CHOICE_PROMPT, ITEM_PROMPT, MENU, MENU_BANNER,
};
pub use session::{SessionEnd, SessionOutcome, SessionRunner};
pub use startup::startup;
