//! Grocer core: frequency store, renderers and the pure session state machine.
mod backup;
mod effect;
mod menu;
mod msg;
mod render;
mod state;
mod store;
mod tokens;
mod update;

pub use backup::BackupParseError;
pub use effect::Effect;
pub use menu::{parse_item_name, MenuChoice, ValidationError};
pub use msg::Msg;
pub use render::{DEFAULT_HISTOGRAM_SYMBOL, NO_DATA_LINE};
pub use state::{Phase, SessionState};
pub use store::{FrequencyStore, COLUMN_GAP, MIN_ITEM_COLUMN};
pub use tokens::{clean_item, is_separator, split_items};
pub use update::update;
