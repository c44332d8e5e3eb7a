pub mod export;
pub mod ledger;

pub use export::{to_csv, to_html, to_txt, HistoryRow};
pub use ledger::{HistoryEntry, HistoryLedger, Mode};
