use legline::{layout, ledger::Ledger};
use tokio::sync::Mutex;

pub struct AppState {
    pub ledger: Mutex<Ledger>,
    pub layout: layout::Config,
}

impl AppState {
    pub fn new(ledger: Ledger) -> Self {
        Self {
            ledger: Mutex::new(ledger),
            layout: layout::Config::default(),
        }
    }
}
