pub mod catalog;
pub mod config;
pub mod error;
pub mod ledger;
pub mod models;
pub mod ui;

// Shared state for the whole application
pub struct App {
    pub config: config::Config,
    pub ledger: ledger::Ledger,
}

impl App {
    pub fn new(config: config::Config) -> Self {
        let ledger = ledger::Ledger::new(&config.booking);
        App { config, ledger }
    }
}
