use granite_core::access::Role;
use granite_core::catalog::{BuyRequestLog, StatusFilter};

/// Overall UI state.
pub struct UIState {
    /// Which dashboard is shown.
    pub role: Role,
    pub filter: StatusFilter,

    /// Admin analytics side panel.
    pub show_analytics: bool,
    pub show_about: bool,

    /// Listing awaiting buy confirmation.
    pub pending_buy: Option<String>,
    pub buy_log: BuyRequestLog,

    /// Log messages.
    pub log_messages: Vec<String>,
}

impl UIState {
    pub fn new(role: Role, filter: StatusFilter, buy_log: BuyRequestLog) -> Self {
        Self {
            role,
            filter,
            show_analytics: role == Role::Admin,
            show_about: false,
            pending_buy: None,
            buy_log,
            log_messages: Vec::new(),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn add_log(&mut self, msg: String) {
        tracing::info!("{msg}");
        self.log_messages.push(msg);
    }
}
