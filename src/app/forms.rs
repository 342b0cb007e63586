//! View-models for the deposit, settings, login, and assistant screens.

use std::time::{Duration, Instant};

use strum::{Display, EnumIter, IntoEnumIterator};

use crate::assistant::{self, Message, QuickAction};
use crate::catalog::Catalog;
use crate::config::{
    CHAT_REPLY_DELAY_MS, COPIED_BADGE_MS, DEFAULT_NISAB_USD, LOGIN_DELAY_MS, WALLET_ADDRESS,
};
use crate::quote::parse_amount;
use crate::zakat::{self, ZakatEstimate};

use super::types::SettingsField;

pub struct DepositForm {
    pub asset: String,
    pub copied_until: Option<Instant>,
}

impl DepositForm {
    pub fn new(default_asset: &str) -> Self {
        Self {
            asset: default_asset.to_string(),
            copied_until: None,
        }
    }

    pub fn address(&self) -> &'static str {
        WALLET_ADDRESS
    }

    /// Marks the address as copied; the badge expires on its own.
    pub fn copy_address(&mut self) {
        self.copied_until = Some(Instant::now() + Duration::from_millis(COPIED_BADGE_MS));
    }

    pub fn copied(&self) -> bool {
        self.copied_until.is_some_and(|until| Instant::now() < until)
    }

    /// Returns true when the copied badge just expired.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.copied_until.is_some_and(|until| now >= until) {
            self.copied_until = None;
            return true;
        }
        false
    }

    pub fn cycle_asset_next(&mut self, catalog: &Catalog) {
        self.asset = catalog.next_symbol(&self.asset, &[]);
    }

    pub fn cycle_asset_previous(&mut self, catalog: &Catalog) {
        self.asset = catalog.previous_symbol(&self.asset, &[]);
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum Currency {
    #[default]
    #[strum(serialize = "USD ($)")]
    Usd,
    #[strum(serialize = "EUR (€)")]
    Eur,
    #[strum(serialize = "GBP (£)")]
    Gbp,
    #[strum(serialize = "AED (د.إ)")]
    Aed,
    #[strum(serialize = "SAR (﷼)")]
    Sar,
    #[strum(serialize = "QAR (ر.ق)")]
    Qar,
}

impl Currency {
    pub fn next(self) -> Self {
        let all: Vec<Self> = Self::iter().collect();
        let i = all.iter().position(|c| *c == self).unwrap_or(0);
        all[(i + 1) % all.len()]
    }

    pub fn previous(self) -> Self {
        let all: Vec<Self> = Self::iter().collect();
        let i = all.iter().position(|c| *c == self).unwrap_or(0);
        all[(i + all.len() - 1) % all.len()]
    }
}

pub struct SettingsForm {
    pub notifications: bool,
    pub biometrics: bool,
    pub zakat_reminders: bool,
    pub nisab_input: String,
    pub currency: Currency,
    pub field: SettingsField,
}

impl SettingsForm {
    pub fn new(nisab_usd: f64) -> Self {
        Self {
            notifications: true,
            biometrics: false,
            zakat_reminders: true,
            nisab_input: format!("{nisab_usd}"),
            currency: Currency::default(),
            field: SettingsField::default(),
        }
    }

    pub fn toggle_focused(&mut self) {
        match self.field {
            SettingsField::Notifications => self.notifications = !self.notifications,
            SettingsField::Biometrics => self.biometrics = !self.biometrics,
            SettingsField::ZakatReminders => self.zakat_reminders = !self.zakat_reminders,
            SettingsField::Nisab | SettingsField::Currency => {}
        }
    }

    /// The threshold in effect; a blank or half-typed field falls back to
    /// the default rather than treating the portfolio as levy-free.
    pub fn nisab_usd(&self) -> f64 {
        parse_amount(&self.nisab_input).unwrap_or(DEFAULT_NISAB_USD)
    }

    pub fn zakat_estimate(&self, catalog: &Catalog) -> ZakatEstimate {
        zakat::estimate(catalog.total_value_usd(), self.nisab_usd())
    }
}

pub struct LoginForm {
    pub phrase: String,
    pub unlock_deadline: Option<Instant>,
}

impl LoginForm {
    pub fn new() -> Self {
        Self {
            phrase: String::new(),
            unlock_deadline: None,
        }
    }

    pub fn can_submit(&self) -> bool {
        !self.phrase.trim().is_empty() && self.unlock_deadline.is_none()
    }

    /// Any non-blank phrase "decrypts the vault" after a short delay.
    pub fn submit(&mut self) {
        if self.can_submit() {
            self.unlock_deadline = Some(Instant::now() + Duration::from_millis(LOGIN_DELAY_MS));
        }
    }

    pub fn submitting(&self) -> bool {
        self.unlock_deadline.is_some()
    }

    /// Returns true on the tick that unlocks the wallet.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.unlock_deadline.is_some_and(|deadline| now >= deadline) {
            self.unlock_deadline = None;
            self.phrase.clear();
            return true;
        }
        false
    }
}

struct PendingReply {
    due: Instant,
    body: String,
}

pub struct ChatState {
    pub messages: Vec<Message>,
    pub input: String,
    pub selected_action: usize,
    pending: Option<PendingReply>,
}

impl ChatState {
    pub fn new() -> Self {
        Self {
            messages: vec![Message::assistant(assistant::greeting())],
            input: String::new(),
            selected_action: 0,
            pending: None,
        }
    }

    pub fn typing(&self) -> bool {
        self.pending.is_some()
    }

    pub fn select_next_action(&mut self) {
        self.selected_action = (self.selected_action + 1) % QuickAction::ALL.len();
    }

    pub fn select_previous_action(&mut self) {
        self.selected_action =
            (self.selected_action + QuickAction::ALL.len() - 1) % QuickAction::ALL.len();
    }

    pub fn selected(&self) -> QuickAction {
        QuickAction::ALL[self.selected_action]
    }

    pub fn run_action(&mut self, action: QuickAction, catalog: &Catalog, nisab_usd: f64) {
        if self.pending.is_some() {
            return;
        }
        self.messages.push(Message::user(action.prompt()));
        self.pending = Some(PendingReply {
            due: Instant::now() + Duration::from_millis(CHAT_REPLY_DELAY_MS),
            body: assistant::canned_response(action, catalog, nisab_usd),
        });
    }

    pub fn send_input(&mut self) {
        if self.pending.is_some() || self.input.trim().is_empty() {
            return;
        }
        let text = std::mem::take(&mut self.input);
        self.messages.push(Message::user(text));
        self.pending = Some(PendingReply {
            due: Instant::now() + Duration::from_millis(CHAT_REPLY_DELAY_MS),
            body: assistant::fallback_response().to_string(),
        });
    }

    /// Delivers the pending reply once its typing delay elapses. Returns
    /// true when a message was appended.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.pending.as_ref().is_some_and(|p| now >= p.due) {
            let reply = self.pending.take().map(|p| p.body).unwrap_or_default();
            self.messages.push(Message::assistant(reply));
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::Sender;

    #[test]
    fn quick_action_delivers_canned_reply_after_delay() {
        let catalog = Catalog::builtin().unwrap();
        let mut chat = ChatState::new();
        chat.run_action(QuickAction::MarketTrends, &catalog, 5000.0);
        assert!(chat.typing());
        assert_eq!(chat.messages.last().unwrap().sender, Sender::User);

        // Tick before the delay delivers nothing.
        assert!(!chat.tick(Instant::now()));

        let due = chat.pending.as_ref().unwrap().due;
        assert!(chat.tick(due));
        assert!(!chat.typing());
        let reply = chat.messages.last().unwrap();
        assert_eq!(reply.sender, Sender::Assistant);
        assert!(reply.body.contains("Market Intelligence"));
    }

    #[test]
    fn free_text_gets_fallback_reply() {
        let catalog = Catalog::builtin().unwrap();
        let mut chat = ChatState::new();
        chat.input = "is staking permissible?".to_string();
        chat.send_input();
        assert!(chat.input.is_empty());
        let due = chat.pending.as_ref().unwrap().due;
        chat.tick(due);
        assert!(
            chat.messages
                .last()
                .unwrap()
                .body
                .contains("Query processing limit reached")
        );
        // Unrelated to the catalog or an action: same reply every time.
        let _ = catalog;
    }

    #[test]
    fn blank_input_is_ignored() {
        let mut chat = ChatState::new();
        chat.input = "   ".to_string();
        chat.send_input();
        assert!(!chat.typing());
        assert_eq!(chat.messages.len(), 1);
    }

    #[test]
    fn second_request_waits_for_pending_reply() {
        let catalog = Catalog::builtin().unwrap();
        let mut chat = ChatState::new();
        chat.run_action(QuickAction::ComplianceAudit, &catalog, 5000.0);
        let before = chat.messages.len();
        chat.run_action(QuickAction::MarketTrends, &catalog, 5000.0);
        assert_eq!(chat.messages.len(), before);
    }

    #[test]
    fn login_accepts_any_non_blank_phrase() {
        let mut login = LoginForm::new();
        assert!(!login.can_submit());
        login.phrase = "abandon ability able about".to_string();
        login.submit();
        assert!(login.submitting());
        let deadline = login.unlock_deadline.unwrap();
        assert!(login.tick(deadline));
        assert!(!login.submitting());
    }

    #[test]
    fn nisab_falls_back_when_field_is_blank() {
        let mut settings = SettingsForm::new(5000.0);
        settings.nisab_input.clear();
        assert_eq!(settings.nisab_usd(), DEFAULT_NISAB_USD);
        settings.nisab_input = "7500".to_string();
        assert_eq!(settings.nisab_usd(), 7500.0);
    }

    #[test]
    fn copied_badge_expires() {
        let mut deposit = DepositForm::new("SDA");
        deposit.copy_address();
        assert!(deposit.copied());
        let until = deposit.copied_until.unwrap();
        assert!(deposit.tick(until));
        assert!(!deposit.copied());
    }

    #[test]
    fn currency_cycles_through_all_options() {
        let mut currency = Currency::Usd;
        for _ in 0..Currency::iter().count() {
            currency = currency.next();
        }
        assert_eq!(currency, Currency::Usd);
        assert_eq!(Currency::Usd.previous(), Currency::Qar);
    }
}
