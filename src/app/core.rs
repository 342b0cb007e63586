//! Core application state and the periodic update pass

use std::time::{Duration, Instant};

use anyhow::Result;
use cli_log::*;

use crate::catalog::{Catalog, Transaction, recent_transactions};
use crate::cli::Cli;
use crate::config::STATUS_MESSAGE_MS;
use crate::zakat::ZakatEstimate;

use super::forms::{ChatState, DepositForm, LoginForm, SettingsForm};
use super::send::SendForm;
use super::swap::SwapForm;
use super::types::Screen;

pub struct App {
    // Static session data
    pub catalog: Catalog,
    pub transactions: Vec<Transaction>,

    // Navigation
    pub screen: Screen,

    // Per-screen view-models
    pub login: LoginForm,
    pub send: SendForm,
    pub swap: SwapForm,
    pub deposit: DepositForm,
    pub settings: SettingsForm,
    pub chat: ChatState,

    // Dashboard state
    pub show_welcome_banner: bool,
    pub hide_balances: bool,

    // UI state
    pub needs_redraw: bool,
    pub error_message: Option<String>,
    pub status_message: Option<String>,
    pub status_until: Option<Instant>,
}

impl App {
    pub fn new(cli: &Cli) -> Result<Self> {
        let catalog = match &cli.catalog {
            Some(path) => {
                info!("loading asset catalog from {}", path.display());
                Catalog::from_json_file(path)?
            }
            None => Catalog::builtin()?,
        };

        let default_asset = catalog.assets()[0].symbol.clone();
        let swap_target = catalog.next_symbol(&default_asset, &[]);

        Ok(Self {
            transactions: recent_transactions(),
            screen: if cli.unlocked {
                Screen::Dashboard
            } else {
                Screen::Login
            },
            login: LoginForm::new(),
            send: SendForm::new(&default_asset),
            swap: SwapForm::new(&default_asset, &swap_target),
            deposit: DepositForm::new(&default_asset),
            settings: SettingsForm::new(cli.nisab),
            chat: ChatState::new(),
            catalog,
            show_welcome_banner: true,
            hide_balances: false,
            needs_redraw: true,
            error_message: None,
            status_message: None,
            status_until: None,
        })
    }

    /// Resolves every elapsed simulated-latency deadline: flow
    /// submissions, the chat typing delay, the login unlock, the copied
    /// badge, and transient status messages.
    pub fn update(&mut self) {
        let now = Instant::now();

        if self.login.tick(now) {
            info!("vault unlocked");
            self.screen = Screen::Dashboard;
            self.set_status("Authentication Successful. Vault decrypted.");
            self.needs_redraw = true;
        }
        if self.send.tick(now) {
            info!("send broadcast complete");
            self.needs_redraw = true;
        }
        if self.swap.tick(now) {
            info!("swap execution complete");
            self.needs_redraw = true;
        }
        if self.chat.tick(now) {
            self.needs_redraw = true;
        }
        if self.deposit.tick(now) {
            self.needs_redraw = true;
        }
        if self.status_until.is_some_and(|until| now >= until) {
            self.status_message = None;
            self.status_until = None;
            self.needs_redraw = true;
        }
    }

    pub fn navigate(&mut self, screen: Screen) {
        if self.screen != screen {
            debug!("navigate {:?} -> {:?}", self.screen, screen);
            self.screen = screen;
            self.needs_redraw = true;
        }
    }

    pub fn next_screen(&mut self) {
        self.screen = self.screen.next();
        self.needs_redraw = true;
    }

    pub fn previous_screen(&mut self) {
        self.screen = self.screen.previous();
        self.needs_redraw = true;
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_until = Some(Instant::now() + Duration::from_millis(STATUS_MESSAGE_MS));
        self.needs_redraw = true;
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        let message = message.into();
        warn!("{message}");
        self.error_message = Some(message);
        self.needs_redraw = true;
    }

    pub fn portfolio_total_usd(&self) -> f64 {
        self.catalog.total_value_usd()
    }

    pub fn zakat_estimate(&self) -> ZakatEstimate {
        self.settings.zakat_estimate(&self.catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn app() -> App {
        App::new(&Cli::parse_from(["sidex-wallet", "--unlocked"])).unwrap()
    }

    #[test]
    fn starts_on_login_unless_unlocked() {
        let locked = App::new(&Cli::parse_from(["sidex-wallet"])).unwrap();
        assert_eq!(locked.screen, Screen::Login);
        assert_eq!(app().screen, Screen::Dashboard);
    }

    #[test]
    fn login_unlock_navigates_to_dashboard() {
        let mut app = App::new(&Cli::parse_from(["sidex-wallet"])).unwrap();
        app.login.phrase = "abandon ability able".to_string();
        app.login.submit();
        app.login.unlock_deadline = Some(Instant::now());
        app.update();
        assert_eq!(app.screen, Screen::Dashboard);
        assert!(app.status_message.is_some());
    }

    #[test]
    fn swap_form_starts_with_distinct_assets() {
        let app = app();
        assert_ne!(app.swap.from_asset, app.swap.to_asset);
    }

    #[test]
    fn zakat_estimate_uses_settings_threshold() {
        let mut app = app();
        app.settings.nisab_input = "1000000000".to_string();
        assert!(!app.zakat_estimate().nisab_met);
        app.settings.nisab_input = "5000".to_string();
        assert!(app.zakat_estimate().nisab_met);
    }
}
