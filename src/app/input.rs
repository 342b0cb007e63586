//! Per-screen key handling

use anyhow::Result;
use crossterm::event::KeyCode;

use super::core::App;
use super::types::{FlowStage, Screen, SendField, SettingsField, SwapField};

/// Appends a character to an amount field, keeping the field either blank
/// or parseable: digits plus at most one decimal point.
fn push_amount_char(buf: &mut String, ch: char) -> bool {
    if ch.is_ascii_digit() || (ch == '.' && !buf.contains('.')) {
        buf.push(ch);
        return true;
    }
    false
}

impl App {
    /// Returns Ok(false) when the user asked to quit.
    pub fn handle_key_input(&mut self, key_code: KeyCode) -> Result<bool> {
        // An error overlay swallows the next confirm/dismiss key.
        if self.error_message.is_some() {
            if matches!(key_code, KeyCode::Enter | KeyCode::Esc) {
                self.error_message = None;
                self.needs_redraw = true;
            }
            return Ok(true);
        }

        match self.screen {
            Screen::Login => self.handle_login_key(key_code),
            Screen::Dashboard => self.handle_dashboard_key(key_code),
            Screen::Send => self.handle_send_key(key_code),
            Screen::Swap => self.handle_swap_key(key_code),
            Screen::Deposit => self.handle_deposit_key(key_code),
            Screen::Settings => self.handle_settings_key(key_code),
            Screen::Assistant => self.handle_assistant_key(key_code),
        }
    }

    fn handle_login_key(&mut self, key_code: KeyCode) -> Result<bool> {
        if self.login.submitting() {
            return Ok(true); // Decrypting; not cancellable
        }
        match key_code {
            KeyCode::Char(ch) => {
                self.login.phrase.push(ch);
                self.needs_redraw = true;
            }
            KeyCode::Backspace => {
                self.login.phrase.pop();
                self.needs_redraw = true;
            }
            KeyCode::Enter => {
                self.login.submit();
                self.needs_redraw = true;
            }
            KeyCode::Esc => return Ok(false),
            _ => {}
        }
        Ok(true)
    }

    fn handle_dashboard_key(&mut self, key_code: KeyCode) -> Result<bool> {
        match key_code {
            KeyCode::Char('q') => return Ok(false),
            KeyCode::Char('s') => self.navigate(Screen::Send),
            KeyCode::Char('w') => self.navigate(Screen::Swap),
            KeyCode::Char('d') => self.navigate(Screen::Deposit),
            KeyCode::Char('g') => self.navigate(Screen::Settings),
            KeyCode::Char('a') => self.navigate(Screen::Assistant),
            KeyCode::Char('h') => {
                self.hide_balances = !self.hide_balances;
                self.needs_redraw = true;
            }
            KeyCode::Char('b') => {
                self.show_welcome_banner = false;
                self.needs_redraw = true;
            }
            KeyCode::Right | KeyCode::Tab => self.next_screen(),
            KeyCode::Left | KeyCode::BackTab => self.previous_screen(),
            _ => {}
        }
        Ok(true)
    }

    fn handle_send_key(&mut self, key_code: KeyCode) -> Result<bool> {
        match self.send.stage {
            FlowStage::Editing => {
                // Text entry for the focused field takes priority over
                // command keys.
                if let KeyCode::Char(ch) = key_code {
                    match self.send.field {
                        SendField::Recipient => {
                            self.send.recipient.push(ch);
                            self.needs_redraw = true;
                            return Ok(true);
                        }
                        SendField::Amount => {
                            if ch == '*' {
                                self.send.set_max(&self.catalog);
                                self.needs_redraw = true;
                                return Ok(true);
                            }
                            if push_amount_char(&mut self.send.amount, ch) {
                                self.needs_redraw = true;
                                return Ok(true);
                            }
                        }
                        SendField::Asset => {}
                    }
                }
                match key_code {
                    // Quit only while no text field has focus.
                    KeyCode::Char('q') if self.send.field == SendField::Asset => {
                        return Ok(false);
                    }
                    KeyCode::Tab | KeyCode::Down => {
                        self.send.field = self.send.field.next();
                        self.needs_redraw = true;
                    }
                    KeyCode::BackTab | KeyCode::Up => {
                        self.send.field = self.send.field.previous();
                        self.needs_redraw = true;
                    }
                    KeyCode::Right if self.send.field == SendField::Asset => {
                        self.send.cycle_asset_next(&self.catalog);
                        self.needs_redraw = true;
                    }
                    KeyCode::Left if self.send.field == SendField::Asset => {
                        self.send.cycle_asset_previous(&self.catalog);
                        self.needs_redraw = true;
                    }
                    KeyCode::Backspace => {
                        match self.send.field {
                            SendField::Recipient => {
                                self.send.recipient.pop();
                            }
                            SendField::Amount => {
                                self.send.amount.pop();
                            }
                            SendField::Asset => {}
                        }
                        self.needs_redraw = true;
                    }
                    KeyCode::Enter => {
                        self.send.begin_review();
                        self.needs_redraw = true;
                    }
                    KeyCode::Esc => self.navigate(Screen::Dashboard),
                    _ => {}
                }
            }
            FlowStage::Reviewing => match key_code {
                KeyCode::Char('q') => return Ok(false),
                KeyCode::Enter => {
                    self.send.submit();
                    self.needs_redraw = true;
                }
                KeyCode::Esc | KeyCode::Backspace => {
                    self.send.back_to_edit();
                    self.needs_redraw = true;
                }
                _ => {}
            },
            FlowStage::Submitting => {} // Broadcast in flight; not cancellable
            FlowStage::Complete => match key_code {
                KeyCode::Char('q') => return Ok(false),
                KeyCode::Enter | KeyCode::Esc => {
                    self.send.reset();
                    self.navigate(Screen::Dashboard);
                }
                _ => {}
            },
        }
        Ok(true)
    }

    fn handle_swap_key(&mut self, key_code: KeyCode) -> Result<bool> {
        match self.swap.stage {
            FlowStage::Editing => {
                if let KeyCode::Char(ch) = key_code {
                    if self.swap.field == SwapField::FromAmount
                        && push_amount_char(&mut self.swap.from_amount, ch)
                    {
                        self.recompute_swap();
                        return Ok(true);
                    }
                }
                match key_code {
                    // Quit only while no text field has focus.
                    KeyCode::Char('q') if self.swap.field != SwapField::FromAmount => {
                        return Ok(false);
                    }
                    KeyCode::Char('x') => {
                        self.swap.swap_direction();
                        self.needs_redraw = true;
                    }
                    KeyCode::Char('m') => {
                        if let Err(e) = self.swap.set_max(&self.catalog) {
                            self.set_error(format!("Quote failed: {e}"));
                        }
                        self.needs_redraw = true;
                    }
                    KeyCode::Tab | KeyCode::Down => {
                        self.swap.field = self.swap.field.next();
                        self.needs_redraw = true;
                    }
                    KeyCode::BackTab | KeyCode::Up => {
                        self.swap.field = self.swap.field.previous();
                        self.needs_redraw = true;
                    }
                    KeyCode::Right | KeyCode::Left => {
                        let forward = key_code == KeyCode::Right;
                        let result = match self.swap.field {
                            SwapField::FromAsset => {
                                self.swap.cycle_from_asset(&self.catalog, forward)
                            }
                            SwapField::ToAsset => self.swap.cycle_to_asset(&self.catalog, forward),
                            SwapField::FromAmount => Ok(()),
                        };
                        if let Err(e) = result {
                            self.set_error(format!("Quote failed: {e}"));
                        }
                        self.needs_redraw = true;
                    }
                    KeyCode::Backspace => {
                        if self.swap.field == SwapField::FromAmount {
                            self.swap.from_amount.pop();
                            self.recompute_swap();
                        }
                    }
                    KeyCode::Enter => {
                        self.swap.begin_review();
                        self.needs_redraw = true;
                    }
                    KeyCode::Esc => self.navigate(Screen::Dashboard),
                    _ => {}
                }
            }
            FlowStage::Reviewing => match key_code {
                KeyCode::Char('q') => return Ok(false),
                KeyCode::Enter => {
                    self.swap.submit();
                    self.needs_redraw = true;
                }
                KeyCode::Esc | KeyCode::Backspace => {
                    self.swap.back_to_edit();
                    self.needs_redraw = true;
                }
                _ => {}
            },
            FlowStage::Submitting => {} // Execution in flight; not cancellable
            FlowStage::Complete => match key_code {
                KeyCode::Char('q') => return Ok(false),
                KeyCode::Enter | KeyCode::Esc => {
                    self.swap.reset();
                    self.navigate(Screen::Dashboard);
                }
                _ => {}
            },
        }
        Ok(true)
    }

    fn recompute_swap(&mut self) {
        if let Err(e) = self.swap.recompute(&self.catalog) {
            self.set_error(format!("Quote failed: {e}"));
        }
        self.needs_redraw = true;
    }

    fn handle_deposit_key(&mut self, key_code: KeyCode) -> Result<bool> {
        match key_code {
            KeyCode::Char('q') => return Ok(false),
            KeyCode::Right | KeyCode::Down => {
                self.deposit.cycle_asset_next(&self.catalog);
                self.needs_redraw = true;
            }
            KeyCode::Left | KeyCode::Up => {
                self.deposit.cycle_asset_previous(&self.catalog);
                self.needs_redraw = true;
            }
            KeyCode::Char('c') => {
                self.deposit.copy_address();
                self.needs_redraw = true;
            }
            KeyCode::Esc => self.navigate(Screen::Dashboard),
            _ => {}
        }
        Ok(true)
    }

    fn handle_settings_key(&mut self, key_code: KeyCode) -> Result<bool> {
        if let KeyCode::Char(ch) = key_code {
            if self.settings.field == SettingsField::Nisab
                && push_amount_char(&mut self.settings.nisab_input, ch)
            {
                self.needs_redraw = true;
                return Ok(true);
            }
        }
        match key_code {
            // Quit only while the nisab field is not taking digits.
            KeyCode::Char('q') if self.settings.field != SettingsField::Nisab => {
                return Ok(false);
            }
            KeyCode::Down | KeyCode::Tab => {
                self.settings.field = self.settings.field.next();
                self.needs_redraw = true;
            }
            KeyCode::Up | KeyCode::BackTab => {
                self.settings.field = self.settings.field.previous();
                self.needs_redraw = true;
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.settings.toggle_focused();
                self.needs_redraw = true;
            }
            KeyCode::Right if self.settings.field == SettingsField::Currency => {
                self.settings.currency = self.settings.currency.next();
                self.needs_redraw = true;
            }
            KeyCode::Left if self.settings.field == SettingsField::Currency => {
                self.settings.currency = self.settings.currency.previous();
                self.needs_redraw = true;
            }
            KeyCode::Backspace => {
                if self.settings.field == SettingsField::Nisab {
                    self.settings.nisab_input.pop();
                    self.needs_redraw = true;
                }
            }
            KeyCode::Esc => self.navigate(Screen::Dashboard),
            _ => {}
        }
        Ok(true)
    }

    fn handle_assistant_key(&mut self, key_code: KeyCode) -> Result<bool> {
        match key_code {
            KeyCode::Char(ch) => {
                self.chat.input.push(ch);
                self.needs_redraw = true;
            }
            KeyCode::Backspace => {
                self.chat.input.pop();
                self.needs_redraw = true;
            }
            KeyCode::Down => {
                self.chat.select_next_action();
                self.needs_redraw = true;
            }
            KeyCode::Up => {
                self.chat.select_previous_action();
                self.needs_redraw = true;
            }
            KeyCode::Enter => {
                if self.chat.input.trim().is_empty() {
                    let action = self.chat.selected();
                    let nisab = self.settings.nisab_usd();
                    self.chat.run_action(action, &self.catalog, nisab);
                } else {
                    self.chat.send_input();
                }
                self.needs_redraw = true;
            }
            KeyCode::Esc => self.navigate(Screen::Dashboard),
            _ => {}
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;

    fn app() -> App {
        App::new(&Cli::parse_from(["sidex-wallet", "--unlocked"])).unwrap()
    }

    #[test]
    fn amount_field_rejects_non_numeric_input() {
        let mut buf = String::new();
        assert!(push_amount_char(&mut buf, '1'));
        assert!(push_amount_char(&mut buf, '.'));
        assert!(!push_amount_char(&mut buf, '.'));
        assert!(!push_amount_char(&mut buf, 'x'));
        assert_eq!(buf, "1.");
    }

    #[test]
    fn dashboard_shortcuts_navigate() {
        let mut app = app();
        app.handle_key_input(KeyCode::Char('w')).unwrap();
        assert_eq!(app.screen, Screen::Swap);
        app.handle_key_input(KeyCode::Esc).unwrap();
        assert_eq!(app.screen, Screen::Dashboard);
        app.handle_key_input(KeyCode::Char('a')).unwrap();
        assert_eq!(app.screen, Screen::Assistant);
    }

    #[test]
    fn typing_a_swap_amount_updates_the_quote() {
        let mut app = app();
        app.navigate(Screen::Swap);
        app.handle_key_input(KeyCode::Tab).unwrap(); // focus FromAmount
        for ch in "1000".chars() {
            app.handle_key_input(KeyCode::Char(ch)).unwrap();
        }
        assert_eq!(app.swap.from_amount, "1000");
        assert_eq!(app.swap.to_amount, "4.066667");

        // Deleting every digit blanks the receive field.
        for _ in 0..4 {
            app.handle_key_input(KeyCode::Backspace).unwrap();
        }
        assert_eq!(app.swap.to_amount, "");
    }

    #[test]
    fn quit_is_ignored_while_typing_a_recipient() {
        let mut app = app();
        app.navigate(Screen::Send);
        app.handle_key_input(KeyCode::Tab).unwrap(); // focus Recipient
        let keep_running = app.handle_key_input(KeyCode::Char('q')).unwrap();
        assert!(keep_running);
        assert_eq!(app.send.recipient, "q");
    }

    #[test]
    fn quit_is_ignored_while_an_amount_field_is_focused() {
        let mut app = app();

        app.navigate(Screen::Send);
        app.handle_key_input(KeyCode::Tab).unwrap(); // Recipient
        app.handle_key_input(KeyCode::Tab).unwrap(); // Amount
        assert!(app.handle_key_input(KeyCode::Char('q')).unwrap());
        assert_eq!(app.send.amount, "");

        app.navigate(Screen::Swap);
        app.handle_key_input(KeyCode::Tab).unwrap(); // FromAmount
        assert!(app.handle_key_input(KeyCode::Char('q')).unwrap());

        app.navigate(Screen::Settings);
        for _ in 0..3 {
            app.handle_key_input(KeyCode::Down).unwrap();
        }
        assert_eq!(app.settings.field, SettingsField::Nisab);
        assert!(app.handle_key_input(KeyCode::Char('q')).unwrap());
    }

    #[test]
    fn send_flow_via_keys() {
        let mut app = app();
        app.navigate(Screen::Send);
        app.handle_key_input(KeyCode::Tab).unwrap();
        for ch in "0x3f2a".chars() {
            app.handle_key_input(KeyCode::Char(ch)).unwrap();
        }
        app.handle_key_input(KeyCode::Tab).unwrap();
        for ch in "50".chars() {
            app.handle_key_input(KeyCode::Char(ch)).unwrap();
        }
        app.handle_key_input(KeyCode::Enter).unwrap();
        assert_eq!(app.send.stage, FlowStage::Reviewing);
        app.handle_key_input(KeyCode::Enter).unwrap();
        assert_eq!(app.send.stage, FlowStage::Submitting);
        // No cancel path once submitted.
        app.handle_key_input(KeyCode::Esc).unwrap();
        assert_eq!(app.send.stage, FlowStage::Submitting);
    }

    #[test]
    fn error_overlay_swallows_next_key() {
        let mut app = app();
        app.set_error("boom");
        app.handle_key_input(KeyCode::Char('w')).unwrap();
        assert_eq!(app.screen, Screen::Dashboard);
        assert!(app.error_message.is_some());
        app.handle_key_input(KeyCode::Enter).unwrap();
        assert!(app.error_message.is_none());
    }
}
