//! Type definitions for the application

/// Screens the host navigation can land on. Login sits outside the nav
/// cycle; everything else appears in the tab bar.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    #[default]
    Dashboard,
    Send,
    Swap,
    Deposit,
    Settings,
    Assistant,
}

impl Screen {
    pub const NAV: [Self; 6] = [
        Self::Dashboard,
        Self::Send,
        Self::Swap,
        Self::Deposit,
        Self::Settings,
        Self::Assistant,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Dashboard => "Dashboard",
            Self::Send => "Send",
            Self::Swap => "Swap",
            Self::Deposit => "Deposit",
            Self::Settings => "Settings",
            Self::Assistant => "Assistant",
        }
    }

    /// Get the next nav screen, wrapping around. Login stays put.
    pub fn next(self) -> Self {
        match Self::NAV.iter().position(|s| *s == self) {
            Some(i) => Self::NAV[(i + 1) % Self::NAV.len()],
            None => self,
        }
    }

    /// Get the previous nav screen, wrapping around. Login stays put.
    pub fn previous(self) -> Self {
        match Self::NAV.iter().position(|s| *s == self) {
            Some(i) => Self::NAV[(i + Self::NAV.len() - 1) % Self::NAV.len()],
            None => self,
        }
    }
}

/// Stages of the send and swap flows. Strictly forward once a submission
/// starts: Submitting always resolves to Complete, and Complete only exits
/// back to the dashboard via a reset.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FlowStage {
    #[default]
    Editing,
    Reviewing,
    Submitting,
    Complete,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SendField {
    #[default]
    Asset,
    Recipient,
    Amount,
}

impl SendField {
    pub fn next(self) -> Self {
        match self {
            Self::Asset => Self::Recipient,
            Self::Recipient => Self::Amount,
            Self::Amount => Self::Asset,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Self::Asset => Self::Amount,
            Self::Recipient => Self::Asset,
            Self::Amount => Self::Recipient,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SwapField {
    #[default]
    FromAsset,
    FromAmount,
    ToAsset,
}

impl SwapField {
    pub fn next(self) -> Self {
        match self {
            Self::FromAsset => Self::FromAmount,
            Self::FromAmount => Self::ToAsset,
            Self::ToAsset => Self::FromAsset,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Self::FromAsset => Self::ToAsset,
            Self::FromAmount => Self::FromAsset,
            Self::ToAsset => Self::FromAmount,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SettingsField {
    #[default]
    Notifications,
    Biometrics,
    ZakatReminders,
    Nisab,
    Currency,
}

impl SettingsField {
    pub fn next(self) -> Self {
        match self {
            Self::Notifications => Self::Biometrics,
            Self::Biometrics => Self::ZakatReminders,
            Self::ZakatReminders => Self::Nisab,
            Self::Nisab => Self::Currency,
            Self::Currency => Self::Notifications,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Self::Notifications => Self::Currency,
            Self::Biometrics => Self::Notifications,
            Self::ZakatReminders => Self::Biometrics,
            Self::Nisab => Self::ZakatReminders,
            Self::Currency => Self::Nisab,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_cycle_wraps_and_skips_login() {
        assert_eq!(Screen::Assistant.next(), Screen::Dashboard);
        assert_eq!(Screen::Dashboard.previous(), Screen::Assistant);
        assert_eq!(Screen::Login.next(), Screen::Login);
    }

    #[test]
    fn field_cycles_cover_all_variants() {
        let mut field = SendField::Asset;
        for _ in 0..3 {
            field = field.next();
        }
        assert_eq!(field, SendField::Asset);
        assert_eq!(SwapField::FromAsset.previous(), SwapField::ToAsset);
    }
}
