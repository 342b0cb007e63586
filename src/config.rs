// Configuration constants for the application

/// Update intervals (in milliseconds)
pub const TICK_RATE_MS: u64 = 50;
pub const UPDATE_RATE_MS: u64 = 100;
pub const UI_UPDATE_RATE_MS: u64 = 1000;

/// Simulated latency. Every submission resolves to success after these
/// delays; there is no failure or retry path.
pub const SUBMIT_DELAY_MS: u64 = 2000;
pub const CHAT_REPLY_DELAY_MS: u64 = 1500;
pub const LOGIN_DELAY_MS: u64 = 500;
pub const COPIED_BADGE_MS: u64 = 2000;
pub const STATUS_MESSAGE_MS: u64 = 3000;

/// Quote display settings
pub const OUTPUT_DECIMALS: usize = 6;

/// Fee display values. Shown on review and completion screens but never
/// subtracted from the computed receive amount.
pub const SWAP_FEE_LABEL: &str = "0.3%";
pub const SWAP_FEE_USD_LABEL: &str = "$3.66";
pub const SEND_FEE_SDA: f64 = 0.0025;
pub const SEND_FEE_USD_LABEL: &str = "$3.05";

/// Zakat settings
pub const DEFAULT_NISAB_USD: f64 = 5000.0;
pub const ZAKAT_RATE: f64 = 0.025;

/// Mock receive address shown on the deposit screen
pub const WALLET_ADDRESS: &str = "0x742d35Cc6634C0532925a3b844Bc9e7595f3a8f";

/// Deposit screen notes
pub const MIN_DEPOSIT: f64 = 0.01;
pub const DEPOSIT_CONFIRMATIONS: u32 = 12;
