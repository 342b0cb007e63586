// App module structure for better organization

pub mod types;
pub mod core;
pub mod input;
pub mod send;
pub mod swap;
pub mod forms;

// Re-export the main App struct and key types
pub use self::core::App;
pub use forms::{ChatState, Currency, DepositForm, LoginForm, SettingsForm};
pub use send::SendForm;
pub use swap::SwapForm;
pub use types::{FlowStage, Screen, SendField, SettingsField, SwapField};
