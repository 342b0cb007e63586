use clap::Parser;
use std::path::PathBuf;

use crate::config::DEFAULT_NISAB_USD;

#[derive(Parser)]
#[command(name = "sidex-wallet")]
#[command(about = "Sharia-compliant wallet terminal (mock data, no chain access)")]
pub struct Cli {
    /// Path to a JSON asset catalog overriding the built-in table
    #[arg(short, long)]
    pub catalog: Option<PathBuf>,

    /// Skip the recovery-phrase screen and open the dashboard directly
    #[arg(long)]
    pub unlocked: bool,

    /// Nisab threshold in USD used for Zakat estimates
    #[arg(long, default_value_t = DEFAULT_NISAB_USD)]
    pub nisab: f64,
}
