// msend scripts package
//
// Transaction layouts for the mtoken deployment and the Cetus flash-swap
// redemption, plus simulating and executing them on a full node.

pub mod cetus;
pub mod config;
pub mod create_managers;
pub mod error;
pub mod flash_loan;
pub mod mint_mtokens;
pub mod plan;
pub mod setup_pool;
pub mod submit;

pub use cetus::{Cetus, CreatePoolArgs, FlashSwapArgs, PairTypeArgs};
pub use config::{Config, Network};
pub use create_managers::create_managers;
pub use error::{ConfigError, Result, ScriptError};
pub use flash_loan::{flash_loan_redeem, FlashLoanArgs};
pub use mint_mtokens::mint_mtokens;
pub use plan::{build_plan, Script};
pub use setup_pool::{setup_pool, TestCoins};
pub use submit::{ensure_executed, ensure_success, execute, sign, simulate, Simulation, SignedTransaction};
