// Deployment configuration
//
// One TOML file names the network, the published packages, the coin types
// and the objects each script touches. Script parameters default to the
// values the mainnet deployment was created with.

use std::path::Path;

use msend_types::{ObjectId, TypeTag};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    #[default]
    Mainnet,
    Testnet,
    Devnet,
    Localnet,
}

impl Network {
    pub fn rpc_url(&self) -> &'static str {
        match self {
            Network::Mainnet => "https://fullnode.mainnet.sui.io:443",
            Network::Testnet => "https://fullnode.testnet.sui.io:443",
            Network::Devnet => "https://fullnode.devnet.sui.io:443",
            Network::Localnet => "http://127.0.0.1:9000",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub network: Network,
    #[serde(default)]
    pub rpc_url: Option<String>,
    pub packages: Packages,
    pub types: CoinTypes,
    #[serde(default)]
    pub tokens: Tokens,
    #[serde(default)]
    pub objects: Objects,
    #[serde(default)]
    pub vesting: Vesting,
    #[serde(default)]
    pub points: Points,
    #[serde(default)]
    pub capsules: Capsules,
    #[serde(default)]
    pub pool: PoolSetup,
    #[serde(default)]
    pub flash_loan: FlashLoan,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Packages {
    pub mtoken: ObjectId,
    pub claim: ObjectId,
    #[serde(default)]
    pub cetus: Option<ObjectId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinTypes {
    pub msend: TypeTag,
    pub send: TypeTag,
    pub sui: TypeTag,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tokens {
    pub send_decimals: u8,
    pub sui_decimals: u8,
}

impl Default for Tokens {
    fn default() -> Self {
        Self {
            send_decimals: 6,
            sui_decimals: 9,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Objects {
    pub msend_treasury_cap: Option<ObjectId>,
    pub send_coin: Option<ObjectId>,
    pub mtoken_manager: Option<ObjectId>,
    pub cetus_global_config: Option<ObjectId>,
    pub cetus_pools_registry: Option<ObjectId>,
    pub cetus_pool: Option<ObjectId>,
    pub send_treasury_cap: Option<ObjectId>,
    pub sui_treasury_cap: Option<ObjectId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vesting {
    pub start_penalty_numerator: u64,
    pub end_penalty_numerator: u64,
    pub penalty_denominator: u64,
    pub start_time_s: u64,
    pub end_time_s: u64,
}

impl Default for Vesting {
    fn default() -> Self {
        Self {
            start_penalty_numerator: 10,
            end_penalty_numerator: 1,
            penalty_denominator: 100_000,
            start_time_s: 1733311191,
            end_time_s: 1734002391,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Points {
    pub ratio_numerator: u64,
    pub ratio_denominator: u64,
}

impl Default for Points {
    fn default() -> Self {
        Self {
            ratio_numerator: 1,
            ratio_denominator: 100,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Capsules {
    pub common_amount: u64,
    pub uncommon_amount: u64,
    pub rare_amount: u64,
}

impl Default for Capsules {
    fn default() -> Self {
        Self {
            common_amount: 10_000_000,
            uncommon_amount: 100_000_000,
            rare_amount: 1_000_000_000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolSetup {
    pub tick_spacing: u32,
    pub fee_rate: u64,
    pub initial_tick: i32,
    pub lower_tick: i32,
    pub upper_tick: i32,
    pub send_liquidity: u64,
    pub sui_liquidity: u64,
    pub url: String,
}

impl Default for PoolSetup {
    fn default() -> Self {
        Self {
            tick_spacing: 200,
            fee_rate: 10_000,
            initial_tick: 46_000,
            lower_tick: 39_000,
            upper_tick: 69_000,
            send_liquidity: 20_000_000_000 * 1_000_000,
            sui_liquidity: 859_622_001_237_312_227,
            url: "hello test".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlashLoan {
    pub sui_penalty_amount: u64,
    pub min_price: Decimal,
    pub source_msend_coin: Option<ObjectId>,
    pub burn_amount: u64,
}

impl Default for FlashLoan {
    fn default() -> Self {
        Self {
            sui_penalty_amount: 100,
            min_price: Decimal::new(1, 2),
            source_msend_coin: None,
            burn_amount: 1_000_000,
        }
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = content.parse()?;
        debug!(path = %path.display(), network = ?config.network, "loaded config");
        Ok(config)
    }

    /// RPC endpoint: the explicit `rpc_url` if set, otherwise the network's.
    pub fn rpc_url(&self) -> &str {
        self.rpc_url
            .as_deref()
            .unwrap_or_else(|| self.network.rpc_url())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tokens.send_decimals > 18 || self.tokens.sui_decimals > 18 {
            return Err(ConfigError::Invalid {
                field: "tokens",
                reason: "decimals must be 0..=18".to_string(),
            });
        }
        if self.vesting.penalty_denominator == 0 {
            return Err(ConfigError::Invalid {
                field: "vesting.penalty_denominator",
                reason: "must be positive".to_string(),
            });
        }
        if self.vesting.start_penalty_numerator > self.vesting.penalty_denominator
            || self.vesting.end_penalty_numerator > self.vesting.penalty_denominator
        {
            return Err(ConfigError::Invalid {
                field: "vesting",
                reason: "penalty numerators must not exceed the denominator".to_string(),
            });
        }
        if self.vesting.end_time_s < self.vesting.start_time_s {
            return Err(ConfigError::Invalid {
                field: "vesting.end_time_s",
                reason: "must not precede start_time_s".to_string(),
            });
        }
        if self.points.ratio_denominator == 0 {
            return Err(ConfigError::Invalid {
                field: "points.ratio_denominator",
                reason: "must be positive".to_string(),
            });
        }
        if self.pool.tick_spacing == 0 || self.pool.tick_spacing > i32::MAX as u32 {
            return Err(ConfigError::Invalid {
                field: "pool.tick_spacing",
                reason: format!("{} is not a valid tick spacing", self.pool.tick_spacing),
            });
        }
        if self.pool.lower_tick >= self.pool.upper_tick {
            return Err(ConfigError::Invalid {
                field: "pool.lower_tick",
                reason: "must be below upper_tick".to_string(),
            });
        }
        if self.flash_loan.min_price <= Decimal::ZERO {
            return Err(ConfigError::Invalid {
                field: "flash_loan.min_price",
                reason: "must be positive".to_string(),
            });
        }
        Ok(())
    }
}

impl std::str::FromStr for Config {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

/// Unwrap an optional config value a script needs.
pub fn required<T: Copy>(value: Option<T>, name: &'static str) -> Result<T, ConfigError> {
    value.ok_or(ConfigError::Missing(name))
}
