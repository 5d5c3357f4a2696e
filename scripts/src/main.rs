use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use msend_bindings::StructRegistry;
use msend_client::SuiRpcClient;
use msend_keys::SuiKeypair;
use msend_math::{closest_sqrt_price, closest_tick};
use msend_scripts::{build_plan, execute, simulate, Config, Network, Script};
use msend_types::{ObjectId, SuiAddress};
use rust_decimal::Decimal;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "msend", version, about = "mSEND minting, redemption and pool setup")]
struct Cli {
    /// Deployment config (TOML)
    #[arg(long, short, global = true, default_value = "msend.toml", value_name = "PATH")]
    config: PathBuf,

    /// Overrides the config's network
    #[arg(long, global = true, value_enum)]
    network: Option<Network>,

    /// Overrides the network's default full node
    #[arg(long, global = true)]
    rpc_url: Option<String>,

    /// Environment variable holding the `suiprivkey1...` wallet key
    #[arg(long, global = true, default_value = "WALLET_KEY")]
    key_env: String,

    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Tick-aligned tick index for a price
    ClosestTick(PriceArgs),
    /// Q64.64 sqrt price of the tick-aligned tick for a price
    ClosestSqrtPrice(PriceArgs),
    /// Address of the wallet key
    Address,
    /// Print a script's transaction commands as JSON
    Plan {
        #[arg(value_enum)]
        script: Script,
        /// Sender; defaults to the wallet key's address
        #[arg(long)]
        sender: Option<SuiAddress>,
    },
    /// Dev-inspect a script's transaction and print the results
    Simulate {
        #[arg(value_enum)]
        script: Script,
        /// Sender; defaults to the wallet key's address
        #[arg(long)]
        sender: Option<SuiAddress>,
    },
    /// Sign and execute a script's transaction with the wallet key
    Execute {
        #[arg(value_enum)]
        script: Script,
        /// Gas budget in MIST; defaults to the simulated cost
        #[arg(long)]
        gas_budget: Option<u64>,
    },
    /// Fetch an object and print it decoded
    Fetch { object_id: ObjectId },
}

#[derive(Debug, Args)]
struct PriceArgs {
    /// Token B per token A
    #[arg(long)]
    price: Decimal,
    #[arg(long)]
    decimals_a: u8,
    #[arg(long)]
    decimals_b: u8,
    #[arg(long, allow_negative_numbers = true)]
    tick_spacing: i32,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::from_file(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    if let Some(network) = cli.network {
        config.network = network;
    }
    if let Some(url) = &cli.rpc_url {
        config.rpc_url = Some(url.clone());
    }
    Ok(config)
}

fn keypair(cli: &Cli) -> Result<SuiKeypair> {
    SuiKeypair::from_env(&cli.key_env).with_context(|| format!("loading wallet key from ${}", cli.key_env))
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Command::ClosestTick(args) => {
            let tick = closest_tick(args.price, args.decimals_a, args.decimals_b, args.tick_spacing)?;
            println!("{}", tick);
        }
        Command::ClosestSqrtPrice(args) => {
            let sqrt_price =
                closest_sqrt_price(args.price, args.decimals_a, args.decimals_b, args.tick_spacing)?;
            println!("{}", sqrt_price);
        }
        Command::Address => {
            println!("{}", keypair(&cli)?.address());
        }
        Command::Plan { script, sender } => {
            let config = load_config(&cli)?;
            let sender = match sender {
                Some(sender) => *sender,
                None => keypair(&cli)?.address(),
            };
            debug!(%sender, ?script, "planning");
            let tx = build_plan(&config, *script, sender)
                .with_context(|| format!("building {:?}", script))?;
            println!("{}", serde_json::to_string_pretty(&tx)?);
        }
        Command::Simulate { script, sender } => {
            let config = load_config(&cli)?;
            let sender = match sender {
                Some(sender) => *sender,
                None => keypair(&cli)?.address(),
            };
            let tx = build_plan(&config, *script, sender)
                .with_context(|| format!("building {:?}", script))?;
            let client = SuiRpcClient::new(config.rpc_url())?;
            let simulation = simulate(&client, &tx, sender)
                .await
                .with_context(|| format!("simulating {:?}", script))?;
            println!("{}", serde_json::to_string_pretty(&simulation.results)?);
        }
        Command::Execute { script, gas_budget } => {
            let config = load_config(&cli)?;
            let keypair = keypair(&cli)?;
            let tx = build_plan(&config, *script, keypair.address())
                .with_context(|| format!("building {:?}", script))?;
            let client = SuiRpcClient::new(config.rpc_url())?;
            let response = execute(&client, &tx, &keypair, *gas_budget)
                .await
                .with_context(|| format!("executing {:?}", script))?;
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        Command::Fetch { object_id } => {
            let config = load_config(&cli)?;
            let client = SuiRpcClient::new(config.rpc_url())?;
            let registry = StructRegistry::with_mtoken(config.packages.mtoken);
            let decoded = client
                .fetch_any(&registry, *object_id)
                .await
                .with_context(|| format!("fetching {}", object_id))?;
            println!("{}", serde_json::to_string_pretty(&decoded.to_json()?)?);
        }
    }
    Ok(())
}
