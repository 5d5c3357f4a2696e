// Script selection: build a script's command list from the config

use msend_bindings::mtoken_functions::MintMtokensArgs;
use msend_bindings::{ProgrammableTransaction, ProgrammableTransactionBuilder};
use msend_types::SuiAddress;
use tracing::info;

use crate::cetus::Cetus;
use crate::config::{required, Config};
use crate::error::Result;
use crate::flash_loan::FlashLoanArgs;
use crate::setup_pool::TestCoins;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Script {
    CreateManagers,
    MintMtokens,
    FlashLoan,
    SetupPool,
}

fn cetus(config: &Config) -> Result<Cetus> {
    Ok(Cetus {
        package: required(config.packages.cetus, "packages.cetus")?,
        global_config: required(config.objects.cetus_global_config, "objects.cetus_global_config")?,
    })
}

/// Lay out `script` for `sender`.
///
/// # Errors
/// - [`crate::ConfigError`] if the config is invalid or lacks an object the
///   script needs
/// - math and binding errors from building the commands
pub fn build_plan(config: &Config, script: Script, sender: SuiAddress) -> Result<ProgrammableTransaction> {
    config.validate()?;
    let types = &config.types;
    let mut ptb = ProgrammableTransactionBuilder::new();

    match script {
        Script::CreateManagers => {
            crate::create_managers(
                &mut ptb,
                sender,
                config.packages.claim,
                &types.msend,
                config.points,
                config.capsules,
            )?;
        }
        Script::MintMtokens => {
            let vesting = config.vesting;
            let args = MintMtokensArgs {
                treasury_cap: required(config.objects.msend_treasury_cap, "objects.msend_treasury_cap")?
                    .into(),
                vesting_coin: required(config.objects.send_coin, "objects.send_coin")?.into(),
                start_penalty_numerator: vesting.start_penalty_numerator,
                end_penalty_numerator: vesting.end_penalty_numerator,
                penalty_denominator: vesting.penalty_denominator,
                start_time_s: vesting.start_time_s,
                end_time_s: vesting.end_time_s,
            };
            let type_args = [types.msend.clone(), types.send.clone(), types.sui.clone()];
            crate::mint_mtokens(&mut ptb, sender, config.packages.mtoken, &type_args, args)?;
        }
        Script::FlashLoan => {
            let flash = &config.flash_loan;
            let args = FlashLoanArgs {
                pool: required(config.objects.cetus_pool, "objects.cetus_pool")?,
                sui_penalty_amount: flash.sui_penalty_amount,
                min_price: flash.min_price,
                source_msend_coin: required(flash.source_msend_coin, "flash_loan.source_msend_coin")?,
                burn_amount: flash.burn_amount,
                mtoken_manager: required(config.objects.mtoken_manager, "objects.mtoken_manager")?,
                // validate() bounds the spacing to the i32 range
                tick_spacing: config.pool.tick_spacing as i32,
                send_decimals: config.tokens.send_decimals,
                sui_decimals: config.tokens.sui_decimals,
            };
            let type_args = [types.msend.clone(), types.send.clone(), types.sui.clone()];
            crate::flash_loan_redeem(
                &mut ptb,
                sender,
                &cetus(config)?,
                config.packages.mtoken,
                &type_args,
                args,
            )?;
        }
        Script::SetupPool => {
            let coins = TestCoins {
                send_treasury_cap: required(config.objects.send_treasury_cap, "objects.send_treasury_cap")?,
                sui_treasury_cap: required(config.objects.sui_treasury_cap, "objects.sui_treasury_cap")?,
            };
            let pools_registry =
                required(config.objects.cetus_pools_registry, "objects.cetus_pools_registry")?;
            let type_args = [types.send.clone(), types.sui.clone()];
            crate::setup_pool(
                &mut ptb,
                sender,
                &cetus(config)?,
                pools_registry,
                &type_args,
                coins,
                &config.pool,
            )?;
        }
    }

    let tx = ptb.finish();
    info!(?script, inputs = tx.inputs.len(), commands = tx.commands.len(), "built transaction");
    Ok(tx)
}
