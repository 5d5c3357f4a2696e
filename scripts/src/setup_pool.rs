// Test pool bootstrap: mint both coins, register the fee tier and open a
// SEND/SUI pool with an initial position.

use msend_bindings::calls::coin;
use msend_bindings::{Argument, ProgrammableTransactionBuilder};
use msend_math::get_sqrt_price_at_tick;
use msend_types::{ObjectId, SuiAddress};
use tracing::info;

use crate::cetus::{Cetus, CreatePoolArgs, PairTypeArgs};
use crate::config::PoolSetup;
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestCoins {
    pub send_treasury_cap: ObjectId,
    pub sui_treasury_cap: ObjectId,
}

/// `type_args` is `(SEND, SUI)`. Returns the position, sent to `sender`
/// along with the leftover coins.
pub fn setup_pool(
    ptb: &mut ProgrammableTransactionBuilder,
    sender: SuiAddress,
    cetus: &Cetus,
    pools_registry: ObjectId,
    type_args: &PairTypeArgs,
    coins: TestCoins,
    pool: &PoolSetup,
) -> Result<Argument> {
    let [send_type, sui_type] = type_args.clone();
    let sui_coin = coin::mint(ptb, sui_type, coins.sui_treasury_cap, pool.sui_liquidity)?;
    let send_coin = coin::mint(ptb, send_type, coins.send_treasury_cap, pool.send_liquidity)?;

    cetus.add_fee_tier(ptb, pool.tick_spacing, pool.fee_rate)?;

    let initial_sqrt_price = get_sqrt_price_at_tick(pool.initial_tick)?;
    info!(
        initial_tick = pool.initial_tick,
        initial_sqrt_price,
        tick_spacing = pool.tick_spacing,
        "creating pool"
    );
    let [position, send_left, sui_left] = cetus.create_pool_with_liquidity(
        ptb,
        type_args,
        CreatePoolArgs {
            pools_registry: pools_registry.into(),
            tick_spacing: pool.tick_spacing,
            initial_sqrt_price,
            url: pool.url.clone(),
            lower_tick: pool.lower_tick,
            upper_tick: pool.upper_tick,
            coin_a: send_coin.into(),
            coin_b: sui_coin.into(),
            amount_a: pool.send_liquidity,
            amount_b: pool.sui_liquidity,
            fix_amount_a: true,
        },
    )?;

    let recipient = ptb.pure(&sender)?;
    ptb.transfer_objects(vec![position, send_left, sui_left], recipient)?;
    Ok(position)
}
