// Redeem mSEND with a Cetus flash swap paying the SUI penalty
//
// The pool lends SUI for the penalty, redemption yields SEND, and part of
// that SEND repays the swap. The SEND left over goes to the sender.

use msend_bindings::calls::{balance, coin};
use msend_bindings::mtoken_functions::{self, MTokenTypeArgs, RedeemMtokensArgs};
use msend_bindings::{Argument, ObjectInput, ProgrammableTransactionBuilder};
use msend_math::closest_sqrt_price;
use msend_types::{ObjectId, SuiAddress, SUI_CLOCK_OBJECT_ID};
use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use tracing::info;

use crate::cetus::{Cetus, FlashSwapArgs};
use crate::error::{Result, ScriptError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlashLoanArgs {
    pub pool: ObjectId,
    /// SUI to borrow, equal to the redemption penalty
    pub sui_penalty_amount: u64,
    /// Lowest acceptable SUI per SEND
    pub min_price: Decimal,
    pub source_msend_coin: ObjectId,
    pub burn_amount: u64,
    pub mtoken_manager: ObjectId,
    pub tick_spacing: i32,
    pub send_decimals: u8,
    pub sui_decimals: u8,
}

/// `type_args` is `(mSEND, SEND, SUI)`. Returns the redeemed SEND coin,
/// already transferred to `sender`.
pub fn flash_loan_redeem(
    ptb: &mut ProgrammableTransactionBuilder,
    sender: SuiAddress,
    cetus: &Cetus,
    mtoken_package: ObjectId,
    type_args: &MTokenTypeArgs,
    args: FlashLoanArgs,
) -> Result<Argument> {
    let [_, send_type, sui_type] = type_args.clone();
    let pair = [send_type.clone(), sui_type.clone()];

    let source = ptb.object(args.source_msend_coin)?;
    let burn = ptb.pure(&args.burn_amount)?;
    let [msend_to_burn] = ptb.split_coins_into(source, [burn])?;

    let limit = closest_sqrt_price(
        args.min_price,
        args.send_decimals,
        args.sui_decimals,
        args.tick_spacing,
    )?;
    let sqrt_price_limit = limit
        .to_u128()
        .ok_or_else(|| ScriptError::SqrtPriceTooLarge(limit.to_string()))?;
    info!(min_price = %args.min_price, sqrt_price_limit, "flash swap price limit");

    // a2b: borrow SUI now, pay SEND later. Not by amount in: the SUI out is fixed.
    let [send_balance, sui_balance, receipt] = cetus.flash_swap(
        ptb,
        &pair,
        FlashSwapArgs {
            pool: args.pool.into(),
            a2b: true,
            by_amount_in: false,
            amount: args.sui_penalty_amount,
            sqrt_price_limit,
        },
    )?;

    let penalty_coin = coin::from_balance(ptb, sui_type.clone(), sui_balance)?;
    let redeemed = mtoken_functions::redeem_mtokens(
        ptb,
        mtoken_package,
        type_args,
        RedeemMtokensArgs {
            manager: args.mtoken_manager.into(),
            mtoken_coin: msend_to_burn.into(),
            penalty_coin: penalty_coin.into(),
            clock: ObjectInput::Id(SUI_CLOCK_OBJECT_ID),
        },
    )?;

    let pay_amount = cetus.swap_pay_amount(ptb, &pair, receipt)?;
    let [send_to_pay] = ptb.split_coins_into(redeemed, [pay_amount])?;
    let pay_balance = coin::into_balance(ptb, send_type.clone(), send_to_pay)?;
    balance::join(ptb, send_type, send_balance, pay_balance)?;
    let empty_sui = balance::zero(ptb, sui_type)?;

    cetus.repay_flash_swap(ptb, &pair, args.pool.into(), send_balance, empty_sui, receipt)?;

    let recipient = ptb.pure(&sender)?;
    ptb.transfer_objects(vec![redeemed], recipient)?;
    Ok(redeemed)
}
