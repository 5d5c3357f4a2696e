// Cetus CLMM entry points
//
// Ticks travel as u32 holding the two's complement of the i32 index, the
// way the Cetus `i32` module stores them.

use msend_bindings::{Argument, ObjectInput, ProgrammableTransactionBuilder, Result};
use msend_types::{ObjectId, TypeTag, SUI_CLOCK_OBJECT_ID};

/// The Cetus package and its shared global config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cetus {
    pub package: ObjectId,
    pub global_config: ObjectId,
}

/// `[CoinA, CoinB]`
pub type PairTypeArgs = [TypeTag; 2];

pub fn tick_to_u32(tick: i32) -> u32 {
    tick as u32
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlashSwapArgs {
    pub pool: ObjectInput,
    pub a2b: bool,
    pub by_amount_in: bool,
    pub amount: u64,
    pub sqrt_price_limit: u128,
}

impl Cetus {
    /// `pool::flash_swap`, returning `(Balance<A>, Balance<B>, FlashSwapReceipt)`.
    pub fn flash_swap(
        &self,
        ptb: &mut ProgrammableTransactionBuilder,
        type_args: &PairTypeArgs,
        args: FlashSwapArgs,
    ) -> Result<[Argument; 3]> {
        let arguments = vec![
            ptb.object(self.global_config)?,
            ptb.obj(args.pool)?,
            ptb.pure(&args.a2b)?,
            ptb.pure(&args.by_amount_in)?,
            ptb.pure(&args.amount)?,
            ptb.pure(&args.sqrt_price_limit)?,
            ptb.object(SUI_CLOCK_OBJECT_ID)?,
        ];
        ptb.move_call_results(self.package, "pool", "flash_swap", type_args.to_vec(), arguments)
    }

    pub fn swap_pay_amount(
        &self,
        ptb: &mut ProgrammableTransactionBuilder,
        type_args: &PairTypeArgs,
        receipt: Argument,
    ) -> Result<Argument> {
        ptb.move_call(self.package, "pool", "swap_pay_amount", type_args.to_vec(), vec![receipt])
    }

    pub fn repay_flash_swap(
        &self,
        ptb: &mut ProgrammableTransactionBuilder,
        type_args: &PairTypeArgs,
        pool: ObjectInput,
        balance_a: Argument,
        balance_b: Argument,
        receipt: Argument,
    ) -> Result<Argument> {
        let arguments = vec![
            ptb.object(self.global_config)?,
            ptb.obj(pool)?,
            balance_a,
            balance_b,
            receipt,
        ];
        ptb.move_call(self.package, "pool", "repay_flash_swap", type_args.to_vec(), arguments)
    }

    pub fn add_fee_tier(
        &self,
        ptb: &mut ProgrammableTransactionBuilder,
        tick_spacing: u32,
        fee_rate: u64,
    ) -> Result<Argument> {
        let arguments = vec![
            ptb.object(self.global_config)?,
            ptb.pure(&tick_spacing)?,
            ptb.pure(&fee_rate)?,
        ];
        ptb.move_call(self.package, "config", "add_fee_tier", vec![], arguments)
    }

    /// `factory::create_pool_with_liquidity`, returning
    /// `(Position, Coin<A>, Coin<B>)` with the unused remainders.
    pub fn create_pool_with_liquidity(
        &self,
        ptb: &mut ProgrammableTransactionBuilder,
        type_args: &PairTypeArgs,
        args: CreatePoolArgs,
    ) -> Result<[Argument; 3]> {
        let arguments = vec![
            ptb.obj(args.pools_registry)?,
            ptb.object(self.global_config)?,
            ptb.pure(&args.tick_spacing)?,
            ptb.pure(&args.initial_sqrt_price)?,
            ptb.pure(args.url.as_str())?,
            ptb.pure(&tick_to_u32(args.lower_tick))?,
            ptb.pure(&tick_to_u32(args.upper_tick))?,
            ptb.obj(args.coin_a)?,
            ptb.obj(args.coin_b)?,
            ptb.pure(&args.amount_a)?,
            ptb.pure(&args.amount_b)?,
            ptb.pure(&args.fix_amount_a)?,
            ptb.object(SUI_CLOCK_OBJECT_ID)?,
        ];
        ptb.move_call_results(
            self.package,
            "factory",
            "create_pool_with_liquidity",
            type_args.to_vec(),
            arguments,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatePoolArgs {
    pub pools_registry: ObjectInput,
    pub tick_spacing: u32,
    pub initial_sqrt_price: u128,
    pub url: String,
    pub lower_tick: i32,
    pub upper_tick: i32,
    pub coin_a: ObjectInput,
    pub coin_b: ObjectInput,
    pub amount_a: u64,
    pub amount_b: u64,
    pub fix_amount_a: bool,
}
