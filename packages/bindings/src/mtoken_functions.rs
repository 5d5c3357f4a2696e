// mtoken::mtoken entry points
//
// Every function takes the (MToken, Vesting, Penalty) type arguments and the
// package the module is published at.

use msend_types::{ObjectId, TypeTag};

use crate::error::Result;
use crate::mtoken::MODULE;
use crate::ptb::{Argument, ObjectInput, ProgrammableTransactionBuilder};

pub type MTokenTypeArgs = [TypeTag; 3];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MintMtokensArgs {
    pub treasury_cap: ObjectInput,
    pub vesting_coin: ObjectInput,
    pub start_penalty_numerator: u64,
    pub end_penalty_numerator: u64,
    pub penalty_denominator: u64,
    pub start_time_s: u64,
    pub end_time_s: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RedeemMtokensArgs {
    pub manager: ObjectInput,
    pub mtoken_coin: ObjectInput,
    pub penalty_coin: ObjectInput,
    pub clock: ObjectInput,
}

fn call(
    ptb: &mut ProgrammableTransactionBuilder,
    package: ObjectId,
    function: &str,
    type_args: &MTokenTypeArgs,
    arguments: Vec<Argument>,
) -> Result<Argument> {
    ptb.move_call(package, MODULE, function, type_args.to_vec(), arguments)
}

/// Returns `(AdminCap, VestingManager, Coin<MToken>)`.
pub fn mint_mtokens(
    ptb: &mut ProgrammableTransactionBuilder,
    package: ObjectId,
    type_args: &MTokenTypeArgs,
    args: MintMtokensArgs,
) -> Result<[Argument; 3]> {
    let arguments = vec![
        ptb.obj(args.treasury_cap)?,
        ptb.obj(args.vesting_coin)?,
        ptb.pure(&args.start_penalty_numerator)?,
        ptb.pure(&args.end_penalty_numerator)?,
        ptb.pure(&args.penalty_denominator)?,
        ptb.pure(&args.start_time_s)?,
        ptb.pure(&args.end_time_s)?,
    ];
    ptb.move_call_results(package, MODULE, "mint_mtokens", type_args.to_vec(), arguments)
}

/// Returns the redeemed `Coin<Vesting>`.
pub fn redeem_mtokens(
    ptb: &mut ProgrammableTransactionBuilder,
    package: ObjectId,
    type_args: &MTokenTypeArgs,
    args: RedeemMtokensArgs,
) -> Result<Argument> {
    let arguments = vec![
        ptb.obj(args.manager)?,
        ptb.obj(args.mtoken_coin)?,
        ptb.obj(args.penalty_coin)?,
        ptb.obj(args.clock)?,
    ];
    call(ptb, package, "redeem_mtokens", type_args, arguments)
}

pub fn collect_penalties(
    ptb: &mut ProgrammableTransactionBuilder,
    package: ObjectId,
    type_args: &MTokenTypeArgs,
    manager: impl Into<ObjectInput>,
    admin_cap: impl Into<ObjectInput>,
) -> Result<Argument> {
    let arguments = vec![ptb.obj(manager)?, ptb.obj(admin_cap)?];
    call(ptb, package, "collect_penalties", type_args, arguments)
}

pub fn manager(
    ptb: &mut ProgrammableTransactionBuilder,
    package: ObjectId,
    type_args: &MTokenTypeArgs,
    admin_cap: impl Into<ObjectInput>,
) -> Result<Argument> {
    let cap = ptb.obj(admin_cap)?;
    call(ptb, package, "manager", type_args, vec![cap])
}

macro_rules! manager_getter {
    ($($name:ident),* $(,)?) => {
        $(
            pub fn $name(
                ptb: &mut ProgrammableTransactionBuilder,
                package: ObjectId,
                type_args: &MTokenTypeArgs,
                manager: impl Into<ObjectInput>,
            ) -> Result<Argument> {
                let manager = ptb.obj(manager)?;
                call(ptb, package, stringify!($name), type_args, vec![manager])
            }
        )*
    };
}

manager_getter!(
    start_penalty_numerator,
    end_penalty_numerator,
    penalty_denominator,
    start_time_s,
    end_time_s,
);
