// Mint mSEND against vested SEND

use msend_bindings::calls::transfer;
use msend_bindings::mtoken_functions::{self, MTokenTypeArgs, MintMtokensArgs};
use msend_bindings::{Argument, MoveStruct, ProgrammableTransactionBuilder, Result, VestingManager};
use msend_types::{ObjectId, StructTag, SuiAddress};
use tracing::info;

/// Mint mTokens, send the admin cap and the minted coin to `sender` and
/// share the `VestingManager`. Returns the manager argument.
pub fn mint_mtokens(
    ptb: &mut ProgrammableTransactionBuilder,
    sender: SuiAddress,
    mtoken_package: ObjectId,
    type_args: &MTokenTypeArgs,
    args: MintMtokensArgs,
) -> Result<Argument> {
    info!(
        start = args.start_time_s,
        end = args.end_time_s,
        start_numerator = args.start_penalty_numerator,
        end_numerator = args.end_penalty_numerator,
        denominator = args.penalty_denominator,
        "minting mtokens"
    );
    let [admin_cap, manager, minted] =
        mtoken_functions::mint_mtokens(ptb, mtoken_package, type_args, args)?;

    let recipient = ptb.pure(&sender)?;
    ptb.transfer_objects(vec![admin_cap, minted], recipient)?;

    let manager_type = StructTag::new(
        mtoken_package,
        VestingManager::MODULE,
        VestingManager::NAME,
        type_args.to_vec(),
    )?;
    transfer::public_share_object(ptb, manager_type.into(), manager)?;
    Ok(manager)
}
