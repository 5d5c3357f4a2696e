// Sui framework entry points used by the scripts

use msend_types::{TypeTag, SUI_FRAMEWORK_ADDRESS};

use crate::error::Result;
use crate::ptb::{Argument, ObjectInput, ProgrammableTransactionBuilder};

pub mod transfer {
    use super::*;

    pub fn public_share_object(
        ptb: &mut ProgrammableTransactionBuilder,
        object_type: TypeTag,
        object: Argument,
    ) -> Result<Argument> {
        ptb.move_call(
            SUI_FRAMEWORK_ADDRESS,
            "transfer",
            "public_share_object",
            vec![object_type],
            vec![object],
        )
    }
}

pub mod coin {
    use super::*;

    pub fn mint(
        ptb: &mut ProgrammableTransactionBuilder,
        coin_type: TypeTag,
        treasury_cap: impl Into<ObjectInput>,
        amount: u64,
    ) -> Result<Argument> {
        let cap = ptb.obj(treasury_cap)?;
        let amount = ptb.pure(&amount)?;
        ptb.move_call(SUI_FRAMEWORK_ADDRESS, "coin", "mint", vec![coin_type], vec![cap, amount])
    }

    pub fn from_balance(
        ptb: &mut ProgrammableTransactionBuilder,
        coin_type: TypeTag,
        balance: Argument,
    ) -> Result<Argument> {
        ptb.move_call(SUI_FRAMEWORK_ADDRESS, "coin", "from_balance", vec![coin_type], vec![balance])
    }

    pub fn into_balance(
        ptb: &mut ProgrammableTransactionBuilder,
        coin_type: TypeTag,
        coin: Argument,
    ) -> Result<Argument> {
        ptb.move_call(SUI_FRAMEWORK_ADDRESS, "coin", "into_balance", vec![coin_type], vec![coin])
    }
}

pub mod balance {
    use super::*;

    pub fn join(
        ptb: &mut ProgrammableTransactionBuilder,
        coin_type: TypeTag,
        balance: Argument,
        other: Argument,
    ) -> Result<Argument> {
        ptb.move_call(SUI_FRAMEWORK_ADDRESS, "balance", "join", vec![coin_type], vec![balance, other])
    }

    pub fn zero(ptb: &mut ProgrammableTransactionBuilder, coin_type: TypeTag) -> Result<Argument> {
        ptb.move_call(SUI_FRAMEWORK_ADDRESS, "balance", "zero", vec![coin_type], vec![])
    }
}
