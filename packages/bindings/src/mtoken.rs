// mtoken::mtoken structs
//
// Both structs carry three phantom type parameters in the order
// (MToken, Vesting, Penalty). The package address is a deployment detail and
// is passed in wherever a full type is checked.

use msend_types::{u64_string, StructTag, SuiAddress};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;
use crate::fields::u64_field;
use crate::framework::{decode_field, Balance, Id, TreasuryCap, Uid};
use crate::move_struct::MoveStruct;

pub const MODULE: &str = "mtoken";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminCap {
    pub id: Uid,
    pub manager: Id,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VestingManager {
    pub id: Uid,
    pub vesting_balance: Balance,
    pub penalty_balance: Balance,
    pub mtoken_treasury_cap: TreasuryCap,
    #[serde(with = "u64_string")]
    pub start_penalty_numerator: u64,
    #[serde(with = "u64_string")]
    pub end_penalty_numerator: u64,
    #[serde(with = "u64_string")]
    pub penalty_denominator: u64,
    #[serde(with = "u64_string")]
    pub start_time_s: u64,
    #[serde(with = "u64_string")]
    pub end_time_s: u64,
}

impl MoveStruct for AdminCap {
    const MODULE: &'static str = MODULE;
    const NAME: &'static str = "AdminCap";
    const TYPE_PARAMS: usize = 3;

    fn from_fields(fields: &Value) -> Result<Self> {
        Ok(Self {
            id: decode_field(fields, "id")?,
            manager: decode_field(fields, "manager")?,
        })
    }
}

impl MoveStruct for VestingManager {
    const MODULE: &'static str = MODULE;
    const NAME: &'static str = "VestingManager";
    const TYPE_PARAMS: usize = 3;

    fn from_fields(fields: &Value) -> Result<Self> {
        Ok(Self {
            id: decode_field(fields, "id")?,
            vesting_balance: decode_field(fields, "vesting_balance")?,
            penalty_balance: decode_field(fields, "penalty_balance")?,
            mtoken_treasury_cap: decode_field(fields, "mtoken_treasury_cap")?,
            start_penalty_numerator: u64_field(fields, "start_penalty_numerator")?,
            end_penalty_numerator: u64_field(fields, "end_penalty_numerator")?,
            penalty_denominator: u64_field(fields, "penalty_denominator")?,
            start_time_s: u64_field(fields, "start_time_s")?,
            end_time_s: u64_field(fields, "end_time_s")?,
        })
    }
}

/// Whether `type_str` names `package::mtoken::AdminCap`, with or without
/// type arguments. Unparseable strings are not admin caps.
pub fn is_admin_cap(type_str: &str, package: &SuiAddress) -> bool {
    type_str
        .parse::<StructTag>()
        .map(|tag| AdminCap::is_type(&tag, package))
        .unwrap_or(false)
}

pub fn is_vesting_manager(type_str: &str, package: &SuiAddress) -> bool {
    type_str
        .parse::<StructTag>()
        .map(|tag| VestingManager::is_type(&tag, package))
        .unwrap_or(false)
}
