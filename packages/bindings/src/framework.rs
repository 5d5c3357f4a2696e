// Sui framework (0x2) structs
//
// BCS field order follows the on-chain definitions. JSON uses camelCase
// names and decimal strings for u64 values.

use msend_types::{u64_string, ObjectId};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{BindingError, Result};
use crate::fields::{field, id_value, u64_field, u64_value, unwrap_fields};
use crate::move_struct::MoveStruct;

/// `0x2::object::ID`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Id {
    pub bytes: ObjectId,
}

/// `0x2::object::UID`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Uid {
    pub id: Id,
}

impl Uid {
    pub fn new(id: ObjectId) -> Self {
        Self {
            id: Id { bytes: id },
        }
    }

    pub fn object_id(&self) -> ObjectId {
        self.id.bytes
    }
}

impl From<ObjectId> for Id {
    fn from(bytes: ObjectId) -> Self {
        Self { bytes }
    }
}

/// `0x2::balance::Balance<T>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Balance {
    #[serde(with = "u64_string")]
    pub value: u64,
}

/// `0x2::balance::Supply<T>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Supply {
    #[serde(with = "u64_string")]
    pub value: u64,
}

/// `0x2::coin::TreasuryCap<T>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreasuryCap {
    pub id: Uid,
    pub total_supply: Supply,
}

/// `0x2::coin::Coin<T>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coin {
    pub id: Uid,
    pub balance: Balance,
}

/// Decode a nested struct field, unwrapping `{ "type", "fields" }`.
pub fn decode_field<T: MoveStruct>(fields: &Value, name: &str) -> Result<T> {
    T::from_fields(unwrap_fields(field(fields, name)?)).map_err(|err| match err {
        BindingError::Field { field, reason } => BindingError::Field {
            field: format!("{}.{}", name, field),
            reason,
        },
        other => other,
    })
}

// A balance-like value is rendered either as a bare integer or as `{ value }`.
fn value_of(fields: &Value) -> Result<u64> {
    match fields {
        Value::Object(_) => u64_field(fields, "value"),
        other => u64_value(other, "value"),
    }
}

impl MoveStruct for Id {
    const MODULE: &'static str = "object";
    const NAME: &'static str = "ID";
    const TYPE_PARAMS: usize = 0;

    fn from_fields(fields: &Value) -> Result<Self> {
        id_value(fields, "bytes").map(Id::from)
    }
}

impl MoveStruct for Uid {
    const MODULE: &'static str = "object";
    const NAME: &'static str = "UID";
    const TYPE_PARAMS: usize = 0;

    fn from_fields(fields: &Value) -> Result<Self> {
        id_value(fields, "id").map(Uid::new)
    }
}

impl MoveStruct for Balance {
    const MODULE: &'static str = "balance";
    const NAME: &'static str = "Balance";
    const TYPE_PARAMS: usize = 1;

    fn from_fields(fields: &Value) -> Result<Self> {
        Ok(Self {
            value: value_of(fields)?,
        })
    }
}

impl MoveStruct for Supply {
    const MODULE: &'static str = "balance";
    const NAME: &'static str = "Supply";
    const TYPE_PARAMS: usize = 1;

    fn from_fields(fields: &Value) -> Result<Self> {
        Ok(Self {
            value: value_of(fields)?,
        })
    }
}

impl MoveStruct for TreasuryCap {
    const MODULE: &'static str = "coin";
    const NAME: &'static str = "TreasuryCap";
    const TYPE_PARAMS: usize = 1;

    fn from_fields(fields: &Value) -> Result<Self> {
        Ok(Self {
            id: decode_field(fields, "id")?,
            total_supply: decode_field(fields, "total_supply")?,
        })
    }
}

impl MoveStruct for Coin {
    const MODULE: &'static str = "coin";
    const NAME: &'static str = "Coin";
    const TYPE_PARAMS: usize = 1;

    fn from_fields(fields: &Value) -> Result<Self> {
        Ok(Self {
            id: decode_field(fields, "id")?,
            balance: decode_field(fields, "balance")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn treasury_cap_from_rpc_fields() {
        let fields = json!({
            "id": { "id": "0xedd96f3b4fe682f6f64dc534f99d13239ff9638e8de24b90a3d4506b4c2f1c69" },
            "total_supply": {
                "type": "0x2::balance::Supply<0x2::sui::SUI>",
                "fields": { "value": "1000000" }
            }
        });
        let cap = TreasuryCap::from_fields(&fields).unwrap();
        assert_eq!(cap.total_supply.value, 1_000_000);
        assert_eq!(
            cap.id.object_id().to_string(),
            "0xedd96f3b4fe682f6f64dc534f99d13239ff9638e8de24b90a3d4506b4c2f1c69"
        );
    }

    #[test]
    fn coin_balance_as_plain_string() {
        let fields = json!({ "id": { "id": "0x5" }, "balance": "42" });
        assert_eq!(Coin::from_fields(&fields).unwrap().balance.value, 42);
    }

    #[test]
    fn nested_field_errors_carry_path() {
        let fields = json!({ "id": { "id": "0x5" }, "total_supply": { "fields": {} } });
        assert_eq!(
            TreasuryCap::from_fields(&fields),
            Err(BindingError::Field {
                field: "total_supply.value".to_string(),
                reason: "missing".to_string()
            })
        );
    }
}
