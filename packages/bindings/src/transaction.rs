// Signable transactions
//
// A plan from the builder names its object inputs by id only. Before a node
// will inspect or execute it, each object becomes a full reference: owned
// objects by (id, version, digest), shared objects by their initial shared
// version. The types here follow the chain's BCS layout, so variant order
// matters.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use msend_types::{ObjectId, SuiAddress};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{BindingError, Result};
use crate::ptb::{CallArg, Command, ProgrammableTransaction};

pub const DIGEST_LENGTH: usize = 32;

/// Object content digest. Base58 in JSON, length-prefixed bytes in BCS.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectDigest(pub [u8; DIGEST_LENGTH]);

impl FromStr for ObjectDigest {
    type Err = BindingError;

    fn from_str(s: &str) -> Result<Self> {
        let bytes = bs58::decode(s)
            .into_vec()
            .map_err(|_| BindingError::InvalidDigest(s.to_string()))?;
        let bytes: [u8; DIGEST_LENGTH] = bytes
            .try_into()
            .map_err(|_| BindingError::InvalidDigest(s.to_string()))?;
        Ok(Self(bytes))
    }
}

impl fmt::Display for ObjectDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&bs58::encode(self.0).into_string())
    }
}

impl fmt::Debug for ObjectDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectDigest({})", self)
    }
}

impl Serialize for ObjectDigest {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            serializer.collect_str(self)
        } else {
            serializer.serialize_bytes(&self.0)
        }
    }
}

impl<'de> Deserialize<'de> for ObjectDigest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
        if deserializer.is_human_readable() {
            let s = String::deserialize(deserializer)?;
            s.parse().map_err(de::Error::custom)
        } else {
            let bytes = Vec::<u8>::deserialize(deserializer)?;
            let len = bytes.len();
            bytes
                .try_into()
                .map(Self)
                .map_err(|_| de::Error::invalid_length(len, &"32 digest bytes"))
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectRef {
    pub object_id: ObjectId,
    pub version: u64,
    pub digest: ObjectDigest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObjectArg {
    ImmOrOwnedObject(ObjectRef),
    SharedObject {
        id: ObjectId,
        initial_shared_version: u64,
        mutable: bool,
    },
}

impl ObjectArg {
    pub fn id(&self) -> ObjectId {
        match self {
            ObjectArg::ImmOrOwnedObject(object) => object.object_id,
            ObjectArg::SharedObject { id, .. } => *id,
        }
    }
}

/// A transaction input with its object reference resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionInput {
    Pure(#[serde(with = "crate::ptb::pure_bytes")] Vec<u8>),
    Object(ObjectArg),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedTransaction {
    pub inputs: Vec<TransactionInput>,
    pub commands: Vec<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionKind {
    ProgrammableTransaction(ResolvedTransaction),
}

impl TransactionKind {
    pub fn to_bcs(&self) -> Result<Vec<u8>> {
        Ok(bcs::to_bytes(self)?)
    }
}

impl ProgrammableTransaction {
    /// Swap every object id for its resolved argument from `objects`.
    ///
    /// # Errors
    /// [`BindingError::UnresolvedObject`] for an input missing from `objects`.
    pub fn resolve(&self, objects: &HashMap<ObjectId, ObjectArg>) -> Result<TransactionKind> {
        let inputs = self
            .inputs
            .iter()
            .map(|input| match input {
                CallArg::Pure(bytes) => Ok(TransactionInput::Pure(bytes.clone())),
                CallArg::Object(id) => objects
                    .get(id)
                    .copied()
                    .map(TransactionInput::Object)
                    .ok_or(BindingError::UnresolvedObject(*id)),
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(TransactionKind::ProgrammableTransaction(ResolvedTransaction {
            inputs,
            commands: self.commands.clone(),
        }))
    }

    /// Object ids among the inputs, in input order.
    pub fn object_ids(&self) -> Vec<ObjectId> {
        self.inputs
            .iter()
            .filter_map(|input| match input {
                CallArg::Object(id) => Some(*id),
                CallArg::Pure(_) => None,
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GasData {
    pub payment: Vec<ObjectRef>,
    pub owner: SuiAddress,
    pub price: u64,
    pub budget: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TransactionExpiration {
    #[default]
    None,
    Epoch(u64),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionDataV1 {
    pub kind: TransactionKind,
    pub sender: SuiAddress,
    pub gas_data: GasData,
    pub expiration: TransactionExpiration,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionData {
    V1(TransactionDataV1),
}

impl TransactionData {
    /// Transaction paid for by `sender` with the coins in `gas_payment`.
    pub fn new(
        kind: TransactionKind,
        sender: SuiAddress,
        gas_payment: Vec<ObjectRef>,
        gas_budget: u64,
        gas_price: u64,
    ) -> Self {
        TransactionData::V1(TransactionDataV1 {
            kind,
            sender,
            gas_data: GasData {
                payment: gas_payment,
                owner: sender,
                price: gas_price,
                budget: gas_budget,
            },
            expiration: TransactionExpiration::None,
        })
    }

    /// The bytes a wallet signs and a node executes.
    pub fn to_bcs(&self) -> Result<Vec<u8>> {
        Ok(bcs::to_bytes(self)?)
    }
}
