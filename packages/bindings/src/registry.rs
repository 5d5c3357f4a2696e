// Struct registry
//
// Maps `address::module::Name` to the decoders for that struct so an object
// of a type only known at runtime can be decoded into `DecodedStruct`.

use std::collections::HashMap;

use msend_types::{StructTag, SuiAddress, SUI_FRAMEWORK_ADDRESS};
use serde_json::Value;
use tracing::debug;

use crate::error::{BindingError, Result};
use crate::framework::{Coin, TreasuryCap};
use crate::move_struct::{MoveObject, MoveStruct};
use crate::mtoken::{AdminCap, VestingManager};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodedStruct {
    Coin(MoveObject<Coin>),
    TreasuryCap(MoveObject<TreasuryCap>),
    AdminCap(MoveObject<AdminCap>),
    VestingManager(MoveObject<VestingManager>),
}

impl DecodedStruct {
    pub fn struct_tag(&self) -> &StructTag {
        match self {
            DecodedStruct::Coin(obj) => obj.struct_tag(),
            DecodedStruct::TreasuryCap(obj) => obj.struct_tag(),
            DecodedStruct::AdminCap(obj) => obj.struct_tag(),
            DecodedStruct::VestingManager(obj) => obj.struct_tag(),
        }
    }

    pub fn to_json(&self) -> Result<Value> {
        match self {
            DecodedStruct::Coin(obj) => obj.to_json(),
            DecodedStruct::TreasuryCap(obj) => obj.to_json(),
            DecodedStruct::AdminCap(obj) => obj.to_json(),
            DecodedStruct::VestingManager(obj) => obj.to_json(),
        }
    }
}

/// Structs the registry knows how to wrap.
pub trait Registered: MoveStruct {
    fn wrap(obj: MoveObject<Self>) -> DecodedStruct;
}

macro_rules! registered {
    ($($ty:ident),*) => {
        $(
            impl Registered for $ty {
                fn wrap(obj: MoveObject<Self>) -> DecodedStruct {
                    DecodedStruct::$ty(obj)
                }
            }
        )*
    };
}

registered!(Coin, TreasuryCap, AdminCap, VestingManager);

#[derive(Clone, Copy)]
pub struct StructEntry {
    pub type_params: usize,
    pub decode_bcs: fn(StructTag, &[u8]) -> Result<DecodedStruct>,
    pub decode_fields: fn(StructTag, &Value) -> Result<DecodedStruct>,
}

impl StructEntry {
    pub fn of<T: Registered>() -> Self {
        Self {
            type_params: T::TYPE_PARAMS,
            decode_bcs: |tag, bytes| MoveObject::<T>::from_bcs(tag, bytes).map(T::wrap),
            decode_fields: |tag, fields| MoveObject::<T>::from_fields(tag, fields).map(T::wrap),
        }
    }
}

#[derive(Default)]
pub struct StructRegistry {
    entries: HashMap<String, StructEntry>,
}

impl StructRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the framework structs and `mtoken` at `mtoken_package`.
    pub fn with_mtoken(mtoken_package: SuiAddress) -> Self {
        let mut registry = Self::new();
        registry.register_framework();
        registry.register_mtoken(mtoken_package);
        registry
    }

    pub fn register<T: Registered>(&mut self, package: SuiAddress) {
        let key = format!("{}::{}::{}", package.short_str(), T::MODULE, T::NAME);
        debug!(%key, "registered struct");
        self.entries.insert(key, StructEntry::of::<T>());
    }

    pub fn register_framework(&mut self) {
        self.register::<Coin>(SUI_FRAMEWORK_ADDRESS);
        self.register::<TreasuryCap>(SUI_FRAMEWORK_ADDRESS);
    }

    pub fn register_mtoken(&mut self, package: SuiAddress) {
        self.register::<AdminCap>(package);
        self.register::<VestingManager>(package);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, tag: &StructTag) -> Option<&StructEntry> {
        self.entries.get(&tag.compressed_type_name())
    }

    fn entry(&self, tag: &StructTag) -> Result<&StructEntry> {
        let entry = self
            .get(tag)
            .ok_or_else(|| BindingError::UnknownType(tag.compressed_type_name()))?;
        if tag.type_params.len() != entry.type_params {
            return Err(BindingError::TypeArgCount {
                expected: entry.type_params,
                got: tag.type_params.len(),
            });
        }
        Ok(entry)
    }

    pub fn decode_bcs(&self, type_str: &str, bytes: &[u8]) -> Result<DecodedStruct> {
        let tag: StructTag = type_str.parse()?;
        let entry = self.entry(&tag)?;
        (entry.decode_bcs)(tag, bytes)
    }

    pub fn decode_fields(&self, type_str: &str, fields: &Value) -> Result<DecodedStruct> {
        let tag: StructTag = type_str.parse()?;
        let entry = self.entry(&tag)?;
        (entry.decode_fields)(tag, fields)
    }
}
