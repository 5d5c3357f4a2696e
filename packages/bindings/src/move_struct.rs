// Move struct bindings
//
// `MoveStruct` describes the field layout of one on-chain struct. A decoded
// instance travels as `MoveObject<T>`, which pairs the fields with the full
// struct tag (package address and type arguments) it was read under.

use msend_types::{StructTag, SuiAddress, TypeTag};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{BindingError, Result};
use crate::fields::struct_parts;

pub const TYPE_NAME_KEY: &str = "$typeName";
pub const TYPE_ARGS_KEY: &str = "$typeArgs";

pub trait MoveStruct: Serialize + DeserializeOwned + Sized {
    const MODULE: &'static str;
    const NAME: &'static str;
    /// Number of (phantom) type parameters.
    const TYPE_PARAMS: usize;

    /// Decode from the `fields` object of parsed RPC content.
    fn from_fields(fields: &Value) -> Result<Self>;

    fn from_bcs(bytes: &[u8]) -> Result<Self> {
        Ok(bcs::from_bytes(bytes)?)
    }

    fn to_bcs(&self) -> Result<Vec<u8>> {
        Ok(bcs::to_bytes(self)?)
    }

    /// `package::module::Name`, full address form.
    fn type_name(package: &SuiAddress) -> String {
        format!("{}::{}::{}", package, Self::MODULE, Self::NAME)
    }

    /// Whether `tag` names this struct under `package`, ignoring type arguments.
    fn is_type(tag: &StructTag, package: &SuiAddress) -> bool {
        tag.address == *package && tag.module == Self::MODULE && tag.name == Self::NAME
    }
}

/// Check that `tag` names `T` (any package) with the right arity.
fn check_tag<T: MoveStruct>(tag: &StructTag) -> Result<()> {
    if tag.module != T::MODULE || tag.name != T::NAME {
        return Err(BindingError::WrongType {
            expected: format!("{}::{}", T::MODULE, T::NAME),
            got: tag.to_compressed_string(),
        });
    }
    if tag.type_params.len() != T::TYPE_PARAMS {
        return Err(BindingError::TypeArgCount {
            expected: T::TYPE_PARAMS,
            got: tag.type_params.len(),
        });
    }
    Ok(())
}

/// Compare type arguments position by position in compressed form.
pub fn check_type_args(got: &[TypeTag], expected: &[TypeTag]) -> Result<()> {
    if got.len() != expected.len() {
        return Err(BindingError::TypeArgCount {
            expected: expected.len(),
            got: got.len(),
        });
    }
    for (position, (got, expected)) in got.iter().zip(expected).enumerate() {
        let got = got.to_compressed_string();
        let expected = expected.to_compressed_string();
        if got != expected {
            return Err(BindingError::TypeArgMismatch {
                position,
                expected,
                got,
            });
        }
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveObject<T> {
    tag: StructTag,
    pub fields: T,
}

impl<T: MoveStruct> MoveObject<T> {
    pub fn new(package: SuiAddress, type_args: Vec<TypeTag>, fields: T) -> Result<Self> {
        let tag = StructTag::new(package, T::MODULE, T::NAME, type_args)?;
        check_tag::<T>(&tag)?;
        Ok(Self { tag, fields })
    }

    pub fn struct_tag(&self) -> &StructTag {
        &self.tag
    }

    pub fn package(&self) -> SuiAddress {
        self.tag.address
    }

    pub fn type_args(&self) -> &[TypeTag] {
        &self.tag.type_params
    }

    pub fn assert_type_args(&self, expected: &[TypeTag]) -> Result<()> {
        check_type_args(self.type_args(), expected)
    }

    pub fn from_bcs(tag: StructTag, bytes: &[u8]) -> Result<Self> {
        check_tag::<T>(&tag)?;
        Ok(Self {
            fields: T::from_bcs(bytes)?,
            tag,
        })
    }

    pub fn to_bcs(&self) -> Result<Vec<u8>> {
        self.fields.to_bcs()
    }

    /// Decode parsed RPC content: `{ "type": "...", "fields": { ... } }`.
    pub fn from_fields_with_types(item: &Value) -> Result<Self> {
        let (tag, fields) = struct_parts(item)?;
        Self::from_fields(tag, fields)
    }

    pub fn from_fields(tag: StructTag, fields: &Value) -> Result<Self> {
        check_tag::<T>(&tag)?;
        Ok(Self {
            fields: T::from_fields(fields)?,
            tag,
        })
    }

    /// JSON with `$typeName`, `$typeArgs` and camelCase fields.
    pub fn to_json(&self) -> Result<Value> {
        let mut json = match serde_json::to_value(&self.fields)? {
            Value::Object(map) => map,
            other => {
                let mut map = Map::new();
                map.insert("value".to_string(), other);
                map
            }
        };
        json.insert(TYPE_NAME_KEY.to_string(), Value::String(self.tag.type_name()));
        json.insert(
            TYPE_ARGS_KEY.to_string(),
            Value::Array(
                self.type_args()
                    .iter()
                    .map(|arg| Value::String(arg.to_string()))
                    .collect(),
            ),
        );
        Ok(Value::Object(json))
    }

    pub fn from_json(json: &Value) -> Result<Self> {
        let type_name = json
            .get(TYPE_NAME_KEY)
            .and_then(Value::as_str)
            .ok_or_else(|| BindingError::field(TYPE_NAME_KEY, "missing or not a string"))?;
        let base: StructTag = type_name.parse()?;
        if !base.type_params.is_empty() {
            return Err(BindingError::field(TYPE_NAME_KEY, "must not carry type arguments"));
        }

        let type_args = json
            .get(TYPE_ARGS_KEY)
            .and_then(Value::as_array)
            .ok_or_else(|| BindingError::field(TYPE_ARGS_KEY, "missing or not an array"))?
            .iter()
            .map(|arg| {
                arg.as_str()
                    .ok_or_else(|| BindingError::field(TYPE_ARGS_KEY, "type argument is not a string"))
                    .and_then(|s| Ok(s.parse::<TypeTag>()?))
            })
            .collect::<Result<Vec<_>>>()?;

        let tag = StructTag {
            type_params: type_args,
            ..base
        };
        check_tag::<T>(&tag)?;
        Ok(Self {
            fields: serde_json::from_value(json.clone())?,
            tag,
        })
    }
}
