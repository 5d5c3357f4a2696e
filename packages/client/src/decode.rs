// Typed decoding of fetched objects
//
// BCS is preferred when the node returned it; parsed content is the
// fallback. Either way the object's type is checked before its fields.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use msend_bindings::{BindingError, DecodedStruct, MoveObject, MoveStruct, StructRegistry};
use msend_types::{StructTag, SuiAddress, TypeTag};
use serde_json::Value;
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::types::{SuiObjectData, MOVE_OBJECT};

enum Payload<'a> {
    Bcs(Vec<u8>),
    Fields(&'a Value),
}

/// The object's type and the richest payload available for it.
fn payload(data: &SuiObjectData) -> Result<(String, Payload<'_>)> {
    if let Some(raw) = &data.bcs {
        if raw.data_type != MOVE_OBJECT {
            return Err(ClientError::NotMoveObject(data.object_id));
        }
        if let (Some(type_str), Some(bytes)) = (raw.type_.as_ref().or(data.type_.as_ref()), &raw.bcs_bytes) {
            return Ok((type_str.clone(), Payload::Bcs(STANDARD.decode(bytes)?)));
        }
    }
    if let Some(content) = &data.content {
        if content.data_type != MOVE_OBJECT {
            return Err(ClientError::NotMoveObject(data.object_id));
        }
        if let (Some(type_str), Some(fields)) =
            (content.type_.as_ref().or(data.type_.as_ref()), &content.fields)
        {
            return Ok((type_str.clone(), Payload::Fields(fields)));
        }
    }
    Err(ClientError::MissingContent(data.object_id))
}

/// Decode `data` as `T` published at `package` with `expected_type_args`.
///
/// # Errors
/// - [`ClientError::MissingContent`] if neither BCS nor content was returned
/// - [`ClientError::Binding`] on a type, type argument or field mismatch
pub fn decode_object<T: MoveStruct>(
    data: &SuiObjectData,
    package: &SuiAddress,
    expected_type_args: &[TypeTag],
) -> Result<MoveObject<T>> {
    let (type_str, payload) = payload(data)?;
    let tag: StructTag = type_str.parse().map_err(BindingError::from)?;
    if !T::is_type(&tag, package) {
        return Err(BindingError::WrongType {
            expected: T::type_name(package),
            got: tag.to_compressed_string(),
        }
        .into());
    }

    let object = match payload {
        Payload::Bcs(bytes) => MoveObject::<T>::from_bcs(tag, &bytes)?,
        Payload::Fields(fields) => MoveObject::<T>::from_fields(tag, fields)?,
    };
    object.assert_type_args(expected_type_args)?;
    debug!(object_id = %data.object_id.short_str(), type_name = %object.struct_tag(), "decoded object");
    Ok(object)
}

/// Decode `data` as whichever registered struct its type names.
pub fn decode_any(data: &SuiObjectData, registry: &StructRegistry) -> Result<DecodedStruct> {
    let (type_str, payload) = payload(data)?;
    let decoded = match payload {
        Payload::Bcs(bytes) => registry.decode_bcs(&type_str, &bytes)?,
        Payload::Fields(fields) => registry.decode_fields(&type_str, fields)?,
    };
    Ok(decoded)
}
