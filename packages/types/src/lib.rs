// msend types package
//
// Chain primitives shared by the bindings, client and scripts.

pub mod address;
pub mod error;
pub mod serde_helper;
pub mod type_tag;

pub use address::{
    ObjectId, SuiAddress, ADDRESS_LENGTH, MOVE_STDLIB_ADDRESS, SUI_CLOCK_OBJECT_ID,
    SUI_FRAMEWORK_ADDRESS,
};
pub use error::{Result, TypeError};
pub use serde_helper::{u128_string, u64_string};
pub use type_tag::{compress_type_str, is_valid_identifier, StructTag, TypeTag};
