// msend bindings package
//
// Rust mirrors of the on-chain structs the scripts read (Sui framework and
// mtoken), the entry points they call, and a small command list to lay those
// calls out in.

pub mod calls;
pub mod error;
pub mod fields;
pub mod framework;
pub mod move_struct;
pub mod mtoken;
pub mod mtoken_functions;
pub mod ptb;
pub mod registry;
pub mod transaction;

pub use error::{BindingError, Result};

pub use framework::{Balance, Coin, Id, Supply, TreasuryCap, Uid};
pub use move_struct::{check_type_args, MoveObject, MoveStruct, TYPE_ARGS_KEY, TYPE_NAME_KEY};
pub use mtoken::{is_admin_cap, is_vesting_manager, AdminCap, VestingManager};

pub use ptb::{
    Argument, CallArg, Command, ObjectInput, ProgrammableMoveCall, ProgrammableTransaction,
    ProgrammableTransactionBuilder,
};

pub use registry::{DecodedStruct, StructEntry, StructRegistry};

pub use transaction::{
    ObjectArg, ObjectDigest, ObjectRef, ResolvedTransaction, TransactionData, TransactionInput,
    TransactionKind,
};
