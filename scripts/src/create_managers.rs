// Points and capsule managers for the claim package

use msend_bindings::calls::transfer;
use msend_bindings::{Argument, ProgrammableTransactionBuilder, Result};
use msend_types::{ObjectId, StructTag, SuiAddress, TypeTag};

use crate::config::{Capsules, Points};

/// Create both managers, send their admin caps to `sender` and share the
/// managers. Returns the admin caps as `(points, capsule)`.
pub fn create_managers(
    ptb: &mut ProgrammableTransactionBuilder,
    sender: SuiAddress,
    claim_package: ObjectId,
    msend_type: &TypeTag,
    points: Points,
    capsules: Capsules,
) -> Result<(Argument, Argument)> {
    let points_args = vec![
        ptb.pure(&points.ratio_numerator)?,
        ptb.pure(&points.ratio_denominator)?,
    ];
    let [points_manager, points_admin] =
        ptb.move_call_results(claim_package, "points", "new", vec![msend_type.clone()], points_args)?;

    let capsule_args = vec![
        ptb.pure(&capsules.common_amount)?,
        ptb.pure(&capsules.uncommon_amount)?,
        ptb.pure(&capsules.rare_amount)?,
    ];
    let [capsule_manager, capsule_admin] =
        ptb.move_call_results(claim_package, "capsule", "new", vec![msend_type.clone()], capsule_args)?;

    let recipient = ptb.pure(&sender)?;
    ptb.transfer_objects(vec![points_admin, capsule_admin], recipient)?;

    for (module, name, manager) in [
        ("points", "PointsManager", points_manager),
        ("capsule", "CapsuleManager", capsule_manager),
    ] {
        let manager_type = StructTag::new(claim_package, module, name, vec![msend_type.clone()])?;
        transfer::public_share_object(ptb, manager_type.into(), manager)?;
    }
    Ok((points_admin, capsule_admin))
}
