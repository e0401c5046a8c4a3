use corvel_jvm_api::{ClassHandle, ClassOrigin};
use tracing::error;

use super::binding::ScopeShapeError;

/// Rejects class containers that the Corvel compiler itself produced.
///
/// Corvel-origin classes already have source-level descriptors; letting one
/// anchor an interop scope would resolve it a second time through the
/// binary path. Hitting this is a defect in the calling resolution logic.
pub fn ensure_foreign(class: &ClassHandle) -> Result<(), ScopeShapeError> {
    match class.origin() {
        ClassOrigin::Foreign => Ok(()),
        ClassOrigin::Corvel => {
            error!(class = %class.fqn(), "Corvel-compiled class reached the interop scope path");
            Err(ScopeShapeError::CorvelClass {
                fqn: class.fqn().clone(),
            })
        }
    }
}
