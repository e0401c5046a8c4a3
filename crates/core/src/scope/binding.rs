use corvel_jvm_api::{ClassHandle, Fqn, PackageHandle};
use thiserror::Error;
use tracing::trace;

use super::guard;

/// The one failure class of scope construction: the caller assembled a
/// shape descriptor resolution must never see. Containers are produced by
/// trusted upstream resolution logic, so this is always a defect in that
/// logic, never a recoverable data condition.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScopeShapeError {
    #[error("scope binding needs a class or a package container")]
    MissingContainer,
    #[error("class `{fqn}` was emitted by the Corvel compiler and cannot anchor an interop scope")]
    CorvelClass { fqn: Fqn },
}

/// Immutable record tying one resolution scope to the foreign classpath
/// model: which class and/or package anchors it, the qualified name the
/// scope was selected under, and whether only static members are visible.
///
/// Invariants are checked once, at construction; descriptor resolution
/// downstream trusts them unconditionally. At least one container is
/// always present, and a class container is always of foreign origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeBinding {
    class: Option<ClassHandle>,
    package: Option<PackageHandle>,
    qualified_name: Option<Fqn>,
    static_members_only: bool,
}

impl ScopeBinding {
    /// Validates and stores the scope shape. All four inputs are kept
    /// verbatim; no partially-constructed binding is ever observable.
    pub fn new(
        class: Option<ClassHandle>,
        package: Option<PackageHandle>,
        qualified_name: Option<Fqn>,
        static_members_only: bool,
    ) -> Result<Self, ScopeShapeError> {
        if class.is_none() && package.is_none() {
            return Err(ScopeShapeError::MissingContainer);
        }
        if let Some(class) = &class {
            guard::ensure_foreign(class)?;
        }
        trace!(
            class = class.as_ref().map(|c| c.fqn().as_str()),
            package = package.as_ref().map(|p| p.fqn().as_str()),
            static_members_only,
            "bound resolution scope"
        );
        Ok(Self {
            class,
            package,
            qualified_name,
            static_members_only,
        })
    }

    pub fn class_container(&self) -> Option<&ClassHandle> {
        self.class.as_ref()
    }

    pub fn package_container(&self) -> Option<&PackageHandle> {
        self.package.as_ref()
    }

    // TODO: drop the qualified-name pass-through once scope selection keys
    // off the container handles alone.
    pub fn qualified_name(&self) -> Option<&Fqn> {
        self.qualified_name.as_ref()
    }

    pub fn is_static_members_only(&self) -> bool {
        self.static_members_only
    }
}
