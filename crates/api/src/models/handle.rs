use super::fqn::Fqn;
use crate::error::{ApiError, ApiResult};
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// Who produced a foreign class, as classified by the symbol provider.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassOrigin {
    /// Output of a foreign compiler (javac or anything else non-Corvel).
    Foreign,
    /// Emitted by the Corvel compiler itself. Such classes already have
    /// source-level descriptors and must never be re-resolved through the
    /// binary interop path.
    Corvel,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassKind {
    Class,
    Interface,
    Enum,
    Annotation,
}

/// Non-owning handle to a class-like entity of the foreign classpath model.
///
/// The provider that created the handle owns the underlying entity; handles
/// are cheap value copies of the identity and classification the scope core
/// needs.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClassHandle {
    fqn: Fqn,
    name: SmolStr,
    kind: ClassKind,
    origin: ClassOrigin,
}

impl ClassHandle {
    pub fn new(fqn: Fqn, kind: ClassKind, origin: ClassOrigin) -> ApiResult<Self> {
        if fqn.is_root() {
            return Err(ApiError::InvalidArgument(
                "class handle requires a non-empty qualified name".to_string(),
            ));
        }
        let name = fqn.simple_name();
        Ok(Self {
            fqn,
            name,
            kind,
            origin,
        })
    }

    pub fn fqn(&self) -> &Fqn {
        &self.fqn
    }

    /// Simple (unqualified) class name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ClassKind {
        self.kind
    }

    pub fn origin(&self) -> ClassOrigin {
        self.origin
    }

    pub fn is_corvel(&self) -> bool {
        self.origin == ClassOrigin::Corvel
    }
}

/// Non-owning handle to a package-like entity of the foreign classpath
/// model. The root package is representable (empty name).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageHandle {
    fqn: Fqn,
    name: SmolStr,
}

impl PackageHandle {
    pub fn new(fqn: Fqn) -> Self {
        let name = fqn.simple_name();
        Self { fqn, name }
    }

    pub fn fqn(&self) -> &Fqn {
        &self.fqn
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_handle_carries_classification() {
        let handle = ClassHandle::new(
            Fqn::new("java.util.List"),
            ClassKind::Interface,
            ClassOrigin::Foreign,
        )
        .unwrap();
        assert_eq!(handle.name(), "List");
        assert_eq!(handle.kind(), ClassKind::Interface);
        assert!(!handle.is_corvel());
    }

    #[test]
    fn class_handle_rejects_root_name() {
        let err = ClassHandle::new(Fqn::new(""), ClassKind::Class, ClassOrigin::Foreign);
        assert!(matches!(err, Err(ApiError::InvalidArgument(_))));
    }

    #[test]
    fn package_handle_allows_root() {
        let root = PackageHandle::new(Fqn::new(""));
        assert!(root.fqn().is_root());
        assert_eq!(root.name(), "");

        let pkg = PackageHandle::new(Fqn::new("com.example"));
        assert_eq!(pkg.name(), "example");
    }
}
