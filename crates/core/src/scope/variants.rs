use corvel_jvm_api::{ClassHandle, Fqn, PackageHandle};

use super::binding::{ScopeBinding, ScopeShapeError};

/// Scope anchored to a class container. The class accessor is infallible;
/// the constructor is the only way in and always supplies one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassScope {
    binding: ScopeBinding,
}

impl ClassScope {
    pub fn new(
        class: ClassHandle,
        qualified_name: Option<Fqn>,
        static_members_only: bool,
    ) -> Result<Self, ScopeShapeError> {
        let binding = ScopeBinding::new(Some(class), None, qualified_name, static_members_only)?;
        Ok(Self { binding })
    }

    pub fn class_handle(&self) -> &ClassHandle {
        // `new` always supplies a class container.
        self.binding
            .class_container()
            .expect("ClassScope constructed without a class container")
    }

    pub fn binding(&self) -> &ScopeBinding {
        &self.binding
    }
}

/// Scope anchored to a package container, optionally merged with a foreign
/// class whose static members surface package-level declarations. This is
/// the only scope type with an infallible package accessor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageScope {
    binding: ScopeBinding,
}

impl PackageScope {
    pub fn new(
        package: PackageHandle,
        statics_class: Option<ClassHandle>,
        qualified_name: Option<Fqn>,
        static_members_only: bool,
    ) -> Result<Self, ScopeShapeError> {
        let binding = ScopeBinding::new(
            statics_class,
            Some(package),
            qualified_name,
            static_members_only,
        )?;
        Ok(Self { binding })
    }

    pub fn package_handle(&self) -> &PackageHandle {
        // `new` always supplies a package container.
        self.binding
            .package_container()
            .expect("PackageScope constructed without a package container")
    }

    pub fn statics_class(&self) -> Option<&ClassHandle> {
        self.binding.class_container()
    }

    pub fn binding(&self) -> &ScopeBinding {
        &self.binding
    }
}
