//! The foreign classpath model the scope core binds against.

mod classpath;

pub use classpath::{CORVEL_MARKER_FIELD, ClasspathProvider};

use corvel_jvm_api::{ClassHandle, Fqn, PackageHandle};

/// Narrow query surface of a foreign symbol provider.
///
/// A provider hands out value handles and stamps every class handle with
/// its origin classification at creation. Nothing downstream mutates or
/// walks the provider; scope binding only needs identity lookups and the
/// classification already carried on the handle.
pub trait SymbolProvider {
    fn find_class(&self, fqn: &Fqn) -> Option<ClassHandle>;
    fn find_package(&self, fqn: &Fqn) -> Option<PackageHandle>;
}
