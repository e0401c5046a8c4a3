use crate::error::Result;
use crate::provider::SymbolProvider;
use corvel_jvm_api::{ClassHandle, ClassKind, ClassOrigin, Fqn, PackageHandle};
use dashmap::DashMap;
use ristretto_classfile::{ClassAccessFlags, ClassFile};
use std::fs::File;
use std::io::{Cursor, Read};
use std::path::Path;
use tracing::{debug, trace};
use zip::ZipArchive;

/// Field the Corvel compiler stamps on every class it emits. Its presence
/// is the origin signal the interop guard keys off.
pub const CORVEL_MARKER_FIELD: &str = "$corvelMetadata";

/// Classfile-backed symbol provider: an in-memory registry of class and
/// package handles scraped from `.class` bytes and jars.
///
/// Registration may race benignly under concurrent use; lookups are
/// lock-free reads.
#[derive(Debug, Default)]
pub struct ClasspathProvider {
    classes: DashMap<Fqn, ClassHandle>,
    packages: DashMap<Fqn, PackageHandle>,
}

impl ClasspathProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse one classfile and record its handle plus its package chain.
    pub fn register_class_bytes(&self, bytes: &[u8]) -> Result<ClassHandle> {
        let class_file = ClassFile::from_bytes(&mut Cursor::new(bytes.to_vec()))?;
        let fqn = Fqn::from_binary_name(class_file.class_name()?);
        let kind = class_kind(class_file.access_flags);
        let origin = classify_origin(&class_file)?;
        let handle = ClassHandle::new(fqn.clone(), kind, origin)?;

        if let Some(package) = fqn.parent() {
            self.register_package(package);
        }
        debug!(class = %fqn, ?origin, "registered class");
        self.classes.insert(fqn, handle.clone());
        Ok(handle)
    }

    /// Walk a jar and register every `.class` entry outside `META-INF`.
    pub fn register_jar(&self, path: &Path) -> Result<usize> {
        let file = File::open(path)?;
        let mut archive = ZipArchive::new(file)?;
        let mut registered = 0;
        for i in 0..archive.len() {
            let mut entry = archive.by_index(i)?;
            let name = entry.name().to_string();
            if !name.ends_with(".class") || name.starts_with("META-INF") {
                continue;
            }
            let mut bytes = Vec::new();
            entry.read_to_end(&mut bytes)?;
            self.register_class_bytes(&bytes)?;
            registered += 1;
        }
        debug!(jar = %path.display(), registered, "registered jar");
        Ok(registered)
    }

    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    pub fn package_count(&self) -> usize {
        self.packages.len()
    }

    fn register_package(&self, fqn: Fqn) {
        if self.packages.contains_key(&fqn) {
            return;
        }
        if let Some(parent) = fqn.parent() {
            self.register_package(parent);
        }
        self.packages.insert(fqn.clone(), PackageHandle::new(fqn));
    }
}

impl SymbolProvider for ClasspathProvider {
    fn find_class(&self, fqn: &Fqn) -> Option<ClassHandle> {
        let found = self.classes.get(fqn).map(|h| h.clone());
        if found.is_none() {
            trace!(class = %fqn, "class lookup miss");
        }
        found
    }

    fn find_package(&self, fqn: &Fqn) -> Option<PackageHandle> {
        let found = self.packages.get(fqn).map(|h| h.clone());
        if found.is_none() {
            trace!(package = %fqn, "package lookup miss");
        }
        found
    }
}

fn class_kind(flags: ClassAccessFlags) -> ClassKind {
    if flags.contains(ClassAccessFlags::ANNOTATION) {
        ClassKind::Annotation
    } else if flags.contains(ClassAccessFlags::INTERFACE) {
        ClassKind::Interface
    } else if flags.contains(ClassAccessFlags::ENUM) {
        ClassKind::Enum
    } else {
        ClassKind::Class
    }
}

/// A class is Corvel-compiled iff it declares the runtime metadata marker
/// field. Field names are resolved through the constant pool.
fn classify_origin(class_file: &ClassFile) -> Result<ClassOrigin> {
    for field in &class_file.fields {
        let name = class_file.constant_pool.try_get_utf8(field.name_index)?;
        if name == CORVEL_MARKER_FIELD {
            return Ok(ClassOrigin::Corvel);
        }
    }
    Ok(ClassOrigin::Foreign)
}
