use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::fmt;

/// Dot-separated qualified name of a foreign class or package.
///
/// The name is stored verbatim. Upstream resolution computes it; this type
/// never validates segment syntax, it only offers structural helpers over
/// the separator layout. The empty name is the root package.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Fqn(String);

impl Fqn {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Build from a JVM binary name (`com/example/Foo`).
    ///
    /// Only the package separator is normalized; nested-class `$` markers
    /// stay part of the simple name.
    pub fn from_binary_name(name: &str) -> Self {
        Self(name.replace('/', "."))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('.').filter(|s| !s.is_empty())
    }

    /// Last segment of the name.
    pub fn simple_name(&self) -> SmolStr {
        match self.0.rsplit_once('.') {
            Some((_, last)) => SmolStr::new(last),
            None => SmolStr::new(&self.0),
        }
    }

    /// Enclosing name, or `None` for a single-segment or root name.
    pub fn parent(&self) -> Option<Fqn> {
        self.0.rsplit_once('.').map(|(head, _)| Fqn::new(head))
    }

    pub fn child(&self, name: &str) -> Fqn {
        if self.0.is_empty() {
            Fqn::new(name)
        } else {
            Fqn::new(format!("{}.{}", self.0, name))
        }
    }
}

impl fmt::Display for Fqn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Fqn {
    fn from(s: &str) -> Self {
        Self::new(s.to_string())
    }
}

impl From<String> for Fqn {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl AsRef<str> for Fqn {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binary_name_normalization() {
        let fqn = Fqn::from_binary_name("com/example/util/Strings");
        assert_eq!(fqn.as_str(), "com.example.util.Strings");

        let nested = Fqn::from_binary_name("com/example/Outer$Inner");
        assert_eq!(nested.simple_name(), "Outer$Inner");
    }

    #[test]
    fn parent_chain() {
        let fqn = Fqn::new("com.example.Foo");
        assert_eq!(fqn.simple_name(), "Foo");
        assert_eq!(fqn.parent(), Some(Fqn::new("com.example")));
        assert_eq!(fqn.parent().unwrap().parent(), Some(Fqn::new("com")));
        assert_eq!(Fqn::new("com").parent(), None);
    }

    #[test]
    fn root_and_child() {
        let root = Fqn::new("");
        assert!(root.is_root());
        assert_eq!(root.child("com"), Fqn::new("com"));
        assert_eq!(Fqn::new("com").child("example"), Fqn::new("com.example"));
        assert_eq!(root.segments().count(), 0);
    }

    #[test]
    fn serde_is_transparent() {
        let fqn = Fqn::new("java.util.List");
        let json = serde_json::to_string(&fqn).unwrap();
        assert_eq!(json, "\"java.util.List\"");
        let back: Fqn = serde_json::from_str(&json).unwrap();
        assert_eq!(back, fqn);
    }
}
