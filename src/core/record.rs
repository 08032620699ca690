use std::fmt;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    Info,
    Warning,
    Error,
    Assert,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
            Severity::Assert => "assert",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Opaque object a message can point at. The filter never looks at it;
/// sinks may use the name to render or highlight it.
pub trait SceneObject {
    fn name(&self) -> &str;
}

impl<T: SceneObject + ?Sized> SceneObject for &T {
    fn name(&self) -> &str {
        (**self).name()
    }
}

impl SceneObject for str {
    fn name(&self) -> &str {
        self
    }
}

impl SceneObject for String {
    fn name(&self) -> &str {
        self
    }
}

/// A named object with nothing else attached.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Named(pub String);

impl Named {
    pub fn new(name: impl Into<String>) -> Self {
        Named(name.into())
    }
}

impl SceneObject for Named {
    fn name(&self) -> &str {
        &self.0
    }
}
