use std::fmt;

/// Static identity of a schema-defined message type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MessageInfo {
    /// Fully-qualified protobuf name, e.g. `com.example.tutorial.Msg`.
    pub full_name: &'static str,
    pub package: &'static str,
    pub name: &'static str,
    /// `.proto` file the message was compiled from.
    pub source_file: &'static str,
}

impl MessageInfo {
    pub(crate) fn is_well_formed(&self) -> bool {
        if self.name.is_empty() || self.source_file.is_empty() {
            return false;
        }
        match self.full_name.strip_suffix(self.name) {
            Some("") => self.package.is_empty(),
            Some(prefix) => prefix.strip_suffix('.') == Some(self.package),
            None => false,
        }
    }
}

/// Implemented for every generated message the crate knows about.
pub trait MessageType: Default {
    const INFO: &'static MessageInfo;

    /// Fresh default-constructed value.
    fn default_instance() -> Self {
        Self::default()
    }
}

/// A registry entry: message identity plus a constructor yielding a default
/// instance behind capability `C`.
pub struct MessageDescriptor<C: ?Sized + 'static> {
    info: &'static MessageInfo,
    construct: fn() -> Box<C>,
}

impl<C: ?Sized + 'static> MessageDescriptor<C> {
    pub const fn new(info: &'static MessageInfo, construct: fn() -> Box<C>) -> Self {
        Self { info, construct }
    }

    pub fn info(&self) -> &'static MessageInfo {
        self.info
    }

    pub fn full_name(&self) -> &'static str {
        self.info.full_name
    }

    pub fn source_file(&self) -> &'static str {
        self.info.source_file
    }

    /// Construct a new default instance. Never cached.
    pub fn instantiate(&self) -> Box<C> {
        (self.construct)()
    }
}

impl<C: ?Sized + 'static> Clone for MessageDescriptor<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: ?Sized + 'static> Copy for MessageDescriptor<C> {}

impl<C: ?Sized + 'static> fmt::Debug for MessageDescriptor<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageDescriptor")
            .field("full_name", &self.info.full_name)
            .field("source_file", &self.info.source_file)
            .finish()
    }
}
