use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::capability::CapabilityObject;
use super::descriptor::MessageDescriptor;
use crate::core::{Capability, RegistryError};

/// Ordered set of message descriptors, fixed when the registry is built.
///
/// `default_instances` hands back one freshly constructed default instance
/// per descriptor, in table order. Nothing is cached between calls.
pub struct DefaultInstanceRegistry<C: ?Sized + 'static> {
    descriptors: &'static [MessageDescriptor<C>],
}

impl<C: ?Sized + 'static> fmt::Debug for DefaultInstanceRegistry<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefaultInstanceRegistry")
            .field("descriptors", &self.descriptors)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryReport {
    pub capability: Capability,
    pub count: usize,
    pub entries: Vec<ReportEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportEntry {
    pub index: usize,
    pub full_name: String,
    pub package: String,
    pub source_file: String,
    pub default_encoded_len: usize,
}

impl<C: ?Sized + CapabilityObject> DefaultInstanceRegistry<C> {
    /// Validate `descriptors` and build a registry over them. Names must be
    /// well formed and unique.
    pub fn new(descriptors: &'static [MessageDescriptor<C>]) -> Result<Self, RegistryError> {
        let mut seen = HashSet::with_capacity(descriptors.len());
        for descriptor in descriptors {
            let info = descriptor.info();
            if !info.is_well_formed() {
                return Err(RegistryError::InvalidDescriptor(info.full_name.to_string()));
            }
            if !seen.insert(info.full_name) {
                return Err(RegistryError::DuplicateDescriptor(info.full_name.to_string()));
            }
        }
        debug!(
            "Built {} registry with {} descriptors",
            C::CAPABILITY,
            descriptors.len()
        );
        Ok(Self { descriptors })
    }

    pub fn capability(&self) -> Capability {
        C::CAPABILITY
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    pub fn descriptors(&self) -> &'static [MessageDescriptor<C>] {
        self.descriptors
    }

    /// One new default instance per descriptor, in descriptor order.
    pub fn default_instances(&self) -> Vec<Box<C>> {
        debug!(
            "Instantiating {} default {} messages",
            self.descriptors.len(),
            C::CAPABILITY
        );
        self.descriptors.iter().map(MessageDescriptor::instantiate).collect()
    }

    pub fn find(&self, full_name: &str) -> Option<&'static MessageDescriptor<C>> {
        self.descriptors
            .iter()
            .find(|descriptor| descriptor.full_name() == full_name)
    }

    pub fn instantiate(&self, full_name: &str) -> Result<Box<C>, RegistryError> {
        self.find(full_name)
            .map(MessageDescriptor::instantiate)
            .ok_or_else(|| RegistryError::UnknownMessage(full_name.to_string()))
    }

    /// Distinct `.proto` files, in first-seen order.
    pub fn source_files(&self) -> Vec<&'static str> {
        let mut files: Vec<&'static str> = Vec::new();
        for descriptor in self.descriptors {
            if !files.contains(&descriptor.source_file()) {
                files.push(descriptor.source_file());
            }
        }
        files
    }

    pub fn by_source_file(&self, source_file: &str) -> Vec<&'static MessageDescriptor<C>> {
        self.descriptors
            .iter()
            .filter(|descriptor| descriptor.source_file() == source_file)
            .collect()
    }

    pub fn verify_count(&self, expected: usize) -> Result<(), RegistryError> {
        if self.len() != expected {
            return Err(RegistryError::CountMismatch {
                expected,
                actual: self.len(),
            });
        }
        Ok(())
    }

    /// Instantiate every message and confirm the count and that each
    /// instance starts out default. Returns the checked instances.
    pub fn check(&self, expected: usize) -> Result<Vec<Box<C>>, RegistryError> {
        let instances = self.default_instances();
        if instances.len() != expected {
            return Err(RegistryError::CountMismatch {
                expected,
                actual: instances.len(),
            });
        }
        if let Some(dirty) = instances.iter().find(|instance| !instance.lite_view().is_default()) {
            return Err(RegistryError::NotDefault(dirty.lite_view().type_name().to_string()));
        }
        Ok(instances)
    }

    pub fn report(&self) -> RegistryReport {
        let entries = self
            .descriptors
            .iter()
            .zip(self.default_instances())
            .enumerate()
            .map(|(index, (descriptor, instance))| {
                let info = descriptor.info();
                ReportEntry {
                    index,
                    full_name: info.full_name.to_string(),
                    package: info.package.to_string(),
                    source_file: info.source_file.to_string(),
                    default_encoded_len: instance.lite_view().encoded_size(),
                }
            })
            .collect::<Vec<_>>();

        RegistryReport {
            capability: C::CAPABILITY,
            count: entries.len(),
            entries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proto::com::example::tutorial::{Msg, SecondMsg};
    use crate::proto::ws::antonov::protobuf::test::TestMessage;
    use crate::registry::capability::{default_handle, LiteMessage};
    use crate::registry::descriptor::{MessageInfo, MessageType};

    static DUPLICATED: [MessageDescriptor<dyn LiteMessage>; 2] = [
        MessageDescriptor::new(Msg::INFO, default_handle::<Msg, dyn LiteMessage>),
        MessageDescriptor::new(Msg::INFO, default_handle::<Msg, dyn LiteMessage>),
    ];

    static MISNAMED_INFO: MessageInfo = MessageInfo {
        full_name: "com.example.tutorial.Wrong",
        package: "com.example.tutorial",
        name: "SecondMsg",
        source_file: "sample.proto",
    };

    static MISNAMED: [MessageDescriptor<dyn LiteMessage>; 1] = [MessageDescriptor::new(
        &MISNAMED_INFO,
        default_handle::<SecondMsg, dyn LiteMessage>,
    )];

    static MIXED: [MessageDescriptor<dyn LiteMessage>; 3] = [
        MessageDescriptor::new(TestMessage::INFO, default_handle::<TestMessage, dyn LiteMessage>),
        MessageDescriptor::new(Msg::INFO, default_handle::<Msg, dyn LiteMessage>),
        MessageDescriptor::new(SecondMsg::INFO, default_handle::<SecondMsg, dyn LiteMessage>),
    ];

    static EMPTY: [MessageDescriptor<dyn LiteMessage>; 0] = [];

    #[test]
    fn test_duplicate_descriptor_rejected() {
        let err = DefaultInstanceRegistry::new(&DUPLICATED).unwrap_err();
        assert_eq!(
            err,
            RegistryError::DuplicateDescriptor("com.example.tutorial.Msg".to_string())
        );
    }

    #[test]
    fn test_misnamed_descriptor_rejected() {
        let err = DefaultInstanceRegistry::new(&MISNAMED).unwrap_err();
        assert!(matches!(err, RegistryError::InvalidDescriptor(_)));
    }

    #[test]
    fn test_empty_registry() {
        let registry = DefaultInstanceRegistry::new(&EMPTY).unwrap();
        assert!(registry.is_empty());
        assert!(registry.default_instances().is_empty());
        assert!(registry.source_files().is_empty());
    }

    #[test]
    fn test_order_follows_table() {
        let registry = DefaultInstanceRegistry::new(&MIXED).unwrap();
        let names: Vec<_> = registry
            .default_instances()
            .iter()
            .map(|instance| instance.type_name())
            .collect();
        assert_eq!(
            names,
            vec![
                "ws.antonov.protobuf.test.TestMessage",
                "com.example.tutorial.Msg",
                "com.example.tutorial.SecondMsg",
            ]
        );
    }

    #[test]
    fn test_source_file_grouping() {
        let registry = DefaultInstanceRegistry::new(&MIXED).unwrap();
        assert_eq!(registry.source_files(), vec!["test.proto", "sample.proto"]);
        let sample: Vec<_> = registry
            .by_source_file("sample.proto")
            .iter()
            .map(|d| d.full_name())
            .collect();
        assert_eq!(sample, vec!["com.example.tutorial.Msg", "com.example.tutorial.SecondMsg"]);
        assert!(registry.by_source_file("missing.proto").is_empty());
    }

    #[test]
    fn test_lookup() {
        let registry = DefaultInstanceRegistry::new(&MIXED).unwrap();
        assert!(registry.find("com.example.tutorial.Msg").is_some());
        assert!(registry.find("Msg").is_none());

        let instance = registry.instantiate("com.example.tutorial.SecondMsg").unwrap();
        assert!(instance.is_default());

        let err = registry.instantiate("com.example.tutorial.Missing").err().unwrap();
        assert_eq!(err, RegistryError::UnknownMessage("com.example.tutorial.Missing".to_string()));
    }

    #[test]
    fn test_verify_count() {
        let registry = DefaultInstanceRegistry::new(&MIXED).unwrap();
        assert!(registry.verify_count(3).is_ok());
        assert_eq!(
            registry.verify_count(4),
            Err(RegistryError::CountMismatch { expected: 4, actual: 3 })
        );
        assert_eq!(registry.check(3).unwrap().len(), 3);
        assert!(registry.check(2).is_err());
    }

    #[test]
    fn test_report() {
        let registry = DefaultInstanceRegistry::new(&MIXED).unwrap();
        let report = registry.report();
        assert_eq!(report.capability, Capability::Lite);
        assert_eq!(report.count, 3);
        assert_eq!(report.entries[1].full_name, "com.example.tutorial.Msg");
        assert_eq!(report.entries[1].package, "com.example.tutorial");
        assert_eq!(report.entries[1].index, 1);
        assert!(report.entries.iter().all(|e| e.default_encoded_len == 0));
    }
}
