//! Default-instance registry over the compiled protobuf bindings.

pub mod capability;
pub mod catalog;
pub mod default_registry;
pub mod descriptor;

pub use capability::{CapabilityObject, FullMessage, IntoHandle, LiteMessage};
pub use catalog::{full_registry, lite_registry, FULL_DESCRIPTORS, LITE_DESCRIPTORS};
pub use default_registry::{DefaultInstanceRegistry, RegistryReport, ReportEntry};
pub use descriptor::{MessageDescriptor, MessageInfo, MessageType};
