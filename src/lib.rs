/*
 * Copyright 2025 Vijaykumar Singh
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

//! # protodefaults
//!
//! Build verification for compiled protobuf bindings.
//!
//! `build.rs` compiles `proto/*.proto` into native message types under
//! [`proto`]. The [`registry`] enumerates every compiled-in message type and
//! hands out one default-constructed instance of each through a shared
//! capability trait object.
//!
//! ## Capabilities
//!
//! - [`LiteMessage`]: type name, encoding, reset, default check
//! - [`FullMessage`]: everything above plus schema info, downcasting, cloning
//!
//! The `lite` cargo feature selects which one [`MessageHandle`] refers to.
//!
//! ```no_run
//! let instances = protodefaults::default_instances();
//! assert_eq!(instances.len(), 6);
//! ```

pub mod core;
pub mod proto;
pub mod registry;

pub use crate::core::*;
pub use registry::{
    full_registry, lite_registry, DefaultInstanceRegistry, FullMessage, LiteMessage,
    MessageDescriptor, MessageInfo, MessageType, RegistryReport,
};

/// Capability object behind every [`MessageHandle`].
#[cfg(feature = "lite")]
pub type MessageCapability = dyn LiteMessage;

/// Capability object behind every [`MessageHandle`].
#[cfg(not(feature = "lite"))]
pub type MessageCapability = dyn FullMessage;

/// Owned, default-constructed message instance.
pub type MessageHandle = Box<MessageCapability>;

/// Registry for the capability selected at build time.
#[cfg(feature = "lite")]
pub fn registry() -> &'static DefaultInstanceRegistry<MessageCapability> {
    lite_registry()
}

/// Registry for the capability selected at build time.
#[cfg(not(feature = "lite"))]
pub fn registry() -> &'static DefaultInstanceRegistry<MessageCapability> {
    full_registry()
}

/// Fresh default instances of every registered message type, in catalog
/// order: `TestMessage`, `AnotherMessage`, `Item`, `DataMap` from
/// `test.proto`, then `Msg`, `SecondMsg` from `sample.proto`.
pub fn default_instances() -> Vec<MessageHandle> {
    registry().default_instances()
}

/// Run the default-instance check for the build-time registry against the
/// count expected by `config`.
pub fn verify(config: &Config) -> Result<Vec<MessageHandle>> {
    Ok(registry().check(config.registry.expected_count)?)
}
