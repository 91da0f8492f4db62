//! The compiled-in message catalog.
//!
//! One list drives both descriptor tables so the lite and full registries
//! can never drift apart.

use once_cell::sync::Lazy;

use super::capability::{default_handle, FullMessage, LiteMessage};
use super::default_registry::DefaultInstanceRegistry;
use super::descriptor::{MessageDescriptor, MessageInfo, MessageType};
use crate::proto::com::example::tutorial as sample;
use crate::proto::testing;
use crate::proto::ws::antonov::protobuf::test as test_proto;

macro_rules! impl_message_type {
    ($file:literal, $package:literal, $ty:path, $name:literal) => {
        impl MessageType for $ty {
            const INFO: &'static MessageInfo = &MessageInfo {
                full_name: concat!($package, ".", $name),
                package: $package,
                name: $name,
                source_file: $file,
            };
        }
    };
}

macro_rules! message_catalog {
    ($( $file:literal => $package:literal { $( $ty:path => $name:literal ),+ $(,)? } )+) => {
        $( $( impl_message_type!($file, $package, $ty, $name); )+ )+

        /// Descriptors handing out `Box<dyn LiteMessage>`.
        pub static LITE_DESCRIPTORS: &[MessageDescriptor<dyn LiteMessage>] = &[
            $( $( MessageDescriptor::new(
                <$ty as MessageType>::INFO,
                default_handle::<$ty, dyn LiteMessage>,
            ), )+ )+
        ];

        /// Descriptors handing out `Box<dyn FullMessage>`.
        pub static FULL_DESCRIPTORS: &[MessageDescriptor<dyn FullMessage>] = &[
            $( $( MessageDescriptor::new(
                <$ty as MessageType>::INFO,
                default_handle::<$ty, dyn FullMessage>,
            ), )+ )+
        ];
    };
}

message_catalog! {
    "test.proto" => "ws.antonov.protobuf.test" {
        test_proto::TestMessage => "TestMessage",
        test_proto::AnotherMessage => "AnotherMessage",
        test_proto::Item => "Item",
        test_proto::DataMap => "DataMap",
    }
    "sample.proto" => "com.example.tutorial" {
        sample::Msg => "Msg",
        sample::SecondMsg => "SecondMsg",
    }
}

// Known to the crate but deliberately kept out of the registry.
impl_message_type!("fixtures.proto", "testing", testing::MsgTest, "MsgTest");

static LITE_REGISTRY: Lazy<DefaultInstanceRegistry<dyn LiteMessage>> =
    Lazy::new(|| built_in(LITE_DESCRIPTORS));

static FULL_REGISTRY: Lazy<DefaultInstanceRegistry<dyn FullMessage>> =
    Lazy::new(|| built_in(FULL_DESCRIPTORS));

fn built_in<C>(descriptors: &'static [MessageDescriptor<C>]) -> DefaultInstanceRegistry<C>
where
    C: ?Sized + super::capability::CapabilityObject,
{
    // The tables are fixed at build time; a malformed one is a build defect,
    // not something a caller can recover from.
    match DefaultInstanceRegistry::new(descriptors) {
        Ok(registry) => registry,
        Err(e) => panic!("built-in descriptor table is malformed: {}", e),
    }
}

pub fn lite_registry() -> &'static DefaultInstanceRegistry<dyn LiteMessage> {
    &LITE_REGISTRY
}

pub fn full_registry() -> &'static DefaultInstanceRegistry<dyn FullMessage> {
    &FULL_REGISTRY
}
