//! Capability surfaces shared by every generated message.
//!
//! `LiteMessage` is the minimal surface (identity, encoding, reset).
//! `FullMessage` extends it with static schema information, downcasting and
//! cloning. A registry is parameterised over one of the two trait objects.

use std::any::Any;
use std::fmt::Debug;

use prost::Message;

use super::descriptor::{MessageInfo, MessageType};
use crate::core::Capability;

pub trait LiteMessage: Send + Sync + 'static {
    /// Fully-qualified protobuf name.
    fn type_name(&self) -> &'static str;

    /// Size of the wire encoding in bytes.
    fn encoded_size(&self) -> usize;

    fn to_bytes(&self) -> Vec<u8>;

    /// Reset every field to its default.
    fn reset(&mut self);

    /// True when no field is set. Proto3 defaults are never written to the
    /// wire, so a default message encodes to zero bytes.
    fn is_default(&self) -> bool {
        self.encoded_size() == 0
    }
}

impl<M> LiteMessage for M
where
    M: Message + MessageType + Send + Sync + 'static,
{
    fn type_name(&self) -> &'static str {
        M::INFO.full_name
    }

    fn encoded_size(&self) -> usize {
        Message::encoded_len(self)
    }

    fn to_bytes(&self) -> Vec<u8> {
        Message::encode_to_vec(self)
    }

    fn reset(&mut self) {
        Message::clear(self)
    }
}

pub trait FullMessage: LiteMessage + Debug {
    fn info(&self) -> &'static MessageInfo;

    fn as_lite(&self) -> &dyn LiteMessage;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn clone_boxed(&self) -> Box<dyn FullMessage>;
}

impl<M> FullMessage for M
where
    M: Message + MessageType + Clone + Send + Sync + 'static,
{
    fn info(&self) -> &'static MessageInfo {
        M::INFO
    }

    fn as_lite(&self) -> &dyn LiteMessage {
        self
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn clone_boxed(&self) -> Box<dyn FullMessage> {
        Box::new(self.clone())
    }
}

impl dyn FullMessage {
    pub fn downcast_ref<T: FullMessage>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    pub fn downcast_mut<T: FullMessage>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut::<T>()
    }
}

impl Clone for Box<dyn FullMessage> {
    fn clone(&self) -> Self {
        self.clone_boxed()
    }
}

/// Converts a concrete message into a handle of capability `C`.
pub trait IntoHandle<C: ?Sized> {
    fn into_handle(self) -> Box<C>;
}

impl<M: LiteMessage> IntoHandle<dyn LiteMessage> for M {
    fn into_handle(self) -> Box<dyn LiteMessage> {
        Box::new(self)
    }
}

impl<M: FullMessage> IntoHandle<dyn FullMessage> for M {
    fn into_handle(self) -> Box<dyn FullMessage> {
        Box::new(self)
    }
}

/// Default-instance constructor stored in descriptor tables.
pub fn default_handle<M, C>() -> Box<C>
where
    M: MessageType + IntoHandle<C>,
    C: ?Sized,
{
    M::default_instance().into_handle()
}

/// A trait object a registry can hand out.
pub trait CapabilityObject: 'static {
    const CAPABILITY: Capability;

    fn lite_view(&self) -> &dyn LiteMessage;
}

impl CapabilityObject for dyn LiteMessage {
    const CAPABILITY: Capability = Capability::Lite;

    fn lite_view(&self) -> &dyn LiteMessage {
        self
    }
}

impl CapabilityObject for dyn FullMessage {
    const CAPABILITY: Capability = Capability::Full;

    fn lite_view(&self) -> &dyn LiteMessage {
        self.as_lite()
    }
}
