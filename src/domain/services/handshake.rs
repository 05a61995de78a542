//! Handshake metadata and identity resolution.

use std::collections::BTreeMap;

use crate::domain::value_objects::{ConnectionHandle, UserId};

/// Query parameter carrying the connecting user's identity.
pub const DEFAULT_IDENTITY_PARAM: &str = "userId";

/// A single handshake field. Repeated query keys become `Many`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetadataValue {
    One(String),
    Many(Vec<String>),
}

/// Transport-level context of one connection, available on connect and
/// disconnect.
#[derive(Debug, Clone)]
pub struct HandshakeContext {
    handle: ConnectionHandle,
    metadata: BTreeMap<String, MetadataValue>,
    identity_param: String,
}

impl HandshakeContext {
    pub fn new(handle: ConnectionHandle) -> Self {
        Self {
            handle,
            metadata: BTreeMap::new(),
            identity_param: DEFAULT_IDENTITY_PARAM.to_string(),
        }
    }

    /// Build the context from raw query pairs, preserving repeated keys.
    pub fn from_pairs<I, K, V>(handle: ConnectionHandle, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut context = Self::new(handle);
        for (key, value) in pairs {
            context.push(key, value);
        }
        context
    }

    /// Read the identity from a different query parameter.
    pub fn with_identity_param(mut self, name: impl Into<String>) -> Self {
        self.identity_param = name.into();
        self
    }

    /// Add one metadata value. A second value for the same key turns the
    /// field into `Many`.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();

        let merged = match self.metadata.remove(&key) {
            None => MetadataValue::One(value),
            Some(MetadataValue::One(first)) => MetadataValue::Many(vec![first, value]),
            Some(MetadataValue::Many(mut values)) => {
                values.push(value);
                MetadataValue::Many(values)
            }
        };
        self.metadata.insert(key, merged);
    }

    pub fn insert_many(&mut self, key: impl Into<String>, values: Vec<String>) {
        self.metadata.insert(key.into(), MetadataValue::Many(values));
    }

    pub fn handle(&self) -> &ConnectionHandle {
        &self.handle
    }

    pub fn get(&self, key: &str) -> Option<&MetadataValue> {
        self.metadata.get(key)
    }

    pub fn identity_param(&self) -> &str {
        &self.identity_param
    }
}

/// Extract the user identity from handshake metadata.
///
/// Returns `None` when the field is missing, repeated, or not a positive
/// integer. Never panics; failures are logged so the caller can simply skip
/// registry mutation.
pub fn resolve_user_id(context: &HandshakeContext) -> Option<UserId> {
    let param = context.identity_param();

    match context.get(param) {
        None => {
            tracing::warn!(handle = %context.handle(), param, "Handshake without user identity");
            None
        }
        Some(MetadataValue::Many(values)) => {
            tracing::warn!(
                handle = %context.handle(),
                param,
                count = values.len(),
                "Handshake identity is multi-valued"
            );
            None
        }
        Some(MetadataValue::One(raw)) => match raw.parse::<UserId>() {
            Ok(user_id) => Some(user_id),
            Err(e) => {
                tracing::warn!(
                    handle = %context.handle(),
                    param,
                    error = %e,
                    "Handshake identity is not a valid user id"
                );
                None
            }
        },
    }
}
