//! Remote data gateway port for querying and creating org records.

use crate::extension::domain::{ActingIdentity, RecordFields, RecordId, SoqlQuery};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::Arc;
use thiserror::Error;

/// Result type for gateway operations.
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Query and create contract against the remote object store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RemoteDataGateway: Send + Sync {
    /// Runs a query as `identity` and returns the matching rows.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] when the remote store rejects the statement or
    /// the transport fails.
    async fn query(
        &self,
        statement: &SoqlQuery,
        identity: &ActingIdentity,
    ) -> GatewayResult<QueryResult>;

    /// Creates one record of `object_type` as `identity`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Rejected`] when the remote store refuses the
    /// record (duplicate key, constraint violation) and other variants for
    /// transport failures.
    async fn create(
        &self,
        object_type: &str,
        fields: &RecordFields,
        identity: &ActingIdentity,
    ) -> GatewayResult<RecordId>;
}

/// Untyped row returned by a query.
///
/// Rows are decoded into typed structs with [`RemoteRecord::decode`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RemoteRecord(Map<String, Value>);

impl RemoteRecord {
    /// Wraps a JSON object as a record.
    #[must_use]
    pub const fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Returns a raw field value.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Decodes the row into a typed record.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::MalformedResponse`] when the row does not match
    /// the target shape.
    pub fn decode<T: DeserializeOwned>(&self) -> GatewayResult<T> {
        serde_json::from_value(Value::Object(self.0.clone()))
            .map_err(|err| GatewayError::MalformedResponse(err.to_string()))
    }
}

impl From<Map<String, Value>> for RemoteRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

/// Rows returned by a query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResult {
    total_size: usize,
    #[serde(default)]
    records: Vec<RemoteRecord>,
}

impl QueryResult {
    /// Builds a result whose total size matches the supplied rows.
    #[must_use]
    pub fn from_records(records: Vec<RemoteRecord>) -> Self {
        Self {
            total_size: records.len(),
            records,
        }
    }

    /// Returns the total number of matching rows reported by the store.
    #[must_use]
    pub const fn total_size(&self) -> usize {
        self.total_size
    }

    /// Returns the returned rows.
    #[must_use]
    pub fn records(&self) -> &[RemoteRecord] {
        &self.records
    }

    /// Returns `true` when the store reported no matching rows.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total_size == 0
    }

    /// Decodes the first row, if any.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::MalformedResponse`] when the first row does not
    /// match the target shape.
    pub fn first_as<T: DeserializeOwned>(&self) -> GatewayResult<Option<T>> {
        self.records.first().map(RemoteRecord::decode).transpose()
    }
}

/// Errors returned by gateway implementations.
#[derive(Debug, Clone, Error)]
pub enum GatewayError {
    /// The remote store refused to create the record.
    #[error("record rejected: {message}")]
    Rejected {
        /// Remote error code, when reported.
        error_code: Option<String>,
        /// Remote error text.
        message: String,
    },

    /// The remote store reported an error for a query.
    #[error("remote error: {0}")]
    Remote(String),

    /// The request cannot be expressed on the gateway's transport.
    #[error("request cannot be encoded: {0}")]
    Unencodable(String),

    /// The response could not be decoded.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// The transport failed before a response was received.
    #[error("transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl GatewayError {
    /// Wraps a transport failure.
    #[must_use]
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }

    /// Builds a rejection with an optional remote error code.
    #[must_use]
    pub fn rejected(error_code: Option<String>, message: impl Into<String>) -> Self {
        Self::Rejected {
            error_code,
            message: message.into(),
        }
    }
}
