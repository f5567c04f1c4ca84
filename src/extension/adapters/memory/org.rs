//! In-memory org for extension registration tests and dry runs.

use async_trait::async_trait;
use serde_json::{Map, Value};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

use crate::extension::{
    domain::{
        APEX_CLASS_OBJECT, ActingIdentity, EXTENSION_POINT_FIELD, PICKLIST_VALUE_OBJECT,
        REGISTERED_EXTERNAL_SERVICE, RecordFields, RecordId, SoqlQuery,
    },
    ports::{GatewayError, GatewayResult, QueryResult, RemoteDataGateway, RemoteRecord},
};

/// Length of identifiers minted by the in-memory org.
const RECORD_ID_LENGTH: usize = 18;

/// Gateway call captured by [`InMemoryOrg`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayCall {
    /// A query against an object type.
    Query {
        /// Queried object type.
        object: String,
        /// Identity the call ran as.
        identity: ActingIdentity,
    },
    /// A create against an object type.
    Create {
        /// Target object type.
        object: String,
        /// Identity the call ran as.
        identity: ActingIdentity,
    },
}

/// Thread-safe in-memory remote object store.
///
/// Rows are flat JSON objects keyed by field name; dotted relationship paths
/// such as `EntityParticle.DurableId` are stored as literal keys. Creating a
/// `RegisteredExternalService` enforces `DeveloperName` uniqueness the way
/// the remote store does.
#[derive(Debug, Clone, Default)]
pub struct InMemoryOrg {
    state: Arc<RwLock<InMemoryOrgState>>,
}

#[derive(Debug, Default)]
struct InMemoryOrgState {
    objects: HashMap<String, Vec<Map<String, Value>>>,
    created_ids: HashSet<String>,
    hide_created: bool,
    next_id: u64,
    calls: Vec<GatewayCall>,
}

impl InMemoryOrgState {
    fn mint_id(&mut self, object: &str) -> GatewayResult<RecordId> {
        self.next_id += 1;
        let prefix = key_prefix(object);
        let width = RECORD_ID_LENGTH - prefix.len();
        RecordId::new(format!("{prefix}{:0>width$}", self.next_id))
            .map_err(|err| GatewayError::MalformedResponse(err.to_string()))
    }

    fn insert_row(&mut self, object: &str, mut row: Map<String, Value>) -> GatewayResult<RecordId> {
        let id = self.mint_id(object)?;
        row.insert("Id".to_owned(), Value::String(id.as_str().to_owned()));
        self.objects.entry(object.to_owned()).or_default().push(row);
        Ok(id)
    }
}

impl InMemoryOrg {
    /// Creates an empty org.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds an Apex class and returns its identifier.
    ///
    /// # Errors
    ///
    /// Returns gateway errors when lock acquisition fails.
    pub fn insert_apex_class(&self, name: impl Into<String>) -> GatewayResult<RecordId> {
        let mut row = Map::new();
        row.insert("Name".to_owned(), Value::String(name.into()));
        self.write_state()?.insert_row(APEX_CLASS_OBJECT, row)
    }

    /// Seeds a valid extension point picklist value.
    ///
    /// # Errors
    ///
    /// Returns gateway errors when lock acquisition fails.
    pub fn insert_extension_point(&self, value: impl Into<String>) -> GatewayResult<()> {
        let mut row = Map::new();
        row.insert("Value".to_owned(), Value::String(value.into()));
        row.insert(
            "EntityParticle.DurableId".to_owned(),
            Value::String(EXTENSION_POINT_FIELD.to_owned()),
        );
        self.write_state()?.insert_row(PICKLIST_VALUE_OBJECT, row)?;
        Ok(())
    }

    /// Hides records created through the gateway from later queries.
    ///
    /// Models read-after-write lag on the remote store.
    ///
    /// # Errors
    ///
    /// Returns gateway errors when lock acquisition fails.
    pub fn set_hide_created_records(&self, hide: bool) -> GatewayResult<()> {
        self.write_state()?.hide_created = hide;
        Ok(())
    }

    /// Returns every stored row of `object`, including hidden ones.
    ///
    /// # Errors
    ///
    /// Returns gateway errors when lock acquisition fails.
    pub fn records(&self, object: &str) -> GatewayResult<Vec<RemoteRecord>> {
        let state = self.read_state()?;
        Ok(state
            .objects
            .get(object)
            .map(|rows| rows.iter().cloned().map(RemoteRecord::new).collect())
            .unwrap_or_default())
    }

    /// Returns the gateway calls received so far, in order.
    ///
    /// # Errors
    ///
    /// Returns gateway errors when lock acquisition fails.
    pub fn calls(&self) -> GatewayResult<Vec<GatewayCall>> {
        Ok(self.read_state()?.calls.clone())
    }

    fn read_state(&self) -> GatewayResult<std::sync::RwLockReadGuard<'_, InMemoryOrgState>> {
        self.state
            .read()
            .map_err(|err| GatewayError::transport(std::io::Error::other(err.to_string())))
    }

    fn write_state(&self) -> GatewayResult<std::sync::RwLockWriteGuard<'_, InMemoryOrgState>> {
        self.state
            .write()
            .map_err(|err| GatewayError::transport(std::io::Error::other(err.to_string())))
    }
}

#[async_trait]
impl RemoteDataGateway for InMemoryOrg {
    async fn query(
        &self,
        statement: &SoqlQuery,
        identity: &ActingIdentity,
    ) -> GatewayResult<QueryResult> {
        let mut state = self.write_state()?;
        state.calls.push(GatewayCall::Query {
            object: statement.object().to_owned(),
            identity: identity.clone(),
        });

        let limit = statement
            .row_limit()
            .and_then(|rows| usize::try_from(rows).ok())
            .unwrap_or(usize::MAX);
        let rows = state
            .objects
            .get(statement.object())
            .map(Vec::as_slice)
            .unwrap_or_default();
        let records = rows
            .iter()
            .filter(|row| !(state.hide_created && is_created(&state.created_ids, row)))
            .filter(|row| matches_filters(row, statement))
            .take(limit)
            .map(|row| select_fields(row, statement))
            .collect();
        Ok(QueryResult::from_records(records))
    }

    async fn create(
        &self,
        object_type: &str,
        fields: &RecordFields,
        identity: &ActingIdentity,
    ) -> GatewayResult<RecordId> {
        let mut state = self.write_state()?;
        state.calls.push(GatewayCall::Create {
            object: object_type.to_owned(),
            identity: identity.clone(),
        });

        if object_type == REGISTERED_EXTERNAL_SERVICE
            && let Some(name) = fields.get("DeveloperName")
            && state
                .objects
                .get(object_type)
                .is_some_and(|rows| rows.iter().any(|row| field_equals(row, "DeveloperName", name)))
        {
            return Err(GatewayError::rejected(
                Some("DUPLICATE_DEVELOPER_NAME".to_owned()),
                format!("The DeveloperName '{name}' is already in use"),
            ));
        }

        let row = fields
            .iter()
            .map(|(field, value)| (field.to_owned(), Value::String(value.to_owned())))
            .collect();
        let id = state.insert_row(object_type, row)?;
        state.created_ids.insert(id.as_str().to_owned());
        Ok(id)
    }
}

fn key_prefix(object: &str) -> &'static str {
    match object {
        APEX_CLASS_OBJECT => "01p",
        REGISTERED_EXTERNAL_SERVICE => "0ZE",
        PICKLIST_VALUE_OBJECT => "4pv",
        _ => "a00",
    }
}

fn is_created(created_ids: &HashSet<String>, row: &Map<String, Value>) -> bool {
    row.get("Id")
        .and_then(Value::as_str)
        .is_some_and(|id| created_ids.contains(id))
}

fn field_equals(row: &Map<String, Value>, field: &str, expected: &str) -> bool {
    row.get(field).and_then(Value::as_str) == Some(expected)
}

fn matches_filters(row: &Map<String, Value>, statement: &SoqlQuery) -> bool {
    statement
        .filters()
        .iter()
        .all(|filter| field_equals(row, filter.field(), filter.value()))
}

fn select_fields(row: &Map<String, Value>, statement: &SoqlQuery) -> RemoteRecord {
    let selected = statement
        .fields()
        .iter()
        .map(|field| {
            let value = row.get(field).cloned().unwrap_or(Value::Null);
            (field.clone(), value)
        })
        .collect();
    RemoteRecord::new(selected)
}

#[cfg(test)]
mod tests {
    use super::{GatewayCall, InMemoryOrg};
    use crate::extension::{
        domain::{ActingIdentity, RecordFields, SoqlQuery},
        ports::{GatewayError, RemoteDataGateway},
    };
    use rstest::{fixture, rstest};

    #[fixture]
    fn org() -> InMemoryOrg {
        InMemoryOrg::new()
    }

    fn identity() -> ActingIdentity {
        ActingIdentity::new("admin@example.com")
    }

    #[rstest]
    fn minted_ids_use_object_prefix(org: InMemoryOrg) {
        let id = org.insert_apex_class("MyHandler").expect("seed class");
        assert!(id.as_str().starts_with("01p"));
        assert_eq!(id.as_str().len(), 18);
    }

    #[rstest]
    #[tokio::test]
    async fn query_honours_filters_and_limit(org: InMemoryOrg) {
        org.insert_apex_class("A").expect("seed class");
        org.insert_apex_class("A").expect("seed class");
        org.insert_apex_class("B").expect("seed class");

        let query = SoqlQuery::select("ApexClass", ["Id", "Name"])
            .where_eq("Name", "A")
            .limit(1);
        let result = org.query(&query, &identity()).await.expect("query");

        assert_eq!(result.total_size(), 1);
        let name = result
            .records()
            .first()
            .and_then(|row| row.get("Name"))
            .and_then(|value| value.as_str());
        assert_eq!(name, Some("A"));
    }

    #[rstest]
    #[tokio::test]
    async fn duplicate_developer_name_is_rejected(org: InMemoryOrg) {
        let fields = RecordFields::new().with("DeveloperName", "MyGateway");
        org.create("RegisteredExternalService", &fields, &identity())
            .await
            .expect("first create");

        let duplicate = org
            .create("RegisteredExternalService", &fields, &identity())
            .await;

        assert!(matches!(duplicate, Err(GatewayError::Rejected { .. })));
    }

    #[rstest]
    #[tokio::test]
    async fn hidden_created_records_are_not_queried(org: InMemoryOrg) {
        org.set_hide_created_records(true).expect("toggle lag");
        let fields = RecordFields::new().with("DeveloperName", "MyGateway");
        org.create("RegisteredExternalService", &fields, &identity())
            .await
            .expect("create");

        let query = SoqlQuery::select("RegisteredExternalService", ["Id"])
            .where_eq("DeveloperName", "MyGateway");
        let result = org.query(&query, &identity()).await.expect("query");

        assert!(result.is_empty());
        assert_eq!(
            org.records("RegisteredExternalService")
                .expect("records")
                .len(),
            1
        );
    }

    #[rstest]
    #[tokio::test]
    async fn calls_are_recorded_in_order(org: InMemoryOrg) {
        let query = SoqlQuery::select("ApexClass", ["Id"]);
        org.query(&query, &identity()).await.expect("query");
        org.create("Account", &RecordFields::new(), &identity())
            .await
            .expect("create");

        let calls = org.calls().expect("calls");
        assert_eq!(
            calls,
            vec![
                GatewayCall::Query {
                    object: "ApexClass".to_owned(),
                    identity: identity(),
                },
                GatewayCall::Create {
                    object: "Account".to_owned(),
                    identity: identity(),
                },
            ]
        );
    }
}
