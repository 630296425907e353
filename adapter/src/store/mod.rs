//! Document store boundary.
//!
//! Records are JSON objects addressed by `collection/id`. The data-access
//! repositories depend only on [`DocumentStore`]; the backend is chosen at
//! startup.

use std::{cmp::Ordering, fmt, str::FromStr};

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};
use shared::error::{AppError, AppResult};
use uuid::Uuid;

pub mod memory;

pub type Document = Map<String, Value>;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentPath {
    collection: String,
    id: String,
}

impl DocumentPath {
    pub fn new(collection: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            id: id.into(),
        }
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for DocumentPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.collection, self.id)
    }
}

impl FromStr for DocumentPath {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('/') {
            Some((collection, id))
                if !collection.is_empty() && !id.is_empty() && !id.contains('/') =>
            {
                Ok(Self::new(collection, id))
            }
            _ => Err(AppError::ConversionEntityError(format!(
                "malformed document path: {s}"
            ))),
        }
    }
}

/// Result of reading one path. `data` is `None` when nothing is stored there.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub path: DocumentPath,
    pub data: Option<Document>,
}

impl Snapshot {
    pub fn exists(&self) -> bool {
        self.data.is_some()
    }

    pub fn id(&self) -> &str {
        self.path.id()
    }

    pub fn decode<T: DeserializeOwned>(&self) -> AppResult<Option<T>> {
        self.data
            .as_ref()
            .map(|data| {
                serde_json::from_value(Value::Object(data.clone())).map_err(|e| {
                    AppError::ConversionEntityError(format!(
                        "failed to decode {}: {e}",
                        self.path
                    ))
                })
            })
            .transpose()
    }
}

pub fn to_document<T: Serialize>(value: &T) -> AppResult<Document> {
    match serde_json::to_value(value) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(AppError::ConversionEntityError(format!(
            "expected an object, got {other}"
        ))),
        Err(e) => Err(AppError::ConversionEntityError(e.to_string())),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    Equal,
    GreaterOrEqual,
    LessThan,
    LessOrEqual,
}

impl FilterOp {
    pub fn as_sql(&self) -> &'static str {
        match self {
            FilterOp::Equal => "=",
            FilterOp::GreaterOrEqual => ">=",
            FilterOp::LessThan => "<",
            FilterOp::LessOrEqual => "<=",
        }
    }

    fn accepts(&self, ordering: Ordering) -> bool {
        match self {
            FilterOp::Equal => ordering == Ordering::Equal,
            FilterOp::GreaterOrEqual => ordering != Ordering::Less,
            FilterOp::LessThan => ordering == Ordering::Less,
            FilterOp::LessOrEqual => ordering != Ordering::Greater,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    pub field: String,
    pub op: FilterOp,
    pub value: Value,
}

impl Filter {
    /// A document lacking the field, or holding a value of another type,
    /// never matches.
    pub fn matches(&self, doc: &Document) -> bool {
        doc.get(&self.field)
            .and_then(|actual| compare_values(actual, &self.value))
            .is_some_and(|ordering| self.op.accepts(ordering))
    }
}

/// Predicate query over one collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub collection: String,
    pub filters: Vec<Filter>,
    pub order_by: Option<String>,
}

impl Query {
    pub fn collection(collection: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            filters: Vec::new(),
            order_by: None,
        }
    }

    pub fn filter(mut self, field: impl Into<String>, op: FilterOp, value: impl Into<Value>) -> Self {
        self.filters.push(Filter {
            field: field.into(),
            op,
            value: value.into(),
        });
        self
    }

    pub fn order_by(mut self, field: impl Into<String>) -> Self {
        self.order_by = Some(field.into());
        self
    }

    pub fn matches(&self, doc: &Document) -> bool {
        self.filters.iter().all(|f| f.matches(doc))
    }
}

/// Strings compare by UTF-8 bytes, numbers numerically. Values of different
/// types are unordered.
pub fn compare_values(a: &Value, b: &Value) -> Option<Ordering> {
    match (a, b) {
        (Value::Null, Value::Null) => Some(Ordering::Equal),
        (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
        (Value::Number(a), Value::Number(b)) => a.as_f64()?.partial_cmp(&b.as_f64()?),
        (Value::String(a), Value::String(b)) => Some(a.as_bytes().cmp(b.as_bytes())),
        (a, b) if a == b => Some(Ordering::Equal),
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Set(Value),
    /// Appends each value that is not already present in the array.
    ArrayUnion(Vec<Value>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Write {
    Set {
        path: DocumentPath,
        data: Document,
    },
    /// Merges fields into an existing document. Fails if the document is
    /// missing.
    Update {
        path: DocumentPath,
        fields: Vec<(String, FieldValue)>,
    },
    Delete {
        path: DocumentPath,
    },
}

pub fn apply_field_values(doc: &mut Document, fields: Vec<(String, FieldValue)>) {
    for (field, value) in fields {
        match value {
            FieldValue::Set(value) => {
                doc.insert(field, value);
            }
            FieldValue::ArrayUnion(values) => {
                let slot = doc
                    .entry(field)
                    .or_insert_with(|| Value::Array(Vec::new()));
                if !slot.is_array() {
                    *slot = Value::Array(Vec::new());
                }
                if let Value::Array(items) = slot {
                    for value in values {
                        if !items.contains(&value) {
                            items.push(value);
                        }
                    }
                }
            }
        }
    }
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn get(&self, path: &DocumentPath) -> AppResult<Snapshot>;

    async fn query(&self, query: &Query) -> AppResult<Vec<Snapshot>>;

    /// Applies every write or none of them.
    async fn commit(&self, writes: Vec<Write>) -> AppResult<()>;

    async fn ping(&self) -> bool;

    fn generate_id(&self) -> String {
        Uuid::new_v4().simple().to_string()
    }

    async fn set(&self, path: &DocumentPath, data: Document) -> AppResult<()> {
        self.commit(vec![Write::Set {
            path: path.clone(),
            data,
        }])
        .await
    }

    async fn add(&self, collection: &str, data: Document) -> AppResult<DocumentPath> {
        let path = DocumentPath::new(collection, self.generate_id());
        self.set(&path, data).await?;
        Ok(path)
    }

    async fn update(&self, path: &DocumentPath, fields: Vec<(String, FieldValue)>) -> AppResult<()> {
        self.commit(vec![Write::Update {
            path: path.clone(),
            fields,
        }])
        .await
    }

    async fn delete(&self, path: &DocumentPath) -> AppResult<()> {
        self.commit(vec![Write::Delete { path: path.clone() }]).await
    }
}
