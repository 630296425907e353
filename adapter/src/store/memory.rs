//! In-process document store for tests and local runs.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use shared::error::{AppError, AppResult};
use tokio::sync::RwLock;

use super::{apply_field_values, compare_values, Document, DocumentPath, DocumentStore, Query, Snapshot, Write};

type Collections = HashMap<String, BTreeMap<String, Document>>;

#[derive(Default)]
pub struct MemoryStore {
    collections: RwLock<Collections>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn lookup<'a>(collections: &'a Collections, path: &DocumentPath) -> Option<&'a Document> {
    collections
        .get(path.collection())
        .and_then(|docs| docs.get(path.id()))
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn get(&self, path: &DocumentPath) -> AppResult<Snapshot> {
        let collections = self.collections.read().await;
        Ok(Snapshot {
            path: path.clone(),
            data: lookup(&collections, path).cloned(),
        })
    }

    async fn query(&self, query: &Query) -> AppResult<Vec<Snapshot>> {
        let collections = self.collections.read().await;
        let Some(docs) = collections.get(&query.collection) else {
            return Ok(Vec::new());
        };

        // BTreeMap iteration already yields id order, which breaks ties below.
        let mut matched: Vec<(&String, &Document)> =
            docs.iter().filter(|(_, doc)| query.matches(doc)).collect();
        if let Some(field) = &query.order_by {
            matched.retain(|(_, doc)| doc.contains_key(field));
            matched.sort_by(|(_, a), (_, b)| {
                compare_values(&a[field], &b[field]).unwrap_or(std::cmp::Ordering::Equal)
            });
        }

        Ok(matched
            .into_iter()
            .map(|(id, doc)| Snapshot {
                path: DocumentPath::new(query.collection.clone(), id.clone()),
                data: Some(doc.clone()),
            })
            .collect())
    }

    async fn commit(&self, writes: Vec<Write>) -> AppResult<()> {
        let mut collections = self.collections.write().await;

        // Stage every write against the current state first so a failing
        // update leaves the store untouched.
        let mut staged: BTreeMap<DocumentPath, Option<Document>> = BTreeMap::new();
        for write in writes {
            match write {
                Write::Set { path, data } => {
                    staged.insert(path, Some(data));
                }
                Write::Delete { path } => {
                    staged.insert(path, None);
                }
                Write::Update { path, fields } => {
                    let current = match staged.get(&path) {
                        Some(doc) => doc.clone(),
                        None => lookup(&collections, &path).cloned(),
                    };
                    let Some(mut doc) = current else {
                        return Err(AppError::EntityNotFound(format!(
                            "no document to update at {path}"
                        )));
                    };
                    apply_field_values(&mut doc, fields);
                    staged.insert(path, Some(doc));
                }
            }
        }

        tracing::debug!(writes = staged.len(), "committing batch to memory store");
        for (path, doc) in staged {
            match doc {
                Some(doc) => {
                    collections
                        .entry(path.collection().to_owned())
                        .or_default()
                        .insert(path.id().to_owned(), doc);
                }
                None => {
                    if let Some(docs) = collections.get_mut(path.collection()) {
                        docs.remove(path.id());
                    }
                }
            }
        }
        Ok(())
    }

    async fn ping(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::store::{to_document, FieldValue, FilterOp};

    #[tokio::test]
    async fn get_on_missing_path_returns_empty_snapshot() -> anyhow::Result<()> {
        let store = MemoryStore::new();
        let snapshot = store.get(&DocumentPath::new("Users", "nobody")).await?;
        assert!(!snapshot.exists());
        assert_eq!(snapshot.id(), "nobody");
        Ok(())
    }

    #[tokio::test]
    async fn add_assigns_distinct_ids() -> anyhow::Result<()> {
        let store = MemoryStore::new();
        let a = store.add("Users", to_document(&json!({ "n": 1 }))?).await?;
        let b = store.add("Users", to_document(&json!({ "n": 2 }))?).await?;
        assert_ne!(a, b);
        assert!(store.get(&a).await?.exists());
        Ok(())
    }

    #[tokio::test]
    async fn failed_update_rolls_back_whole_batch() -> anyhow::Result<()> {
        let store = MemoryStore::new();
        let event = DocumentPath::new("Events", "e1");
        let result = store
            .commit(vec![
                Write::Set {
                    path: event.clone(),
                    data: to_document(&json!({ "name": "Open Board" }))?,
                },
                Write::Update {
                    path: DocumentPath::new("Clubs", "Missing Club"),
                    fields: vec![("events".into(), FieldValue::ArrayUnion(vec![json!("Events/e1")]))],
                },
            ])
            .await;

        assert!(matches!(result, Err(AppError::EntityNotFound(_))));
        assert!(!store.get(&event).await?.exists());
        Ok(())
    }

    #[tokio::test]
    async fn query_orders_by_field() -> anyhow::Result<()> {
        let store = MemoryStore::new();
        for (id, name) in [("1", "Zeta"), ("2", "Alpha"), ("3", "Mu")] {
            store
                .set(&DocumentPath::new("Clubs", id), to_document(&json!({ "name": name }))?)
                .await?;
        }

        let names: Vec<String> = store
            .query(
                &Query::collection("Clubs")
                    .filter("name", FilterOp::GreaterOrEqual, "B")
                    .order_by("name"),
            )
            .await?
            .into_iter()
            .map(|s| s.data.unwrap()["name"].as_str().unwrap().to_owned())
            .collect();
        assert_eq!(names, vec!["Mu", "Zeta"]);
        Ok(())
    }

    #[tokio::test]
    async fn delete_of_missing_document_succeeds() -> anyhow::Result<()> {
        let store = MemoryStore::new();
        store.delete(&DocumentPath::new("Clubs", "Ghost")).await?;
        Ok(())
    }
}
