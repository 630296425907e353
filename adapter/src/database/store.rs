use async_trait::async_trait;
use derive_new::new;
use serde_json::Value;
use shared::error::{AppError, AppResult};
use sqlx::{types::Json, Postgres, QueryBuilder};

use super::ConnectionPool;
use crate::store::{apply_field_values, Document, DocumentPath, DocumentStore, Query, Snapshot, Write};

/// Document store kept in a single JSONB table.
#[derive(new)]
pub struct PgDocumentStore {
    db: ConnectionPool,
}

impl PgDocumentStore {
    pub async fn ensure_schema(&self) -> AppResult<()> {
        sqlx::query(
            r#"
                CREATE TABLE IF NOT EXISTS documents (
                    collection TEXT NOT NULL,
                    document_id TEXT NOT NULL,
                    data JSONB NOT NULL,
                    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
                    updated_at TIMESTAMPTZ NOT NULL DEFAULT now(),
                    PRIMARY KEY (collection, document_id)
                )
            "#,
        )
        .execute(self.db.inner_ref())
        .await
        .map_err(store_error)?;
        Ok(())
    }
}

// Connection-level failures mean the database is out of reach rather than a
// statement having failed.
fn store_error(e: sqlx::Error) -> AppError {
    match e {
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            AppError::ExternalServiceError(format!("document store is unreachable: {e}"))
        }
        e => AppError::SpecificOperationError(e),
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn get(&self, path: &DocumentPath) -> AppResult<Snapshot> {
        let row: Option<(Json<Document>,)> = sqlx::query_as(
            r#"
                SELECT data
                FROM documents
                WHERE collection = $1 AND document_id = $2
            "#,
        )
        .bind(path.collection())
        .bind(path.id())
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(store_error)?;

        Ok(Snapshot {
            path: path.clone(),
            data: row.map(|(Json(data),)| data),
        })
    }

    async fn query(&self, query: &Query) -> AppResult<Vec<Snapshot>> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT document_id, data FROM documents WHERE collection = ");
        builder.push_bind(query.collection.clone());

        for filter in &query.filters {
            match &filter.value {
                // COLLATE "C" keeps string comparison in byte order.
                Value::String(value) => {
                    builder
                        .push(" AND (data ->> ")
                        .push_bind(filter.field.clone())
                        .push(r#") COLLATE "C" "#)
                        .push(filter.op.as_sql())
                        .push(" ")
                        .push_bind(value.clone());
                }
                value => {
                    builder
                        .push(" AND jsonb_typeof(data -> ")
                        .push_bind(filter.field.clone())
                        .push(") = jsonb_typeof(")
                        .push_bind(Json(value.clone()))
                        .push(") AND (data -> ")
                        .push_bind(filter.field.clone())
                        .push(") ")
                        .push(filter.op.as_sql())
                        .push(" ")
                        .push_bind(Json(value.clone()));
                }
            }
        }

        match &query.order_by {
            Some(field) => {
                builder
                    .push(" AND (data ->> ")
                    .push_bind(field.clone())
                    .push(") IS NOT NULL ORDER BY (data ->> ")
                    .push_bind(field.clone())
                    .push(r#") COLLATE "C", document_id"#);
            }
            None => {
                builder.push(" ORDER BY document_id");
            }
        }

        let rows: Vec<(String, Json<Document>)> = builder
            .build_query_as()
            .fetch_all(self.db.inner_ref())
            .await
            .map_err(store_error)?;

        Ok(rows
            .into_iter()
            .map(|(id, Json(data))| Snapshot {
                path: DocumentPath::new(query.collection.clone(), id),
                data: Some(data),
            })
            .collect())
    }

    async fn commit(&self, writes: Vec<Write>) -> AppResult<()> {
        let mut tx = self.db.begin().await?;

        for write in writes {
            match write {
                Write::Set { path, data } => {
                    sqlx::query(
                        r#"
                            INSERT INTO documents (collection, document_id, data)
                            VALUES ($1, $2, $3)
                            ON CONFLICT (collection, document_id)
                            DO UPDATE SET data = EXCLUDED.data, updated_at = now()
                        "#,
                    )
                    .bind(path.collection())
                    .bind(path.id())
                    .bind(Json(data))
                    .execute(&mut *tx)
                    .await
                    .map_err(store_error)?;
                }
                Write::Update { path, fields } => {
                    let row: Option<(Json<Document>,)> = sqlx::query_as(
                        r#"
                            SELECT data
                            FROM documents
                            WHERE collection = $1 AND document_id = $2
                            FOR UPDATE
                        "#,
                    )
                    .bind(path.collection())
                    .bind(path.id())
                    .fetch_optional(&mut *tx)
                    .await
                    .map_err(store_error)?;

                    // Dropping `tx` on return rolls back earlier writes in the batch.
                    let Some((Json(mut doc),)) = row else {
                        return Err(AppError::EntityNotFound(format!(
                            "no document to update at {path}"
                        )));
                    };
                    apply_field_values(&mut doc, fields);

                    sqlx::query(
                        r#"
                            UPDATE documents
                            SET data = $3, updated_at = now()
                            WHERE collection = $1 AND document_id = $2
                        "#,
                    )
                    .bind(path.collection())
                    .bind(path.id())
                    .bind(Json(doc))
                    .execute(&mut *tx)
                    .await
                    .map_err(store_error)?;
                }
                Write::Delete { path } => {
                    sqlx::query(
                        r#"
                            DELETE FROM documents
                            WHERE collection = $1 AND document_id = $2
                        "#,
                    )
                    .bind(path.collection())
                    .bind(path.id())
                    .execute(&mut *tx)
                    .await
                    .map_err(store_error)?;
                }
            }
        }

        tx.commit().await.map_err(AppError::TransactionError)?;
        Ok(())
    }

    async fn ping(&self) -> bool {
        sqlx::query("SELECT 1")
            .fetch_one(self.db.inner_ref())
            .await
            .is_ok()
    }
}
