//! PostgreSQL-backed `ContactStore` implementation using Diesel ORM.
//!
//! Identifiers are random v4 UUIDs generated here and stored as the primary
//! key. Creates take a `SHARE ROW EXCLUSIVE` lock on `contacts` inside their
//! transaction so two concurrent creates cannot both pass the duplicate-name
//! check. Reads and updates run without explicit locking.

use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};
use mockable::{Clock, DefaultClock};
use tracing::debug;
use uuid::Uuid;

use crate::domain::ports::{ContactStore, ContactStoreError};
use crate::domain::{Contact, ContactDraft, ContactId, ContactName, IdFormat, PhoneNumber};

use super::models::{ContactRow, ContactUpdate, NewContactRow};
use super::pool::{DbPool, PoolError};
use super::schema::contacts;

/// Diesel-backed contact store.
#[derive(Clone)]
pub struct DieselContactStore {
    pool: DbPool,
    clock: Arc<dyn Clock>,
}

impl DieselContactStore {
    /// Create a store over the given pool.
    pub fn new(pool: DbPool) -> Self {
        Self::with_clock(pool, Arc::new(DefaultClock))
    }

    /// Create a store whose `updated_at` stamps come from `clock`.
    pub fn with_clock(pool: DbPool, clock: Arc<dyn Clock>) -> Self {
        Self { pool, clock }
    }
}

fn map_pool_error(error: PoolError) -> ContactStoreError {
    ContactStoreError::connection(error.message())
}

fn map_diesel_error(error: diesel::result::Error) -> ContactStoreError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            ContactStoreError::connection("database connection error")
        }
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            ContactStoreError::query("unique constraint violated")
        }
        DieselError::QueryBuilderError(_) => ContactStoreError::query("database query error"),
        _ => ContactStoreError::query("database error"),
    }
}

fn row_to_contact(row: ContactRow) -> Result<Contact, ContactStoreError> {
    let ContactRow {
        id, name, number, ..
    } = row;
    let name = ContactName::new(name)
        .map_err(|err| ContactStoreError::query(format!("stored contact {id}: {err}")))?;
    let number = PhoneNumber::new(number)
        .map_err(|err| ContactStoreError::query(format!("stored contact {id}: {err}")))?;
    Ok(Contact::new(
        ContactId::Document(id),
        ContactDraft::new(name, number),
    ))
}

/// Sequence ids never reach the database; they cannot name a stored row.
fn document_id(id: &ContactId) -> Option<Uuid> {
    match id {
        ContactId::Document(uuid) => Some(*uuid),
        ContactId::Sequence(_) => None,
    }
}

#[async_trait]
impl ContactStore for DieselContactStore {
    fn id_format(&self) -> IdFormat {
        IdFormat::Document
    }

    async fn list(&self) -> Result<Vec<Contact>, ContactStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<ContactRow> = contacts::table
            .select(ContactRow::as_select())
            .order((contacts::created_at.asc(), contacts::id.asc()))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_contact).collect()
    }

    async fn find_by_id(&self, id: &ContactId) -> Result<Option<Contact>, ContactStoreError> {
        let Some(uuid) = document_id(id) else {
            return Ok(None);
        };
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<ContactRow> = contacts::table
            .find(uuid)
            .select(ContactRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_contact).transpose()
    }

    async fn create(&self, draft: &ContactDraft) -> Result<Contact, ContactStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let name = draft.name().as_ref();
        let new_row = NewContactRow {
            id: Uuid::new_v4(),
            name,
            number: draft.number().as_ref(),
        };

        let inserted: Option<ContactRow> = conn
            .transaction(|conn| {
                async move {
                    diesel::sql_query("LOCK TABLE contacts IN SHARE ROW EXCLUSIVE MODE")
                        .execute(conn)
                        .await?;

                    let taken: bool = diesel::select(diesel::dsl::exists(
                        contacts::table.filter(contacts::name.eq(name)),
                    ))
                    .get_result(conn)
                    .await?;
                    if taken {
                        return Ok(None);
                    }

                    diesel::insert_into(contacts::table)
                        .values(&new_row)
                        .returning(ContactRow::as_returning())
                        .get_result(conn)
                        .await
                        .map(Some)
                }
                .scope_boxed()
            })
            .await
            .map_err(map_diesel_error)?;

        match inserted {
            Some(row) => row_to_contact(row),
            None => Err(ContactStoreError::duplicate_name(name)),
        }
    }

    async fn update(
        &self,
        id: &ContactId,
        draft: &ContactDraft,
    ) -> Result<Option<Contact>, ContactStoreError> {
        let Some(uuid) = document_id(id) else {
            return Ok(None);
        };
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let changes = ContactUpdate {
            name: draft.name().as_ref(),
            number: draft.number().as_ref(),
            updated_at: self.clock.utc(),
        };

        let row: Option<ContactRow> = diesel::update(contacts::table.find(uuid))
            .set(&changes)
            .returning(ContactRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_contact).transpose()
    }

    async fn delete(&self, id: &ContactId) -> Result<(), ContactStoreError> {
        let Some(uuid) = document_id(id) else {
            return Ok(());
        };
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let removed = diesel::delete(contacts::table.find(uuid))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        debug!(contact_id = %uuid, removed, "contact delete executed");
        Ok(())
    }

    async fn count(&self) -> Result<usize, ContactStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let total: i64 = contacts::table
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        usize::try_from(total)
            .map_err(|_| ContactStoreError::query(format!("negative contact count {total}")))
    }
}
