//! Internal Diesel row structs for the contacts table.
//!
//! These types never leave the persistence layer.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use super::schema::contacts;

/// Row struct for reading from the contacts table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = contacts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ContactRow {
    pub id: Uuid,
    pub name: String,
    pub number: String,
    #[expect(dead_code, reason = "selected to keep row layout aligned with the table")]
    pub created_at: DateTime<Utc>,
    #[expect(dead_code, reason = "selected to keep row layout aligned with the table")]
    pub updated_at: DateTime<Utc>,
}

/// Insertable struct for new contacts. Timestamps use column defaults.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = contacts)]
pub(crate) struct NewContactRow<'a> {
    pub id: Uuid,
    pub name: &'a str,
    pub number: &'a str,
}

/// Changeset replacing a contact's name and number.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = contacts)]
pub(crate) struct ContactUpdate<'a> {
    pub name: &'a str,
    pub number: &'a str,
    pub updated_at: DateTime<Utc>,
}
