//! Diesel table definitions for the contact database.
//!
//! Must stay in step with `migrations/`. Regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Phonebook entries.
    ///
    /// `name` is not constrained unique in the database; the store enforces
    /// uniqueness on insert under a table lock.
    contacts (id) {
        /// Primary key: UUID v4 generated by the adapter.
        id -> Uuid,
        name -> Varchar,
        number -> Varchar,
        /// Insertion time, also the primary list ordering.
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}
