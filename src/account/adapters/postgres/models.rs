//! Diesel row models for account persistence.

use super::schema::accounts;
use diesel::prelude::*;

/// Query result row for account records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = accounts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct AccountRow {
    /// Account identifier.
    pub id: uuid::Uuid,
    /// Unique username.
    pub username: String,
    /// Salted derived credential.
    pub password_hash: String,
}

/// Insert model for account records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = accounts)]
pub struct NewAccountRow {
    /// Account identifier.
    pub id: uuid::Uuid,
    /// Unique username.
    pub username: String,
    /// Salted derived credential.
    pub password_hash: String,
}
