//! Diesel schema for account persistence.

diesel::table! {
    /// Account records with unique usernames.
    accounts (id) {
        /// Account identifier.
        id -> Uuid,
        /// Unique username.
        #[max_length = 100]
        username -> Varchar,
        /// Salted derived credential.
        #[max_length = 255]
        password_hash -> Varchar,
    }
}
