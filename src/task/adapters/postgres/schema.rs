//! Diesel schema for task persistence.

diesel::table! {
    /// Task records.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Short title.
        #[max_length = 100]
        title -> Varchar,
        /// Free-text body, line breaks preserved.
        body -> Text,
        /// Durable completion flag.
        completed -> Bool,
        /// Deadline.
        deadline -> Timestamptz,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}
