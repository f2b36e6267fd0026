//! Diesel schema for task persistence.

diesel::table! {
    /// Owner-scoped task records.
    tasks (id) {
        /// Store-assigned task identifier.
        id -> Int8,
        /// Identifier of the owning user.
        owner_id -> Int8,
        /// Trimmed, non-empty description.
        description -> Text,
        /// Completion flag.
        is_done -> Bool,
        /// Optional due date.
        deadline -> Nullable<Date>,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}
