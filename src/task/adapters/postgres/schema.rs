//! Diesel schema for task persistence.

diesel::table! {
    /// Task records.
    tasks (id) {
        /// Storage-assigned task identifier.
        id -> Int4,
        /// Task name.
        #[max_length = 255]
        name -> Varchar,
        /// Due date.
        due_date -> Timestamptz,
        /// Workflow status.
        #[max_length = 20]
        status -> Varchar,
        /// Priority.
        #[max_length = 20]
        priority -> Varchar,
        /// Active flag.
        is_active -> Bool,
        /// Creation timestamp, written once at insert.
        date_of_creation -> Timestamptz,
    }
}
