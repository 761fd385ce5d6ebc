//! Diesel schema for todo persistence.

diesel::table! {
    /// Todo rows in canonical storage form.
    tasks (id) {
        /// Registry-assigned todo identifier.
        id -> BigInt,
        /// Work-item description.
        name -> Text,
        /// Canonical `YYYY-MM-DD` due date.
        dueby -> Text,
        /// Normalised status text.
        status -> Text,
    }
}
