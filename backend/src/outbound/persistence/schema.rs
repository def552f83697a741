//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/sql/schema.sql`. They are used by
//! Diesel for compile-time query validation and type-safe SQL generation.

diesel::table! {
    /// Movie catalogue. `id` is a `SERIAL` primary key.
    movies (id) {
        id -> Int4,
        #[max_length = 255]
        title -> Varchar,
        #[max_length = 255]
        director -> Varchar,
        #[max_length = 255]
        year -> Varchar,
        #[max_length = 255]
        color -> Varchar,
        /// Running time in minutes.
        duration -> Int4,
    }
}

diesel::table! {
    /// Registered users. `email` carries the `users_email_key` unique
    /// constraint.
    users (id) {
        id -> Int4,
        #[max_length = 255]
        firstname -> Varchar,
        #[max_length = 255]
        lastname -> Varchar,
        #[max_length = 255]
        email -> Varchar,
        #[max_length = 255]
        city -> Varchar,
        #[max_length = 255]
        language -> Varchar,
    }
}

diesel::allow_tables_to_appear_in_same_query!(movies, users);
