//! Diesel table definitions for the course store.

diesel::table! {
    courses (id) {
        id -> Uuid,
        slug -> Varchar,
        title -> Json,
        category -> Json,
        career -> Json,
        difficulty -> Varchar,
        duration -> Json,
        description -> Json,
        intro -> Json,
        thumbnail_url -> Varchar,
        tags -> Json,
        modules -> Json,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}
