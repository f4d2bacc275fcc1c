//! Diesel table definitions for the donor store.

diesel::table! {
    donors (id) {
        id -> Uuid,
        name -> Text,
        blood_type -> Text,
        contact_type -> Text,
        contact -> Text,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}
