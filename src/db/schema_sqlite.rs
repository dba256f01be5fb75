// SQLite schema definitions for the two sample tables.

diesel::table! {
    abscissa (sample_number) {
        sample_number -> Integer,
        value -> Double,
        created_at -> Text,
    }
}

diesel::table! {
    ordinate (curve, sample_number) {
        curve -> Text,
        sample_number -> Integer,
        value -> Double,
        created_at -> Text,
    }
}

diesel::allow_tables_to_appear_in_same_query!(abscissa, ordinate);
