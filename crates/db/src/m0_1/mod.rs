mod event_create_date_idx;
mod event_create_table;
mod registration_create_event_id_idx;
mod registration_create_table;
mod registration_create_user_id_idx;
mod user_profile_create_table;

use sqlx_migrator::vec_box;

pub struct Migration;

sqlx_migrator::sqlite_migration!(
    Migration,
    "main",
    "m0_1",
    vec_box![],
    vec_box![
        user_profile_create_table::Operation,
        event_create_table::Operation,
        event_create_date_idx::Operation,
        registration_create_table::Operation,
        registration_create_event_id_idx::Operation,
        registration_create_user_id_idx::Operation,
    ]
);
