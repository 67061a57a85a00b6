mod registration_create_user_event_idx;

use sqlx_migrator::vec_box;

pub struct Migration;

sqlx_migrator::sqlite_migration!(
    Migration,
    "main",
    "m0_2",
    vec_box![super::m0_1::Migration],
    vec_box![registration_create_user_event_idx::Operation]
);
