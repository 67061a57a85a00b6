use sea_query::{ColumnDef, Table, TableCreateStatement, TableDropStatement};

use crate::table::UserProfile;

pub struct Operation;

fn create_user_profile_table_statement() -> TableCreateStatement {
    Table::create()
        .table(UserProfile::Table)
        .col(
            ColumnDef::new(UserProfile::Id)
                .string()
                .not_null()
                .primary_key(),
        )
        .col(ColumnDef::new(UserProfile::Name).string().null())
        .col(ColumnDef::new(UserProfile::StudentId).string().null())
        .col(ColumnDef::new(UserProfile::Email).string().null())
        .col(
            ColumnDef::new(UserProfile::Role)
                .string()
                .not_null()
                .string_len(15),
        )
        .col(
            ColumnDef::new(UserProfile::CreatedAt)
                .big_integer()
                .not_null(),
        )
        .to_owned()
}

fn drop_user_profile_table_statement() -> TableDropStatement {
    Table::drop().table(UserProfile::Table).to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for Operation {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statment =
            create_user_profile_table_statement().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statment).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statment = drop_user_profile_table_statement().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statment).execute(connection).await?;

        Ok(())
    }
}
