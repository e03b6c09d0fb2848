//! Person row mapping.

use chrono::NaiveDate;
use sqlx::FromRow;

use filmgraph_core::model::person::Person;
use filmgraph_core::types::DbId;

/// A row from the `people` table.
#[derive(Debug, Clone, FromRow)]
pub struct PersonRow {
    pub id: DbId,
    pub email: String,
    pub login: String,
    pub name: String,
    pub birthday: NaiveDate,
}

impl From<PersonRow> for Person {
    fn from(row: PersonRow) -> Self {
        Person {
            id: row.id,
            email: row.email,
            login: row.login,
            name: row.name,
            birthday: row.birthday,
        }
    }
}
