use crate::error::OrmResult;
use crate::row::{FromRow, RowExt};
use serde::{Deserialize, Serialize};
use tokio_postgres::Row;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub door_no: i32,
    pub state: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Account {
    pub id: i64,
    pub name: String,
    pub mobile: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub address: Option<Address>,
}

/// Row of `AccountSqlInjector::retrieve_query` (`account.*` then `address.*`).
impl FromRow for Account {
    fn from_row(row: &Row) -> OrmResult<Self> {
        let door_no: Option<i32> = row.try_get_column("door_no")?;
        let state: Option<String> = row.try_get_column("state")?;
        let address = door_no.map(|door_no| Address {
            door_no,
            state: state.unwrap_or_default(),
        });

        Ok(Self {
            id: row.try_get_index(0)?,
            name: row.try_get_column("name")?,
            mobile: row.try_get_column("mobile")?,
            email: row.try_get_column("email")?,
            password: row.try_get_column("password")?,
            address,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAccount {
    pub name: String,
    pub mobile: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub address: Option<Address>,
}

/// Partial profile update; `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AccountUpdate {
    pub name: Option<String>,
    pub mobile: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl AccountUpdate {
    /// Overlay the supplied fields on `account`.
    pub fn apply(self, mut account: Account) -> Account {
        if let Some(name) = self.name {
            account.name = name;
        }
        if let Some(mobile) = self.mobile {
            account.mobile = mobile;
        }
        if let Some(email) = self.email {
            account.email = email;
        }
        if let Some(password) = self.password {
            account.password = password;
        }
        account
    }
}
