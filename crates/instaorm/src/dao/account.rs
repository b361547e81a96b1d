use super::logged;
use crate::client::GenericClient;
use crate::domain::{Account, AccountUpdate, Address, NewAccount};
use crate::error::OrmResult;
use crate::injector::{AccountSqlInjector, AddressSqlInjector};
use crate::template::SqlTemplate;

#[derive(Debug, Clone, Copy, Default)]
pub struct AccountDao {
    injector: AccountSqlInjector,
    addresses: AddressDao,
}

impl AccountDao {
    pub const fn new() -> Self {
        Self {
            injector: AccountSqlInjector::new(),
            addresses: AddressDao::new(),
        }
    }

    /// Insert the account, then its address when one is given.
    ///
    /// Run on a transaction so a failed address insert does not leave the
    /// account behind.
    pub async fn create(&self, conn: &impl GenericClient, account: &NewAccount) -> OrmResult<i64> {
        logged("account creation", self.insert_profile(conn, account).await)
    }

    pub async fn get(&self, conn: &impl GenericClient, id: i64) -> OrmResult<Option<Account>> {
        let result = async {
            self.injector
                .retrieve_query()?
                .bind_named(&[("id", &id)])?
                .fetch_opt_as::<Account>(conn)
                .await
        }
        .await;
        logged("account retrieval", result)
    }

    /// Merge `update` over the stored profile and write it back.
    ///
    /// Returns `false` for a non-positive id or an unknown account.
    pub async fn update(
        &self,
        conn: &impl GenericClient,
        id: i64,
        update: AccountUpdate,
    ) -> OrmResult<bool> {
        if id <= 0 {
            return Ok(false);
        }
        let Some(stored) = self.get(conn, id).await? else {
            return Ok(false);
        };
        self.save(conn, &update.apply(stored)).await
    }

    /// Write every profile column of `account` over the row with its id.
    pub async fn save(&self, conn: &impl GenericClient, account: &Account) -> OrmResult<bool> {
        let result = async {
            self.injector
                .update_query()?
                .bind_named(&[
                    ("name", &account.name),
                    ("mobile", &account.mobile),
                    ("email", &account.email),
                    ("password", &account.password),
                    ("account.id", &account.id),
                ])?
                .execute(conn)
                .await
                .map(|affected| affected > 0)
        }
        .await;
        logged("account update", result)
    }

    /// Delete the account's address, then the account.
    ///
    /// Run on a transaction so the address is not lost when the account
    /// delete fails.
    pub async fn remove(&self, conn: &impl GenericClient, id: i64) -> OrmResult<bool> {
        logged("account removal", self.delete_profile(conn, id).await)
    }

    pub async fn exists_by_mobile(&self, conn: &impl GenericClient, mobile: &str) -> OrmResult<bool> {
        logged(
            "mobile lookup",
            self.exists(conn, self.injector.select_for_mobile(), mobile).await,
        )
    }

    pub async fn exists_by_email(&self, conn: &impl GenericClient, email: &str) -> OrmResult<bool> {
        logged(
            "email lookup",
            self.exists(conn, self.injector.select_for_email(), email).await,
        )
    }

    pub async fn exists_by_name(&self, conn: &impl GenericClient, name: &str) -> OrmResult<bool> {
        logged(
            "name lookup",
            self.exists(conn, self.injector.select_for_name(), name).await,
        )
    }

    /// Messages for every credential of `account` that is already registered.
    pub async fn credential_conflicts(
        &self,
        conn: &impl GenericClient,
        account: &NewAccount,
    ) -> OrmResult<Vec<&'static str>> {
        let mut conflicts = Vec::new();
        if self.exists_by_name(conn, &account.name).await? {
            conflicts.push("Name already registered");
        }
        if self.exists_by_mobile(conn, &account.mobile).await? {
            conflicts.push("Mobile already registered");
        }
        if self.exists_by_email(conn, &account.email).await? {
            conflicts.push("Email already registered");
        }
        Ok(conflicts)
    }

    async fn insert_profile(&self, conn: &impl GenericClient, account: &NewAccount) -> OrmResult<i64> {
        let id = self
            .injector
            .insert_returning_id()?
            .bind_named(&[
                ("name", &account.name),
                ("mobile", &account.mobile),
                ("email", &account.email),
                ("password", &account.password),
            ])?
            .fetch_scalar_one::<i64>(conn)
            .await?;
        if let Some(address) = &account.address {
            self.addresses.create(conn, id, address).await?;
        }
        Ok(id)
    }

    async fn delete_profile(&self, conn: &impl GenericClient, id: i64) -> OrmResult<bool> {
        self.addresses.remove_for_user(conn, id).await?;
        let affected = self
            .injector
            .delete_query()?
            .bind_named(&[("account.id", &id)])?
            .execute(conn)
            .await?;
        Ok(affected > 0)
    }

    async fn exists(
        &self,
        conn: &impl GenericClient,
        template: OrmResult<SqlTemplate>,
        value: &str,
    ) -> OrmResult<bool> {
        let row = template?.bind(&[&value])?.fetch_opt(conn).await?;
        Ok(row.is_some())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AddressDao {
    injector: AddressSqlInjector,
}

impl AddressDao {
    pub const fn new() -> Self {
        Self {
            injector: AddressSqlInjector::new(),
        }
    }

    pub async fn create(
        &self,
        conn: &impl GenericClient,
        user_id: i64,
        address: &Address,
    ) -> OrmResult<bool> {
        let result = async {
            self.injector
                .create_query()?
                .bind_named(&[
                    ("door_no", &address.door_no),
                    ("state", &address.state),
                    ("user_id", &user_id),
                ])?
                .execute(conn)
                .await
                .map(|affected| affected > 0)
        }
        .await;
        logged("address creation", result)
    }

    pub async fn remove(&self, conn: &impl GenericClient, id: i64) -> OrmResult<bool> {
        let result = async {
            self.injector
                .delete_query()?
                .bind_named(&[("id", &id)])?
                .execute(conn)
                .await
                .map(|affected| affected > 0)
        }
        .await;
        logged("address removal", result)
    }

    /// Delete every address of `user_id`, returning how many went.
    pub async fn remove_for_user(&self, conn: &impl GenericClient, user_id: i64) -> OrmResult<u64> {
        let result = async {
            self.injector
                .delete_for_user_query()?
                .bind_named(&[("address.user_id", &user_id)])?
                .execute(conn)
                .await
        }
        .await;
        logged("address removal", result)
    }
}
