//! DAO behaviour against a client that records statements instead of
//! talking to PostgreSQL. Queries return no rows, statements report
//! `affected` rows and scalar reads hand out queued keys.

use instaorm::dao::{AccountDao, EngagementDao, PostDao};
use instaorm::domain::{Account, AccountUpdate, Address, Comment, Media, NewAccount, NewPost};
use instaorm::injector::ContentKind;
use instaorm::{GenericClient, OrmError, OrmResult};
use std::collections::VecDeque;
use std::sync::Mutex;
use tokio_postgres::Row;
use tokio_postgres::types::{FromSql, ToSql, Type};

/// One statement as it reached the client: numbered SQL plus each
/// parameter's `Debug` form, in bind order.
#[derive(Debug, Clone, PartialEq)]
struct Call {
    sql: String,
    params: Vec<String>,
}

struct RecordingClient {
    calls: Mutex<Vec<Call>>,
    keys: Mutex<VecDeque<i64>>,
    affected: u64,
}

impl RecordingClient {
    fn new(affected: u64) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            keys: Mutex::new(VecDeque::new()),
            affected,
        }
    }

    /// Queue keys returned, in order, by `insert ... returning id`.
    fn with_keys(self, keys: impl IntoIterator<Item = i64>) -> Self {
        self.keys.lock().unwrap().extend(keys);
        self
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn sql(&self) -> Vec<String> {
        self.calls().into_iter().map(|call| call.sql).collect()
    }

    fn record(&self, sql: &str, params: &[&(dyn ToSql + Sync)]) {
        self.calls.lock().unwrap().push(Call {
            sql: sql.to_string(),
            params: params.iter().map(|p| format!("{p:?}")).collect(),
        });
    }
}

impl GenericClient for RecordingClient {
    async fn query(&self, sql: &str, params: &[&(dyn ToSql + Sync)]) -> OrmResult<Vec<Row>> {
        self.record(sql, params);
        Ok(Vec::new())
    }

    async fn execute(&self, sql: &str, params: &[&(dyn ToSql + Sync)]) -> OrmResult<u64> {
        self.record(sql, params);
        Ok(self.affected)
    }

    async fn query_scalar<T>(&self, sql: &str, params: &[&(dyn ToSql + Sync)]) -> OrmResult<T>
    where
        T: for<'a> FromSql<'a> + Send,
    {
        self.record(sql, params);
        let key = self
            .keys
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| OrmError::not_found(format!("no row returned by `{sql}`")))?;
        T::from_sql(&Type::INT8, &key.to_be_bytes()).map_err(|e| OrmError::decode("#0", e.to_string()))
    }
}

fn new_account(address: Option<Address>) -> NewAccount {
    NewAccount {
        name: "asha".into(),
        mobile: "9000000000".into(),
        email: "asha@insta.dev".into(),
        password: "pw".into(),
        address,
    }
}

#[tokio::test]
async fn remove_runs_numbered_delete() {
    let client = RecordingClient::new(1);
    assert!(PostDao::new().remove(&client, 42).await.unwrap());
    assert_eq!(
        client.calls(),
        [Call {
            sql: "delete from post where post.id = $1".into(),
            params: vec!["42".into()],
        }]
    );
}

#[tokio::test]
async fn remove_reports_missing_row() {
    let client = RecordingClient::new(0);
    assert!(!PostDao::new().remove(&client, 42).await.unwrap());
}

#[tokio::test]
async fn get_returns_none_without_rows() {
    let client = RecordingClient::new(0);
    assert!(PostDao::new().get(&client, 1).await.unwrap().is_none());
    let call = &client.calls()[0];
    assert!(call.sql.ends_with("where post.id = $1"));
    assert_eq!(call.params, ["1"]);
}

#[tokio::test]
async fn add_returns_generated_key() {
    let client = RecordingClient::new(1).with_keys([31]);
    let post = NewPost {
        user_id: 1,
        caption: "first".into(),
        is_private: true,
        media: Media::Video,
    };
    assert_eq!(PostDao::new().add(&client, &post).await.unwrap(), 31);
    assert_eq!(
        client.calls(),
        [Call {
            sql: "insert into post (user_id, caption, is_private, type) \
                  values ($1 ,$2 ,$3 ,$4) returning id"
                .into(),
            params: vec!["1".into(), "\"first\"".into(), "true".into(), "2".into()],
        }]
    );
}

#[tokio::test]
async fn add_without_returned_key_is_not_found() {
    let client = RecordingClient::new(1);
    let post = NewPost {
        user_id: 1,
        caption: "first".into(),
        is_private: false,
        media: Media::Image,
    };
    let err = PostDao::new().add(&client, &post).await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(client.calls().len(), 1);
}

#[tokio::test]
async fn create_inserts_address_for_new_account() {
    let client = RecordingClient::new(1).with_keys([7]);
    let address = Address {
        door_no: 12,
        state: "Kerala".into(),
    };
    let id = AccountDao::new()
        .create(&client, &new_account(Some(address)))
        .await
        .unwrap();
    assert_eq!(id, 7);

    let calls = client.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(
        calls[0].sql,
        "insert into account (name, mobile, email, password) values ($1 ,$2 ,$3 ,$4) returning id"
    );
    assert_eq!(
        calls[1],
        Call {
            sql: "insert into address (door_no, state, user_id) values ($1 ,$2 ,$3)".into(),
            params: vec!["12".into(), "\"Kerala\"".into(), "7".into()],
        }
    );
}

#[tokio::test]
async fn create_without_address_writes_one_row() {
    let client = RecordingClient::new(1).with_keys([8]);
    AccountDao::new()
        .create(&client, &new_account(None))
        .await
        .unwrap();
    assert_eq!(client.calls().len(), 1);
}

#[tokio::test]
async fn save_writes_profile_then_id() {
    let client = RecordingClient::new(1);
    let stored = Account {
        id: 7,
        name: "asha".into(),
        mobile: "9000000000".into(),
        email: "asha@insta.dev".into(),
        password: "pw".into(),
        address: None,
    };
    let merged = AccountUpdate {
        email: Some("asha@example.org".into()),
        ..Default::default()
    }
    .apply(stored);

    assert!(AccountDao::new().save(&client, &merged).await.unwrap());
    assert_eq!(
        client.calls(),
        [Call {
            sql: "update account set name = $1, mobile = $2, email = $3, password = $4 \
                  where account.id = $5"
                .into(),
            params: vec![
                "\"asha\"".into(),
                "\"9000000000\"".into(),
                "\"asha@example.org\"".into(),
                "\"pw\"".into(),
                "7".into(),
            ],
        }]
    );
}

#[tokio::test]
async fn update_of_unknown_account_writes_nothing() {
    let client = RecordingClient::new(1);
    let dao = AccountDao::new();
    assert!(!dao.update(&client, 0, AccountUpdate::default()).await.unwrap());
    assert!(client.calls().is_empty());

    assert!(!dao.update(&client, 7, AccountUpdate::default()).await.unwrap());
    let sql = client.sql();
    assert_eq!(sql.len(), 1);
    assert!(sql[0].starts_with("select * from account left join address"));
}

#[tokio::test]
async fn remove_account_clears_address_first() {
    let client = RecordingClient::new(1);
    assert!(AccountDao::new().remove(&client, 7).await.unwrap());
    assert_eq!(
        client.calls(),
        [
            Call {
                sql: "delete from address where address.user_id = $1".into(),
                params: vec!["7".into()],
            },
            Call {
                sql: "delete from account where account.id = $1".into(),
                params: vec!["7".into()],
            },
        ]
    );
}

#[tokio::test]
async fn credential_check_queries_each_field() {
    let client = RecordingClient::new(0);
    let conflicts = AccountDao::new()
        .credential_conflicts(&client, &new_account(None))
        .await
        .unwrap();
    assert!(conflicts.is_empty());
    assert_eq!(
        client.sql(),
        [
            "select account.name from account  where account.name = $1",
            "select account.mobile from account  where account.mobile = $1",
            "select account.email from account  where account.email = $1",
        ]
    );
}

#[tokio::test]
async fn story_comment_never_reaches_the_database() {
    let client = RecordingClient::new(1);
    let comment = Comment {
        content_id: 1,
        commented_by: 2,
        content: "hi".into(),
    };
    let err = EngagementDao::new()
        .comment(&client, ContentKind::Story, &comment)
        .await
        .unwrap_err();
    assert!(matches!(err, OrmError::Validation(_)));
    assert!(client.calls().is_empty());
}
