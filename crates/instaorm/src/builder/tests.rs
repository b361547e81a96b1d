use super::*;
use crate::OrmError;
use crate::model::{Column, DataConfigContainer, JoinClause, JoinType, Table, WhereClause};

fn post_insert() -> DataConfigContainer {
    DataConfigContainer::builder("post")
        .columns([
            Column::qualified("user_id", "post"),
            Column::qualified("caption", "post"),
            Column::qualified("is_private", "post"),
            Column::qualified("type", "post"),
        ])
        .build()
        .unwrap()
}

fn post_retrieve() -> DataConfigContainer {
    DataConfigContainer::builder("post")
        .columns([
            Column::qualified("id", "post"),
            Column::qualified("user_id", "post"),
            Column::qualified("name", "account"),
            Column::qualified("caption", "post"),
        ])
        .join(JoinClause::new("post", "user_id", "account", "id", JoinType::Left))
        .where_clause(WhereClause::qualified("id", "post"))
        .build()
        .unwrap()
}

#[test]
fn test_insert_columns_and_placeholders() {
    let t = InsertQueryBuilder::new().render(&post_insert()).unwrap();
    assert_eq!(
        t.sql(),
        "insert into post (user_id, caption, is_private, type) values (? ,? ,? ,?)"
    );
    assert_eq!(t.kind(), crate::QueryKind::Insert);
    let names: Vec<_> = t.binds().iter().map(|b| b.column_name()).collect();
    assert_eq!(names, ["user_id", "caption", "is_private", "type"]);
}

#[test]
fn test_insert_without_columns() {
    let config = DataConfigContainer::builder("post").build().unwrap();
    let t = InsertQueryBuilder::new().render(&config).unwrap();
    assert_eq!(t.sql(), "insert into post () values ()");
    assert_eq!(t.bind_count(), 0);
}

#[test]
fn test_insert_returning() {
    let t = InsertQueryBuilder::new()
        .render_returning(&post_insert(), "id")
        .unwrap();
    assert!(t.sql().ends_with("values (? ,? ,? ,?) returning id"));
    assert_eq!(t.bind_count(), 4);
}

#[test]
fn test_insert_returning_rejects_blank_key() {
    let err = InsertQueryBuilder::new()
        .render_returning(&post_insert(), " ")
        .unwrap_err();
    assert!(err.is_validation());
}

#[test]
fn test_insert_returning_rejects_key_list() {
    let insert = InsertQueryBuilder::new();
    for key in ["id, caption", "id?"] {
        let err = insert.render_returning(&post_insert(), key).unwrap_err();
        assert!(err.is_validation(), "{key}");
        assert!(err.to_string().contains("returning column"), "{key}");
    }
}

#[test]
fn test_placeholder_count_tracks_column_count() {
    for n in 1..=12 {
        let config = DataConfigContainer::builder("t")
            .columns((0..n).map(|i| Column::new(format!("c{i}"))))
            .build()
            .unwrap();
        let t = InsertQueryBuilder::new().render(&config).unwrap();
        assert_eq!(t.sql().matches('?').count(), n);
        assert_eq!(t.bind_count(), n);
    }
}

#[test]
fn test_where_single_clause() {
    let clauses = [WhereClause::qualified("id", "post")];
    assert_eq!(WhereQueryBuilder::new().render(&clauses), "where post.id = ?");
}

#[test]
fn test_where_empty() {
    assert_eq!(WhereQueryBuilder::new().render(&[]), "where ");
}

#[test]
fn test_where_operator_is_literal() {
    let w = WhereQueryBuilder::new();
    let clauses = [WhereClause::qualified("deleted_at", "post").with_operator("is null")];
    assert_eq!(w.render(&clauses), "where post.deleted_at is null");
    assert!(w.bind_slots(&clauses).is_empty());
}

#[test]
fn test_where_clauses_joined_by_space() {
    let clauses = [
        WhereClause::qualified("id", "post"),
        WhereClause::qualified("user_id", "post"),
    ];
    assert_eq!(
        WhereQueryBuilder::new().render(&clauses),
        "where post.id = ? post.user_id = ?"
    );
}

#[test]
fn test_where_unqualified_clause() {
    let clauses = [WhereClause::new("mobile")];
    assert_eq!(WhereQueryBuilder::new().render(&clauses), "where mobile = ?");
}

#[test]
fn test_where_correlated() {
    let clauses = [WhereClause::qualified("user_id", "post")];
    assert_eq!(
        WhereQueryBuilder::new().render_correlated(&clauses),
        "where post.user_id = user_id"
    );
}

#[test]
fn test_list_helpers() {
    let w = WhereQueryBuilder::new();
    assert_eq!(w.placeholder_list("a, b, c"), "? ,? ,?");
    assert_eq!(w.placeholder_list("a"), "?");
    assert_eq!(w.placeholder_list(""), "");
    assert_eq!(w.parenthesize("x, y"), "(x, y)");
    assert_eq!(w.parenthesize(""), "()");

    let table = Table::new(
        "post",
        vec![Column::new("id"), Column::qualified("name", "account")],
    );
    assert_eq!(w.column_list(&table), "post.id,account.name");
}

#[test]
fn test_join_fragment() {
    let joins = [JoinClause::new("post", "user_id", "account", "id", JoinType::Left)];
    assert_eq!(
        JoinQueryBuilder::new().render(&joins),
        "left join account on post.user_id = account.id"
    );
    assert_eq!(JoinQueryBuilder::new().render(&[]), "");
}

#[test]
fn test_join_types() {
    let j = JoinQueryBuilder::new();
    let inner = [JoinClause::new("a", "x", "b", "y", JoinType::Inner)];
    assert_eq!(j.render(&inner), "inner b on a.x = b.y");
    let two = [
        JoinClause::new("a", "x", "b", "y", JoinType::Join),
        JoinClause::new("a", "z", "c", "w", JoinType::Outer),
    ];
    assert_eq!(j.render(&two), "join b on a.x = b.y outer c on a.z = c.w");
}

#[test]
fn test_select_with_join_and_where() {
    let t = SelectQueryBuilder::new().render(&post_retrieve()).unwrap();
    assert_eq!(
        t.sql(),
        "select post.id, post.user_id, account.name, post.caption from post \
         left join account on post.user_id = account.id where post.id = ?"
    );
    assert_eq!(t.binds()[0].qualified_name(), "post.id");
}

#[test]
fn test_select_star_without_columns() {
    let config = DataConfigContainer::builder("post").build().unwrap();
    let t = SelectQueryBuilder::new().render(&config).unwrap();
    assert_eq!(t.sql(), "select * from post  ");
    assert_eq!(t.bind_count(), 0);
}

#[test]
fn test_select_where_without_join() {
    let config = DataConfigContainer::builder("account")
        .column(Column::qualified("mobile", "account"))
        .where_clause(WhereClause::qualified("mobile", "account"))
        .build()
        .unwrap();
    let t = SelectQueryBuilder::new().render(&config).unwrap();
    assert_eq!(
        t.sql(),
        "select account.mobile from account  where account.mobile = ?"
    );
}

#[test]
fn test_update() {
    let config = DataConfigContainer::builder("account")
        .columns([Column::new("name"), Column::new("email")])
        .where_clause(WhereClause::qualified("id", "account"))
        .build()
        .unwrap();
    let t = UpdateQueryBuilder::new().render(&config).unwrap();
    assert_eq!(
        t.sql(),
        "update account set name = ?, email = ? where account.id = ?"
    );
    let order: Vec<_> = t.binds().iter().map(|b| b.qualified_name()).collect();
    assert_eq!(order, ["name", "email", "account.id"]);
}

#[test]
fn test_update_requires_set_and_where() {
    let no_set = DataConfigContainer::builder("account")
        .where_clause(WhereClause::qualified("id", "account"))
        .build()
        .unwrap();
    let err = UpdateQueryBuilder::new().render(&no_set).unwrap_err();
    assert!(matches!(&err, OrmError::Validation(msg) if msg.contains("SET")));

    let no_where = DataConfigContainer::builder("account")
        .column(Column::new("name"))
        .build()
        .unwrap();
    let err = UpdateQueryBuilder::new().render(&no_where).unwrap_err();
    assert!(matches!(&err, OrmError::Validation(msg) if msg.contains("WHERE")));
}

#[test]
fn test_delete() {
    let config = DataConfigContainer::builder("post")
        .where_clause(WhereClause::qualified("id", "post"))
        .build()
        .unwrap();
    let t = DeleteQueryBuilder::new().render(&config).unwrap();
    assert_eq!(t.sql(), "delete from post where post.id = ?");
    assert_eq!(t.kind(), crate::QueryKind::Delete);
}

#[test]
fn test_delete_requires_where() {
    let config = DataConfigContainer::builder("post").build().unwrap();
    let err = DeleteQueryBuilder::new().render(&config).unwrap_err();
    assert!(err.is_validation());
}

#[test]
fn test_render_is_idempotent() {
    let builders = QueryBuilders::new();
    let config = post_retrieve();
    let first = builders.select.render(&config).unwrap();
    let second = builders.select.render(&config).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        builders.select.to_sql(&config).unwrap(),
        first.sql().to_string()
    );
}

#[test]
fn test_builder_kinds() {
    let b = QueryBuilders::default();
    assert_eq!(b.insert.kind(), crate::QueryKind::Insert);
    assert_eq!(b.select.kind(), crate::QueryKind::Select);
    assert_eq!(b.update.kind(), crate::QueryKind::Update);
    assert_eq!(b.delete.kind(), crate::QueryKind::Delete);
}
