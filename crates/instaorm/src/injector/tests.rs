use super::*;

#[test]
fn test_post_queries() {
    let post = PostSqlInjector::new();
    assert_eq!(
        post.insert_query().unwrap().sql(),
        "insert into post (user_id, caption, is_private, type) values (? ,? ,? ,?)"
    );
    assert_eq!(
        post.retrieve_query().unwrap().sql(),
        "select post.id, post.user_id, account.name, post.caption, post.type, \
         post.is_private, post.created_at from post \
         left join account on post.user_id = account.id where post.id = ?"
    );
    assert_eq!(
        post.delete_query().unwrap().sql(),
        "delete from post where post.id = ?"
    );
}

#[test]
fn test_reel_queries() {
    let reel = ReelSqlInjector::new();
    assert_eq!(
        reel.insert_query().unwrap().sql(),
        "insert into reels (user_id, caption, duration) values (? ,? ,?)"
    );
    assert_eq!(
        reel.select_query().unwrap().sql(),
        "select reels.id, reels.user_id, account.name, reels.caption, reels.is_private, \
         reels.created_at, reels.duration from reels \
         left join account on reels.user_id = account.id where reels.id = ?"
    );
    assert_eq!(
        reel.delete_query().unwrap().sql(),
        "delete from reels where reels.id = ?"
    );
}

#[test]
fn test_story_select_targets_story_table() {
    let story = StorySqlInjector::new();
    let sql = story.select_query().unwrap().into_sql();
    assert!(sql.contains(" from story left join account on story.user_id = account.id"));
    assert!(sql.ends_with("where story.id = ?"));
    assert_eq!(story.insert_query().unwrap().bind_count(), 5);
}

#[test]
fn test_engagement_tables() {
    let e = EngagementSqlInjector::new();
    assert_eq!(
        e.insert_query(ContentKind::Post, Engagement::Like).unwrap().sql(),
        "insert into post_like (post_id, liked_by) values (? ,?)"
    );
    assert_eq!(
        e.insert_query(ContentKind::Reel, Engagement::Comment).unwrap().sql(),
        "insert into reel_comment (reel_id, commented_by, content) values (? ,? ,?)"
    );
    assert_eq!(
        e.insert_query(ContentKind::Story, Engagement::Share).unwrap().sql(),
        "insert into story_share (story_id, shared_by) values (? ,?)"
    );
}

#[test]
fn test_reel_like_delete_filters_its_own_table() {
    let e = EngagementSqlInjector::new();
    assert_eq!(
        e.delete_query(ContentKind::Reel, Engagement::Like).unwrap().sql(),
        "delete from reel_like where reel_like.id = ?"
    );
}

#[test]
fn test_story_comment_is_rejected() {
    let e = EngagementSqlInjector::new();
    assert!(!e.is_supported(ContentKind::Story, Engagement::Comment));
    let err = e
        .insert_query(ContentKind::Story, Engagement::Comment)
        .unwrap_err();
    assert!(err.is_validation());
    assert_eq!(e.supported().count(), 8);
}

#[test]
fn test_account_queries() {
    let account = AccountSqlInjector::new();
    assert_eq!(
        account.insert_query().unwrap().sql(),
        "insert into account (name, mobile, email, password) values (? ,? ,? ,?)"
    );
    assert_eq!(
        account.update_query().unwrap().sql(),
        "update account set name = ?, mobile = ?, email = ?, password = ? where account.id = ?"
    );
    assert_eq!(
        account.retrieve_query().unwrap().sql(),
        "select * from account left join address on account.id = address.user_id \
         where account.id = ?"
    );
    assert_eq!(
        account.select_for_mobile().unwrap().sql(),
        "select account.mobile from account  where account.mobile = ?"
    );
    assert_eq!(
        account.select_for_name().unwrap().binds()[0].qualified_name(),
        "account.name"
    );
}

#[test]
fn test_address_queries() {
    let address = AddressSqlInjector::new();
    assert_eq!(
        address.create_query().unwrap().sql(),
        "insert into address (door_no, state, user_id) values (? ,? ,?)"
    );
    assert_eq!(
        address.delete_query().unwrap().sql(),
        "delete from address where address.id = ?"
    );
    let by_user = address.delete_for_user_query().unwrap();
    assert_eq!(by_user.sql(), "delete from address where address.user_id = ?");
    assert_eq!(by_user.binds()[0].qualified_name(), "address.user_id");
}

#[test]
fn test_catalog_lists_every_query() {
    let catalog = catalog().unwrap();
    // 9 content + 16 engagement + 7 account + 3 address
    assert_eq!(catalog.len(), 35);
    assert!(catalog.iter().any(|(name, _)| name == "reel.like.delete"));
    assert!(!catalog.iter().any(|(name, _)| name == "story.comment.insert"));
    for (name, template) in &catalog {
        assert_eq!(
            template.sql().matches('?').count(),
            template.bind_count(),
            "{name}"
        );
    }
}

#[test]
fn test_insert_returning_id() {
    let post = PostSqlInjector::new().insert_returning_id().unwrap();
    assert!(post.sql().ends_with("values (? ,? ,? ,?) returning id"));
    let like = EngagementSqlInjector::new()
        .insert_returning_id(ContentKind::Story, Engagement::Like)
        .unwrap();
    assert_eq!(
        like.sql(),
        "insert into story_like (story_id, liked_by) values (? ,?) returning id"
    );
    assert_eq!(AccountSqlInjector::new().insert_returning_id().unwrap().bind_count(), 4);
}
