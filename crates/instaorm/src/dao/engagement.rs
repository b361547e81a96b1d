use super::logged;
use crate::client::GenericClient;
use crate::domain::Comment;
use crate::error::OrmResult;
use crate::injector::{ContentKind, Engagement, EngagementSqlInjector};

/// Likes, shares and comments on posts, reels and stories.
#[derive(Debug, Clone, Copy, Default)]
pub struct EngagementDao {
    injector: EngagementSqlInjector,
}

impl EngagementDao {
    pub const fn new() -> Self {
        Self {
            injector: EngagementSqlInjector::new(),
        }
    }

    /// Record that `user_id` liked the content; returns the like id.
    pub async fn like(
        &self,
        conn: &impl GenericClient,
        parent: ContentKind,
        content_id: i64,
        user_id: i64,
    ) -> OrmResult<i64> {
        let parent_column = parent.id_column();
        let result = async {
            self.injector
                .insert_returning_id(parent, Engagement::Like)?
                .bind_named(&[(parent_column.as_str(), &content_id), ("liked_by", &user_id)])?
                .fetch_scalar_one::<i64>(conn)
                .await
        }
        .await;
        logged("like creation", result)
    }

    pub async fn share(
        &self,
        conn: &impl GenericClient,
        parent: ContentKind,
        content_id: i64,
        user_id: i64,
    ) -> OrmResult<i64> {
        let parent_column = parent.id_column();
        let result = async {
            self.injector
                .insert_returning_id(parent, Engagement::Share)?
                .bind_named(&[(parent_column.as_str(), &content_id), ("shared_by", &user_id)])?
                .fetch_scalar_one::<i64>(conn)
                .await
        }
        .await;
        logged("share creation", result)
    }

    /// Stories cannot be commented on; that pair fails with a validation error.
    pub async fn comment(
        &self,
        conn: &impl GenericClient,
        parent: ContentKind,
        comment: &Comment,
    ) -> OrmResult<i64> {
        let parent_column = parent.id_column();
        let result = async {
            self.injector
                .insert_returning_id(parent, Engagement::Comment)?
                .bind_named(&[
                    (parent_column.as_str(), &comment.content_id),
                    ("commented_by", &comment.commented_by),
                    ("content", &comment.content),
                ])?
                .fetch_scalar_one::<i64>(conn)
                .await
        }
        .await;
        logged("comment creation", result)
    }

    /// Delete one like, share or comment by id.
    pub async fn remove(
        &self,
        conn: &impl GenericClient,
        parent: ContentKind,
        kind: Engagement,
        id: i64,
    ) -> OrmResult<bool> {
        let result = async {
            self.injector
                .delete_query(parent, kind)?
                .bind_named(&[("id", &id)])?
                .execute(conn)
                .await
                .map(|affected| affected > 0)
        }
        .await;
        logged("engagement removal", result)
    }
}
