use super::logged;
use crate::client::GenericClient;
use crate::domain::{NewPost, NewReel, NewStory, Post, Reel, Story};
use crate::error::OrmResult;
use crate::injector::{PostSqlInjector, ReelSqlInjector, StorySqlInjector};

#[derive(Debug, Clone, Copy, Default)]
pub struct PostDao {
    injector: PostSqlInjector,
}

impl PostDao {
    pub const fn new() -> Self {
        Self {
            injector: PostSqlInjector::new(),
        }
    }

    /// Insert a post and return its generated id.
    pub async fn add(&self, conn: &impl GenericClient, post: &NewPost) -> OrmResult<i64> {
        let media = post.media.id();
        let result = async {
            self.injector
                .insert_returning_id()?
                .bind_named(&[
                    ("user_id", &post.user_id),
                    ("caption", &post.caption),
                    ("is_private", &post.is_private),
                    ("type", &media),
                ])?
                .fetch_scalar_one::<i64>(conn)
                .await
        }
        .await;
        logged("post creation", result)
    }

    /// Delete a post; `false` when no row matched.
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
        logged("post removal", result)
    }

    pub async fn get(&self, conn: &impl GenericClient, id: i64) -> OrmResult<Option<Post>> {
        let result = async {
            self.injector
                .retrieve_query()?
                .bind_named(&[("id", &id)])?
                .fetch_opt_as::<Post>(conn)
                .await
        }
        .await;
        logged("post retrieval", result)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ReelDao {
    injector: ReelSqlInjector,
}

impl ReelDao {
    pub const fn new() -> Self {
        Self {
            injector: ReelSqlInjector::new(),
        }
    }

    pub async fn add(&self, conn: &impl GenericClient, reel: &NewReel) -> OrmResult<i64> {
        let result = async {
            self.injector
                .insert_returning_id()?
                .bind_named(&[
                    ("user_id", &reel.user_id),
                    ("caption", &reel.caption),
                    ("duration", &reel.duration),
                ])?
                .fetch_scalar_one::<i64>(conn)
                .await
        }
        .await;
        logged("reel creation", result)
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
        logged("reel removal", result)
    }

    pub async fn get(&self, conn: &impl GenericClient, id: i64) -> OrmResult<Option<Reel>> {
        let result = async {
            self.injector
                .select_query()?
                .bind_named(&[("id", &id)])?
                .fetch_opt_as::<Reel>(conn)
                .await
        }
        .await;
        logged("reel retrieval", result)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StoryDao {
    injector: StorySqlInjector,
}

impl StoryDao {
    pub const fn new() -> Self {
        Self {
            injector: StorySqlInjector::new(),
        }
    }

    pub async fn add(&self, conn: &impl GenericClient, story: &NewStory) -> OrmResult<i64> {
        let media = story.media.id();
        let result = async {
            self.injector
                .insert_returning_id()?
                .bind_named(&[
                    ("user_id", &story.user_id),
                    ("caption", &story.caption),
                    ("is_private", &story.is_private),
                    ("music", &story.music),
                    ("media", &media),
                ])?
                .fetch_scalar_one::<i64>(conn)
                .await
        }
        .await;
        logged("story creation", result)
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
        logged("story removal", result)
    }

    pub async fn get(&self, conn: &impl GenericClient, id: i64) -> OrmResult<Option<Story>> {
        let result = async {
            self.injector
                .select_query()?
                .bind_named(&[("id", &id)])?
                .fetch_opt_as::<Story>(conn)
                .await
        }
        .await;
        logged("story retrieval", result)
    }
}
