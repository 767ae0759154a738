mod common;

use std::collections::BTreeSet;

use common::PostgresContext;
use dinesafely_core::{
    domain::{activity::ports::ActivityLogRepository, review::ports::ReviewRepository},
    infrastructure::{
        activity::repositories::activity_log_repository::PostgresActivityLogRepository,
        review::repositories::review_repository::PostgresReviewRepository,
    },
};
use futures::future::join_all;
use test_context::test_context;

const CONCURRENT_CALLS: u64 = 25;

#[test_context(PostgresContext)]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_visits_are_all_counted(ctx: &mut PostgresContext) {
    let Some(db) = ctx.db.clone() else { return };
    let repository = PostgresActivityLogRepository::new(db);

    let results = join_all((0..CONCURRENT_CALLS).map(|_| {
        let repository = repository.clone();
        let (user_id, restaurant_id) = (ctx.user_id, ctx.restaurant_id);
        tokio::spawn(async move { repository.record_visit(user_id, restaurant_id).await })
    }))
    .await;

    let counts: BTreeSet<u64> = results
        .into_iter()
        .map(|joined| joined.unwrap().unwrap())
        .collect();

    assert_eq!(counts, (1..=CONCURRENT_CALLS).collect());

    let visits = repository
        .record_visit(ctx.user_id, ctx.restaurant_id)
        .await
        .unwrap();
    assert_eq!(visits, CONCURRENT_CALLS + 1);
}

#[test_context(PostgresContext)]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_likes_from_distinct_users(ctx: &mut PostgresContext) {
    let Some(db) = ctx.db.clone() else { return };
    let repository = PostgresReviewRepository::new(db.clone());

    let mut users = Vec::new();
    for _ in 0..CONCURRENT_CALLS {
        users.push(ctx.seed_user().await);
    }

    let results = join_all(users.iter().map(|&user_id| {
        let repository = repository.clone();
        let review_id = ctx.review_id;
        tokio::spawn(async move { repository.toggle_like(review_id, user_id).await })
    }))
    .await;

    for joined in results {
        assert!(joined.unwrap().unwrap().liked);
    }

    let likes = repository.count_likes(vec![ctx.review_id]).await.unwrap();
    assert_eq!(likes.get(&ctx.review_id).copied(), Some(CONCURRENT_CALLS));
}

#[test_context(PostgresContext)]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_toggles_by_one_user_alternate(ctx: &mut PostgresContext) {
    let Some(db) = ctx.db.clone() else { return };
    let repository = PostgresReviewRepository::new(db);

    // An odd number of toggles must leave the review liked exactly once.
    let toggles = CONCURRENT_CALLS;
    let results = join_all((0..toggles).map(|_| {
        let repository = repository.clone();
        let (review_id, user_id) = (ctx.review_id, ctx.user_id);
        tokio::spawn(async move { repository.toggle_like(review_id, user_id).await })
    }))
    .await;

    let liked = results
        .into_iter()
        .map(|joined| joined.unwrap().unwrap())
        .filter(|toggle| toggle.liked)
        .count() as u64;

    assert_eq!(liked, toggles.div_ceil(2));

    let likes = repository.count_likes(vec![ctx.review_id]).await.unwrap();
    assert_eq!(likes.get(&ctx.review_id).copied(), Some(1));
}
