//! User profile and subscription handlers.

use super::{ApiResult, AppState};
use crate::core::{
    caller::Caller,
    projection::{self, SubscriptionView, UserView},
    subscription, user,
};

/// Fetches one user profile, projected for `caller`.
pub async fn get_user(state: &AppState, caller: Caller, user_id: i64) -> ApiResult<UserView> {
    let db = &state.database;
    let user = user::require_user(db, user_id).await?;
    Ok(projection::project_user(db, caller, user).await?)
}

/// Lists all users ordered by username, projected for `caller`.
pub async fn list_users(state: &AppState, caller: Caller) -> ApiResult<Vec<UserView>> {
    let db = &state.database;
    let users = user::list_users(db).await?;
    let mut views = Vec::with_capacity(users.len());
    for user in users {
        views.push(projection::project_user(db, caller, user).await?);
    }
    Ok(views)
}

/// Follows an author and returns them with a preview of their recipes.
pub async fn subscribe(
    state: &AppState,
    caller: Caller,
    author_id: i64,
    recipes_limit: Option<u64>,
) -> ApiResult<SubscriptionView> {
    let db = &state.database;
    let subscriber_id = caller.require("subscribe")?;
    let author = subscription::subscribe(db, subscriber_id, author_id).await?;
    Ok(projection::project_subscription(db, author, recipes_limit).await?)
}

/// Stops following an author. Unfollowing someone not followed succeeds.
pub async fn unsubscribe(state: &AppState, caller: Caller, author_id: i64) -> ApiResult<()> {
    let subscriber_id = caller.require("unsubscribe")?;
    subscription::unsubscribe(&state.database, subscriber_id, author_id).await?;
    Ok(())
}

/// Lists the authors the caller follows.
pub async fn list_subscriptions(
    state: &AppState,
    caller: Caller,
    recipes_limit: Option<u64>,
) -> ApiResult<Vec<SubscriptionView>> {
    let subscriber_id = caller.require("list subscriptions")?;
    Ok(subscription::list_subscriptions(&state.database, subscriber_id, recipes_limit).await?)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::errors::Result;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_subscribe_flow() -> Result<()> {
        let (db, fixture) = setup_with_recipe().await?;
        let state = AppState::new(db);
        let reader = create_test_user(&state.database, "reader").await?;
        let caller = Caller::User(reader.id);

        let view = subscribe(&state, caller, fixture.author.id, None)
            .await
            .unwrap();
        assert!(view.author.is_subscribed);
        assert_eq!(view.recipes_count, 1);

        let rejection = subscribe(&state, caller, fixture.author.id, None)
            .await
            .unwrap_err();
        assert_eq!(rejection.status, 400);
        assert_eq!(rejection.field, Some("author"));

        let profile = get_user(&state, caller, fixture.author.id).await.unwrap();
        assert!(profile.is_subscribed);

        let listed = list_subscriptions(&state, caller, Some(0)).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert!(listed[0].recipes.is_empty());
        assert_eq!(listed[0].recipes_count, 1);

        unsubscribe(&state, caller, fixture.author.id).await.unwrap();
        unsubscribe(&state, caller, fixture.author.id).await.unwrap();
        let profile = get_user(&state, caller, fixture.author.id).await.unwrap();
        assert!(!profile.is_subscribed);
        Ok(())
    }

    #[tokio::test]
    async fn test_self_subscription_and_anonymous() -> Result<()> {
        let db = setup_test_db().await?;
        let state = AppState::new(db);
        let alice = create_test_user(&state.database, "alice").await?;

        let rejection = subscribe(&state, Caller::User(alice.id), alice.id, None)
            .await
            .unwrap_err();
        assert_eq!(rejection.status, 400);

        let rejection = subscribe(&state, Caller::Anonymous, alice.id, None)
            .await
            .unwrap_err();
        assert_eq!(rejection.status, 401);

        let rejection = list_subscriptions(&state, Caller::Anonymous, None)
            .await
            .unwrap_err();
        assert_eq!(rejection.status, 401);
        Ok(())
    }

    #[tokio::test]
    async fn test_list_users_for_anonymous() -> Result<()> {
        let db = setup_test_db().await?;
        let state = AppState::new(db);
        create_test_user(&state.database, "zoe").await?;
        create_test_user(&state.database, "adam").await?;

        let users = list_users(&state, Caller::Anonymous).await.unwrap();
        let names: Vec<&str> = users.iter().map(|u| u.username.as_str()).collect();
        assert_eq!(names, vec!["adam", "zoe"]);
        assert!(users.iter().all(|u| !u.is_subscribed));

        let rejection = get_user(&state, Caller::Anonymous, 999).await.unwrap_err();
        assert_eq!(rejection.status, 404);
        Ok(())
    }
}
