use async_graphql::{Context, ErrorExtensions, ID, InputObject, Object, Result as GqlResult};

use crate::modules::planner::adapters::inbound::graphql::{GqlUser, to_entity_id};
use crate::modules::planner::core::user::{NewUser, UserPatch};
use crate::shell::state::AppState;

#[derive(InputObject)]
pub struct CreateUserInput {
    pub username: String,
    pub email: String,
}

/// Omitted fields keep their current value.
#[derive(InputObject)]
pub struct UpdateUserInput {
    pub username: Option<String>,
    pub email: Option<String>,
}

#[derive(Default)]
pub struct UserMutation;

#[Object]
impl UserMutation {
    async fn create_user(
        &self,
        context: &Context<'_>,
        data: CreateUserInput,
    ) -> GqlResult<GqlUser> {
        let state = context.data_unchecked::<AppState>();
        let user = state
            .manage_users
            .create(NewUser {
                username: data.username,
                email: data.email,
            })
            .await
            .map_err(|e| e.extend())?;
        Ok(user.into())
    }

    async fn update_user(
        &self,
        context: &Context<'_>,
        id: ID,
        data: UpdateUserInput,
    ) -> GqlResult<GqlUser> {
        let state = context.data_unchecked::<AppState>();
        let patch = UserPatch {
            username: data.username,
            email: data.email,
        };
        let user = state
            .manage_users
            .update(&to_entity_id(id), patch)
            .await
            .map_err(|e| e.extend())?;
        Ok(user.into())
    }

    async fn delete_user(&self, context: &Context<'_>, id: ID) -> GqlResult<GqlUser> {
        let state = context.data_unchecked::<AppState>();
        let user = state
            .manage_users
            .delete(&to_entity_id(id))
            .await
            .map_err(|e| e.extend())?;
        Ok(user.into())
    }
}
