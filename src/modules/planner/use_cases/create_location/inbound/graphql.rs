use async_graphql::{Context, ErrorExtensions, InputObject, Object, Result as GqlResult};

use crate::modules::planner::adapters::inbound::graphql::GqlLocation;
use crate::modules::planner::core::location::NewLocation;
use crate::shell::state::AppState;

#[derive(InputObject)]
pub struct CreateLocationInput {
    pub name: String,
    pub desc: String,
    pub lat: f64,
    pub lng: f64,
}

#[derive(Default)]
pub struct LocationMutation;

#[Object]
impl LocationMutation {
    async fn create_location(
        &self,
        context: &Context<'_>,
        data: CreateLocationInput,
    ) -> GqlResult<GqlLocation> {
        let state = context.data_unchecked::<AppState>();
        let location = state
            .create_location
            .handle(NewLocation {
                name: data.name,
                desc: data.desc,
                lat: data.lat,
                lng: data.lng,
            })
            .await
            .map_err(|e| e.extend())?;
        Ok(location.into())
    }
}
