use crate::modules::planner::adapters::outbound::entity_store::EntityStore;
use crate::modules::planner::use_cases::browse_planner::handler::PlannerQueries;
use crate::modules::planner::use_cases::create_event::handler::CreateEventHandler;
use crate::modules::planner::use_cases::create_location::handler::CreateLocationHandler;
use crate::modules::planner::use_cases::create_participant::handler::CreateParticipantHandler;
use crate::modules::planner::use_cases::manage_users::handler::ManageUsersHandler;
use std::sync::Arc;

/// Every handler shares the one store created at startup.
#[derive(Clone)]
pub struct AppState {
    pub queries: Arc<PlannerQueries>,
    pub manage_users: Arc<ManageUsersHandler>,
    pub create_event: Arc<CreateEventHandler>,
    pub create_location: Arc<CreateLocationHandler>,
    pub create_participant: Arc<CreateParticipantHandler>,
}

impl AppState {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self {
            queries: Arc::new(PlannerQueries::new(store.clone())),
            manage_users: Arc::new(ManageUsersHandler::new(store.clone())),
            create_event: Arc::new(CreateEventHandler::new(store.clone())),
            create_location: Arc::new(CreateLocationHandler::new(store.clone())),
            create_participant: Arc::new(CreateParticipantHandler::new(store)),
        }
    }
}
