use crate::modules::planner::adapters::outbound::seed::Seed;
use crate::modules::planner::core::event::Event;
use crate::modules::planner::core::location::Location;
use crate::modules::planner::core::participant::Participant;
use crate::modules::planner::core::user::User;

#[derive(Default)]
pub struct SeedBuilder {
    inner: Seed,
}

#[allow(dead_code)]
impl SeedBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user(mut self, user: User) -> Self {
        self.inner.users.push(user);
        self
    }

    pub fn event(mut self, event: Event) -> Self {
        self.inner.events.push(event);
        self
    }

    pub fn location(mut self, location: Location) -> Self {
        self.inner.locations.push(location);
        self
    }

    pub fn participant(mut self, participant: Participant) -> Self {
        self.inner.participants.push(participant);
        self
    }

    pub fn build(self) -> Seed {
        self.inner
    }
}
