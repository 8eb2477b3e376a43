// Record factories with deterministic, id-derived field values.

use crate::modules::planner::core::event::Event;
use crate::modules::planner::core::location::Location;
use crate::modules::planner::core::participant::Participant;
use crate::modules::planner::core::user::User;

pub fn make_user(id: &str) -> User {
    User {
        id: id.into(),
        username: format!("user-{id}"),
        email: format!("{id}@example.com"),
    }
}

pub fn make_event(id: &str, user_id: &str, location_id: &str) -> Event {
    Event {
        id: id.into(),
        title: format!("Event {id}"),
        desc: "This is a test".to_string(),
        date: "2026-11-05".to_string(),
        from: "18:00".to_string(),
        to: "20:00".to_string(),
        location_id: location_id.into(),
        user_id: user_id.into(),
    }
}

pub fn make_location(id: &str) -> Location {
    Location {
        id: id.into(),
        name: format!("Location {id}"),
        desc: "Ground floor".to_string(),
        lat: 52.37,
        lng: 4.89,
    }
}

pub fn make_participant(id: &str, user_id: &str, event_id: &str) -> Participant {
    Participant {
        id: id.into(),
        user_id: user_id.into(),
        event_id: event_id.into(),
    }
}
