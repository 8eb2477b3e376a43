// Relationship resolution between collections.
//
// Every function is a pure read over a snapshot of the target collection. Matches are
// found by linear scan and keep the collection's insertion order.
//
// Location and participant lookups key on `Event::user_id`, not on `location_id` or on
// the participant's `event_id`. Existing clients depend on that pairing.

use crate::modules::planner::core::event::Event;
use crate::modules::planner::core::location::Location;
use crate::modules::planner::core::participant::Participant;
use crate::modules::planner::core::user::User;

pub fn user_events(user: &User, events: &[Event]) -> Vec<Event> {
    events
        .iter()
        .filter(|event| event.user_id == user.id)
        .cloned()
        .collect()
}

pub fn event_owner(event: &Event, users: &[User]) -> Option<User> {
    users.iter().find(|user| user.id == event.user_id).cloned()
}

pub fn event_location(event: &Event, locations: &[Location]) -> Option<Location> {
    locations
        .iter()
        .find(|location| location.id == event.user_id)
        .cloned()
}

pub fn event_participants(event: &Event, participants: &[Participant]) -> Vec<Participant> {
    participants
        .iter()
        .filter(|participant| participant.user_id == event.user_id)
        .cloned()
        .collect()
}
