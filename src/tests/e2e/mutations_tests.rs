use crate::modules::planner::adapters::outbound::entity_store::EntityStore;
use crate::modules::planner::adapters::outbound::seed::Seed;
use crate::tests::fixtures::records::{make_event, make_location, make_participant, make_user};
use crate::tests::fixtures::schema::{error_code, execute, make_schema};
use crate::tests::fixtures::seed::SeedBuilder;
use serde_json::json;

fn users_seed() -> Seed {
    SeedBuilder::new()
        .user(make_user("u1"))
        .user(make_user("u2"))
        .user(make_user("u3"))
        .event(make_event("e1", "u2", "loc1"))
        .location(make_location("u2"))
        .participant(make_participant("p1", "u2", "e1"))
        .build()
}

#[tokio::test]
async fn created_user_can_be_read_back() {
    let (_, schema) = make_schema(users_seed());

    let created = execute(
        &schema,
        r#"mutation {
            createUser(data: { username: "ada", email: "ada@example.com" }) {
                id username email events { id }
            }
        }"#,
    )
    .await;
    let user = &created["data"]["createUser"];
    assert_eq!(user["username"], "ada");
    assert_eq!(user["events"], json!([]));

    let id = user["id"].as_str().unwrap();
    let fetched = execute(
        &schema,
        &format!(r#"{{ user(id: "{id}") {{ id username email events {{ id }} }} }}"#),
    )
    .await;
    assert_eq!(&fetched["data"]["user"], user);
}

#[tokio::test]
async fn update_changes_only_the_given_fields() {
    let (store, schema) = make_schema(users_seed());

    let response = execute(
        &schema,
        r#"mutation {
            updateUser(id: "u2", data: { username: "renamed" }) { id username email }
        }"#,
    )
    .await;

    assert_eq!(
        response["data"]["updateUser"],
        json!({ "id": "u2", "username": "renamed", "email": "u2@example.com" })
    );
    let stored = store.find_user(&"u2".into()).await.unwrap().unwrap();
    assert_eq!(stored.username, "renamed");
    assert_eq!(stored.email, "u2@example.com");
}

#[tokio::test]
async fn update_of_an_unknown_user_fails_and_changes_nothing() {
    let (store, schema) = make_schema(users_seed());
    let before = store.users().await.unwrap();

    let response = execute(
        &schema,
        r#"mutation { updateUser(id: "ghost", data: { username: "x", email: "y" }) { id } }"#,
    )
    .await;

    assert_eq!(response["data"], json!(null));
    assert_eq!(error_code(&response), Some("NOT_FOUND"));
    assert_eq!(response["errors"][0]["message"], "User not found: ghost");
    assert_eq!(store.users().await.unwrap(), before);
}

#[tokio::test]
async fn delete_removes_exactly_the_matching_user() {
    let (store, schema) = make_schema(users_seed());

    let response = execute(
        &schema,
        r#"mutation { deleteUser(id: "u2") { id username } }"#,
    )
    .await;

    assert_eq!(
        response["data"]["deleteUser"],
        json!({ "id": "u2", "username": "user-u2" })
    );
    assert_eq!(
        store.users().await.unwrap(),
        vec![make_user("u1"), make_user("u3")]
    );
}

#[tokio::test]
async fn delete_keeps_dependent_records() {
    let (_, schema) = make_schema(users_seed());

    execute(&schema, r#"mutation { deleteUser(id: "u2") { id } }"#).await;
    let response = execute(
        &schema,
        r#"{ event(id: "e1") { user_id participants { id } } }"#,
    )
    .await;

    assert_eq!(
        response["data"],
        json!({ "event": { "user_id": "u2", "participants": [{ "id": "p1" }] } })
    );

    let dangling = execute(&schema, r#"{ event(id: "e1") { users { id } } }"#).await;
    assert_eq!(error_code(&dangling), Some("NOT_FOUND"));
}

#[tokio::test]
async fn delete_of_an_unknown_user_fails_and_removes_nothing() {
    let (store, schema) = make_schema(users_seed());

    let response = execute(&schema, r#"mutation { deleteUser(id: "ghost") { id } }"#).await;

    assert_eq!(error_code(&response), Some("NOT_FOUND"));
    assert_eq!(
        store.users().await.unwrap(),
        vec![make_user("u1"), make_user("u2"), make_user("u3")]
    );
}

#[tokio::test]
async fn created_event_resolves_its_owner() {
    let (store, schema) = make_schema(users_seed());

    let response = execute(
        &schema,
        r#"mutation {
            createEvent(data: {
                title: "Rust meetup", desc: "Talks", date: "2026-11-05",
                from: "18:30", to: "21:00", location_id: "loc9", user_id: "u1"
            }) { id title location_id user_id users { username } }
        }"#,
    )
    .await;

    let event = &response["data"]["createEvent"];
    assert_eq!(event["title"], "Rust meetup");
    assert_eq!(event["location_id"], "loc9");
    assert_eq!(event["users"], json!({ "username": "user-u1" }));
    assert_eq!(store.events().await.unwrap().len(), 2);
}

#[tokio::test]
async fn created_location_and_participant_are_listed() {
    let (_, schema) = make_schema(users_seed());

    let location = execute(
        &schema,
        r#"mutation {
            createLocation(data: { name: "Hall", desc: "Upstairs", lat: 1.5, lng: -2.25 }) {
                id name lat lng
            }
        }"#,
    )
    .await;
    assert_eq!(location["data"]["createLocation"]["lng"], json!(-2.25));

    let participant = execute(
        &schema,
        r#"mutation {
            createParticipant(data: { user_id: "u3", event_id: "e1" }) { id user_id event_id }
        }"#,
    )
    .await;
    assert_eq!(participant["data"]["createParticipant"]["user_id"], "u3");

    let listed = execute(&schema, "{ locations { name } participants { event_id } }").await;
    assert_eq!(
        listed["data"],
        json!({
            "locations": [{ "name": "Location u2" }, { "name": "Hall" }],
            "participants": [{ "event_id": "e1" }, { "event_id": "e1" }],
        })
    );
}
