use crate::{DeleteUsersPayload, LocalUser, NewRemoteUser, RemoteUserUpdate, UsersPayload};

use googletest::prelude::*;
use serde_json::json;

fn alice(password: Option<&str>) -> LocalUser {
    LocalUser {
        id: 42,
        username: "Alice".into(),
        name: "Alice A".into(),
        email: "a@x.com".into(),
        password_clear: password.map(String::from),
    }
}

#[test]
fn given_new_local_user_when_converted_then_full_name_fills_both_name_fields() {
    // When
    let remote = NewRemoteUser::from(&alice(Some("p1")));

    // Then
    assert_that!(remote.username, eq("alice"));
    assert_that!(remote.firstname, eq("Alice A"));
    assert_that!(remote.lastname, eq("Alice A"));
    assert_that!(remote.password, some(eq("p1")));
}

#[test]
fn given_create_payload_when_serialized_then_matches_users_list_shape() {
    // Given
    let payload = UsersPayload::single(NewRemoteUser::from(&alice(Some("p1"))));

    // When
    let value = serde_json::to_value(&payload).unwrap();

    // Then
    assert_that!(
        value,
        eq(&json!({
            "users": [{
                "username": "alice",
                "password": "p1",
                "firstname": "Alice A",
                "lastname": "Alice A",
                "email": "a@x.com"
            }]
        }))
    );
}

#[test]
fn given_update_without_new_password_when_serialized_then_password_is_absent() {
    // Given
    let update = RemoteUserUpdate::from_local(900, &alice(Some("")));

    // When
    let value = serde_json::to_value(UsersPayload::single(update)).unwrap();

    // Then
    assert_that!(value["users"][0]["id"], eq(&json!(900)));
    assert_that!(value["users"][0].get("password"), none());
}

#[test]
fn given_update_with_new_password_when_serialized_then_password_is_inside_user_record() {
    // Given
    let update = RemoteUserUpdate::from_local(900, &alice(Some("n3w")));

    // When
    let value = serde_json::to_value(UsersPayload::single(update)).unwrap();

    // Then
    assert_that!(value["users"][0]["password"], eq(&json!("n3w")));
    assert_that!(value.get("password"), none());
}

#[test]
fn test_delete_payload_shape() {
    let value = serde_json::to_value(DeleteUsersPayload { userids: vec![900] }).unwrap();
    assert_eq!(value, json!({ "userids": [900] }));
}
