use crate::api::events::outcome_response;

use ms_core::{EventOutcome, MessageLevel, RelayCookie};

use http::{StatusCode, header::SET_COOKIE};
use http_body_util::BodyExt;

#[tokio::test]
async fn test_each_relay_cookie_becomes_a_set_cookie_header() {
    let mut outcome = EventOutcome::new();
    outcome
        .cookies
        .push(RelayCookie::new("MoodleSession", "abc", ".example.org", "/"));
    outcome
        .cookies
        .push(RelayCookie::new("MOODLEID1_", "xyz", ".example.org", "/"));

    let response = outcome_response(outcome);

    assert_eq!(response.status(), StatusCode::OK);
    let headers: Vec<&str> = response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .map(|value| value.to_str().unwrap())
        .collect();
    assert_eq!(
        headers,
        vec![
            "MoodleSession=abc; Path=/; Domain=.example.org",
            "MOODLEID1_=xyz; Path=/; Domain=.example.org",
        ]
    );
}

#[tokio::test]
async fn test_outcome_body_carries_messages() {
    let outcome = EventOutcome::new().with_message(MessageLevel::Notice, "done");

    let response = outcome_response(outcome);

    assert!(response.headers().get(SET_COOKIE).is_none());
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["accepted"], true);
    assert_eq!(json["messages"][0]["level"], "notice");
    assert_eq!(json["messages"][0]["text"], "done");
    assert_eq!(json["cookies"], serde_json::json!([]));
}

#[tokio::test]
async fn test_cookie_with_newline_is_dropped() {
    let mut outcome = EventOutcome::new();
    outcome
        .cookies
        .push(RelayCookie::new("bad", "a\nb", "", "/"));

    let response = outcome_response(outcome);

    assert!(response.headers().get(SET_COOKIE).is_none());
}
