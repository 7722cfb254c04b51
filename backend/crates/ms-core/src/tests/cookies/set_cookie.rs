use crate::{SetCookie, set_cookie};

use googletest::prelude::*;

#[test]
fn given_full_header_when_parsed_then_attributes_are_captured() {
    // When
    let cookie = SetCookie::parse(
        "MoodleSession=abc123; path=/; domain=.example.com; secure; HttpOnly; Max-Age=3600",
    )
    .unwrap();

    // Then
    assert_that!(cookie.name, eq("MoodleSession"));
    assert_that!(cookie.value, eq("abc123"));
    assert_that!(cookie.domain, some(eq(".example.com")));
    assert_that!(cookie.path, some(eq("/")));
    assert_that!(cookie.secure, eq(true));
    assert_that!(cookie.http_only, eq(true));
    assert_that!(cookie.max_age, some(eq(3600)));
}

#[test]
fn given_value_with_equals_sign_when_parsed_then_value_is_kept_whole() {
    let cookie = SetCookie::parse("token=a=b=c; Path=/").unwrap();
    assert_that!(cookie.value, eq("a=b=c"));
}

#[test]
fn given_header_without_name_when_parsed_then_none() {
    assert_that!(SetCookie::parse("=value; Path=/"), none());
    assert_that!(SetCookie::parse("garbage"), none());
}

#[test]
fn given_cookie_without_domain_when_converted_to_jar_then_default_domain_is_used() {
    // Given
    let cookie = SetCookie::parse("MOODLEID1_=xyz; Max-Age=60").unwrap();

    // When
    let jar = cookie.to_jar_cookie("lms.example.com", 1_000);

    // Then
    assert_that!(jar.domain, eq("lms.example.com"));
    assert_that!(jar.include_subdomains, eq(false));
    assert_that!(jar.path, eq("/"));
    assert_that!(jar.expires, eq(1_060));
}

#[test]
fn given_expires_in_either_date_layout_when_parsed_then_unix_time_is_captured() {
    let dashed = SetCookie::parse("a=1; expires=Thu, 01-Jan-1970 00:00:10 GMT").unwrap();
    let spaced = SetCookie::parse("a=1; Expires=Sat, 01 Jan 2000 00:00:00 GMT").unwrap();
    let short_year = SetCookie::parse("a=1; expires=Saturday, 01-Jan-00 00:00:00 GMT").unwrap();

    assert_that!(dashed.expires, some(eq(10)));
    assert_that!(spaced.expires, some(eq(946_684_800)));
    assert_that!(short_year.expires, some(eq(946_684_800)));
}

#[test]
fn given_unreadable_expires_when_parsed_then_treated_as_session_cookie() {
    let cookie = SetCookie::parse("a=1; expires=whenever").unwrap();

    assert_that!(cookie.expires, none());
    assert_that!(cookie.is_expired(1_000), eq(false));
}

#[test]
fn given_zero_max_age_or_past_expires_then_cookie_is_expired() {
    let now = 1_000_000;

    assert_that!(SetCookie::parse("a=1; Max-Age=0").unwrap().is_expired(now), eq(true));
    assert_that!(SetCookie::parse("a=1; Max-Age=-5").unwrap().is_expired(now), eq(true));
    assert_that!(
        SetCookie::parse("a=1; expires=Thu, 01-Jan-1970 00:00:01 GMT")
            .unwrap()
            .is_expired(now),
        eq(true)
    );
    assert_that!(SetCookie::parse("a=1; path=/").unwrap().is_expired(now), eq(false));
}

#[test]
fn given_max_age_and_past_expires_then_max_age_wins() {
    let cookie =
        SetCookie::parse("a=1; expires=Thu, 01-Jan-1970 00:00:01 GMT; Max-Age=60").unwrap();

    assert_that!(cookie.expires_at(1_000), some(eq(1_060)));
    assert_that!(cookie.is_expired(1_000), eq(false));
}

#[test]
fn given_deletion_then_new_value_when_collected_then_only_new_value_remains() {
    // Given
    let headers = [
        "MoodleSession=deleted; expires=Thu, 01-Jan-1970 00:00:01 GMT; Max-Age=0; path=/",
        "MoodleSession=live123; path=/",
    ];

    // When
    let cookies = set_cookie::collect(headers, 1_000_000);

    // Then
    assert_that!(cookies.len(), eq(1));
    assert_that!(cookies[0].value.as_str(), eq("live123"));
}

#[test]
fn given_new_value_then_deletion_when_collected_then_nothing_remains() {
    let headers = ["MoodleSession=live123; path=/", "MoodleSession=; Max-Age=0; path=/"];

    let cookies = set_cookie::collect(headers, 1_000_000);

    assert_that!(cookies, is_empty());
}

#[test]
fn given_same_name_on_different_paths_when_collected_then_both_kept() {
    let headers = ["a=1; path=/", "a=2; path=/admin", "garbage", "b=3"];

    let cookies = set_cookie::collect(headers, 1_000_000);

    let pairs: Vec<(&str, &str)> = cookies
        .iter()
        .map(|cookie| (cookie.name.as_str(), cookie.value.as_str()))
        .collect();
    assert_that!(pairs, eq(&vec![("a", "1"), ("a", "2"), ("b", "3")]));
}
