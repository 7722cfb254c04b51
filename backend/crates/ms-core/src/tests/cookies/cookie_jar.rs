use crate::cookie_jar::{self, JarCookie};

use std::io::Cursor;

use googletest::prelude::*;

const JAR: &str = "# Netscape HTTP Cookie File\n\
# https://curl.se/docs/http-cookies.html\n\
\n\
#HttpOnly_.example.com\tTRUE\t/\tFALSE\t0\tMoodleSession\tabc123\n\
lms.example.com\tFALSE\t/\tTRUE\t1767225600\tMOODLEID1_\t  xyz  \n";

#[test]
fn given_seven_field_line_when_parsed_then_name_is_field_five_and_value_is_trimmed_field_six() {
    // When
    let cookie = JarCookie::parse_line("host\tFALSE\t/\tFALSE\t0\tname\t value \n").unwrap();

    // Then
    assert_that!(cookie.name, eq("name"));
    assert_that!(cookie.value, eq("value"));
}

#[test]
fn given_blank_and_comment_lines_when_parsed_then_skipped() {
    assert_that!(JarCookie::parse_line(""), none());
    assert_that!(JarCookie::parse_line("   \n"), none());
    assert_that!(JarCookie::parse_line("# comment\twith\ttabs\ta\tb\tc\td"), none());
}

#[test]
fn given_short_line_when_parsed_then_skipped() {
    assert_that!(JarCookie::parse_line("host\tFALSE\t/\tFALSE\t0\tname"), none());
}

#[test]
fn given_http_only_prefix_when_parsed_then_cookie_is_kept_and_flagged() {
    // When
    let cookie =
        JarCookie::parse_line("#HttpOnly_.example.com\tTRUE\t/\tFALSE\t0\tMoodleSession\tabc")
            .unwrap();

    // Then
    assert_that!(cookie.http_only, eq(true));
    assert_that!(cookie.domain, eq(".example.com"));
    assert_that!(cookie.name, eq("MoodleSession"));
}

#[test]
fn given_full_jar_when_parsed_then_only_cookie_lines_remain() {
    // When
    let cookies = cookie_jar::parse(JAR);

    // Then
    assert_that!(cookies.len(), eq(2));
    assert_that!(cookies[0].name, eq("MoodleSession"));
    assert_that!(cookies[1].name, eq("MOODLEID1_"));
    assert_that!(cookies[1].value, eq("xyz"));
    assert_that!(cookies[1].secure, eq(true));
    assert_that!(cookies[1].expires, eq(1767225600));
}

#[test]
fn given_reader_when_read_then_same_result_as_in_memory_parse() {
    let from_reader = cookie_jar::read(Cursor::new(JAR)).unwrap();
    assert_that!(from_reader, eq(&cookie_jar::parse(JAR)));
}

#[test]
fn test_to_line_is_parseable() {
    let cookie = JarCookie {
        domain: ".example.com".into(),
        include_subdomains: true,
        path: "/".into(),
        secure: false,
        expires: 0,
        name: "MoodleSession".into(),
        value: "abc".into(),
        http_only: true,
    };

    let line = cookie.to_line();

    assert_eq!(
        line,
        "#HttpOnly_.example.com\tTRUE\t/\tFALSE\t0\tMoodleSession\tabc"
    );
    assert_eq!(JarCookie::parse_line(&line), Some(cookie));
}

#[test]
fn given_session_or_future_cookie_then_not_expired_and_past_cookie_expired() {
    let session = JarCookie::parse_line("host\tFALSE\t/\tFALSE\t0\ta\t1").unwrap();
    let future = JarCookie::parse_line("host\tFALSE\t/\tFALSE\t2000\ta\t1").unwrap();
    let past = JarCookie::parse_line("host\tFALSE\t/\tFALSE\t500\ta\t1").unwrap();

    assert_that!(session.is_expired(1_000), eq(false));
    assert_that!(future.is_expired(1_000), eq(false));
    assert_that!(past.is_expired(1_000), eq(true));
}
