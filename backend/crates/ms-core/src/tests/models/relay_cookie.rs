use crate::RelayCookie;

#[test]
fn test_set_cookie_header_with_domain() {
    let cookie = RelayCookie::new("MoodleSession", "abc123", ".example.com", "/");
    assert_eq!(
        cookie.to_set_cookie_header(),
        "MoodleSession=abc123; Path=/; Domain=.example.com"
    );
}

#[test]
fn test_set_cookie_header_without_domain() {
    let cookie = RelayCookie::new("MOODLEID1_", "xyz", "", "/lms");
    assert_eq!(cookie.to_set_cookie_header(), "MOODLEID1_=xyz; Path=/lms");
}
