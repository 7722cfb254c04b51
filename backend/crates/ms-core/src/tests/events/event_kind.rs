use crate::EventKind;

use std::str::FromStr;

#[test]
fn test_event_kind_round_trips_through_str() {
    for kind in EventKind::ALL {
        assert_eq!(EventKind::from_str(kind.as_str()).unwrap(), kind);
    }
}

#[test]
fn test_event_kind_from_unknown_str() {
    assert!(EventKind::from_str("onUserAfterSave").is_err());
    assert!(EventKind::from_str("").is_err());
}
