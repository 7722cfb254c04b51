mod event_kind;
