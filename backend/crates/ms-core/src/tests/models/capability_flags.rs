use crate::CapabilityFlags;

#[test]
fn test_flags_from_function_names() {
    let flags = CapabilityFlags::from_function_names([
        "core_webservice_get_site_info",
        "core_user_create_users",
        "core_user_delete_users",
    ]);

    assert!(flags.create_users);
    assert!(!flags.update_users);
    assert!(flags.delete_users);
    assert!(!flags.all_available());
}

#[test]
fn test_flags_from_empty_list() {
    let flags = CapabilityFlags::from_function_names(Vec::<&str>::new());
    assert_eq!(flags, CapabilityFlags::default());
}

#[test]
fn test_entries_keep_display_order() {
    let flags = CapabilityFlags {
        create_users: true,
        update_users: true,
        delete_users: true,
    };
    let names: Vec<&str> = flags.entries().iter().map(|(f, _)| f.as_str()).collect();

    assert!(flags.all_available());
    assert_eq!(
        names,
        vec![
            "core_user_create_users",
            "core_user_update_users",
            "core_user_delete_users"
        ]
    );
}
