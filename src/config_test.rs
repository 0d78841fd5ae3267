use super::*;

// Every case lives in one test: the process environment is shared across
// the test harness threads.

/// # Safety
/// Callers must not race other threads reading these variables.
unsafe fn clear_portal_env() {
    unsafe {
        std::env::remove_var("BANKDOCS_USER_FIXTURE");
        std::env::remove_var("BANKDOCS_SAVE_DELAY_MS");
        std::env::remove_var("BANKDOCS_SUBMIT_DELAY_MS");
        std::env::remove_var("BANKDOCS_START_PATH");
    }
}

#[test]
fn from_env_cases() {
    unsafe { clear_portal_env() };
    let cfg = PortalConfig::from_env().unwrap();
    assert_eq!(cfg, PortalConfig::default());
    assert_eq!(cfg.delays.save, Duration::from_millis(DEFAULT_SAVE_DELAY_MS));
    assert_eq!(cfg.start_path, "/");

    unsafe {
        std::env::set_var("BANKDOCS_USER_FIXTURE", "fixtures/jane.json");
        std::env::set_var("BANKDOCS_SAVE_DELAY_MS", "250");
        std::env::set_var("BANKDOCS_SUBMIT_DELAY_MS", " 0 ");
        std::env::set_var("BANKDOCS_START_PATH", "/documents/create");
    }
    let cfg = PortalConfig::from_env().unwrap();
    assert_eq!(cfg.user_fixture, Some(PathBuf::from("fixtures/jane.json")));
    assert_eq!(cfg.delays, FormDelays { save: Duration::from_millis(250), submit: Duration::ZERO });
    assert_eq!(cfg.start_path, "/documents/create");

    unsafe {
        clear_portal_env();
        std::env::set_var("BANKDOCS_USER_FIXTURE", "  ");
        std::env::set_var("BANKDOCS_SUBMIT_DELAY_MS", "soon");
    }
    let err = PortalConfig::from_env().unwrap_err();
    assert_eq!(err, ConfigError::InvalidNumber { var: "BANKDOCS_SUBMIT_DELAY_MS", value: "soon".to_owned() });
    assert!(err.to_string().contains("BANKDOCS_SUBMIT_DELAY_MS"));

    unsafe {
        std::env::remove_var("BANKDOCS_SUBMIT_DELAY_MS");
    }
    assert_eq!(PortalConfig::from_env().unwrap().user_fixture, None);

    #[cfg(unix)]
    {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let odd_path = OsStr::from_bytes(b"/tmp/prof\xffile.json");
        unsafe {
            clear_portal_env();
            std::env::set_var("BANKDOCS_USER_FIXTURE", odd_path);
        }
        assert_eq!(PortalConfig::from_env().unwrap().user_fixture, Some(PathBuf::from(odd_path)));

        unsafe {
            std::env::set_var("BANKDOCS_SAVE_DELAY_MS", OsStr::from_bytes(b"25\xff0"));
        }
        let err = PortalConfig::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidNumber { var: "BANKDOCS_SAVE_DELAY_MS", .. }));

        unsafe {
            std::env::remove_var("BANKDOCS_SAVE_DELAY_MS");
            std::env::set_var("BANKDOCS_START_PATH", OsStr::from_bytes(b"/docs/\xfe"));
        }
        let err = PortalConfig::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::NotUnicode { var: "BANKDOCS_START_PATH", .. }));
    }

    unsafe { clear_portal_env() };
}
