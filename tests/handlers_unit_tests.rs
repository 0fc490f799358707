//! Unit tests for the command handlers against an in-memory backend

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "This is a test module")]
mod tests {
    use core::time::Duration;

    use reminder_cli::backend::{BackendCall, MockBackend};
    use reminder_cli::commands::{Context, Registry};
    use reminder_cli::error::{Operation, ReminderError};

    const BACKEND_URI: &str = "http://localhost:5000";

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_owned()).collect()
    }

    /// Dispatch `command` and return the result with everything written
    fn dispatch(
        backend: &MockBackend,
        command: &str,
        values: &[&str],
    ) -> (Result<(), ReminderError>, String) {
        let ctx = Context {
            program: "reminder",
            backend_uri: BACKEND_URI,
            backend,
        };
        let mut out = Vec::new();
        let result = Registry::new().dispatch(command, &args(values), &ctx, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn create_sends_fields_and_prints_payload() {
        let backend = MockBackend::new().with_payload(br#"{"id":"7"}"#);
        let (result, out) = dispatch(
            &backend,
            "create",
            &["--title", "T", "--message", "M", "--duration", "1h"],
        );

        result.unwrap();
        assert_eq!(out, "Reminder created successfully:\n{\"id\":\"7\"}\n");
        assert_eq!(
            backend.calls(),
            vec![BackendCall::Create {
                title: "T".to_owned(),
                message: "M".to_owned(),
                duration: Duration::from_secs(3_600),
            }]
        );
    }

    #[test]
    fn create_failure_is_wrapped() {
        let backend = MockBackend::new().failing("connection refused");
        let (result, _) = dispatch(&backend, "create", &["-t", "T", "-m", "M", "-d", "1h"]);

        let err = result.unwrap_err();
        assert!(matches!(
            err,
            ReminderError::BackendOperation {
                operation: Operation::Create,
                ..
            }
        ));
        assert_eq!(
            err.to_string(),
            "Could not create reminder : connection refused"
        );
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn edit_uses_the_last_id() {
        let backend = MockBackend::new().with_payload(b"ok");
        let (result, out) = dispatch(
            &backend,
            "edit",
            &["--id", "a", "--id", "b", "--message", "moved"],
        );

        result.unwrap();
        assert_eq!(out, "Reminder edited successfully:\nok\n");
        assert_eq!(
            backend.calls(),
            vec![BackendCall::Edit {
                id: "b".to_owned(),
                title: String::new(),
                message: "moved".to_owned(),
                duration: Duration::ZERO,
            }]
        );
    }

    #[test]
    fn edit_failure_is_wrapped() {
        let backend = MockBackend::new().failing("not found");
        let (result, _) = dispatch(&backend, "edit", &["--id", "1", "-t", "x"]);
        assert_eq!(
            result.unwrap_err().to_string(),
            "Could not edit reminder : not found"
        );
    }

    #[test]
    fn fetch_passes_every_id_in_order() {
        let backend = MockBackend::new().with_payload(b"[]");
        let (result, out) = dispatch(&backend, "fetch", &["--id", "a", "--id", "b", "--id", "c"]);

        result.unwrap();
        assert_eq!(out, "Reminder fetched successfully:\n[]\n");
        assert_eq!(
            backend.calls(),
            vec![BackendCall::Fetch {
                ids: args(&["a", "b", "c"]),
            }]
        );
    }

    #[test]
    fn delete_prints_the_affected_ids() {
        let backend = MockBackend::new();
        let (result, out) = dispatch(&backend, "delete", &["--id", "a", "--id", "b"]);

        result.unwrap();
        assert_eq!(out, "Reminder deleted successfully:\na, b\n");
        assert_eq!(
            backend.calls(),
            vec![BackendCall::Delete {
                ids: args(&["a", "b"]),
            }]
        );
    }

    #[test]
    fn fetch_and_delete_failures_are_wrapped() {
        let backend = MockBackend::new().failing("boom");
        let (fetch, _) = dispatch(&backend, "fetch", &["--id", "1"]);
        let (delete, _) = dispatch(&backend, "delete", &["--id", "1"]);
        assert!(
            fetch
                .unwrap_err()
                .to_string()
                .starts_with("Could not fetch reminder")
        );
        assert!(
            delete
                .unwrap_err()
                .to_string()
                .starts_with("Could not delete reminder")
        );
    }

    #[test]
    fn health_defaults_to_the_configured_backend() {
        let backend = MockBackend::new();
        let (result, out) = dispatch(&backend, "health", &[]);

        result.unwrap();
        assert_eq!(out, "Host http://localhost:5000 is up and running\n");
        assert_eq!(
            backend.calls(),
            vec![BackendCall::Health {
                host: BACKEND_URI.to_owned(),
            }]
        );
    }

    #[test]
    fn health_uses_explicit_host_and_reports_down() {
        let backend = MockBackend::new().with_health(false);
        let (result, out) = dispatch(&backend, "health", &["--host=http://other:1"]);

        result.unwrap();
        assert_eq!(out, "Host http://other:1 is down\n");
        assert_eq!(
            backend.calls(),
            vec![BackendCall::Health {
                host: "http://other:1".to_owned(),
            }]
        );
    }

    #[test]
    fn malformed_duration_names_the_command() {
        let backend = MockBackend::new();
        let (result, _) = dispatch(&backend, "create", &["-t", "T", "-m", "M", "-d", "soon"]);

        let err = result.unwrap_err();
        assert!(matches!(err, ReminderError::FlagParse { .. }));
        assert!(
            err.to_string()
                .starts_with("Could not parse 'create' command flags")
        );
        assert!(backend.calls().is_empty());
    }

    #[test]
    fn hyphen_leading_values_are_taken_literally() {
        let backend = MockBackend::new();
        let (result, _) = dispatch(
            &backend,
            "create",
            &["-t", "-urgent", "-m", "-5 degrees", "-d", "1h"],
        );
        result.unwrap();

        let (result, _) = dispatch(&backend, "fetch", &["--id", "-1"]);
        result.unwrap();

        let (result, _) = dispatch(&backend, "edit", &["--id", "-2", "-t", "-x"]);
        result.unwrap();

        assert_eq!(
            backend.calls(),
            vec![
                BackendCall::Create {
                    title: "-urgent".to_owned(),
                    message: "-5 degrees".to_owned(),
                    duration: Duration::from_secs(3_600),
                },
                BackendCall::Fetch {
                    ids: vec!["-1".to_owned()],
                },
                BackendCall::Edit {
                    id: "-2".to_owned(),
                    title: "-x".to_owned(),
                    message: String::new(),
                    duration: Duration::ZERO,
                },
            ]
        );
    }

    #[test]
    fn unknown_flag_is_a_parse_error() {
        let backend = MockBackend::new();
        let (result, _) = dispatch(&backend, "fetch", &["--ids", "1"]);
        assert!(matches!(
            result.unwrap_err(),
            ReminderError::FlagParse { .. }
        ));
    }

    #[test]
    fn edit_without_id_is_a_parse_error() {
        let backend = MockBackend::new();
        let (result, _) = dispatch(&backend, "edit", &["-t", "T", "-m", "M"]);
        assert!(matches!(
            result.unwrap_err(),
            ReminderError::FlagParse { .. }
        ));
        assert!(backend.calls().is_empty());
    }
}
