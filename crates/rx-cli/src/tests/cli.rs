use crate::{Cli, Commands};

use std::path::PathBuf;

use clap::Parser;
use rx_core::Surface;

#[test]
fn given_no_surface_flag_when_parsed_then_defaults_to_customer() {
    let cli = Cli::try_parse_from(["rx", "status"]).unwrap();

    assert_eq!(cli.surface, Surface::Customer);
    assert_eq!(cli.command, Commands::Status);
    assert!(cli.server.is_none());
    assert!(!cli.pretty);
}

#[test]
fn given_admin_surface_after_subcommand_when_parsed_then_flag_is_global() {
    let cli = Cli::try_parse_from(["rx", "logout", "--surface", "ADMIN", "--pretty"]).unwrap();

    assert_eq!(cli.surface, Surface::Admin);
    assert_eq!(cli.command, Commands::Logout);
    assert!(cli.pretty);
}

#[test]
fn given_unknown_surface_when_parsed_then_rejected() {
    let result = Cli::try_parse_from(["rx", "--surface", "vendor", "status"]);

    assert!(result.is_err());
}

#[test]
fn given_login_with_password_when_parsed_then_credentials_captured() {
    let cli = Cli::try_parse_from([
        "rx",
        "--server",
        "http://127.0.0.1:5000",
        "login",
        "--email",
        "orders@sunrisemedicals.in",
        "--password",
        "secret123",
    ])
    .unwrap();

    assert_eq!(cli.server.as_deref(), Some("http://127.0.0.1:5000"));
    assert_eq!(
        cli.command,
        Commands::Login {
            email: "orders@sunrisemedicals.in".into(),
            password: "secret123".into(),
        }
    );
    assert!(cli.command.is_public_only());
}

#[test]
fn given_register_when_parsed_then_form_path_captured() {
    let cli = Cli::try_parse_from(["rx", "register", "--form", "form.json"]).unwrap();

    assert_eq!(
        cli.command,
        Commands::Register {
            form: PathBuf::from("form.json")
        }
    );
    assert!(cli.command.is_public_only());
}

#[test]
fn given_status_when_checked_then_not_public_only() {
    assert!(!Commands::Status.is_public_only());
    assert!(!Commands::Logout.is_public_only());
}
