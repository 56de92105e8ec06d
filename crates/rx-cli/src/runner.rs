use crate::commands::Commands;
use crate::form::read_form;
use crate::{Cli, CliError, CliResult};

use std::sync::Arc;

use log::{debug, info};
use rx_config::Config;
use rx_core::{
    CachedProfile, Credentials, FieldErrors, Principal, RegistrationForm, SessionState,
    validate_registration,
};
use rx_session::{
    FileStore, GuardDecision, HistoryNavigator, NavigationListener, NavigationMode, Navigator,
    RouteGuard, Session,
};
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SessionReport<'a> {
    surface: &'a str,
    state: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    principal: Option<&'a Principal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cached_profile: Option<CachedProfile>,
    route: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ValidationReport<'a> {
    valid: bool,
    field_errors: &'a FieldErrors,
}

/// Execute one command against the configured backend. Returns the exit
/// status: 0 when the session ends up as the command intended, 1 otherwise.
///
/// The session is bootstrapped first, the same way a page load would, and
/// the command's screen is guarded before anything is sent.
pub async fn run(cli: &Cli, config: &Config) -> CliResult<u8> {
    if let Commands::Validate { form } = &cli.command {
        return validate_form(cli, &read_form(form)?);
    }

    let surface = cli.surface;
    let store = FileStore::open(config.storage_dir()?)?;
    let session = Session::new(surface, &config.api, Arc::new(store))?;

    let (guard, start_route) = if cli.command.is_public_only() {
        (RouteGuard::PublicOnly, surface.login_route())
    } else {
        (RouteGuard::Protected, surface.dashboard_route())
    };
    let navigator = Arc::new(HistoryNavigator::new(start_route));
    let mut listener =
        NavigationListener::new(surface, navigator.clone(), session.events().clone());

    let state = session.bootstrap().await;
    info!("{surface} session is {state}");

    let decision = guard.resolve(&session).await;
    let may_render = decision.apply(navigator.as_ref());

    let outcome = match &cli.command {
        // Already signed in: the login screen would bounce to the dashboard
        Commands::Login { .. } | Commands::Register { .. } if !may_render => {
            info!("Already signed in to {surface}");
            Ok(())
        }
        Commands::Login { email, password } => session
            .login(&Credentials::new(email.as_str(), password.as_str()))
            .await
            .map(|_| navigator.navigate(surface.dashboard_route(), NavigationMode::Replace)),
        Commands::Register { form } => {
            let form = read_form(form)?;
            session
                .register(&form)
                .await
                .map(|_| navigator.navigate(surface.dashboard_route(), NavigationMode::Replace))
        }
        Commands::Logout => {
            session.logout();
            Ok(())
        }
        Commands::Status => {
            if matches!(decision, GuardDecision::Render) {
                // Confirms the token is still accepted; a 401 ends the session
                session.refresh_profile().await.map(|_| ())
            } else {
                Ok(())
            }
        }
        Commands::Validate { .. } => Ok(()),
    };

    let navigations = listener.drain();
    debug!("{navigations} session redirect(s), now at {}", navigator.current());

    let state = session.state();
    print_json(
        &SessionReport {
            surface: surface.as_str(),
            state: state.as_str(),
            principal: state.principal(),
            cached_profile: session.cached_profile(),
            route: navigator.current(),
        },
        cli.pretty,
    )?;

    outcome?;

    Ok(match (&cli.command, &state) {
        (Commands::Status, SessionState::Authenticated(_)) | (Commands::Logout, _) => 0,
        (Commands::Status, _) => 1,
        _ if session.is_authenticated() => 0,
        _ => 1,
    })
}

fn validate_form(cli: &Cli, form: &RegistrationForm) -> CliResult<u8> {
    let field_errors = validate_registration(form);
    let valid = field_errors.is_empty();

    print_json(
        &ValidationReport {
            valid,
            field_errors: &field_errors,
        },
        cli.pretty,
    )?;

    Ok(if valid { 0 } else { 1 })
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> CliResult<()> {
    let output = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .map_err(CliError::output)?;

    println!("{output}");
    Ok(())
}
