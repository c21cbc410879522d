//! ei - EIPs Insight CLI
//!
//! # Examples
//!
//! ```bash
//! # Cache an account, then work with the profile
//! ei sign-in --email alice@example.com
//! ei profile refresh --pretty
//! ei profile password --new hunter22 --confirm hunter22
//!
//! # Chart counts for ERCs since 2020, exported as CSV
//! ei chart --category ERC --type ERCs --from 2020 --out .
//! ```

mod cli;
mod commands;
mod logger;
mod profile_commands;

use crate::{cli::Cli, commands::Commands, profile_commands::ProfileCommands};

use ei_client::{
    ActionOutcome, Client, ClientError, FileStore, LocalStore, Navigation, Notification,
    ProfileController, StatusChartView, StoredSession, UserCache,
};
use ei_core::{CategoryBucket, ChartType, UserRecord, YearRange, merge_user_records};

use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;
use std::sync::Arc;

use clap::Parser;
use log::{LevelFilter, debug, warn};
use serde::Serialize;
use serde_json::{Value, json};

const CACHE_DIR_NAME: &str = "eips-insight";

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = LevelFilter::from_str(&cli.log_level).unwrap_or_else(|_| {
        eprintln!("Unknown log level '{}', using warn", cli.log_level);
        LevelFilter::Warn
    });
    if let Err(e) = logger::initialize(log_level) {
        eprintln!("Error initializing logger: {e}");
    }

    let cache_dir = match cli.cache_dir.clone().or_else(default_cache_dir) {
        Some(dir) => dir,
        None => {
            eprintln!("Error: could not determine a data directory; pass --cache-dir");
            return ExitCode::FAILURE;
        }
    };
    debug!("Using cache directory {}", cache_dir.display());

    let store: Arc<dyn LocalStore> = Arc::new(FileStore::new(cache_dir));
    let session = StoredSession::new(store.clone());

    let token = match cli.token.clone() {
        Some(token) => Some(token),
        None => session.token().unwrap_or_else(|e| {
            warn!("Ignoring unreadable stored session: {e}");
            None
        }),
    };
    let client = Client::new(&cli.server, cli.user_id.as_deref()).with_token(token);

    let result = match cli.command {
        Commands::SignIn {
            email,
            session_token,
        } => sign_in(&client, &store, &session, &email, session_token.as_deref()).await,

        Commands::Profile { action } => {
            let controller =
                ProfileController::new(client, UserCache::new(store), Arc::new(session));
            return run_profile(controller, action, cli.pretty).await;
        }

        Commands::Chart {
            category,
            chart_type,
            from,
            to,
            out,
        } => chart(client, &category, &chart_type, YearRange::new(from, to), out).await,

        Commands::StatusChanges => client
            .get_status_changes()
            .await
            .and_then(|aggregation| to_value(&aggregation)),
    };

    match result {
        Ok(value) => print_json(&value, cli.pretty),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn default_cache_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join(CACHE_DIR_NAME))
}

async fn sign_in(
    client: &Client,
    store: &Arc<dyn LocalStore>,
    session: &StoredSession,
    email: &str,
    token: Option<&str>,
) -> Result<Value, ClientError> {
    if let Some(token) = token {
        session.store_token(token)?;
    }

    let verified = client.verify_user(email).await?;
    let seed = UserRecord {
        email: email.to_string(),
        ..UserRecord::default()
    };
    let record = merge_user_records(&seed, &verified);
    UserCache::new(store.clone()).save(&record)?;

    to_value(&record)
}

async fn run_profile(
    mut controller: ProfileController,
    action: ProfileCommands,
    pretty: bool,
) -> ExitCode {
    let loaded = controller.load().await;
    let outcome = if loaded != ActionOutcome::Done {
        loaded
    } else {
        match action {
            ProfileCommands::Show => ActionOutcome::Done,
            ProfileCommands::Refresh => controller.refresh_status().await,
            ProfileCommands::Rename { name } => {
                controller.begin_edit_name();
                controller.update_name(&name).await
            }
            ProfileCommands::Password {
                new_password,
                confirm,
            } => {
                controller.open_password_form();
                controller.update_password(&new_password, &confirm).await
            }
            ProfileCommands::Cancel => controller.cancel_subscription().await,
            ProfileCommands::Logout => {
                controller.request_logout();
                controller.logout().await
            }
        }
    };

    for notification in controller.drain_notifications() {
        print_notification(&notification);
    }

    match (outcome, controller.take_navigation()) {
        (ActionOutcome::Done, _) => match to_value(&controller.state().user) {
            Ok(value) => print_json(&value, pretty),
            Err(e) => {
                eprintln!("Error: {}", e);
                ExitCode::FAILURE
            }
        },
        (ActionOutcome::Redirected, Some(Navigation::SignIn { after })) if after.is_zero() => {
            eprintln!("Not signed in.");
            eprintln!();
            eprintln!("Sign in first:");
            eprintln!("  ei sign-in --email <address>");
            ExitCode::FAILURE
        }
        (ActionOutcome::Redirected, Some(Navigation::SignIn { after })) => {
            tokio::time::sleep(after).await;
            ExitCode::SUCCESS
        }
        _ => ExitCode::FAILURE,
    }
}

async fn chart(
    client: Client,
    category: &str,
    chart_type: &str,
    range: YearRange,
    out: Option<PathBuf>,
) -> Result<Value, ClientError> {
    let category = CategoryBucket::from_str(category).map_err(invalid_argument)?;
    let chart_type = ChartType::from_str(chart_type).map_err(invalid_argument)?;

    let mut view = StatusChartView::load(client, category, chart_type).await?;
    view.set_range(range);

    let mut output = json!({
        "category": category,
        "chartType": chart_type.as_str(),
        "years": view.years(),
        "counts": view.stacked(),
    });

    if let Some(dir) = out {
        let report = view.export_csv(&dir)?;
        if let Some(counter) = report.counter {
            if let Err(e) = counter.await {
                warn!("Download counter task failed: {e}");
            }
        }
        output["export"] = json!({ "path": report.path, "rows": report.rows });
    }

    Ok(output)
}

#[track_caller]
fn invalid_argument(err: ei_core::CoreError) -> ClientError {
    ClientError::api_error(400, "INVALID_ARGUMENT".to_string(), err.to_string())
}

fn to_value<T: Serialize>(value: &T) -> Result<Value, ClientError> {
    serde_json::to_value(value).map_err(ClientError::from_json)
}

fn print_notification(notification: &Notification) {
    if notification.is_error() {
        eprintln!("Error: {}", notification);
    } else {
        eprintln!("{}", notification);
    }
}

fn print_json(value: &Value, pretty: bool) -> ExitCode {
    let output = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };

    match output {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error serializing response: {}", e);
            ExitCode::FAILURE
        }
    }
}
