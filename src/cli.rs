use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::Path;
use std::path::PathBuf;
use time::Duration;

const DEFAULT_API_BASE_URL: &str = "https://co-work-backend-test.up.railway.app";
const DEFAULT_APP_NAME: &str = "Shagaf";
const DEFAULT_AUTH_COOKIE_NAME: &str = "shagaf_auth";

#[allow(clippy::large_enum_variant)]
pub(crate) enum RunOutcome {
    Serve(shagaf_admin::config::AppConfig, SocketAddr),
    Exit(i32),
}

pub(crate) fn run() -> RunOutcome {
    let cli = Cli::parse();
    if let Some(Command::AuthKey) = cli.command {
        let code = run_auth_key();
        return RunOutcome::Exit(code);
    }

    let file = match load_config_file(cli.config.as_deref()) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("error: {err}");
            return RunOutcome::Exit(2);
        }
    };

    let auth = match resolve_auth_config(&cli, &file) {
        Ok(auth) => auth,
        Err(err) => {
            eprintln!("error: {err}");
            return RunOutcome::Exit(2);
        }
    };

    let listen = cli.listen;
    RunOutcome::Serve(
        shagaf_admin::config::AppConfig {
            api_base_url: cli
                .api_base_url
                .or(file.api_base_url)
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
            app_name: cli
                .app_name
                .or(file.app_name)
                .unwrap_or_else(|| DEFAULT_APP_NAME.to_string()),
            room_ids: resolve_room_ids(cli.room_ids, file.room_ids),
            auth,
        },
        listen,
    )
}

#[derive(Parser, Debug)]
#[command(
    name = "shagaf-admin",
    version,
    about = "Admin dashboard for the Shagaf co-working booking backend"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
    /// Optional TOML config file; flags and env vars take precedence.
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, env = "SHAGAF_API_BASE_URL")]
    api_base_url: Option<String>,
    #[arg(long)]
    app_name: Option<String>,
    /// Room identifier to fetch; repeatable.
    #[arg(long = "room-id")]
    room_ids: Vec<String>,
    #[arg(long, default_value = "127.0.0.1:3000")]
    listen: SocketAddr,
    #[arg(long, env = "SHAGAF_AUTH_KEY")]
    auth_key: Option<String>,
    #[arg(long, env = "SHAGAF_AUTH_TOKEN_TTL")]
    auth_token_ttl: Option<String>,
    #[arg(long, env = "SHAGAF_AUTH_COOKIE_NAME")]
    auth_cookie_name: Option<String>,
    #[arg(long, env = "SHAGAF_AUTH_COOKIE_SECURE")]
    auth_cookie_secure: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print a fresh base64 session-signing key and exit.
    AuthKey,
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    api_base_url: Option<String>,
    app_name: Option<String>,
    room_ids: Option<Vec<String>>,
    auth: Option<AuthSection>,
}

#[derive(Debug, Default, Deserialize)]
struct AuthSection {
    key: Option<String>,
    token_ttl: Option<String>,
    cookie_name: Option<String>,
    cookie_secure: Option<bool>,
}

fn run_auth_key() -> i32 {
    let secret = match shagaf_admin::auth::generate_auth_key() {
        Ok(secret) => secret,
        Err(err) => {
            eprintln!("failed to generate auth key: {err}");
            return 1;
        }
    };
    println!("{secret}");
    0
}

fn load_config_file(path: Option<&Path>) -> Result<ConfigFile, String> {
    let Some(path) = path else {
        return Ok(ConfigFile::default());
    };
    let contents = std::fs::read_to_string(path)
        .map_err(|err| format!("failed to read config file {}: {err}", path.display()))?;
    toml::from_str(&contents)
        .map_err(|err| format!("failed to parse config file {}: {err}", path.display()))
}

fn resolve_room_ids(from_cli: Vec<String>, from_file: Option<Vec<String>>) -> Vec<String> {
    if !from_cli.is_empty() {
        return from_cli;
    }
    if let Some(room_ids) = from_file
        && !room_ids.is_empty()
    {
        return room_ids;
    }
    shagaf_admin::config::DEFAULT_ROOM_IDS
        .iter()
        .map(|id| id.to_string())
        .collect()
}

fn resolve_auth_config(
    cli: &Cli,
    file: &ConfigFile,
) -> Result<Option<shagaf_admin::config::AuthConfig>, String> {
    let section = file.auth.as_ref();
    let key = cli
        .auth_key
        .clone()
        .or_else(|| section.and_then(|auth| auth.key.clone()));
    let token_ttl = cli
        .auth_token_ttl
        .clone()
        .or_else(|| section.and_then(|auth| auth.token_ttl.clone()));
    let cookie_name = cli
        .auth_cookie_name
        .clone()
        .or_else(|| section.and_then(|auth| auth.cookie_name.clone()));
    let cookie_secure = cli.auth_cookie_secure
        || section
            .and_then(|auth| auth.cookie_secure)
            .unwrap_or_default();

    let has_any = key.is_some() || token_ttl.is_some() || cookie_name.is_some() || cookie_secure;
    if !has_any {
        return Ok(None);
    }

    let key = key
        .as_deref()
        .ok_or("auth is configured but the auth key is missing")?
        .trim()
        .to_string();
    if key.is_empty() {
        return Err("auth key cannot be empty".to_string());
    }

    if let Some(name) = cookie_name.as_deref()
        && name.trim().is_empty()
    {
        return Err("auth cookie name cannot be empty".to_string());
    }

    let token_ttl = match token_ttl.as_deref() {
        Some(raw) => parse_auth_token_ttl(raw)?,
        None => default_auth_token_ttl(),
    };
    let cookie_name = cookie_name
        .as_deref()
        .map(|name| name.trim().to_string())
        .unwrap_or_else(|| DEFAULT_AUTH_COOKIE_NAME.to_string());

    Ok(Some(shagaf_admin::config::AuthConfig {
        key,
        token_ttl,
        cookie_name,
        cookie_secure,
    }))
}

fn default_auth_token_ttl() -> Duration {
    Duration::days(14)
}

fn parse_auth_token_ttl(raw: &str) -> Result<Duration, String> {
    let value = raw.trim();
    if value.is_empty() {
        return Err("auth token ttl cannot be empty".to_string());
    }

    let (amount, unit) = match value.chars().last() {
        Some(ch) if ch.is_ascii_alphabetic() => {
            (&value[..value.len() - 1], ch.to_ascii_lowercase())
        }
        _ => (value, 's'),
    };

    let amount: i64 = amount
        .parse()
        .map_err(|_| format!("invalid auth token ttl '{value}'; expected <number>[s|m|h|d]"))?;

    if amount <= 0 {
        return Err("auth token ttl must be greater than 0".to_string());
    }

    match unit {
        's' => Ok(Duration::seconds(amount)),
        'm' => Ok(Duration::minutes(amount)),
        'h' => Ok(Duration::hours(amount)),
        'd' => Ok(Duration::days(amount)),
        _ => Err(format!(
            "invalid auth token ttl '{value}'; expected <number>[s|m|h|d]"
        )),
    }
}
