pub mod cli;

use std::sync::Arc;

use clap::Parser;

use api::ApiClient;
use app::config::AppConfig;
use app::flows::login::{LoginForm, LoginOutcome};
use app::flows::password::{PasswordUpdateForm, PasswordUpdateOutcome};
use app::flows::signup::SignupForm;
use app::flows::{FlowError, employees, login, password, signup};
use app::routes::{Route, current_route};
use common::logger::init_logger;
use session::kv::KvStore;
use session::kv::sqlite_kv::SqliteKvStore;
use session::store::SessionStore;

use cli::{Cli, Command, EmployeeCommand};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logger("roster");

    let args = Cli::parse();
    let cfg = AppConfig::from_env();

    let kv = Arc::new(SqliteKvStore::new(&cfg.session_db_url).await?);
    let sessions = SessionStore::new(kv);
    sessions.initialize().await;

    let api = ApiClient::new(cfg.api_base_url.clone(), cfg.http_timeout())?;

    match args.command {
        Command::Login(a) => {
            ensure_unauthenticated(&sessions).await?;
            let form = LoginForm {
                email: a.email,
                password: a.password,
            };
            match login::run(&api, &sessions, &form).await {
                Ok(LoginOutcome::LoggedIn(s)) => {
                    println!("Login successful. Welcome, {}!", s.display_name);
                }
                Ok(LoginOutcome::InvalidCredentials) => {
                    println!("Invalid email or password");
                }
                Err(e) => return Err(flow_error(e)),
            }
        }

        Command::Signup(a) => {
            ensure_unauthenticated(&sessions).await?;
            let form = SignupForm {
                username: a.username,
                email: a.email,
                password: a.password,
            };
            let s = signup::run(&api, &sessions, &form)
                .await
                .map_err(flow_error)?;
            println!("Account created. Welcome, {}!", s.display_name);
        }

        Command::PasswordUpdate(a) => {
            ensure_unauthenticated(&sessions).await?;
            let form = PasswordUpdateForm {
                email: a.email,
                new_password: a.new_password,
                confirm_new_password: a.confirm_new_password,
            };
            match password::run(&api, &form).await.map_err(flow_error)? {
                PasswordUpdateOutcome::Updated => println!("Password updated successfully"),
                PasswordUpdateOutcome::EmailNotFound => println!("Email not found"),
            }
        }

        Command::Employee { command } => {
            ensure_authenticated(&sessions).await?;
            match command {
                EmployeeCommand::Add(a) => {
                    let form = employees::EmployeeForm {
                        employee_name: a.name,
                        job_designation: a.designation,
                        company_name: a.company,
                    };
                    let created = employees::create(&api, &form).await.map_err(flow_error)?;
                    println!("Employee record #{} submitted", created.id);
                }
                EmployeeCommand::List => {
                    let records = employees::list(&api).await.map_err(flow_error)?;
                    if records.is_empty() {
                        println!("No data available");
                    }
                    for e in records {
                        println!(
                            "#{}  {}  {}  {}",
                            e.id, e.employee_name, e.job_designation, e.company_name
                        );
                    }
                }
            }
        }

        Command::Whoami => {
            ensure_authenticated(&sessions).await?;
            if let Some(s) = sessions.current().await {
                println!("{} (id {})", s.display_name, s.id);
            }
        }

        Command::Logout => {
            sessions.logout().await;
            println!("Logged out");
        }
    }

    Ok(())
}

/// Commands from the unauthenticated graph are refused once logged in, and
/// vice versa; the two graphs never overlap.
async fn ensure_unauthenticated<S: KvStore>(sessions: &SessionStore<S>) -> anyhow::Result<()> {
    match current_route(sessions).await {
        Route::Unauthenticated => Ok(()),
        Route::Authenticated => anyhow::bail!("already logged in; run `roster logout` first"),
        Route::Loading => anyhow::bail!("session store has not finished initializing"),
    }
}

async fn ensure_authenticated<S: KvStore>(sessions: &SessionStore<S>) -> anyhow::Result<()> {
    match current_route(sessions).await {
        Route::Authenticated => Ok(()),
        Route::Unauthenticated => anyhow::bail!("not logged in; run `roster login` first"),
        Route::Loading => anyhow::bail!("session store has not finished initializing"),
    }
}

/// Connection failures get the plain wording a user can act on; everything
/// else keeps its typed message.
fn flow_error(e: FlowError) -> anyhow::Error {
    match &e {
        FlowError::Api(api_err) if api_err.is_connection_failure() => {
            anyhow::anyhow!("could not reach the backend: {api_err}")
        }
        _ => anyhow::Error::new(e),
    }
}
