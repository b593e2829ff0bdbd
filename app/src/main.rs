//! Interactive line-oriented front end for listkeeper.
//!
//! Reads commands from stdin, renders the mounted screen to stdout and logs
//! to stderr.

use anyhow::Context;
use listkeeper::command::help;
use listkeeper::render::render;
use listkeeper::{
    AppAction, AppReducer, AppState, Command, Config, FileKeyValueStore, Route, ScreenEnvironment,
    ThemeProvider,
};
use listkeeper_runtime::Store;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

type AppStore = Store<AppState, AppAction, ScreenEnvironment, AppReducer>;

const SETTLE_TIMEOUT: Duration = Duration::from_secs(5);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Some(raw) = &config.rejected_color_scheme {
        tracing::warn!(value = %raw, "Ignoring invalid LISTKEEPER_COLOR_SCHEME");
    }
    tracing::info!(
        data_dir = %config.data_dir.display(),
        scheme = %config.color_scheme,
        "Starting listkeeper"
    );

    let env = ScreenEnvironment::on_disk(
        FileKeyValueStore::new(&config.data_dir),
        ThemeProvider::new(config.color_scheme),
    );
    let store = Store::new(AppState::new(), AppReducer::new(), env);

    dispatch(&store, vec![AppAction::Navigate(Route::List)]).await?;
    show(&store).await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(error) => {
                println!("! {}", error.to_string().trim_end());
                continue;
            },
        };

        match command {
            Command::Quit => break,
            Command::Help => println!("{}", help()),
            command => {
                let route = store.state(|s| s.route).await;
                match command.into_actions(route) {
                    Ok(actions) => {
                        dispatch(&store, actions).await?;
                        show(&store).await;
                    },
                    Err(error) => println!("! {error}"),
                }
            },
        }
    }

    store
        .shutdown(SETTLE_TIMEOUT)
        .await
        .context("Pending saves did not finish")?;
    Ok(())
}

/// Sends each action and waits for its effects to settle
async fn dispatch(store: &AppStore, actions: Vec<AppAction>) -> anyhow::Result<()> {
    for action in actions {
        let mut handle = store.send(action).await?;
        handle.wait_with_timeout(SETTLE_TIMEOUT).await?;
    }
    Ok(())
}

async fn show(store: &AppStore) {
    let scheme = store.environment().theme.scheme();
    let screen = store.state(|s| render(s, scheme)).await;
    println!("{screen}\n");
}
