//! `filmreel` -- the Star Wars films page in a terminal.
//!
//! Reads one command per line from stdin (see `help`), keeps the page
//! state, and prints the rendered page to stdout after every change.
//! Fetches run as spawned tasks so input keeps flowing while a request
//! is in flight; their results come back over a channel and are applied
//! in arrival order. Logs go to stderr.
//!
//! # Environment variables
//!
//! | Variable        | Required | Default                        | Description            |
//! |-----------------|----------|--------------------------------|------------------------|
//! | `FILMS_API_URL` | no       | `https://swapi.dev/api/films/` | Films-listing endpoint |
//! | `RUST_LOG`      | no       | `filmreel=info,...`            | Log filter             |

use std::sync::Arc;

use filmreel_core::render::render_text;
use filmreel_core::source::FetchResult;
use filmreel_page::command::{parse_command, Command, CommandError, HELP_TEXT};
use filmreel_page::controller::MoviesPage;
use filmreel_page::sink::LogSink;
use filmreel_swapi::api::FilmsApi;
use filmreel_swapi::config::SwapiConfig;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Capacity of the fetch-completion channel.
const FETCH_CHANNEL_CAPACITY: usize = 16;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "filmreel=info,filmreel_page=info,filmreel_swapi=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = SwapiConfig::from_env();
    tracing::info!(films_url = %config.films_url, "Starting filmreel");

    let source = Arc::new(FilmsApi::from_config(&config));
    let mut page = MoviesPage::new(source, Box::new(LogSink));

    let (done_tx, mut done_rx) = mpsc::channel::<FetchResult>(FETCH_CHANNEL_CAPACITY);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    redraw(&page);
    println!("{HELP_TEXT}");

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let line = match line {
                    Ok(Some(line)) => line,
                    Ok(None) => break,
                    Err(e) => {
                        tracing::error!(error = %e, "Failed to read stdin");
                        break;
                    }
                };

                match parse_command(&line) {
                    Ok(Command::Set { field, value }) => {
                        page.update_field(field, value);
                        redraw(&page);
                    }
                    Ok(Command::Add) => {
                        page.submit();
                        redraw(&page);
                    }
                    Ok(Command::Fetch) => {
                        let pending = page.begin_fetch();
                        let tx = done_tx.clone();
                        tokio::spawn(async move {
                            // The receiver only goes away at shutdown.
                            let _ = tx.send(pending.await).await;
                        });
                        redraw(&page);
                    }
                    Ok(Command::Show) => redraw(&page),
                    Ok(Command::Help) => println!("{HELP_TEXT}"),
                    Ok(Command::Quit) => break,
                    Err(CommandError::Empty) => {}
                    Err(e) => println!("{e}\n{HELP_TEXT}"),
                }
            }
            Some(result) = done_rx.recv() => {
                page.complete_fetch(result);
                redraw(&page);
            }
        }
    }

    tracing::info!("filmreel exiting");
}

fn redraw(page: &MoviesPage) {
    println!("\n{}", render_text(&page.view()));
}
