use dioxus::prelude::*;
use simple_markdown_config::{Config, initial_document};
use simple_markdown_dioxus::ui::{App, components::ErrorScreen};
use std::env;
use std::path::PathBuf;
use std::process;
use std::sync::OnceLock;

/// The startup buffer, or the load error to show in its place.
static STARTUP: OnceLock<Result<String, (String, String)>> = OnceLock::new();

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("simple-markdown starting up!");

    let args: Vec<String> = env::args().collect();
    let cli_path = match args.len() {
        1 => None,
        2 => Some(PathBuf::from(&args[1])),
        _ => {
            eprintln!("Usage: {} [document-path]", args[0]);
            process::exit(1);
        }
    };

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Config::load() failed with error: {e}");
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };

    let startup = initial_document(cli_path.as_deref(), config.as_ref()).map_err(|e| {
        log::error!("{e:#}");
        (e.to_string(), format!("{e:#}"))
    });
    let _ = STARTUP.set(startup);

    log::info!("About to launch Dioxus app for desktop");
    dioxus::LaunchBuilder::desktop()
        .with_cfg(make_window_config())
        .launch(app_root);
}

fn app_root() -> Element {
    match STARTUP.get() {
        Some(Ok(markdown)) => rsx! {
            App { initial_markdown: markdown.clone() }
        },
        Some(Err((message, details))) => rsx! {
            ErrorScreen { message: message.clone(), details: Some(details.clone()) }
        },
        None => rsx! {
            ErrorScreen { message: "Startup document was never loaded".to_string(), details: None }
        },
    }
}

fn make_window_config() -> dioxus::desktop::Config {
    use dioxus::desktop::{Config, WindowBuilder};

    let window = WindowBuilder::new()
        .with_title("simple-markdown")
        .with_always_on_top(false);

    Config::default().with_window(window)
}
