use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;

use relayman::{
    core::state::{Notice, NoticeKind},
    domain::store::RelayStore,
    infrastructure::{
        cli::Cli, config::Config, directory::DirectoryClient, file_backend::JsonFileBackend,
    },
    integration::{
        app_runner::{AppRunner, StdinConfirm},
        runtime::Runtime,
    },
    utils::{initialize_logging, initialize_panic_handler},
};

async fn tokio_main() -> Result<Option<Notice>> {
    initialize_logging()?;

    initialize_panic_handler()?;

    let args = <Cli as Parser>::parse();

    // Load configuration (file-based, with built-in defaults)
    let config = Config::new()?;

    let backend = JsonFileBackend::open(config.relays_path(), &config.relays)?;
    let store = RelayStore::new(backend)?;
    let fetcher = DirectoryClient::new(config.directory_url.clone(), config.fetch_timeout())?;

    let mut runner = AppRunner::new(Runtime::new(store, Arc::new(fetcher)), args.yes);
    runner
        .run(args.command, &mut StdinConfirm, &mut std::io::stdout())
        .await
}

#[tokio::main]
async fn main() -> Result<()> {
    match tokio_main().await {
        Ok(Some(Notice {
            kind: NoticeKind::Error,
            text,
        })) => {
            eprintln!("{text}");
            std::process::exit(libc::EXIT_FAILURE);
        }
        Ok(Some(notice)) => {
            println!("{}", notice.text);
            Ok(())
        }
        Ok(None) => Ok(()),
        Err(e) => {
            eprintln!("{} error: Something went wrong", env!("CARGO_PKG_NAME"));
            Err(e)
        }
    }
}
