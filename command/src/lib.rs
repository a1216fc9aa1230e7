use crate::cmds::{build_cli, run};
use clap::{App, ArgMatches};
use tokio_util::sync::CancellationToken;

use utility::Error;

pub mod cmds;
pub(crate) mod describe;
pub(crate) mod faas;
pub(crate) mod priority;
pub(crate) mod tls;

type Result = std::result::Result<(), State>;

#[derive(thiserror::Error, Debug)]
pub enum State {
    #[error("command matched")]
    Matched,
    #[error("{0}")]
    Custom(String),
    #[error("{0}")]
    Error(#[from] Error),
}

pub async fn exec() {
    let app = build_cli();
    let args: ArgMatches = app.get_matches();
    if let Err(err) = run(&args).await {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}

pub(crate) trait CommandAppend {
    fn append_subcommand(app: App<'static, 'static>) -> App<'static, 'static>;
}

///token cancelled on the first Ctrl-C so in flight gateway calls return early
pub(crate) fn cancel_on_interrupt() -> CancellationToken {
    let cancel = CancellationToken::new();
    let token = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::debug!("interrupted, cancelling gateway call");
            token.cancel();
        }
    });
    cancel
}
