use crate::CommandAppend;
use clap::{App, Arg};

pub const DEFAULT_GATEWAY: &str = "http://127.0.0.1:8080";

pub(crate) struct Faas;

impl CommandAppend for Faas {
    #[inline(always)]
    fn append_subcommand(app: App<'static, 'static>) -> App<'static, 'static> {
        app.arg(
            Arg::with_name("gateway")
                .long("gateway")
                .short("g")
                .default_value(DEFAULT_GATEWAY)
                .takes_value(true)
                .global(true)
                .help("Gateway URL starting with http(s)://"),
        )
    }
}
