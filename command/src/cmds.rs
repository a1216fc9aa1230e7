use crate::describe::Describe;
use crate::faas::Faas;
use crate::{CommandAppend, State};
use clap::{App, AppSettings, ArgMatches};
use utility::{Error, Result};

const WELCOME_MSG: &str = r#"  ___                   _____           ____
 / _ \ _ __   ___ _ __ |  ___|_ _  __ _/ ___|
| | | | '_ \ / _ \ '_ \| |_ / _` |/ _` \___ \
| |_| | |_) |  __/ | | |  _| (_| | (_| |___) |
 \___/| .__/ \___|_| |_|_|  \__,_|\__,_|____/
      |_|


Inspect your OpenFaaS functions from the command line"#;

pub fn build_cli() -> App<'static, 'static> {
    let app = App::new("faas-status")
        .version(env!("CARGO_PKG_VERSION"))
        .setting(AppSettings::VersionlessSubcommands)
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .setting(AppSettings::ColoredHelp)
        .setting(AppSettings::DeriveDisplayOrder)
        .global_settings(&[AppSettings::ColoredHelp])
        .about(WELCOME_MSG);

    let app = Describe::append_subcommand(app);
    Faas::append_subcommand(app)
}

pub async fn run(args: &ArgMatches<'_>) -> Result<()> {
    match dispatch_command(args).await {
        Ok(_) => Err(Error::Custom(
            "command not matched please contact the development team".to_string(),
        )),
        Err(s) => match s {
            State::Matched => Ok(()),
            State::Error(e) => Err(e),
            state => Err(Error::Custom(state.to_string())),
        },
    }
}

pub async fn dispatch_command(args: &ArgMatches<'_>) -> crate::Result {
    Describe::dispatch_command(args).await
}
