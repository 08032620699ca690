//! cutedebug: settings surface for per-author debug logging.
use clap::Parser; // trait import enables CuteDebugCli::parse()

use cutedebug::cli::{Command, CuteDebugCli};
use cutedebug::commands;
use cutedebug::config::{resolve_config_path, Config};

fn main() -> anyhow::Result<()> {
    let args = CuteDebugCli::parse();

    let cfg_path = resolve_config_path(&args.config);
    // An explicit --config must be valid; the default location may be broken or absent.
    let cfg = if args.config.is_some() {
        Config::load(&cfg_path)?
    } else {
        Config::load_or_default(&cfg_path)
    };
    let ids = cfg.identity_store();

    match args.cmd {
        None => commands::identity::status(&ids, &cfg.prefs_path(), false),
        Some(Command::Whoami) => commands::identity::whoami(&ids),
        Some(Command::Set { name }) => commands::identity::set(&ids, &name),
        Some(Command::Clear) => commands::identity::clear(&ids),
        Some(Command::Status { json }) => commands::identity::status(&ids, &cfg.prefs_path(), json),
        Some(Command::Init) => commands::identity::init(&ids),
        Some(Command::Log { author, severity, context, message }) => {
            let facade = cfg.build_facade();
            commands::emit::main(
                &facade,
                author.as_deref(),
                severity.into(),
                context.as_deref(),
                &message,
            )
        }
    }
}
