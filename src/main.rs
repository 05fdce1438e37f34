// SPDX-License-Identifier: MPL-2.0
use env_logger::{Builder, Env};
use putti_archive::app::{self, paths, Flags};
use putti_archive::ui::theming::ThemeMode;

const ENV_LOG: &str = "PUTTI_ARCHIVE_LOG";
const ENV_LOG_STYLE: &str = "PUTTI_ARCHIVE_LOG_STYLE";

const HELP: &str = "\
putti_archive

USAGE:
  putti_archive [OPTIONS]

OPTIONS:
  --config-dir <DIR>   Directory holding settings.toml
  --assets <DIR>       Directory photos are loaded from
  --theme <MODE>       light, dark or system
  -h, --help           Print this help
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        config_dir: args.opt_value_from_str("--config-dir")?,
        asset_root: args.opt_value_from_str("--assets")?,
        theme: args.opt_value_from_str::<_, ThemeMode>("--theme")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        log::warn!("ignoring unexpected arguments: {rest:?}");
    }

    Ok(Some(flags))
}

fn main() -> iced::Result {
    Builder::from_env(
        Env::new()
            .filter_or(ENV_LOG, "info")
            .write_style(ENV_LOG_STYLE),
    )
    .init();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(flags.config_dir.clone());
    log::info!("launching {}", putti_archive::content::SITE_TITLE);

    app::run(flags)
}
