// SPDX-License-Identifier: MPL-2.0
use iced_carousel::app::{self, Flags};
use iced_carousel::config::paths;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Usage: iced_carousel [OPTIONS] [PATH...]

Shows the given images in a carousel. Directories are scanned for images.

Options:
  --lang <LOCALE>       Interface language (e.g. en-US, fr)
  --config-dir <DIR>    Directory holding settings.toml
  --i18n-dir <DIR>      Directory with additional .ftl translations
  --manifest <FILE>     TOML gallery manifest ([[items]] source/alt/caption)
  -h, --help            Print this help
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("iced_carousel=info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match parse_flags(args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("{err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_override(flags.config_dir.clone());
    app::run(flags)
}

fn parse_flags(mut args: pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    let lang = args.opt_value_from_str("--lang")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let i18n_dir = args.opt_value_from_str("--i18n-dir")?;
    let manifest: Option<PathBuf> = args.opt_value_from_str("--manifest")?;
    let paths = args.finish().into_iter().map(PathBuf::from).collect();

    Ok(Flags {
        lang,
        i18n_dir,
        config_dir,
        manifest,
        paths,
    })
}
