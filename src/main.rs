// SPDX-License-Identifier: MPL-2.0
use movable_view::app::{self, Flags};
use std::path::PathBuf;

const HELP: &str = "\
movable_view

USAGE:
  movable_view [OPTIONS]

OPTIONS:
  --config <FILE>      Load the style block from FILE
  --config-dir <DIR>   Look for settings.toml in DIR
  --image <FILE>       Image to display
  --label <TEXT>       Label text
  -h, --help           Print help
";

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match parse_flags(&mut args) {
        Ok(flags) => flags,
        Err(err) => {
            log::error!("invalid arguments: {err}");
            eprint!("{HELP}");
            std::process::exit(2);
        }
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        log::warn!("ignoring unexpected arguments: {remaining:?}");
    }

    log::info!("starting movable_view");
    app::run(flags)
}

fn parse_flags(args: &mut pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    Ok(Flags {
        config_path: args.opt_value_from_str::<_, PathBuf>("--config")?,
        config_dir: args.opt_value_from_str::<_, PathBuf>("--config-dir")?,
        image: args.opt_value_from_str::<_, PathBuf>("--image")?,
        label: args.opt_value_from_str("--label")?,
    })
}
