// SPDX-License-Identifier: MPL-2.0
use env_logger::{Builder, Target};
use log::LevelFilter;
use pixel_pickr::app::{self, Flags};

const HELP: &str = "\
PixelPickr - show and copy the detected color

USAGE:
  pixel_pickr [OPTIONS]

OPTIONS:
  --lang <id>          Interface language (e.g. en-US, fr, es)
  --config-dir <dir>   Directory holding settings.toml
  --stdin              Read colors (#RRGGBB, one per line) from standard input
  -h, --help           Print this help
";

fn init_logger() {
    Builder::new()
        .target(Target::Stdout)
        .filter_level(LevelFilter::Warn)
        .filter_module("pixel_pickr", LevelFilter::Debug)
        .init();
}

fn parse_flags(mut args: pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        read_stdin: args.contains("--stdin"),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        log::warn!("Ignoring unexpected arguments: {remaining:?}");
    }
    Ok(flags)
}

fn main() -> iced::Result {
    if std::env::var("RUST_LOG").is_err() {
        init_logger();
    } else {
        env_logger::init();
    }

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match parse_flags(args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    app::run(flags)
}
