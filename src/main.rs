// SPDX-License-Identifier: MPL-2.0
use iced_folio::app::{self, paths, Flags};
use iced_folio::config::TransitionStyle;

const HELP: &str = "\
iced_folio - paginated magazine viewer

USAGE:
  iced_folio [OPTIONS]

OPTIONS:
  --lang <LOCALE>         UI language (e.g. en-US, fr)
  --config-dir <DIR>      Directory holding settings.toml
  --pages <DIR>           Local page bundle
  --url-pattern <URL>     Remote pages, {n} is the 1-based page number
  --count <N>             Number of pages behind --url-pattern
  --style <STYLE>         Transition: crossfade, slide or cut
  -v, --verbose           More logging (repeat for trace)
  -h, --help              Print this help
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let mut verbosity = 0;
    while args.contains(["-v", "--verbose"]) {
        verbosity += 1;
    }
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let flags = Flags {
        lang: optional(&mut args, "--lang"),
        config_dir: optional(&mut args, "--config-dir"),
        pages_dir: optional(&mut args, "--pages"),
        url_pattern: optional(&mut args, "--url-pattern"),
        page_count: optional(&mut args, "--count"),
        transition_style: optional::<TransitionStyle>(&mut args, "--style"),
    };

    let rest = args.finish();
    if !rest.is_empty() {
        log::warn!("Ignoring unexpected arguments: {rest:?}");
    }

    paths::init_cli_overrides(flags.config_dir.clone());
    app::run(flags)
}

/// Reads an optional flag, logging and ignoring malformed values.
fn optional<T>(args: &mut pico_args::Arguments, key: &'static str) -> Option<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    args.opt_value_from_str(key).unwrap_or_else(|err| {
        log::warn!("Ignoring {key}: {err}");
        None
    })
}
