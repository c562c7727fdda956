// SPDX-License-Identifier: MPL-2.0
use tracing_subscriber::EnvFilter;
use zoom_lens::app::{self, Flags};

const HELP: &str = "\
zoom_lens - zoomable image viewer

USAGE:
  zoom_lens [OPTIONS] [IMAGE]

OPTIONS:
  -h, --help             Print this help
  --lang <LOCALE>        UI language (e.g. en-US, fr)
  --config-dir <DIR>     Directory holding settings.toml

ENVIRONMENT:
  ZOOM_LENS_CONFIG_DIR   Config directory when --config-dir is absent
  RUST_LOG               Log filter (default: zoom_lens=info)
";

fn main() -> iced::Result {
    init_tracing();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match parse_flags(args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("zoom_lens: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    app::run(flags)
}

fn parse_flags(mut args: pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    let lang = args.opt_value_from_str("--lang")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let file_path = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok());

    Ok(Flags {
        lang,
        file_path,
        config_dir,
    })
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("zoom_lens=info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
