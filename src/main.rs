// SPDX-License-Identifier: MPL-2.0
use cerebro_scan::app::{self, Flags};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_LOG_FILTER: &str = "cerebro_scan=info";

const HELP: &str = "\
CerebroScan - Alzheimer's stage classification demo (not a diagnostic tool)

USAGE:
  cerebro_scan [OPTIONS] [IMAGE]

OPTIONS:
  --lang <id>           UI language, e.g. en-US or fr
  --config-dir <dir>    Directory holding settings.toml
  --log-level <filter>  Log filter, e.g. debug or cerebro_scan=trace
  -h, --help            Print this help

ARGS:
  <IMAGE>               MRI slice to load on start-up
";

fn init_tracing(cli_filter: Option<&str>) {
    // --log-level wins over RUST_LOG.
    let filter = cli_filter
        .and_then(|raw| EnvFilter::try_new(raw).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER));

    let _tracing = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(filter)
        .try_init();
}

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let lang: Option<String> = args.opt_value_from_str("--lang").unwrap_or(None);
    let config_dir: Option<String> = args.opt_value_from_str("--config-dir").unwrap_or(None);
    let log_level: Option<String> = args.opt_value_from_str("--log-level").unwrap_or(None);

    init_tracing(log_level.as_deref());

    let file_path = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok());

    app::run(Flags {
        lang,
        file_path,
        config_dir,
    })
}
