use clap::Parser;

use foo_ascii::cli::{Args, EXIT_FAILURE};
use foo_ascii::config::Config;
use foo_ascii::convert::{self, ConvertOptions};

fn main() {
    // Usage errors exit before any file is touched.
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            std::process::exit(EXIT_FAILURE);
        }
        Err(e) => e.exit(),
    };

    let config = match Config::load(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) if args.config.is_none() => {
            eprintln!("Warning: {}", e);
            eprintln!("Using default settings.");
            Config::default()
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(EXIT_FAILURE);
        }
    };

    // -v/-q beat the config file, which beats the built-in default.
    let level = args
        .log_level_override()
        .or(config.log.level)
        .unwrap_or(log::LevelFilter::Warn);
    env_logger::Builder::new().filter_level(level).init();

    let options = ConvertOptions {
        overwrite: config.output.overwrite,
    };

    if let Err(e) = convert::run(args.mode.into(), &args.input, &args.output, options) {
        eprintln!("Error: {}", e);
        std::process::exit(EXIT_FAILURE);
    }
}
