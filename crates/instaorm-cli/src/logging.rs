use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install a stderr subscriber. `INSTAORM_LOG` overrides the verbosity flags.
pub fn init(verbosity: u8) {
    let default = match verbosity {
        0 => "warn",
        1 => "instaorm=debug,info",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env("INSTAORM_LOG").unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init()
        .ok();
}
