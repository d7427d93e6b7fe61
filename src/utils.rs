use std::process::Command;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn init_logger(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("poi_map=debug,tower_http=debug,info"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("poi_map=info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

/// Opens `url` in the system browser. Failure is logged, never fatal.
pub fn open_in_browser(url: &str) {
    let result = {
        #[cfg(target_os = "windows")]
        {
            // Empty title argument so "start" does not take the URL as the title
            Command::new("cmd").args(["/C", "start", "", url]).spawn()
        }

        #[cfg(target_os = "macos")]
        {
            Command::new("open").arg(url).spawn()
        }

        #[cfg(not(any(target_os = "windows", target_os = "macos")))]
        {
            Command::new("xdg-open").arg(url).spawn()
        }
    };

    match result {
        Ok(_) => info!("Opened {} in the browser", url),
        Err(e) => warn!("Failed to open browser for {}: {}", url, e),
    }
}
