//! Server startup utilities.

use tracing::info;

/// Prints the startup banner.
pub fn print_banner() {
    info!(r#"
   ______
  / ____/___  __  ______  ____  ____
 / /   / __ \/ / / / __ \/ __ \/ __ \
/ /___/ /_/ / /_/ / /_/ / /_/ / / / /
\____/\____/\__,_/ .___/\____/_/ /_/
                /_/
                      Coupon Service
    "#);
}

/// Prints server startup information.
pub fn print_startup_info(addr: &str, coupons_path: &str) {
    let separator = "=".repeat(60);
    info!("{}", separator);
    info!("REST API:  http://{}{}", addr, coupons_path);
    info!("Health:    http://{}/health", addr);
    info!("Ready:     http://{}/ready", addr);
    info!("{}", separator);
}
