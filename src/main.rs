//! Binary entrypoint. See the library crate for the layer layout.

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    flight_sorter::interface::cli::run().await
}
