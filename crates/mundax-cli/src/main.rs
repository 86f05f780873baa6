mod chat;
mod setup;

use anyhow::Result;
use mundax_core::ApiKeys;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let keys = ApiKeys::load()?;
    let keys = if keys.is_configured() {
        keys
    } else {
        setup::run_setup(keys)?
    };
    chat::run(keys).await
}
