//! Print the Gemini models visible to `GEMINI_API_KEY` (or `GOOGLE_API_KEY`).
//!
//! ```text
//! cargo run -p agent-runtime --example list_models
//! ```

use agent_runtime::{GeminiEngine, Result, Settings};

#[tokio::main]
async fn main() -> Result<()> {
    let engine = GeminiEngine::from_env(&Settings::from_env()?)?;
    for name in engine.list_models().await? {
        println!("{name}");
    }
    Ok(())
}
