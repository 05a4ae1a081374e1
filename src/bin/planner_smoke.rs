//! Runs the planner pipeline once against the live Groq API.
//!
//! Usage: GROQ_API_KEY=... cargo run --bin planner-smoke -- "Quantum Physics"

use anyhow::Result;
use learnbuddy_svc::AppState;
use learnbuddy_svc::agents::PipelineError;
use learnbuddy_svc::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let query = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    if query.is_empty() {
        anyhow::bail!("usage: planner-smoke <query>");
    }

    let config = Config::from_env()?;
    let state = AppState::from_config(&config);

    println!("🔍 Classifying query: {}", query);
    let verdict = match state.planner.classify(&query).await {
        Ok(verdict) => verdict,
        Err(PipelineError::MalformedResponse(e)) => {
            println!("❌ Classifier output was not valid JSON: {}", e);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };
    println!("is_topic: {}", verdict.is_topic);
    println!("reason:   {}", verdict.reason());

    if !verdict.is_topic {
        println!("❌ Rejected, skipping plan generation");
        return Ok(());
    }

    println!("\n📚 Generating plan with {}...", config.planner_model);
    let plan = state.planner.generate(&query).await?;
    println!("{}", "=".repeat(60));
    println!("{}", plan);
    println!("{}", "=".repeat(60));
    println!("✅ {} characters", plan.len());

    Ok(())
}
