use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::context;
use crate::error::{AuditError, LlmError};
use crate::llm::InferenceClient;
use crate::llm::client::DEFAULT_MODEL;
use crate::prompt;
use crate::resolver::ModelResolver;
use anyhow::Result;
use std::path::Path;
use tracing::{info, warn};

/// Run the connectivity audit:
///
/// 1. Gather the repository context blob.
/// 2. Pick the model — explicit override, remote resolution, or default.
/// 3. Call the inference endpoint once and print its suggestions.
///
/// This process never edits files; the printed suggestions are the sole
/// product of a run. A separate commit step picks up any changes a human
/// makes from them.
async fn run_audit(
    config: &Config,
    model_override: Option<String>,
    use_case: Option<String>,
    importance: &str,
    raw_fallback: bool,
) -> Result<()> {
    let gathered = context::gather(Path::new("."));
    for file in &gathered {
        if let Err(error) = &file.outcome {
            warn!(path = %file.path.display(), %error, "skipping unreadable context file");
        }
    }
    let context_blob = context::render(&gathered);

    let model = match (model_override, use_case) {
        (Some(model), _) => model,
        (None, Some(use_case)) => {
            let resolver = ModelResolver::new(config);
            resolver
                .resolve(&use_case, "connaudit", importance)
                .await
                .map_err(AuditError::from)?
                .model
        }
        (None, None) => DEFAULT_MODEL.to_string(),
    };

    let system_prompt = prompt::system_prompt(config);
    let user_prompt = prompt::user_prompt(config, &context_blob);

    println!("=== Requesting connectivity suggestions for {} ===", config.repo);
    info!(model = %model, context_files = gathered.len(), "calling inference endpoint");

    let client = InferenceClient::new(config);
    let answer = match client.complete(system_prompt, &user_prompt, &model).await {
        Ok(answer) => answer,
        Err(LlmError::MalformedResponse { raw }) if raw_fallback => {
            warn!("response had no message content; printing raw body");
            raw
        }
        Err(error) => return Err(AuditError::from(error).into()),
    };

    println!("\n===== Suggestions =====\n");
    println!("{answer}");
    println!("\n===== END AI OUTPUT =====");

    Ok(())
}

async fn run_resolve(
    config: &Config,
    use_case: &str,
    module: &str,
    importance: &str,
) -> Result<()> {
    let resolver = ModelResolver::new(config);
    let resolved = resolver
        .resolve(use_case, module, importance)
        .await
        .map_err(AuditError::from)?;
    println!("{}", serde_json::to_string_pretty(&resolved)?);
    Ok(())
}

pub async fn dispatch(cli: Cli, config: &Config) -> Result<()> {
    match cli.command {
        Commands::Audit {
            model,
            use_case,
            importance,
            raw_fallback,
        } => run_audit(config, model, use_case, &importance, raw_fallback).await,
        Commands::Resolve {
            use_case,
            module,
            importance,
        } => run_resolve(config, &use_case, &module, &importance).await,
        Commands::Context => {
            println!("{}", context::render(&context::gather(Path::new("."))));
            Ok(())
        }
    }
}
