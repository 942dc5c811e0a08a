//! System and user prompt assembly for the connectivity audit.

use crate::config::Config;

const DEFAULT_SYSTEM_PROMPT: &str = "\
You are a connectivity-focused maintainer operating INSIDE this repository.

Ground rules:
- Work ONLY within this repository.
- Never expose or invent secrets, tokens, or keys.
- Prefer small, safe, incremental edits over large refactors.
- Focus on workflows, naming consistency, and connectivity to related \
repositories.
- Treat human maintainers as final authority.
";

/// The system prompt: the configured override, or the built-in persona.
pub fn system_prompt(config: &Config) -> &str {
    config
        .system_prompt
        .as_deref()
        .unwrap_or(DEFAULT_SYSTEM_PROMPT)
}

/// The user prompt: repository name, task instructions, the fixed mission
/// block, then the truncated context snapshot.
pub fn user_prompt(config: &Config, context: &str) -> String {
    format!(
        "Repository: {repo}\n\
         Task from human:\n\
         {instructions}\n\n\
         Your mission:\n\
         - Focus ONLY on this repository.\n\
         - Use connectivity.md as the source of truth for how this repository\n\
         \x20 should connect to its sibling repositories.\n\
         - Identify problems in:\n\
         \x20 - .github/workflows/*.yml (triggers, dispatch types, repo names)\n\
         \x20 - README / docs that describe connectivity\n\
         - Propose concrete changes (edits to specific files) to repair or\n\
         \x20 improve connectivity.\n\
         - Return your answer as:\n\
         \x20 1) Summary\n\
         \x20 2) Findings (bullet points)\n\
         \x20 3) Suggested patches (show file paths and fenced code blocks)\n\n\
         Current repository snapshot (partial, truncated for length):\n\n\
         {context}\n",
        repo = config.repo,
        instructions = config.instructions,
    )
}
