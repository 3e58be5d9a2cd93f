//! One raw request against the configured endpoint, for checking connectivity.

use std::error::Error;

use crate::core::completion::CompletionClient;
use crate::core::config::Config;
use crate::core::prompt::DETAILED_BRIEF_OUTLINE;

pub fn default_probe_prompt() -> String {
    format!(
        "Come up with project concept using these technologies: Django, MySQL, C#. \
With features: User Profiles & Settings, Advanced Search, User Authentication. \
Project vision and goals: make it super cool. {DETAILED_BRIEF_OUTLINE}"
    )
}

pub async fn run_probe(prompt: Vec<String>) -> Result<(), Box<dyn Error>> {
    let prompt = if prompt.is_empty() {
        default_probe_prompt()
    } else {
        prompt.join(" ")
    };

    let config = Config::load()?;
    let client = CompletionClient::new(config.endpoint(), config.retry_policy());

    match client.fetch_raw(&prompt).await {
        Ok(content) => {
            println!("{content}");
            Ok(())
        }
        Err(err) => {
            eprintln!("❌ Error: {err}");
            std::process::exit(1);
        }
    }
}
