//! The `generate` command: selection from flags, one generation, output.

use std::error::Error;
use std::fs;
use std::io::{self, IsTerminal};
use std::path::PathBuf;

use tracing::{debug, warn};

use crate::core::catalog::{find_feature, find_theme};
use crate::core::completion::CompletionClient;
use crate::core::config::data::path_display;
use crate::core::config::Config;
use crate::core::generator::{GenerateError, Generation, Generator};
use crate::core::prompt::{build_prompt, PromptOptions};
use crate::core::selection::Selection;
use crate::ui::notice::{notice_for, Notice, COPIED_MESSAGE};
use crate::ui::output::{clipboard_text, present, OutputFormat};
use crate::ui::panel::{confirm_retry, ErrorPanel};
use crate::utils::clipboard::copy_to_clipboard;
use crate::utils::logging::TranscriptLog;

#[derive(clap::Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Theme for the app (see `appspark themes`)
    #[arg(short = 't', long, value_name = "THEME")]
    pub theme: Option<String>,

    /// Feature to include, repeatable up to three times; naming one twice deselects it
    #[arg(short = 'f', long = "feature", value_name = "FEATURE")]
    pub features: Vec<String>,

    /// Free-text project vision added to the prompt
    #[arg(short = 'g', long, value_name = "GOAL")]
    pub goal: Option<String>,

    /// Ask for the full concept brief (name, audience, architecture, ...)
    #[arg(long)]
    pub detailed: bool,

    /// How to print the result
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write the result to a file instead of stdout
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Copy the result to the clipboard
    #[arg(short = 'c', long)]
    pub copy: bool,
}

/// Apply theme and feature flags to `selection`.
///
/// Unknown labels are fatal. Hitting the feature limit only produces a
/// warning and leaves the selection as it was.
pub fn apply_selection(
    selection: &mut Selection,
    theme: Option<&str>,
    features: &[String],
) -> Result<Vec<Notice>, Notice> {
    if let Some(input) = theme {
        let theme = find_theme(input).ok_or_else(|| {
            Notice::error(format!(
                "Unknown theme: {input}. Run 'appspark themes' to list available themes."
            ))
        })?;
        selection.set_theme(theme);
    }

    let mut warnings = Vec::new();
    for input in features {
        let feature = find_feature(input).ok_or_else(|| {
            Notice::error(format!(
                "Unknown feature: {input}. Run 'appspark features' to list available features."
            ))
        })?;
        if let Err(err) = selection.toggle_feature(feature) {
            warnings.push(Notice::from(&err));
        }
    }
    Ok(warnings)
}

pub async fn run_generate(args: GenerateArgs, log: Option<String>) -> Result<(), Box<dyn Error>> {
    let config = Config::load()?;
    let transcript = TranscriptLog::new(log)?;
    debug!(transcript = %transcript.get_status_string(), "transcript log");

    let options = PromptOptions {
        goal: args.goal.clone(),
        detailed_brief: args.detailed || config.detailed_brief(),
    };
    let client = CompletionClient::new(config.endpoint(), config.retry_policy());
    let mut generator = Generator::new(client, options);

    match apply_selection(
        generator.selection_mut(),
        args.theme.as_deref(),
        &args.features,
    ) {
        Ok(warnings) => warnings.iter().for_each(Notice::print),
        Err(notice) => {
            notice.print();
            std::process::exit(1);
        }
    }

    loop {
        match generator.generate().await {
            Ok(generation) => {
                if let Err(err) =
                    transcript.log_generation(&generation.prompt, &generation.result.markdown)
                {
                    warn!(error = %err, "failed to write transcript");
                }
                return emit(&generation, &args);
            }
            Err(GenerateError::Completion(err)) => {
                if let Ok(prompt) = build_prompt(generator.selection(), generator.options()) {
                    if let Err(log_err) = transcript.log_failure(&prompt, &err.to_string()) {
                        warn!(error = %log_err, "failed to write transcript");
                    }
                }

                ErrorPanel::from_error(&err).print();
                let stdin = io::stdin();
                if stdin.is_terminal() && confirm_retry(&mut stdin.lock(), &mut io::stderr())? {
                    continue;
                }
                std::process::exit(1);
            }
            Err(err) => {
                if let Some(notice) = notice_for(&err) {
                    notice.print();
                }
                std::process::exit(1);
            }
        }
    }
}

fn emit(generation: &Generation, args: &GenerateArgs) -> Result<(), Box<dyn Error>> {
    let rendered = present(&generation.result, args.format);
    match &args.output {
        Some(path) => {
            fs::write(path, &rendered)?;
            Notice::info(format!("Saved to {}", path_display(path))).print();
        }
        None => println!("{rendered}"),
    }

    if args.copy {
        match copy_to_clipboard(clipboard_text(&generation.result)) {
            Ok(()) => Notice::info(COPIED_MESSAGE).print(),
            Err(err) => Notice::clipboard_failure(&err.to_string()).print(),
        }
    }
    Ok(())
}
