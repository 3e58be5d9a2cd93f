use chrono::Local;
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Append-only record of prompts and results, enabled with `--log`.
pub struct TranscriptLog {
    file_path: Option<String>,
}

impl TranscriptLog {
    pub fn new(log_file: Option<String>) -> Result<Self, Box<dyn std::error::Error>> {
        if let Some(path) = &log_file {
            Self::test_file_access(path)?;
        }
        Ok(TranscriptLog {
            file_path: log_file,
        })
    }

    pub fn disabled() -> Self {
        TranscriptLog { file_path: None }
    }

    pub fn is_active(&self) -> bool {
        self.file_path.is_some()
    }

    pub fn get_status_string(&self) -> String {
        match &self.file_path {
            None => "disabled".to_string(),
            Some(path) => format!(
                "active ({})",
                Path::new(path)
                    .file_name()
                    .unwrap_or_default()
                    .to_string_lossy()
            ),
        }
    }

    pub fn log_generation(
        &self,
        prompt: &str,
        result: &str,
    ) -> Result<(), Box<dyn std::error::Error>> {
        self.write_entry(&[("Prompt", prompt), ("Result", result)])
    }

    pub fn log_failure(&self, prompt: &str, error: &str) -> Result<(), Box<dyn std::error::Error>> {
        self.write_entry(&[("Prompt", prompt), ("Error", error)])
    }

    fn write_entry(&self, sections: &[(&str, &str)]) -> Result<(), Box<dyn std::error::Error>> {
        let Some(file_path) = self.file_path.as_ref() else {
            return Ok(());
        };

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(file_path)?;
        let mut writer = BufWriter::new(file);

        writeln!(
            writer,
            "## {}",
            Local::now().format("%Y-%m-%d %H:%M:%S %z")
        )?;
        writeln!(writer)?;
        for (heading, content) in sections {
            writeln!(writer, "### {heading}")?;
            writeln!(writer)?;
            for line in content.lines() {
                writeln!(writer, "{line}")?;
            }
            writeln!(writer)?;
        }

        writer.flush()?;
        Ok(())
    }

    fn test_file_access(path: &str) -> Result<(), Box<dyn std::error::Error>> {
        // Try to create/open the file to ensure we have write permissions
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        file.flush()?;
        Ok(())
    }
}
