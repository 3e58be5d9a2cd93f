use crate::core::config::data::Config;

impl Config {
    pub fn print_all(&self) {
        let policy = self.retry_policy();
        println!("Current configuration:");
        match &self.base_url {
            Some(url) => println!("  base-url: {url}"),
            None => println!("  base-url: {} (default)", self.base_url()),
        }
        println!("  endpoint: {}", self.endpoint());
        println!("  max-attempts: {}", policy.max_attempts);
        println!("  timeout: {}s", policy.timeout.as_secs());
        println!("  backoff: {}ms", policy.backoff.as_millis());
        match self.detailed_brief() {
            true => println!("  detailed-brief: on"),
            false => println!("  detailed-brief: off"),
        }
    }
}
