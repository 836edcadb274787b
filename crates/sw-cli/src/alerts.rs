//! Alert routing: Telegram when configured, the log otherwise.

use sw_config::TelegramConfig;
use sw_sources::{AlertSink, LogAlertSink, TelegramAlertSink};

pub fn sink(config: &TelegramConfig) -> Box<dyn AlertSink> {
    if !config.is_configured() {
        return Box::new(LogAlertSink);
    }
    match TelegramAlertSink::new(config) {
        Ok(sink) => Box::new(sink),
        Err(error) => {
            tracing::warn!(%error, "telegram sink unavailable; alerts go to the log");
            Box::new(LogAlertSink)
        }
    }
}

/// Compose a Markdown alert. The detail is escaped so URLs and config keys
/// survive Telegram's parser.
pub fn message(headline: &str, detail: &str) -> String {
    format!("*Sitewise: {headline}*\n{}", escape_markdown(detail))
}

fn escape_markdown(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if matches!(ch, '_' | '*' | '`' | '[') {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_is_escaped() {
        assert_eq!(
            message("audit blocked", "missing search_console.access_token"),
            "*Sitewise: audit blocked*\nmissing search\\_console.access\\_token"
        );
    }
}
