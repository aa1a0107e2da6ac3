/// Site identity and the external endpoints the page talks to.
///
/// Built once in `App` and handed down as props so tests (and a dev build)
/// can point the form at a different webhook without touching the page.
#[derive(Clone, PartialEq)]
pub struct SiteConfig {
    pub name: &'static str,
    pub tagline: &'static str,
    pub subtitle: &'static str,
    pub calendly_url: &'static str,
    pub webhook_url: &'static str,
}

impl SiteConfig {
    pub fn new() -> Self {
        SiteConfig {
            name: "Viora",
            tagline: "Where Voice Meets Intelligence.",
            subtitle: "Viora helps brands automate human communication using emotionally intelligent, multilingual AI voices.",
            calendly_url: "https://calendly.com/aayushdeshpande532/30min",
            webhook_url: get_webhook_url(),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(debug_assertions)]
fn get_webhook_url() -> &'static str {
    "http://localhost:3001/lead"  // Local collector when running the dev server
}

#[cfg(not(debug_assertions))]
fn get_webhook_url() -> &'static str {
    "https://hook.eu2.make.com/mjft3dyp6gdm37n6fpl28j6pzv1x3cnz"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_carries_company_identity() {
        let config = SiteConfig::new();
        assert_eq!(config.name, "Viora");
        assert!(config.tagline.contains("Voice"));
        assert!(config.calendly_url.starts_with("https://calendly.com/"));
    }

    #[test]
    fn webhook_can_be_substituted() {
        let config = SiteConfig {
            webhook_url: "http://127.0.0.1:9999/hook",
            ..SiteConfig::new()
        };
        assert_eq!(config.webhook_url, "http://127.0.0.1:9999/hook");
        assert_eq!(config.name, "Viora");
    }
}
