use std::env;

/// Default public origin.
pub const DEFAULT_BASE_URL: &str = "https://proofcellars.com";
/// Default brand name.
pub const DEFAULT_SITE_NAME: &str = "Proof Cellars";

/// Site-wide settings shared by the renderer, structured data and crawl files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Public origin without a trailing slash.
    pub base_url: String,
    /// Brand name.
    pub site_name: String,
    /// Phone number as printed on pages.
    pub phone_display: String,
    /// Phone number in E.164-like form for `tel:`/`sms:` links and schema data.
    pub phone_e164: String,
    /// Contact mailbox.
    pub email: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            site_name: DEFAULT_SITE_NAME.to_string(),
            phone_display: "213-770-9463".to_string(),
            phone_e164: "+1-213-770-9463".to_string(),
            email: "info@proofcellars.com".to_string(),
        }
    }
}

impl SiteConfig {
    /// Defaults overridden by `SITE_BASE_URL` and `SITE_NAME`.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(base_url) = env::var("SITE_BASE_URL") {
            config = config.with_base_url(&base_url);
        }
        if let Ok(name) = env::var("SITE_NAME") {
            let name = name.trim();
            if !name.is_empty() {
                config.site_name = name.to_string();
            }
        }
        config
    }

    /// Replace the origin, ignoring blank values and trailing slashes.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        let trimmed = base_url.trim().trim_end_matches('/');
        if !trimmed.is_empty() {
            self.base_url = trimmed.to_string();
        }
        self
    }

    /// Absolute URL for a site path such as `/sell/macallan`.
    pub fn url(&self, path: &str) -> String {
        if path.is_empty() || path == "/" {
            return self.base_url.clone();
        }
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// `sms:` link target for the contact number.
    pub fn sms_href(&self) -> String {
        format!("sms:{}", self.phone_e164.replace('-', ""))
    }

    /// `tel:` link target for the contact number.
    pub fn tel_href(&self) -> String {
        format!("tel:{}", self.phone_e164.replace('-', ""))
    }
}
