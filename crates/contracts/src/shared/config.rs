use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub site: SiteInfo,
    #[serde(default)]
    pub emailjs: EmailJsConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct SiteInfo {
    pub owner_name: String,
    pub owner_first_name: String,
    pub contact_email: String,
    pub resume_path: String,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct EmailJsConfig {
    #[serde(default)]
    pub endpoint: String,
    #[serde(default)]
    pub service_id: String,
    #[serde(default)]
    pub template_id: String,
    #[serde(default)]
    pub public_key: String,
}

impl EmailJsConfig {
    /// Delivery is only attempted with a complete set of credentials
    pub fn is_configured(&self) -> bool {
        !self.endpoint.is_empty()
            && !self.service_id.is_empty()
            && !self.template_id.is_empty()
            && !self.public_key.is_empty()
    }
}

/// Default configuration embedded in the bundle
pub const DEFAULT_CONFIG: &str = r#"
[site]
owner_name = "Ashwin Pulipati"
owner_first_name = "Ashwin"
contact_email = "ashwinpulipati@gmail.com"
resume_path = "/Ashwin_Pulipati_Resume.pdf"

[emailjs]
endpoint = "https://api.emailjs.com/api/v1.0/email/send"
"#;

impl SiteConfig {
    /// Parse a TOML document
    pub fn from_toml(contents: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Embedded defaults with EmailJS credentials taken from the build
    /// environment (`PORTFOLIO_EMAILJS_*`).
    pub fn load() -> anyhow::Result<Self> {
        let mut config = Self::from_toml(DEFAULT_CONFIG)?;
        config.apply_overrides(
            option_env!("PORTFOLIO_EMAILJS_SERVICE_ID"),
            option_env!("PORTFOLIO_EMAILJS_TEMPLATE_ID"),
            option_env!("PORTFOLIO_EMAILJS_PUBLIC_KEY"),
        );
        Ok(config)
    }

    fn apply_overrides(
        &mut self,
        service_id: Option<&str>,
        template_id: Option<&str>,
        public_key: Option<&str>,
    ) {
        if let Some(v) = service_id {
            self.emailjs.service_id = v.to_string();
        }
        if let Some(v) = template_id {
            self.emailjs.template_id = v.to_string();
        }
        if let Some(v) = public_key {
            self.emailjs.public_key = v.to_string();
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site: SiteInfo {
                owner_name: "Ashwin Pulipati".to_string(),
                owner_first_name: "Ashwin".to_string(),
                contact_email: "ashwinpulipati@gmail.com".to_string(),
                resume_path: "/Ashwin_Pulipati_Resume.pdf".to_string(),
            },
            emailjs: EmailJsConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = SiteConfig::from_toml(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.site.owner_first_name, "Ashwin");
        assert_eq!(config.site.resume_path, crate::domain::navigation::tree::RESUME_PATH);
        assert!(!config.emailjs.endpoint.is_empty());
        assert!(!config.emailjs.is_configured());
    }

    #[test]
    fn test_overrides_complete_credentials() {
        let mut config = SiteConfig::from_toml(DEFAULT_CONFIG).unwrap();
        config.apply_overrides(Some("svc"), Some("tpl"), None);
        assert!(!config.emailjs.is_configured());
        config.apply_overrides(None, None, Some("key"));
        assert!(config.emailjs.is_configured());
        assert_eq!(config.emailjs.service_id, "svc");
    }

    #[test]
    fn test_emailjs_section_is_optional() {
        let config = SiteConfig::from_toml(
            r#"
[site]
owner_name = "A"
owner_first_name = "A"
contact_email = "a@b.c"
resume_path = "/cv.pdf"
"#,
        )
        .unwrap();
        assert_eq!(config.emailjs, EmailJsConfig::default());
    }

    #[test]
    fn test_missing_site_section_fails() {
        assert!(SiteConfig::from_toml("[emailjs]\nservice_id = \"x\"").is_err());
    }
}
