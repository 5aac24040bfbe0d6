//! TOML form configuration and credential resolution.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Deserialize;
use sowgen_core::{FormInput, Session, Stakeholder, StakeholderRole, StakeholderTable};

/// Resolves the API credential from the environment. Never a CLI flag.
pub fn api_key_from_env() -> Result<String> {
    let api_key = std::env::var("GEMINI_API_KEY")
        .or_else(|_| std::env::var("GOOGLE_API_KEY"))
        .map_err(|_| {
            anyhow::anyhow!("GEMINI_API_KEY or GOOGLE_API_KEY environment variable not set")
        })?;
    if api_key.trim().is_empty() {
        anyhow::bail!("the configured API key is empty");
    }
    Ok(api_key)
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FormConfig {
    pub objective: String,
    pub solution: String,
    #[serde(default = "default_engagement")]
    pub engagement: String,
    #[serde(default = "default_industry")]
    pub industry: String,
    #[serde(default = "default_timeline")]
    pub timeline: String,
    /// ISO date string, e.g. "2026-08-07". Defaults to today at export time.
    #[serde(default)]
    pub doc_date: Option<String>,
    #[serde(default)]
    pub branding: BrandingConfig,
    #[serde(default)]
    pub stakeholders: StakeholderConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BrandingConfig {
    pub partner_network_logo: Option<PathBuf>,
    pub customer_logo: Option<PathBuf>,
    pub company_logo: Option<PathBuf>,
    pub advanced_tier_logo: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StakeholderRow {
    pub name: String,
    pub title: String,
    pub email: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StakeholderConfig {
    #[serde(default)]
    pub partner: Vec<StakeholderRow>,
    #[serde(default)]
    pub customer: Vec<StakeholderRow>,
    #[serde(default)]
    pub aws: Vec<StakeholderRow>,
    #[serde(default)]
    pub escalation: Vec<StakeholderRow>,
}

fn default_engagement() -> String {
    "Proof of Concept (PoC)".to_string()
}

fn default_industry() -> String {
    "Retail / E-commerce".to_string()
}

fn default_timeline() -> String {
    "4 Weeks".to_string()
}

/// Missing assets never abort the run; the cover page falls back to text.
fn read_logo(path: Option<&Path>) -> Option<Vec<u8>> {
    let path = path?;
    match std::fs::read(path) {
        Ok(bytes) => Some(bytes),
        Err(error) => {
            tracing::warn!(path = %path.display(), %error, "logo file not readable; omitting");
            None
        }
    }
}

fn rows(config: Vec<StakeholderRow>) -> StakeholderTable {
    StakeholderTable::new(
        config.into_iter().map(|r| Stakeholder::new(r.name, r.title, r.email)).collect(),
    )
}

impl FormConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read form file {}", path.display()))?;
        Self::parse(&raw).with_context(|| format!("failed to parse form file {}", path.display()))
    }

    pub fn parse(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    /// Builds the session, replacing the seeded stakeholder tables with any
    /// role for which the form provides rows.
    pub fn into_session(self) -> Session {
        let form = FormInput {
            objective: self.objective,
            solution_name: self.solution,
            engagement_type: self.engagement,
            industry: self.industry,
            timeline: self.timeline,
        };
        let mut session = Session::new(form);

        for (role, config_rows) in [
            (StakeholderRole::Partner, self.stakeholders.partner),
            (StakeholderRole::Customer, self.stakeholders.customer),
            (StakeholderRole::Aws, self.stakeholders.aws),
            (StakeholderRole::Escalation, self.stakeholders.escalation),
        ] {
            if !config_rows.is_empty() {
                session.stakeholders.insert(role, rows(config_rows));
            }
        }

        session.branding.partner_network_logo =
            read_logo(self.branding.partner_network_logo.as_deref());
        session.branding.customer_logo = read_logo(self.branding.customer_logo.as_deref());
        session.branding.company_logo = read_logo(self.branding.company_logo.as_deref());
        session.branding.advanced_tier_logo =
            read_logo(self.branding.advanced_tier_logo.as_deref());

        session.branding.doc_date = match self.doc_date.as_deref() {
            Some(raw) => match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
                Ok(date) => Some(date),
                Err(error) => {
                    tracing::warn!(%error, raw, "unparsable doc_date; using today");
                    Some(chrono::Local::now().date_naive())
                }
            },
            None => Some(chrono::Local::now().date_naive()),
        };

        session
    }
}
