use serde::{Deserialize, Serialize};

/// Kind of engagement a visitor is reaching out about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OpportunityType {
    #[default]
    FullTime,
    Internship,
    Contract,
    Open,
}

impl OpportunityType {
    pub fn code(&self) -> &'static str {
        match self {
            OpportunityType::FullTime => "full-time",
            OpportunityType::Internship => "internship",
            OpportunityType::Contract => "contract",
            OpportunityType::Open => "open",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OpportunityType::FullTime => "Full-time",
            OpportunityType::Internship => "Internships",
            OpportunityType::Contract => "Contract",
            OpportunityType::Open => "Open to discuss",
        }
    }

    pub fn all() -> [OpportunityType; 4] {
        [
            OpportunityType::FullTime,
            OpportunityType::Internship,
            OpportunityType::Contract,
            OpportunityType::Open,
        ]
    }

    /// Strict lookup; anything unknown (e.g. a stale local-storage value)
    /// resolves to the default.
    pub fn from_code(code: &str) -> Self {
        Self::all()
            .into_iter()
            .find(|o| o.code() == code)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() {
        assert_eq!(OpportunityType::from_code("contract"), OpportunityType::Contract);
        assert_eq!(OpportunityType::from_code("open"), OpportunityType::Open);
        assert_eq!(OpportunityType::from_code("Contract"), OpportunityType::FullTime);
        assert_eq!(OpportunityType::from_code(""), OpportunityType::FullTime);
    }

    #[test]
    fn test_codes_are_unique() {
        let all = OpportunityType::all();
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a.code(), b.code());
            }
        }
    }
}
