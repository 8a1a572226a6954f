use serde::{Deserialize, Serialize};

/// The fixed prompt templates the generation client knows how to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateKind {
    TeamBuildingIdeas,
    CustomActivity,
    TeamDynamicsAnalysis,
}

impl TemplateKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateKind::TeamBuildingIdeas => "team building ideas",
            TemplateKind::CustomActivity => "custom activity",
            TemplateKind::TeamDynamicsAnalysis => "team dynamics analysis",
        }
    }

    /// Upper bound on generated output for this template.
    pub fn max_tokens(&self) -> u32 {
        match self {
            TemplateKind::TeamBuildingIdeas => 1000,
            TemplateKind::CustomActivity => 800,
            TemplateKind::TeamDynamicsAnalysis => 1200,
        }
    }

    /// The only message a caller sees when a round trip for this template fails.
    pub fn failure_message(&self) -> &'static str {
        match self {
            TemplateKind::TeamBuildingIdeas => "Failed to generate team building ideas",
            TemplateKind::CustomActivity => "Failed to create custom activity",
            TemplateKind::TeamDynamicsAnalysis => "Failed to analyze team dynamics",
        }
    }

    /// Progressive form used in log lines ("Error generating team building ideas").
    pub fn activity(&self) -> &'static str {
        match self {
            TemplateKind::TeamBuildingIdeas => "generating team building ideas",
            TemplateKind::CustomActivity => "creating custom activity",
            TemplateKind::TeamDynamicsAnalysis => "analyzing team dynamics",
        }
    }
}

impl std::fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
