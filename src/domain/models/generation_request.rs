use serde::{Deserialize, Serialize};

use super::TemplateKind;
use crate::domain::DomainError;

/// Free-form key/value data embedded into a prompt as pretty-printed JSON.
pub type StructuredData = serde_json::Map<String, serde_json::Value>;

/// Structured input for one generation call. Each variant carries exactly the
/// parameters its template substitutes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GenerationRequest {
    TeamBuildingIdeas {
        team_size: u32,
        duration: String,
        budget_per_person: u32,
        #[serde(default)]
        preferences: Vec<String>,
    },
    CustomActivity {
        description: String,
        #[serde(default)]
        constraints: StructuredData,
    },
    TeamDynamicsAnalysis {
        team_info: StructuredData,
    },
}

impl GenerationRequest {
    pub fn team_building_ideas(
        team_size: u32,
        duration: impl Into<String>,
        budget_per_person: u32,
        preferences: Vec<String>,
    ) -> Self {
        Self::TeamBuildingIdeas {
            team_size,
            duration: duration.into(),
            budget_per_person,
            preferences,
        }
    }

    pub fn custom_activity(description: impl Into<String>, constraints: StructuredData) -> Self {
        Self::CustomActivity {
            description: description.into(),
            constraints,
        }
    }

    pub fn team_dynamics_analysis(team_info: StructuredData) -> Self {
        Self::TeamDynamicsAnalysis { team_info }
    }

    pub fn kind(&self) -> TemplateKind {
        match self {
            Self::TeamBuildingIdeas { .. } => TemplateKind::TeamBuildingIdeas,
            Self::CustomActivity { .. } => TemplateKind::CustomActivity,
            Self::TeamDynamicsAnalysis { .. } => TemplateKind::TeamDynamicsAnalysis,
        }
    }

    /// Check the minimum fields the chosen template needs.
    ///
    /// This is a caller-side check: [`crate::GenerationClient`] renders whatever
    /// it is given and never calls this itself.
    pub fn validate(&self) -> Result<(), DomainError> {
        match self {
            Self::TeamBuildingIdeas {
                team_size,
                duration,
                ..
            } => {
                if *team_size == 0 {
                    return Err(DomainError::invalid_input(
                        "team size must be greater than zero",
                    ));
                }
                if duration.trim().is_empty() {
                    return Err(DomainError::invalid_input("duration is required"));
                }
                Ok(())
            }
            Self::CustomActivity { description, .. } => {
                if description.trim().is_empty() {
                    return Err(DomainError::invalid_input("description is required"));
                }
                Ok(())
            }
            Self::TeamDynamicsAnalysis { .. } => Ok(()),
        }
    }
}
