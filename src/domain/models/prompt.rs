use super::{GenerationRequest, StructuredData, TemplateKind};
use crate::domain::DomainError;

/// Teams strictly larger than this get the longer activity list.
const LARGE_TEAM_THRESHOLD: u32 = 10;
const LARGE_TEAM_ACTIVITY_RANGE: &str = "5-7";
const SMALL_TEAM_ACTIVITY_RANGE: &str = "3-5";

/// Stated when the caller gives no preferences.
pub const DEFAULT_PREFERENCES: &str = "a mix of indoor and outdoor activities";

/// A prompt rendered from a [`GenerationRequest`].
///
/// Rendering is deterministic: the same request always yields the same text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    kind: TemplateKind,
    text: String,
}

impl Prompt {
    pub fn render(request: &GenerationRequest) -> Result<Self, DomainError> {
        let text = match request {
            GenerationRequest::TeamBuildingIdeas {
                team_size,
                duration,
                budget_per_person,
                preferences,
            } => render_team_building_ideas(*team_size, duration, *budget_per_person, preferences),
            GenerationRequest::CustomActivity {
                description,
                constraints,
            } => render_custom_activity(description, constraints)?,
            GenerationRequest::TeamDynamicsAnalysis { team_info } => {
                render_team_dynamics_analysis(team_info)?
            }
        };

        Ok(Self {
            kind: request.kind(),
            text,
        })
    }

    pub fn kind(&self) -> TemplateKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn max_tokens(&self) -> u32 {
        self.kind.max_tokens()
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

impl std::fmt::Display for Prompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

pub fn activity_range(team_size: u32) -> &'static str {
    if team_size > LARGE_TEAM_THRESHOLD {
        LARGE_TEAM_ACTIVITY_RANGE
    } else {
        SMALL_TEAM_ACTIVITY_RANGE
    }
}

fn render_team_building_ideas(
    team_size: u32,
    duration: &str,
    budget_per_person: u32,
    preferences: &[String],
) -> String {
    let joined = preferences.join(", ");
    let preferences = if joined.is_empty() {
        DEFAULT_PREFERENCES
    } else {
        joined.as_str()
    };

    format!(
        "Please suggest {range} team building activities for a team of {team_size} people.
The activities should be suitable for {duration} and fit within a budget of ${budget_per_person}.
The team prefers: {preferences}.

For each activity, please provide:
1. Name of the activity
2. Brief description
3. Estimated cost per person
4. Duration
5. Difficulty level (Easy/Medium/Hard)
6. Materials needed (if any)

Format the response as a clear, organized list.",
        range = activity_range(team_size),
    )
}

fn render_custom_activity(
    description: &str,
    constraints: &StructuredData,
) -> Result<String, DomainError> {
    let constraints = serde_json::to_string_pretty(constraints)?;

    Ok(format!(
        "Create a custom team building activity based on this description: \"{description}\"

Constraints: {constraints}

Please provide:
1. Activity name and theme
2. Detailed instructions
3. List of required materials
4. Timeline for preparation and execution
5. Tips for facilitation
6. Expected outcomes and debrief questions"
    ))
}

fn render_team_dynamics_analysis(team_info: &StructuredData) -> Result<String, DomainError> {
    let team_info = serde_json::to_string_pretty(team_info)?;

    Ok(format!(
        "Analyze team dynamics and recommend team building activities. Here's the team information:
{team_info}

Please provide:
1. Analysis of potential team dynamics challenges
2. 3-5 recommended activities to address specific needs
3. Long-term team building strategy
4. Communication improvement suggestions
5. Trust-building activities"
    ))
}
