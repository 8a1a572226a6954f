use anyhow::Result;

use crate::domain::GenerationRequest;

use super::super::Container;

pub struct IdeasController<'a> {
    container: &'a Container,
}

impl<'a> IdeasController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn ideas(
        &self,
        team_size: u32,
        duration: String,
        budget: u32,
        preferences: Option<String>,
    ) -> Result<String> {
        let preferences = preferences
            .as_deref()
            .map(parse_preferences)
            .unwrap_or_default();

        let request =
            GenerationRequest::team_building_ideas(team_size, duration, budget, preferences);
        request.validate()?;

        let client = self.container.generation_client();
        Ok(client.generate(&request).await?)
    }
}

/// Split a comma-separated preference list, trimming each item and dropping
/// empty ones.
pub fn parse_preferences(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(String::from)
        .collect()
}
