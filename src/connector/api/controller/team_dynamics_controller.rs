use anyhow::Result;

use crate::domain::GenerationRequest;

use super::super::Container;
use super::parse_structured_data;

pub struct TeamDynamicsController<'a> {
    container: &'a Container,
}

impl<'a> TeamDynamicsController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn analyze(&self, team_info: String) -> Result<String> {
        let team_info = parse_structured_data(&team_info, "team info")?;
        let request = GenerationRequest::team_dynamics_analysis(team_info);
        request.validate()?;

        let client = self.container.generation_client();
        Ok(client.generate(&request).await?)
    }
}
