use anyhow::Result;

use crate::domain::{GenerationRequest, StructuredData};

use super::super::Container;
use super::parse_structured_data;

pub struct CustomActivityController<'a> {
    container: &'a Container,
}

impl<'a> CustomActivityController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn create(&self, description: String, constraints: Option<String>) -> Result<String> {
        let constraints = match constraints.as_deref() {
            Some(raw) => parse_structured_data(raw, "constraints")?,
            None => StructuredData::new(),
        };

        let request = GenerationRequest::custom_activity(description, constraints);
        request.validate()?;

        let client = self.container.generation_client();
        Ok(client.generate(&request).await?)
    }
}
