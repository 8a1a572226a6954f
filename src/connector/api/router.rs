use anyhow::Result;

use crate::Commands;

use super::container::Container;
use super::controller::{CustomActivityController, IdeasController, TeamDynamicsController};

pub struct Router<'a> {
    ideas_controller: IdeasController<'a>,
    custom_activity_controller: CustomActivityController<'a>,
    team_dynamics_controller: TeamDynamicsController<'a>,
}

impl<'a> Router<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self {
            ideas_controller: IdeasController::new(container),
            custom_activity_controller: CustomActivityController::new(container),
            team_dynamics_controller: TeamDynamicsController::new(container),
        }
    }

    pub async fn route(&self, command: Commands) -> Result<String> {
        match command {
            Commands::Ideas {
                team_size,
                duration,
                budget,
                preferences,
            } => {
                self.ideas_controller
                    .ideas(team_size, duration, budget, preferences)
                    .await
            }
            Commands::Custom {
                description,
                constraints,
            } => {
                self.custom_activity_controller
                    .create(description, constraints)
                    .await
            }
            Commands::Analyze { team_info } => {
                self.team_dynamics_controller.analyze(team_info).await
            }
        }
    }
}
