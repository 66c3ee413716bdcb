//! Administrator use-cases.

use super::RecyclingService;
use super::dto::{AdministratorOutput, CreateAdministratorInput, Page, PageOutput};
use crate::domain::Administrator;
use crate::domain::value_objects::{Email, EntityName};
use crate::error::RecyclingResult;
use crate::storage::StorageProvider;
use log::info;

impl<S: StorageProvider> RecyclingService<S> {
    /// Register an administrator. Emails are unique among administrators.
    pub async fn create_administrator(
        &self,
        input: CreateAdministratorInput,
    ) -> RecyclingResult<AdministratorOutput> {
        let name = EntityName::new(input.name)?;
        let email = Email::new(input.email)?;

        let _guard = self.locks.administrator_email.lock().await;
        self.ensure_email_available::<Administrator>(&email, None)
            .await?;

        let administrator = Administrator::new(name, email);
        info!(
            "Creating administrator '{}' ({})",
            administrator.id, administrator.email
        );
        self.repository.save(&administrator).await?;

        Ok(AdministratorOutput::from(&administrator))
    }

    pub async fn get_administrator(&self, id: &str) -> RecyclingResult<AdministratorOutput> {
        let administrator: Administrator = self.repository.get(id).await?;
        Ok(AdministratorOutput::from(&administrator))
    }

    pub async fn list_administrators(
        &self,
        page: Page,
    ) -> RecyclingResult<PageOutput<AdministratorOutput>> {
        self.list_page::<Administrator, _>(page).await
    }

    pub async fn delete_administrator(&self, id: &str) -> RecyclingResult<()> {
        self.delete_existing::<Administrator>(id).await
    }
}
