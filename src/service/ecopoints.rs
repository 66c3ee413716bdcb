//! Ecopoint use-cases and material lookups.

use super::RecyclingService;
use super::dto::{
    CreateEcopointInput, EcopointOutput, Page, PageOutput, TimeWindowInput, UpdateEcopointInput,
};
use crate::domain::value_objects::{AcceptedMaterials, EntityName, Patch};
use crate::domain::{Ecopoint, Neighborhood};
use crate::error::RecyclingResult;
use crate::storage::StorageProvider;
use log::{debug, info};

impl<S: StorageProvider> RecyclingService<S> {
    pub async fn create_ecopoint(
        &self,
        input: CreateEcopointInput,
    ) -> RecyclingResult<EcopointOutput> {
        let mut ecopoint = Ecopoint::new(
            EntityName::new(input.name)?,
            input.address.build()?,
            AcceptedMaterials::from_raw(&input.accepted_materials)?,
        );
        ecopoint.opening_hours = input
            .opening_hours
            .map(TimeWindowInput::build)
            .transpose()?;
        ecopoint.image_url = normalize_url(input.image_url);

        if let Some(neighborhood_id) = input.neighborhood_id {
            self.ensure_exists::<Neighborhood>(&neighborhood_id).await?;
            ecopoint.neighborhood_id = Some(neighborhood_id);
        }

        info!(
            "Creating ecopoint '{}' ({}) accepting {}",
            ecopoint.name, ecopoint.id, ecopoint.accepted_materials
        );
        self.repository.save(&ecopoint).await?;
        Ok(EcopointOutput::from(&ecopoint))
    }

    pub async fn update_ecopoint(
        &self,
        id: &str,
        input: UpdateEcopointInput,
    ) -> RecyclingResult<EcopointOutput> {
        let mut ecopoint: Ecopoint = self.repository.get(id).await?;

        if let Some(name) = input.name {
            ecopoint.name = EntityName::new(name)?;
        }
        if !input.address.is_empty() {
            ecopoint.address = ecopoint.address.with_changes(input.address.build()?)?;
        }
        if let Some(materials) = input.accepted_materials {
            ecopoint.accepted_materials = AcceptedMaterials::from_raw(&materials)?;
        }
        ecopoint.opening_hours = input
            .opening_hours
            .try_map(TimeWindowInput::build)?
            .apply(ecopoint.opening_hours);

        if let Patch::Set(neighborhood_id) = &input.neighborhood_id {
            self.ensure_exists::<Neighborhood>(neighborhood_id).await?;
        }
        ecopoint.neighborhood_id = input.neighborhood_id.apply(ecopoint.neighborhood_id);
        ecopoint.image_url = normalize_url(input.image_url.apply(ecopoint.image_url));

        info!("Updating ecopoint '{}'", id);
        self.repository.save(&ecopoint).await?;
        Ok(EcopointOutput::from(&ecopoint))
    }

    pub async fn get_ecopoint(&self, id: &str) -> RecyclingResult<EcopointOutput> {
        let ecopoint: Ecopoint = self.repository.get(id).await?;
        Ok(EcopointOutput::from(&ecopoint))
    }

    pub async fn list_ecopoints(&self, page: Page) -> RecyclingResult<PageOutput<EcopointOutput>> {
        self.list_page::<Ecopoint, _>(page).await
    }

    /// Ecopoints accepting every one of the named materials.
    pub async fn ecopoints_accepting(
        &self,
        materials: Vec<String>,
    ) -> RecyclingResult<Vec<EcopointOutput>> {
        let wanted = AcceptedMaterials::from_raw(&materials)?;
        let ecopoints: Vec<Ecopoint> = self.repository.list_all().await?;

        let matching: Vec<EcopointOutput> = ecopoints
            .iter()
            .filter(|ecopoint| ecopoint.accepted_materials.accepts_all(wanted.iter()))
            .map(EcopointOutput::from)
            .collect();

        debug!("{} ecopoint(s) accept {}", matching.len(), wanted);
        Ok(matching)
    }

    /// Ecopoints located in a neighborhood.
    pub async fn ecopoints_in_neighborhood(
        &self,
        neighborhood_id: &str,
    ) -> RecyclingResult<Vec<EcopointOutput>> {
        self.ensure_exists::<Neighborhood>(neighborhood_id).await?;
        let ecopoints: Vec<Ecopoint> = self
            .repository
            .find_by("neighborhoodId", neighborhood_id)
            .await?;
        Ok(ecopoints.iter().map(EcopointOutput::from).collect())
    }

    pub async fn delete_ecopoint(&self, id: &str) -> RecyclingResult<()> {
        self.delete_existing::<Ecopoint>(id).await
    }
}

/// Blank image URLs are stored as absent.
fn normalize_url(url: Option<String>) -> Option<String> {
    url.map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty())
}
