//! Neighborhood use-cases, including route assignment.

use super::RecyclingService;
use super::dto::{
    CreateNeighborhoodInput, GeoLocationInput, NeighborhoodOutput, Page, PageOutput,
    UpdateNeighborhoodInput,
};
use crate::domain::value_objects::{EntityName, PopulationEstimate, PostalCode};
use crate::domain::{Ecopoint, Neighborhood, Route, Subscriber};
use crate::error::RecyclingResult;
use crate::storage::StorageProvider;
use log::{debug, info};

impl<S: StorageProvider> RecyclingService<S> {
    pub async fn create_neighborhood(
        &self,
        input: CreateNeighborhoodInput,
    ) -> RecyclingResult<NeighborhoodOutput> {
        let mut neighborhood = Neighborhood::new(EntityName::new(input.name)?);
        neighborhood.population_estimate = input
            .population_estimate
            .map(PopulationEstimate::new)
            .transpose()?;
        neighborhood.postal_code = input.postal_code.map(PostalCode::new).transpose()?;
        neighborhood.geo_location = input
            .geo_location
            .map(GeoLocationInput::build)
            .transpose()?;

        if let Some(route_id) = input.route_id {
            self.ensure_exists::<Route>(&route_id).await?;
            neighborhood.route_id = Some(route_id);
        }

        info!(
            "Creating neighborhood '{}' ({})",
            neighborhood.name, neighborhood.id
        );
        self.repository.save(&neighborhood).await?;
        Ok(NeighborhoodOutput::from(&neighborhood))
    }

    pub async fn update_neighborhood(
        &self,
        id: &str,
        input: UpdateNeighborhoodInput,
    ) -> RecyclingResult<NeighborhoodOutput> {
        let mut neighborhood: Neighborhood = self.repository.get(id).await?;

        if let Some(name) = input.name {
            neighborhood.name = EntityName::new(name)?;
        }
        neighborhood.population_estimate = input
            .population_estimate
            .try_map(PopulationEstimate::new)?
            .apply(neighborhood.population_estimate);
        neighborhood.postal_code = input
            .postal_code
            .try_map(PostalCode::new)?
            .apply(neighborhood.postal_code);
        neighborhood.geo_location = input
            .geo_location
            .try_map(GeoLocationInput::build)?
            .apply(neighborhood.geo_location);

        info!("Updating neighborhood '{}'", id);
        self.repository.save(&neighborhood).await?;
        Ok(NeighborhoodOutput::from(&neighborhood))
    }

    pub async fn get_neighborhood(&self, id: &str) -> RecyclingResult<NeighborhoodOutput> {
        let neighborhood: Neighborhood = self.repository.get(id).await?;
        Ok(NeighborhoodOutput::from(&neighborhood))
    }

    pub async fn list_neighborhoods(
        &self,
        page: Page,
    ) -> RecyclingResult<PageOutput<NeighborhoodOutput>> {
        self.list_page::<Neighborhood, _>(page).await
    }

    /// Attach a neighborhood to an existing route.
    pub async fn assign_route(
        &self,
        neighborhood_id: &str,
        route_id: &str,
    ) -> RecyclingResult<NeighborhoodOutput> {
        let mut neighborhood: Neighborhood = self.repository.get(neighborhood_id).await?;
        self.ensure_exists::<Route>(route_id).await?;

        info!(
            "Assigning route '{}' to neighborhood '{}'",
            route_id, neighborhood_id
        );
        neighborhood.route_id = Some(route_id.to_string());
        self.repository.save(&neighborhood).await?;
        Ok(NeighborhoodOutput::from(&neighborhood))
    }

    pub async fn unassign_route(&self, neighborhood_id: &str) -> RecyclingResult<NeighborhoodOutput> {
        let mut neighborhood: Neighborhood = self.repository.get(neighborhood_id).await?;
        if neighborhood.route_id.take().is_some() {
            info!("Removing route from neighborhood '{}'", neighborhood_id);
            self.repository.save(&neighborhood).await?;
        }
        Ok(NeighborhoodOutput::from(&neighborhood))
    }

    /// Neighborhoods collected by `route_id`.
    pub async fn neighborhoods_on_route(
        &self,
        route_id: &str,
    ) -> RecyclingResult<Vec<NeighborhoodOutput>> {
        self.ensure_exists::<Route>(route_id).await?;
        let neighborhoods: Vec<Neighborhood> =
            self.repository.find_by("routeId", route_id).await?;
        Ok(neighborhoods.iter().map(NeighborhoodOutput::from).collect())
    }

    /// Delete a neighborhood and drop the references held by ecopoints and
    /// subscribers.
    pub async fn delete_neighborhood(&self, id: &str) -> RecyclingResult<()> {
        self.ensure_exists::<Neighborhood>(id).await?;

        let ecopoints: Vec<Ecopoint> = self.repository.find_by("neighborhoodId", id).await?;
        for mut ecopoint in ecopoints {
            debug!("Detaching ecopoint '{}' from neighborhood '{}'", ecopoint.id, id);
            ecopoint.neighborhood_id = None;
            self.repository.save(&ecopoint).await?;
        }

        let subscribers: Vec<Subscriber> = self.repository.find_by("neighborhoodId", id).await?;
        for mut subscriber in subscribers {
            debug!(
                "Detaching subscriber '{}' from neighborhood '{}'",
                subscriber.id, id
            );
            subscriber.neighborhood_id = None;
            self.repository.save(&subscriber).await?;
        }

        self.delete_existing::<Neighborhood>(id).await
    }
}
