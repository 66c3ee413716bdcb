//! Route use-cases and collection-day queries.

use super::RecyclingService;
use super::dto::{CreateRouteInput, Page, PageOutput, RouteOutput, UpdateRouteInput};
use crate::domain::value_objects::{
    CollectionDays, CollectionTime, CollectionType, EntityName, WeekDay,
};
use crate::domain::{Neighborhood, Route};
use crate::error::{RecyclingResult, ValidationError};
use crate::storage::StorageProvider;
use chrono::{Datelike, NaiveDate};
use log::{debug, info};

impl<S: StorageProvider> RecyclingService<S> {
    pub async fn create_route(&self, input: CreateRouteInput) -> RecyclingResult<RouteOutput> {
        let mut route = Route::new(
            EntityName::new(input.name)?,
            CollectionDays::from_raw(&input.collection_days)?,
            CollectionTime::new(input.start_time, input.end_time)?,
            CollectionType::new(input.collection_type)?,
        );
        if let Some(active) = input.active {
            route.active = active;
        }

        info!(
            "Creating route '{}' ({}) on {}",
            route.name, route.id, route.collection_days
        );
        self.repository.save(&route).await?;
        Ok(RouteOutput::from(&route))
    }

    /// Update a route. A single time bound may be changed; the other keeps its
    /// current value and the pair is validated together.
    pub async fn update_route(
        &self,
        id: &str,
        input: UpdateRouteInput,
    ) -> RecyclingResult<RouteOutput> {
        let mut route: Route = self.repository.get(id).await?;

        if let Some(name) = input.name {
            route.name = EntityName::new(name)?;
        }
        if let Some(days) = input.collection_days {
            route.collection_days = CollectionDays::from_raw(&days)?;
        }
        if input.start_time.is_some() || input.end_time.is_some() {
            let start = input
                .start_time
                .unwrap_or_else(|| route.collection_time.start().to_string());
            let end = input
                .end_time
                .unwrap_or_else(|| route.collection_time.end().to_string());
            route.collection_time = CollectionTime::new(start, end)?;
        }
        if let Some(collection_type) = input.collection_type {
            route.collection_type = CollectionType::new(collection_type)?;
        }
        if let Some(active) = input.active {
            route.active = active;
        }

        info!("Updating route '{}'", id);
        self.repository.save(&route).await?;
        Ok(RouteOutput::from(&route))
    }

    pub async fn add_route_days(&self, id: &str, days: Vec<String>) -> RecyclingResult<RouteOutput> {
        let mut route: Route = self.repository.get(id).await?;
        let added = CollectionDays::from_raw(&days)?;
        route.collection_days = route.collection_days.add_days(added.iter())?;

        debug!("Route '{}' now collects on {}", id, route.collection_days);
        self.repository.save(&route).await?;
        Ok(RouteOutput::from(&route))
    }

    /// Remove days from a route. A route must keep at least one day.
    pub async fn remove_route_days(
        &self,
        id: &str,
        days: Vec<String>,
    ) -> RecyclingResult<RouteOutput> {
        let mut route: Route = self.repository.get(id).await?;
        let removed = CollectionDays::from_raw(&days)?;
        route.collection_days = route.collection_days.remove_days(removed.iter())?;

        debug!("Route '{}' now collects on {}", id, route.collection_days);
        self.repository.save(&route).await?;
        Ok(RouteOutput::from(&route))
    }

    pub async fn get_route(&self, id: &str) -> RecyclingResult<RouteOutput> {
        let route: Route = self.repository.get(id).await?;
        Ok(RouteOutput::from(&route))
    }

    pub async fn list_routes(&self, page: Page) -> RecyclingResult<PageOutput<RouteOutput>> {
        self.list_page::<Route, _>(page).await
    }

    /// Active routes collecting on the named day, e.g. `"monday"`.
    pub async fn routes_for_day(&self, day: &str) -> RecyclingResult<Vec<RouteOutput>> {
        let day = WeekDay::parse(day).ok_or_else(|| {
            ValidationError::collection_days(format!(
                "Unknown day '{}'. Allowed values: {}",
                day,
                WeekDay::allowed_values()
            ))
        })?;
        self.routes_collecting_on(day).await
    }

    /// Active routes collecting on the week day of `date`.
    pub async fn routes_for_date(&self, date: NaiveDate) -> RecyclingResult<Vec<RouteOutput>> {
        self.routes_collecting_on(WeekDay::from(date.weekday())).await
    }

    async fn routes_collecting_on(&self, day: WeekDay) -> RecyclingResult<Vec<RouteOutput>> {
        let routes: Vec<Route> = self.repository.list_all().await?;
        let matching: Vec<RouteOutput> = routes
            .iter()
            .filter(|route| route.collects_on(day))
            .map(RouteOutput::from)
            .collect();

        debug!("{} active route(s) collect on {}", matching.len(), day.as_str());
        Ok(matching)
    }

    /// Delete a route, detaching the neighborhoods it served.
    pub async fn delete_route(&self, id: &str) -> RecyclingResult<()> {
        self.ensure_exists::<Route>(id).await?;

        let neighborhoods: Vec<Neighborhood> = self.repository.find_by("routeId", id).await?;
        for mut neighborhood in neighborhoods {
            debug!(
                "Detaching neighborhood '{}' from route '{}'",
                neighborhood.id, id
            );
            neighborhood.route_id = None;
            self.repository.save(&neighborhood).await?;
        }

        self.delete_existing::<Route>(id).await
    }
}
