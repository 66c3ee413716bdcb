//! Subscriber use-cases.

use super::RecyclingService;
use super::dto::{
    CreateSubscriberInput, Page, PageOutput, SubscriberOutput, UpdateSubscriberInput,
};
use crate::domain::value_objects::{Email, EntityName, Patch};
use crate::domain::{Neighborhood, Subscriber};
use crate::error::RecyclingResult;
use crate::storage::StorageProvider;
use log::info;

impl<S: StorageProvider> RecyclingService<S> {
    /// Register a subscriber. Emails are unique among subscribers.
    pub async fn create_subscriber(
        &self,
        input: CreateSubscriberInput,
    ) -> RecyclingResult<SubscriberOutput> {
        let email = Email::new(&input.email)?;
        let mut subscriber = Subscriber::new(
            EntityName::new(input.name)?,
            email.clone(),
            input.address.build()?,
        );

        let _guard = self.locks.subscriber_email.lock().await;
        self.ensure_email_available::<Subscriber>(&email, None)
            .await?;
        if let Some(neighborhood_id) = input.neighborhood_id {
            self.ensure_exists::<Neighborhood>(&neighborhood_id).await?;
            subscriber.neighborhood_id = Some(neighborhood_id);
        }

        info!("Creating subscriber '{}' <{}>", subscriber.id, email);
        self.repository.save(&subscriber).await?;
        Ok(SubscriberOutput::from(&subscriber))
    }

    pub async fn update_subscriber(
        &self,
        id: &str,
        input: UpdateSubscriberInput,
    ) -> RecyclingResult<SubscriberOutput> {
        let _guard = self.locks.subscriber_email.lock().await;
        let mut subscriber: Subscriber = self.repository.get(id).await?;

        if let Some(name) = input.name {
            subscriber.name = EntityName::new(name)?;
        }
        if let Some(email) = input.email {
            let email = Email::new(email)?;
            if email != subscriber.email {
                self.ensure_email_available::<Subscriber>(&email, Some(id))
                    .await?;
                subscriber.email = email;
            }
        }
        if !input.address.is_empty() {
            subscriber.address = subscriber.address.with_changes(input.address.build()?)?;
        }
        if let Patch::Set(neighborhood_id) = &input.neighborhood_id {
            self.ensure_exists::<Neighborhood>(neighborhood_id).await?;
        }
        subscriber.neighborhood_id = input.neighborhood_id.apply(subscriber.neighborhood_id);

        info!("Updating subscriber '{}'", id);
        self.repository.save(&subscriber).await?;
        Ok(SubscriberOutput::from(&subscriber))
    }

    pub async fn get_subscriber(&self, id: &str) -> RecyclingResult<SubscriberOutput> {
        let subscriber: Subscriber = self.repository.get(id).await?;
        Ok(SubscriberOutput::from(&subscriber))
    }

    pub async fn list_subscribers(
        &self,
        page: Page,
    ) -> RecyclingResult<PageOutput<SubscriberOutput>> {
        self.list_page::<Subscriber, _>(page).await
    }

    pub async fn delete_subscriber(&self, id: &str) -> RecyclingResult<()> {
        self.delete_existing::<Subscriber>(id).await
    }
}
