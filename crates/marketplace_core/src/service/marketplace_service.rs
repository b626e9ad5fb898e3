//! Marketplace list synchronizer.
//!
//! # Responsibility
//! - Provide the mutation and refresh entry points consumed by a view layer.
//! - Validate drafts at the input boundary before they reach the gateway.
//! - Mirror both collections in memory and replay them to observers.
//!
//! # Invariants
//! - Mirrors are always a full, order-preserving copy of the last fetch.
//! - A permanently unavailable store is surfaced to observers exactly once,
//!   while every failing call still returns the error to its caller.

use crate::model::freelancer::{Freelancer, FreelancerDraft, FreelancerId};
use crate::model::project::{Project, ProjectDraft, ProjectId};
use crate::model::ValidationError;
use crate::repo::marketplace_repo::{MarketplaceRepository, RepoError};
use crate::service::observer::MarketplaceObserver;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Error surface of the service entry points.
#[derive(Debug)]
pub enum ServiceError {
    Validation(ValidationError),
    Store(RepoError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Store(err) => Some(err),
        }
    }
}

impl From<ValidationError> for ServiceError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Keeps the in-memory lists consistent with the store and notifies
/// registered observers after every mutation and refresh.
///
/// Single-threaded by design: all entry points take `&mut self` and run on
/// the caller's (UI-event) thread.
pub struct MarketplaceService<R: MarketplaceRepository> {
    repo: R,
    freelancers: Vec<Freelancer>,
    projects: Vec<Project>,
    observers: Vec<Box<dyn MarketplaceObserver>>,
    store_down: bool,
    unavailable_reported: bool,
}

impl<R: MarketplaceRepository> MarketplaceService<R> {
    /// Creates the service and performs one initial refresh per collection.
    ///
    /// When the store is unavailable both mirrors stay empty and the outage
    /// is latched for delivery to the first subscribed observer.
    pub fn new(repo: R) -> Self {
        let mut service = Self {
            repo,
            freelancers: Vec::new(),
            projects: Vec::new(),
            observers: Vec::new(),
            store_down: false,
            unavailable_reported: false,
        };

        if let Err(err) = service.refresh_freelancers() {
            warn!("event=initial_refresh module=service status=error entity=freelancers error={err}");
        }
        if let Err(err) = service.refresh_projects() {
            warn!("event=initial_refresh module=service status=error entity=projects error={err}");
        }

        service
    }

    /// Registers a view-layer observer and replays the current lists to it.
    ///
    /// A latched store outage is delivered here when it has not been
    /// surfaced yet.
    pub fn subscribe(&mut self, observer: Box<dyn MarketplaceObserver>) {
        observer.on_freelancers_changed(&self.freelancers);
        observer.on_projects_changed(&self.projects);
        self.observers.push(observer);

        if self.store_down {
            self.report_unavailable();
        }
    }

    /// Current freelancer mirror, in store iteration order.
    pub fn freelancers(&self) -> &[Freelancer] {
        &self.freelancers
    }

    /// Current project mirror, in store iteration order.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Re-fetches the complete freelancer collection, replaces the mirror
    /// atomically and notifies observers.
    ///
    /// Always a full re-fetch; no diffing, no caching between refreshes.
    pub fn refresh_freelancers(&mut self) -> ServiceResult<&[Freelancer]> {
        let refreshed = match self.repo.list_freelancers() {
            Ok(list) => list,
            Err(err) => return Err(self.store_error(err)),
        };

        info!(
            "event=refresh module=service status=ok entity=freelancers count={}",
            refreshed.len()
        );
        self.freelancers = refreshed;
        for observer in &self.observers {
            observer.on_freelancers_changed(&self.freelancers);
        }

        Ok(&self.freelancers)
    }

    /// Re-fetches the complete project collection, replaces the mirror
    /// atomically and notifies observers.
    pub fn refresh_projects(&mut self) -> ServiceResult<&[Project]> {
        let refreshed = match self.repo.list_projects() {
            Ok(list) => list,
            Err(err) => return Err(self.store_error(err)),
        };

        info!(
            "event=refresh module=service status=ok entity=projects count={}",
            refreshed.len()
        );
        self.projects = refreshed;
        for observer in &self.observers {
            observer.on_projects_changed(&self.projects);
        }

        Ok(&self.projects)
    }

    /// Validates and persists a freelancer registration.
    ///
    /// The draft is rejected before any store interaction when it fails the
    /// boundary checks; on success the freelancer mirror is refreshed and
    /// observers are notified exactly once.
    pub fn register_freelancer(&mut self, draft: FreelancerDraft) -> ServiceResult<FreelancerId> {
        draft.validate()?;

        let id = match self.repo.insert_freelancer(&draft) {
            Ok(id) => id,
            Err(err) => return Err(self.store_error(err)),
        };
        info!("event=register_freelancer module=service status=ok id={id}");

        self.refresh_freelancers()?;
        Ok(id)
    }

    /// Validates and persists a project posting.
    pub fn post_project(&mut self, draft: ProjectDraft) -> ServiceResult<ProjectId> {
        draft.validate()?;

        let id = match self.repo.insert_project(&draft) {
            Ok(id) => id,
            Err(err) => return Err(self.store_error(err)),
        };
        info!("event=post_project module=service status=ok id={id}");

        self.refresh_projects()?;
        Ok(id)
    }

    /// Deletes a freelancer by id; deleting an absent id is a no-op.
    pub fn remove_freelancer(&mut self, id: FreelancerId) -> ServiceResult<()> {
        if let Err(err) = self.repo.delete_freelancer(id) {
            return Err(self.store_error(err));
        }
        info!("event=remove_freelancer module=service status=ok id={id}");

        self.refresh_freelancers()?;
        Ok(())
    }

    /// Deletes a project by id; deleting an absent id is a no-op.
    pub fn remove_project(&mut self, id: ProjectId) -> ServiceResult<()> {
        if let Err(err) = self.repo.delete_project(id) {
            return Err(self.store_error(err));
        }
        info!("event=remove_project module=service status=ok id={id}");

        self.refresh_projects()?;
        Ok(())
    }

    fn store_error(&mut self, err: RepoError) -> ServiceError {
        if matches!(err, RepoError::Unavailable) {
            self.store_down = true;
            self.report_unavailable();
        }
        ServiceError::Store(err)
    }

    fn report_unavailable(&mut self) {
        if self.unavailable_reported || self.observers.is_empty() {
            return;
        }

        warn!("event=store_unavailable module=service status=reported");
        for observer in &self.observers {
            observer.on_store_unavailable();
        }
        self.unavailable_reported = true;
    }
}
