//! View-layer notification contract.
//!
//! # Responsibility
//! - Decouple the core from any concrete UI toolkit: the view registers a
//!   callback object instead of being called directly by the data layer.

use crate::model::freelancer::Freelancer;
use crate::model::project::Project;

/// Callback interface implemented by the view/controller layer.
///
/// List callbacks always receive the complete refreshed list for the entity
/// type, in store iteration order.
pub trait MarketplaceObserver {
    fn on_freelancers_changed(&self, freelancers: &[Freelancer]);
    fn on_projects_changed(&self, projects: &[Project]);
    /// Fired at most once per service for a permanently unavailable store.
    fn on_store_unavailable(&self);
}
