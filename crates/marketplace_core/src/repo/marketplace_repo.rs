//! Store gateway contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide the sole mediation between record types and persisted rows.
//! - Mint record identities at persistence time.
//! - Hold the permanent unavailable state when the store cannot be opened.
//!
//! # Invariants
//! - Every operation on an unavailable gateway fails with
//!   [`RepoError::Unavailable`] without touching the storage layer.
//! - Deleting an identity that matches no row is a successful no-op.
//! - List results preserve the store's natural iteration order.

use crate::db::{open_store, DbError, DbResult, StoreConfig};
use crate::model::freelancer::{Freelancer, FreelancerDraft, FreelancerId};
use crate::model::project::{Project, ProjectDraft, ProjectId};
use log::error;
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub type RepoResult<T> = Result<T, RepoError>;

/// Gateway error for marketplace persistence operations.
#[derive(Debug)]
pub enum RepoError {
    /// The store connection was never established; permanent for the
    /// lifetime of the gateway handle.
    Unavailable,
    Db(DbError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable => write!(f, "marketplace store is unavailable"),
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted record: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Unavailable => None,
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Data-access contract for both marketplace collections.
///
/// Implementations are explicit, passed-around handles; there is no global
/// connection state anywhere in the crate.
pub trait MarketplaceRepository {
    /// Fetches every freelancer in natural iteration order.
    fn list_freelancers(&self) -> RepoResult<Vec<Freelancer>>;
    /// Fetches every project in natural iteration order.
    fn list_projects(&self) -> RepoResult<Vec<Project>>;
    /// Persists a registration draft; the store assigns and returns the id.
    fn insert_freelancer(&self, draft: &FreelancerDraft) -> RepoResult<FreelancerId>;
    /// Persists a posting draft; the store assigns and returns the id.
    fn insert_project(&self, draft: &ProjectDraft) -> RepoResult<ProjectId>;
    /// Removes the freelancer with the given id; no-op when absent.
    fn delete_freelancer(&self, id: FreelancerId) -> RepoResult<()>;
    /// Removes the project with the given id; no-op when absent.
    fn delete_project(&self, id: ProjectId) -> RepoResult<()>;
}

enum StoreState {
    Ready(Connection),
    Unavailable,
}

/// SQLite-backed store gateway owning the connection state.
pub struct SqliteMarketplaceRepository {
    state: StoreState,
}

impl SqliteMarketplaceRepository {
    /// Opens the store described by `config`.
    ///
    /// When the store cannot be opened the returned handle is permanently
    /// unavailable: every subsequent operation short-circuits with
    /// [`RepoError::Unavailable`] and no reconnection is attempted.
    pub fn connect(config: &StoreConfig) -> Self {
        match open_store(config) {
            Ok(conn) => Self {
                state: StoreState::Ready(conn),
            },
            Err(err) => {
                error!("event=store_connect module=repo status=unavailable error={err}");
                Self {
                    state: StoreState::Unavailable,
                }
            }
        }
    }

    /// Opens a migrated in-memory store.
    pub fn in_memory() -> DbResult<Self> {
        let conn = open_store(&StoreConfig::InMemory)?;
        Ok(Self {
            state: StoreState::Ready(conn),
        })
    }

    pub fn is_available(&self) -> bool {
        matches!(self.state, StoreState::Ready(_))
    }

    fn conn(&self) -> RepoResult<&Connection> {
        match &self.state {
            StoreState::Ready(conn) => Ok(conn),
            StoreState::Unavailable => Err(RepoError::Unavailable),
        }
    }
}

impl MarketplaceRepository for SqliteMarketplaceRepository {
    fn list_freelancers(&self) -> RepoResult<Vec<Freelancer>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT id, name, skill, rate_per_hour, rating
             FROM freelancers
             ORDER BY rowid;",
        )?;

        let mut rows = stmt.query([])?;
        let mut freelancers = Vec::new();
        while let Some(row) = rows.next()? {
            freelancers.push(parse_freelancer_row(row)?);
        }

        Ok(freelancers)
    }

    fn list_projects(&self) -> RepoResult<Vec<Project>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT id, title, description, budget, company_name
             FROM projects
             ORDER BY rowid;",
        )?;

        let mut rows = stmt.query([])?;
        let mut projects = Vec::new();
        while let Some(row) = rows.next()? {
            projects.push(parse_project_row(row)?);
        }

        Ok(projects)
    }

    fn insert_freelancer(&self, draft: &FreelancerDraft) -> RepoResult<FreelancerId> {
        let conn = self.conn()?;
        let id = Uuid::new_v4();

        conn.execute(
            "INSERT INTO freelancers (id, name, skill, rate_per_hour, rating)
             VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                id.to_string(),
                draft.name.as_str(),
                draft.skill.as_str(),
                draft.rate_per_hour,
                draft.rating,
            ],
        )?;

        Ok(id)
    }

    fn insert_project(&self, draft: &ProjectDraft) -> RepoResult<ProjectId> {
        let conn = self.conn()?;
        let id = Uuid::new_v4();

        conn.execute(
            "INSERT INTO projects (id, title, description, budget, company_name)
             VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                id.to_string(),
                draft.title.as_str(),
                draft.description.as_str(),
                draft.budget,
                draft.company_name.as_str(),
            ],
        )?;

        Ok(id)
    }

    fn delete_freelancer(&self, id: FreelancerId) -> RepoResult<()> {
        let conn = self.conn()?;
        conn.execute(
            "DELETE FROM freelancers WHERE id = ?1;",
            [id.to_string()],
        )?;
        Ok(())
    }

    fn delete_project(&self, id: ProjectId) -> RepoResult<()> {
        let conn = self.conn()?;
        conn.execute("DELETE FROM projects WHERE id = ?1;", [id.to_string()])?;
        Ok(())
    }
}

fn parse_freelancer_row(row: &Row<'_>) -> RepoResult<Freelancer> {
    Ok(Freelancer {
        id: parse_id(row, "freelancers")?,
        name: row.get("name")?,
        skill: row.get("skill")?,
        rate_per_hour: row.get("rate_per_hour")?,
        rating: row.get("rating")?,
    })
}

fn parse_project_row(row: &Row<'_>) -> RepoResult<Project> {
    Ok(Project {
        id: parse_id(row, "projects")?,
        title: row.get("title")?,
        description: row.get("description")?,
        budget: row.get("budget")?,
        company_name: row.get("company_name")?,
    })
}

fn parse_id(row: &Row<'_>, table: &str) -> RepoResult<Uuid> {
    let id_text: String = row.get("id")?;
    Uuid::parse_str(&id_text)
        .map_err(|_| RepoError::InvalidData(format!("invalid id value `{id_text}` in {table}.id")))
}
