//! Orrery: a solar system simulation library
//!
//! This crate computes time-parameterized positions of bodies on fixed
//! circular orbits, restricted three-body Lagrange points, aggregate
//! gravitational-potential field samples, and Hohmann-style transfer
//! trajectories. Every query is a function of a simulation clock value and
//! an immutable body catalog; nothing on the query path allocates, blocks,
//! or depends on call history, so a host render loop can re-evaluate the
//! whole system every frame.
//!
//! The one exception is the [`transfer::TransferPlan`], which freezes a
//! departure snapshot exactly once when a transfer is started and replays
//! the frozen curve on every later query.

use thiserror::Error;

pub mod catalog;
pub mod clock;
pub mod constants;
pub mod coordinates;
pub mod ephemeris;
pub mod field;
pub mod lagrange;
pub mod transfer;

// Re-export commonly used types
pub use catalog::{Body, BodyCatalog};
pub use coordinates::Planar;
pub use lagrange::LagrangePoints;

use field::FieldParams;
use transfer::{TransferConfig, TransferPlan};

/// Main error type for the orrery library
#[derive(Debug, Error)]
pub enum OrreryError {
    #[error("Body not found: {0}")]
    BodyNotFound(String),

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("Degenerate curve: {0}")]
    DegenerateCurve(String),
}

/// Result type for orrery operations
pub type Result<T> = std::result::Result<T, OrreryError>;

/// A complete simulated solar system: an immutable body catalog plus the
/// transfer-planner session state.
///
/// `Orrery` is the entry point consumed by hosts. All position, Lagrange,
/// and field queries go through `&self` and are pure functions of the
/// supplied simulation time; only [`Orrery::start_transfer`] and
/// [`Orrery::reset_transfer`] take `&mut self`.
pub struct Orrery {
    catalog: BodyCatalog,
    transfer: TransferPlan,
    transfer_config: TransferConfig,
    field_params: FieldParams,
}

impl Orrery {
    /// Create an orrery around the given catalog
    pub fn new(catalog: BodyCatalog) -> Self {
        Self {
            catalog,
            transfer: TransferPlan::new(),
            transfer_config: TransferConfig::default(),
            field_params: FieldParams::default(),
        }
    }

    /// Create an orrery around the compiled-in nine-body catalog
    pub fn standard() -> Self {
        Self::new(BodyCatalog::standard())
    }

    /// Override the transfer planner configuration
    pub fn with_transfer_config(mut self, config: TransferConfig) -> Self {
        self.transfer_config = config;
        self
    }

    /// Override the field sampler tuning
    pub fn with_field_params(mut self, params: FieldParams) -> Self {
        self.field_params = params;
        self
    }

    /// The ordered body catalog, fixed at construction
    pub fn catalog(&self) -> &BodyCatalog {
        &self.catalog
    }

    /// Planar position of the named body at simulation time `t`
    pub fn position(&self, name: &str, t: f64) -> Result<Planar> {
        Ok(ephemeris::body_position(self.catalog.get(name)?, t))
    }

    /// The L1/L2/L4/L5 equilibrium points of the named pair at time `t`
    ///
    /// The primary and secondary must occupy distinct positions at `t`;
    /// see [`lagrange::lagrange_points`] for the precondition.
    pub fn lagrange_points(&self, primary: &str, secondary: &str, t: f64) -> Result<LagrangePoints> {
        let p = self.catalog.get(primary)?;
        let s = self.catalog.get(secondary)?;
        Ok(lagrange::lagrange_points(
            ephemeris::body_position(p, t),
            ephemeris::body_position(s, t),
            p.mass,
            s.mass,
        ))
    }

    /// Aggregate gravity-well depression at `point` for time `t`, in `[0, 1)`
    ///
    /// Evaluates body positions inline without buffering; for bulk per-frame
    /// sampling over many points prefer [`field::FieldSampler`].
    pub fn field_depression(&self, point: Planar, t: f64) -> f64 {
        field::catalog_depression(point, &self.catalog, t, &self.field_params)
    }

    /// Record a transfer departure from `departure` toward `arrival` at `t`
    ///
    /// Returns `Ok(true)` if the departure snapshot was frozen, `Ok(false)`
    /// if a transfer is already underway (the frozen curve is untouched).
    pub fn start_transfer(&mut self, departure: &str, arrival: &str, t: f64) -> Result<bool> {
        let dep = self.catalog.get(departure)?;
        let arr = self.catalog.get(arrival)?;
        Ok(self.transfer.depart(dep, arr, t, &self.transfer_config))
    }

    /// Probe position along the frozen transfer curve, `None` while idle
    pub fn probe_position(&self, t: f64) -> Option<Planar> {
        self.transfer.probe_position(t)
    }

    /// Distance from the probe to the arrival body's current position
    pub fn rendezvous_error(&self, t: f64) -> Option<f64> {
        self.transfer.rendezvous_error(t)
    }

    /// Normalized rendezvous quality signal in `[0, 1]`, `None` while idle
    pub fn transfer_optimality(&self, t: f64) -> Option<f64> {
        self.transfer.optimality(t)
    }

    /// The transfer planner state machine
    pub fn transfer(&self) -> &TransferPlan {
        &self.transfer
    }

    /// Discard any frozen transfer and return the planner to idle
    pub fn reset_transfer(&mut self) {
        self.transfer.reset();
    }
}
