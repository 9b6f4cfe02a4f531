pub mod engine;
pub mod error;

pub use engine::{
    project, Projection, AUTOMATED_COST_PER_INVOICE, ERROR_RATE_AUTO, MIN_ROI_BOOST_FACTOR,
    TIME_SAVED_PER_INVOICE,
};
pub use error::{ComputeError, Result};
