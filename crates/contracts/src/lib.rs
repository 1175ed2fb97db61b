//! Wire contracts shared between the research frontend and its backend.

pub mod usecases;
