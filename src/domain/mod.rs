// Domain layer - Dashboard data model, independent of transport and display
pub mod alert;
pub mod catalog;
pub mod chart;
pub mod identity;
pub mod snapshot;
