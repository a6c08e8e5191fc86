pub mod alert;
pub mod audit;
pub mod compliance;
pub mod document;
pub mod metrics;
pub mod notification;
pub mod report;
pub mod supplier;
pub mod user;
pub mod workflow;
