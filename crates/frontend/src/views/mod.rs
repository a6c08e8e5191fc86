pub mod alerts;
pub mod analytics;
pub mod audit;
pub mod compliance;
pub mod dashboard;
pub mod documents;
pub mod notifications;
pub mod reports;
pub mod search;
pub mod settings;
pub mod suppliers;
pub mod users;
pub mod workflows;
