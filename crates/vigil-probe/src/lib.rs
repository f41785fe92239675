mod config;
pub use config::ProbeConfig;

mod tasks;
pub use tasks::HttpTaskDiscovery;

mod nodes;
pub use nodes::HttpNodeQuery;
