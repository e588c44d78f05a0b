pub mod crowd_client;

pub use crowd_client::CrowdClient;
