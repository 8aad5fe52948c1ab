use thiserror::Error;

use crate::internal::common::ids::{ClusterName, NetworkId, RoleName, SiteName};

#[derive(Debug, Error)]
pub enum BindError {
    #[error(
        "role {role} requires at least {required} node(s) on cluster {cluster}, {assigned} available"
    )]
    NotEnoughNodes {
        role: RoleName,
        cluster: ClusterName,
        required: u32,
        assigned: u32,
    },
    #[error("no concrete network matches {id} at site {site}")]
    MissingNetwork { id: NetworkId, site: SiteName },
    #[error(
        "machine on cluster {cluster} declares {required} network(s), the cluster has {available} interface(s)"
    )]
    NotEnoughInterfaces {
        cluster: ClusterName,
        required: usize,
        available: usize,
    },
    #[error("no interface inventory for cluster {0}")]
    UnknownCluster(ClusterName),
    #[error("reference to undeclared network {0}")]
    UnknownNetwork(NetworkId),
    #[error("invalid resource description: {0}")]
    InvalidDescription(String),
    #[error("Error: {0}")]
    GenericError(String),
}

impl From<String> for BindError {
    fn from(e: String) -> Self {
        Self::GenericError(e)
    }
}

impl From<&str> for BindError {
    fn from(e: &str) -> Self {
        Self::GenericError(e.to_string())
    }
}
