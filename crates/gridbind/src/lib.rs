pub mod internal;

pub use crate::internal::common::{Map, Set};

pub type Error = internal::common::error::BindError;
pub type Result<T> = std::result::Result<T, Error>;

pub mod resources {
    pub use crate::internal::common::ids::{
        ClusterName, Hostname, NetworkId, RoleName, SiteName, VlanId,
    };
    pub use crate::internal::resources::{
        MachineDescription, NetworkAllocation, NetworkDescription, NetworkKind, NicBinding,
        ResourceDocument, RoleList,
    };
}

pub mod concretize {
    pub use crate::internal::concretize::{
        ClusterInterface, InterfaceInventory, StaticInventory, concretize, concretize_networks,
        concretize_nodes, mount_nics,
    };
}

pub mod bindings {
    pub use crate::internal::bindings::{BoundHost, hosts_by_role, networks_by_role};
}
