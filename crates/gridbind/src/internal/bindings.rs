use serde::{Deserialize, Serialize};

use crate::internal::common::Map;
use crate::internal::common::ids::{Hostname, RoleName};
use crate::internal::resources::{NetworkAllocation, ResourceDocument};

/// A concrete host as later deployment phases see it: its hostname plus the
/// network-role → device mapping derived from the machine's nic bindings.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct BoundHost {
    pub hostname: Hostname,
    pub interfaces: Map<RoleName, String>,
}

/// Project a concretized document into per-role host lists. A machine
/// contributes each of its concrete hosts once per role tag it carries;
/// machines that were not concretized contribute nothing.
pub fn hosts_by_role(document: &ResourceDocument) -> Map<RoleName, Vec<BoundHost>> {
    let mut by_role: Map<RoleName, Vec<BoundHost>> = Map::default();
    for machine in &document.machines {
        let Some(concrete_nodes) = &machine.concrete_nodes else {
            continue;
        };
        let mut interfaces: Map<RoleName, String> = Map::default();
        for nic in machine.nics.iter().flatten() {
            for role in &nic.roles {
                interfaces.insert(role.clone(), nic.device.clone());
            }
        }
        let mut hostnames: Vec<&Hostname> = concrete_nodes.iter().collect();
        hostnames.sort_unstable();
        for role in machine.role_tags() {
            let hosts = by_role.entry(role).or_default();
            hosts.extend(hostnames.iter().map(|hostname| BoundHost {
                hostname: (*hostname).clone(),
                interfaces: interfaces.clone(),
            }));
        }
    }
    by_role
}

/// Per-role view of the bound networks. Only concretized descriptions
/// contribute.
pub fn networks_by_role(document: &ResourceDocument) -> Map<RoleName, NetworkAllocation> {
    let mut by_role: Map<RoleName, NetworkAllocation> = Map::default();
    for network in &document.networks {
        let Some(allocation) = &network.concrete else {
            continue;
        };
        for role in network.role_tags() {
            by_role.insert(role, allocation.clone());
        }
    }
    by_role
}
