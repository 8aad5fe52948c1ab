use serde::{Deserialize, Serialize};

use crate::internal::common::Map;
use crate::internal::common::error::BindError;
use crate::internal::common::ids::ClusterName;
use crate::internal::resources::{NicBinding, ResourceDocument};

/// One physical interface of a cluster, in hardware order.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct ClusterInterface {
    /// Logical name, e.g. `eth0`.
    pub name: String,
    /// Predictable device name, e.g. `eno1`.
    pub device: String,
}

impl ClusterInterface {
    pub fn new<N: Into<String>, D: Into<String>>(name: N, device: D) -> Self {
        ClusterInterface {
            name: name.into(),
            device: device.into(),
        }
    }
}

/// External collaborator describing the interface layout of each cluster.
/// The engine never discovers this itself.
pub trait InterfaceInventory {
    /// Ordered interface list of `cluster`, or `None` for an unknown
    /// cluster.
    fn cluster_interfaces(&self, cluster: &str) -> Option<Vec<ClusterInterface>>;
}

/// Inventory backed by a static map, for callers that gather the layout up
/// front.
#[derive(Debug, Clone, Default)]
pub struct StaticInventory {
    clusters: Map<ClusterName, Vec<ClusterInterface>>,
}

impl StaticInventory {
    pub fn insert<C: Into<ClusterName>>(&mut self, cluster: C, interfaces: Vec<ClusterInterface>) {
        self.clusters.insert(cluster.into(), interfaces);
    }
}

impl InterfaceInventory for StaticInventory {
    fn cluster_interfaces(&self, cluster: &str) -> Option<Vec<ClusterInterface>> {
        self.clusters.get(cluster).cloned()
    }
}

/// Attach physical interfaces to every machine that declares a primary
/// network.
///
/// The first interface of the cluster serves the primary network; the
/// remaining interfaces serve the secondary networks one-to-one in
/// declaration order. Each interface is paired with the role tags of the
/// network it serves. A machine that declares more networks than its
/// cluster has interfaces is rejected; roles are never truncated or
/// wrapped around.
pub fn mount_nics(
    document: &mut ResourceDocument,
    inventory: &dyn InterfaceInventory,
) -> crate::Result<()> {
    let mut mounted: Vec<(usize, Vec<NicBinding>)> = Vec::new();
    for (idx, machine) in document.machines.iter().enumerate() {
        let Some(primary) = &machine.primary_network else {
            continue;
        };
        let interfaces = inventory
            .cluster_interfaces(&machine.cluster)
            .ok_or_else(|| BindError::UnknownCluster(machine.cluster.clone()))?;
        let required = 1 + machine.secondary_networks.len();
        if interfaces.len() < required {
            return Err(BindError::NotEnoughInterfaces {
                cluster: machine.cluster.clone(),
                required,
                available: interfaces.len(),
            });
        }

        let ids = std::iter::once(primary).chain(machine.secondary_networks.iter());
        let mut nics = Vec::with_capacity(required);
        for (interface, id) in interfaces.iter().zip(ids) {
            let network = document
                .network(id)
                .ok_or_else(|| BindError::UnknownNetwork(id.clone()))?;
            nics.push(NicBinding {
                device: interface.device.clone(),
                roles: network.role_tags(),
            });
        }
        log::debug!(
            "role {}: mounted {} interface(s) of cluster {}",
            machine.label(),
            nics.len(),
            machine.cluster
        );
        mounted.push((idx, nics));
    }

    for (idx, nics) in mounted {
        document.machines[idx].nics = Some(nics);
    }
    Ok(())
}
