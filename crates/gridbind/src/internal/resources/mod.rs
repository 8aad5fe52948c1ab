use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::internal::common::Set;
use crate::internal::common::error::BindError;
use crate::internal::common::ids::{
    ClusterName, Hostname, NetworkId, RoleName, SiteName, VlanId,
};

/// Role tags of a single description. Most descriptions carry one or two.
pub type RoleList = SmallVec<[RoleName; 2]>;

fn default_node_count() -> u32 {
    1
}

/// Abstract machine requirement: `nodes` machines of `cluster`, serving the
/// given role(s). Concretization fills `concrete_nodes` and, for machines
/// with a declared primary network, `nics`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MachineDescription {
    /// Singular role spelling; takes precedence over `roles` when declared.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<RoleName>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<RoleName>,
    pub cluster: ClusterName,
    #[serde(default = "default_node_count")]
    pub nodes: u32,
    /// Floor below which the assignment is infeasible. Without it the full
    /// `nodes` count is required.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_network: Option<NetworkId>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub secondary_networks: Vec<NetworkId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub concrete_nodes: Option<Set<Hostname>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nics: Option<Vec<NicBinding>>,
}

impl MachineDescription {
    pub fn role_tags(&self) -> RoleList {
        match &self.role {
            Some(role) => std::iter::once(role.clone()).collect(),
            None => self.roles.iter().cloned().collect(),
        }
    }

    /// First role tag, for log and error messages.
    pub fn label(&self) -> &str {
        self.role
            .as_deref()
            .or_else(|| self.roles.first().map(|r| r.as_str()))
            .unwrap_or("<no role>")
    }

    pub fn floor(&self) -> u32 {
        self.min.unwrap_or(self.nodes)
    }

    fn network_refs(&self) -> impl Iterator<Item = &NetworkId> {
        self.primary_network
            .iter()
            .chain(self.secondary_networks.iter())
    }
}

#[derive(Serialize, Deserialize, Debug, Copy, Clone, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum NetworkKind {
    /// Isolated network; binds to a VLAN allocation of its site.
    Vlan,
    /// Default, non-isolated network of a site; never carries a VLAN id.
    Prod,
}

/// Abstract network requirement, referenced by machines through `id`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct NetworkDescription {
    pub id: NetworkId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<RoleName>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<RoleName>,
    pub site: SiteName,
    #[serde(rename = "type")]
    pub kind: NetworkKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vlan_id: Option<VlanId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub concrete: Option<NetworkAllocation>,
}

impl NetworkDescription {
    pub fn role_tags(&self) -> RoleList {
        match &self.role {
            Some(role) => std::iter::once(role.clone()).collect(),
            None => self.roles.iter().cloned().collect(),
        }
    }
}

/// One already-acquired network, as handed over by the provisioning API.
/// A record without `vlan_id` is the production/default entry of its site.
#[derive(Serialize, Deserialize, Debug, Clone, Hash, Eq, PartialEq)]
pub struct NetworkAllocation {
    pub site: SiteName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vlan_id: Option<VlanId>,
}

impl NetworkAllocation {
    pub fn production<S: Into<SiteName>>(site: S) -> Self {
        NetworkAllocation {
            site: site.into(),
            vlan_id: None,
        }
    }

    pub fn vlan<S: Into<SiteName>, V: Into<VlanId>>(site: S, vlan_id: V) -> Self {
        NetworkAllocation {
            site: site.into(),
            vlan_id: Some(vlan_id.into()),
        }
    }
}

/// Physical interface bound to the role(s) of one declared network.
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
pub struct NicBinding {
    pub device: String,
    pub roles: RoleList,
}

/// Root of a provisioning run. Created by the caller, annotated in place by
/// the concretizers, then handed back for persistence.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct ResourceDocument {
    #[serde(default)]
    pub machines: Vec<MachineDescription>,
    #[serde(default)]
    pub networks: Vec<NetworkDescription>,
}

impl ResourceDocument {
    pub fn network(&self, id: &NetworkId) -> Option<&NetworkDescription> {
        self.networks.iter().find(|n| &n.id == id)
    }

    /// Structural checks, run before any pool is consumed.
    pub fn validate(&self) -> crate::Result<()> {
        for machine in &self.machines {
            if machine.role_tags().is_empty() {
                return Err(BindError::InvalidDescription(format!(
                    "machine on cluster {} declares no role",
                    machine.cluster
                )));
            }
            if let Some(min) = machine.min {
                if min > machine.nodes {
                    return Err(BindError::InvalidDescription(format!(
                        "role {}: min {} exceeds requested node count {}",
                        machine.label(),
                        min,
                        machine.nodes
                    )));
                }
            }
            for id in machine.network_refs() {
                if self.network(id).is_none() {
                    return Err(BindError::InvalidDescription(format!(
                        "role {} references undeclared network {}",
                        machine.label(),
                        id
                    )));
                }
            }
        }
        for (i, network) in self.networks.iter().enumerate() {
            if network.role_tags().is_empty() {
                return Err(BindError::InvalidDescription(format!(
                    "network {} declares no role",
                    network.id
                )));
            }
            if self.networks[i + 1..].iter().any(|n| n.id == network.id) {
                return Err(BindError::InvalidDescription(format!(
                    "network {} declared twice",
                    network.id
                )));
            }
        }
        Ok(())
    }
}
