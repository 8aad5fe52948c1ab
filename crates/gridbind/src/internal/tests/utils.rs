use crate::internal::common::ids::{Hostname, NetworkId, VlanId};
use crate::internal::resources::{
    MachineDescription, NetworkDescription, NetworkKind, ResourceDocument,
};

pub use MachineDescriptionBuilder as MachineBuilder;
pub use NetworkDescriptionBuilder as NetBuilder;

#[derive(Default, Clone)]
pub struct MachineDescriptionBuilder {
    roles: Vec<String>,
    cluster: String,
    nodes: Option<u32>,
    min: Option<u32>,
    primary_network: Option<NetworkId>,
    secondary_networks: Vec<NetworkId>,
}

impl MachineDescriptionBuilder {
    pub fn role(mut self, role: &str) -> Self {
        self.roles.push(role.to_string());
        self
    }

    pub fn nodes(mut self, nodes: u32) -> Self {
        self.nodes = Some(nodes);
        self
    }

    pub fn min(mut self, min: u32) -> Self {
        self.min = Some(min);
        self
    }

    pub fn primary(mut self, id: &str) -> Self {
        self.primary_network = Some(id.into());
        self
    }

    pub fn secondary(mut self, id: &str) -> Self {
        self.secondary_networks.push(id.into());
        self
    }

    pub fn finish(self) -> MachineDescription {
        MachineDescription {
            role: None,
            roles: self.roles,
            cluster: self.cluster,
            nodes: self.nodes.unwrap_or(1),
            min: self.min,
            primary_network: self.primary_network,
            secondary_networks: self.secondary_networks,
            concrete_nodes: None,
            nics: None,
        }
    }
}

pub fn machine(role: &str, cluster: &str) -> MachineBuilder {
    MachineBuilder {
        cluster: cluster.to_string(),
        ..Default::default()
    }
    .role(role)
}

#[derive(Clone)]
pub struct NetworkDescriptionBuilder {
    id: NetworkId,
    roles: Vec<String>,
    site: String,
    kind: NetworkKind,
    vlan_id: Option<VlanId>,
}

impl NetworkDescriptionBuilder {
    pub fn role(mut self, role: &str) -> Self {
        self.roles.push(role.to_string());
        self
    }

    pub fn vlan_id(mut self, vlan_id: u16) -> Self {
        self.vlan_id = Some(vlan_id.into());
        self
    }

    pub fn finish(self) -> NetworkDescription {
        NetworkDescription {
            id: self.id,
            role: None,
            roles: self.roles,
            site: self.site,
            kind: self.kind,
            vlan_id: self.vlan_id,
            concrete: None,
        }
    }
}

fn net(id: &str, site: &str, kind: NetworkKind) -> NetBuilder {
    NetBuilder {
        id: id.into(),
        roles: Vec::new(),
        site: site.to_string(),
        kind,
        vlan_id: None,
    }
}

pub fn vlan_net(id: &str, site: &str) -> NetBuilder {
    net(id, site, NetworkKind::Vlan)
}

pub fn prod_net(id: &str, site: &str) -> NetBuilder {
    net(id, site, NetworkKind::Prod)
}

pub fn doc(
    machines: Vec<MachineDescription>,
    networks: Vec<NetworkDescription>,
) -> ResourceDocument {
    ResourceDocument { machines, networks }
}

pub fn hosts(names: &[&str]) -> Vec<Hostname> {
    names.iter().map(|n| n.to_string()).collect()
}

pub fn sorted_vec<T: Ord>(mut vec: Vec<T>) -> Vec<T> {
    vec.sort();
    vec
}
