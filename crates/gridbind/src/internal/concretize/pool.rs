use crate::internal::common::Map;
use crate::internal::common::ids::{ClusterName, Hostname, SiteName, VlanId};
use crate::internal::resources::NetworkAllocation;

/// Owning cluster of a hostname: the prefix up to the last `-`.
/// A hostname without a dash is its own cluster.
pub(crate) fn cluster_of(hostname: &str) -> &str {
    hostname
        .rsplit_once('-')
        .map(|(cluster, _)| cluster)
        .unwrap_or(hostname)
}

/// Acquired hostnames, partitioned by cluster. Working copy of the caller's
/// flat list; each per-cluster pool is canonicalized by sorting so the claim
/// results cannot encode the order the list was supplied in.
pub(crate) struct NodePool {
    clusters: Map<ClusterName, Vec<Hostname>>,
}

impl NodePool {
    pub fn new<I>(hostnames: I) -> Self
    where
        I: IntoIterator<Item = Hostname>,
    {
        let mut clusters: Map<ClusterName, Vec<Hostname>> = Map::default();
        for hostname in hostnames {
            clusters
                .entry(cluster_of(&hostname).to_string())
                .or_default()
                .push(hostname);
        }
        for pool in clusters.values_mut() {
            pool.sort_unstable();
        }
        NodePool { clusters }
    }

    /// Remove and return up to `limit` hostnames of `cluster`.
    pub fn claim(&mut self, cluster: &str, limit: u32) -> Vec<Hostname> {
        match self.clusters.get_mut(cluster) {
            Some(pool) => {
                let count = (limit as usize).min(pool.len());
                pool.drain(..count).collect()
            }
            None => Vec::new(),
        }
    }
}

/// Acquired network allocations, partitioned by site and keyed by VLAN id.
/// Allocations are removed on claim; no allocation can serve two
/// descriptions.
pub(crate) struct NetworkPool {
    sites: Map<SiteName, SitePool>,
}

#[derive(Default)]
struct SitePool {
    production: Option<NetworkAllocation>,
    vlans: Map<VlanId, NetworkAllocation>,
}

impl NetworkPool {
    pub fn new<I>(allocations: I) -> Self
    where
        I: IntoIterator<Item = NetworkAllocation>,
    {
        let mut sites: Map<SiteName, SitePool> = Map::default();
        for allocation in allocations {
            let site = sites.entry(allocation.site.clone()).or_default();
            match allocation.vlan_id {
                Some(vlan_id) => {
                    site.vlans.insert(vlan_id, allocation);
                }
                None => site.production = Some(allocation),
            }
        }
        NetworkPool { sites }
    }

    pub fn claim_production(&mut self, site: &str) -> Option<NetworkAllocation> {
        self.sites.get_mut(site)?.production.take()
    }

    pub fn claim_vlan(&mut self, site: &str, vlan_id: VlanId) -> Option<NetworkAllocation> {
        self.sites.get_mut(site)?.vlans.remove(&vlan_id)
    }

    /// Lowest-numbered VLAN allocation still free at `site`; keeps the
    /// outcome of descriptions without a declared id deterministic.
    pub fn claim_lowest_vlan(&mut self, site: &str) -> Option<NetworkAllocation> {
        let pool = self.sites.get_mut(site)?;
        let vlan_id = *pool.vlans.keys().min()?;
        pool.vlans.remove(&vlan_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cluster_prefix() {
        assert_eq!(cluster_of("foocluster-1"), "foocluster");
        assert_eq!(cluster_of("grisou-12-b"), "grisou-12");
        assert_eq!(cluster_of("standalone"), "standalone");
    }

    #[test]
    fn test_claim_is_supply_order_independent() {
        let mut a = NodePool::new(["foo-2", "foo-1", "foo-3"].map(String::from));
        let mut b = NodePool::new(["foo-3", "foo-1", "foo-2"].map(String::from));
        assert_eq!(a.claim("foo", 2), b.claim("foo", 2));
        assert_eq!(a.claim("foo", 2), b.claim("foo", 2));
    }

    #[test]
    fn test_claim_caps_at_pool_size() {
        let mut pool = NodePool::new(["foo-1"].map(String::from));
        assert_eq!(pool.claim("foo", 3).len(), 1);
        assert!(pool.claim("foo", 1).is_empty());
        assert!(pool.claim("bar", 1).is_empty());
    }

    #[test]
    fn test_network_claims_consume() {
        let mut pool = NetworkPool::new([
            NetworkAllocation::production("rennes"),
            NetworkAllocation::vlan("rennes", 4),
            NetworkAllocation::vlan("rennes", 5),
        ]);
        assert!(pool.claim_vlan("rennes", 4.into()).is_some());
        assert!(pool.claim_vlan("rennes", 4.into()).is_none());
        assert_eq!(
            pool.claim_lowest_vlan("rennes"),
            Some(NetworkAllocation::vlan("rennes", 5))
        );
        assert!(pool.claim_production("rennes").is_some());
        assert!(pool.claim_production("rennes").is_none());
        assert!(pool.claim_production("nancy").is_none());
    }
}
