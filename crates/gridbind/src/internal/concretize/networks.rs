use crate::internal::common::error::BindError;
use crate::internal::concretize::pool::NetworkPool;
use crate::internal::resources::{NetworkAllocation, NetworkKind, ResourceDocument};

/// Bind acquired network allocations to the document's network descriptions.
///
/// Production descriptions take their site's default entry; VLAN
/// descriptions take the allocation keyed by their declared id. VLAN
/// descriptions without a declared id are served last, in id order, with
/// the lowest still-free allocation of their site, so the outcome depends
/// neither on declaration order nor on pool order. Assignments are staged
/// and committed only on full success.
pub fn concretize_networks(
    document: &mut ResourceDocument,
    available_networks: &[NetworkAllocation],
) -> crate::Result<()> {
    let mut pool = NetworkPool::new(available_networks.iter().cloned());
    let mut assigned: Vec<Option<NetworkAllocation>> = vec![None; document.networks.len()];
    let mut deferred: Vec<usize> = Vec::new();

    for (idx, network) in document.networks.iter().enumerate() {
        let allocation = match (network.kind, network.vlan_id) {
            // A production network never carries a VLAN id, whatever the
            // pool record held.
            (NetworkKind::Prod, _) => pool
                .claim_production(&network.site)
                .map(|allocation| NetworkAllocation {
                    vlan_id: None,
                    ..allocation
                }),
            (NetworkKind::Vlan, Some(vlan_id)) => pool.claim_vlan(&network.site, vlan_id),
            (NetworkKind::Vlan, None) => {
                deferred.push(idx);
                continue;
            }
        };
        match allocation {
            Some(allocation) => assigned[idx] = Some(allocation),
            None => return Err(missing(document, idx)),
        }
    }

    deferred.sort_by(|a, b| document.networks[*a].id.cmp(&document.networks[*b].id));
    for idx in deferred {
        match pool.claim_lowest_vlan(&document.networks[idx].site) {
            Some(allocation) => assigned[idx] = Some(allocation),
            None => return Err(missing(document, idx)),
        }
    }

    for (network, allocation) in document.networks.iter_mut().zip(assigned) {
        log::debug!("network {} bound to {:?}", network.id, allocation);
        network.concrete = allocation;
    }
    Ok(())
}

fn missing(document: &ResourceDocument, idx: usize) -> BindError {
    let network = &document.networks[idx];
    BindError::MissingNetwork {
        id: network.id.clone(),
        site: network.site.clone(),
    }
}
