use crate::internal::common::Set;
use crate::internal::common::error::BindError;
use crate::internal::common::ids::Hostname;
use crate::internal::concretize::pool::NodePool;
use crate::internal::resources::ResourceDocument;

/// Bind acquired hostnames to the document's machine descriptions.
///
/// Descriptions with a declared minimum claim their nodes first, so they win
/// clusters contested with best-effort descriptions. Every description draws
/// up to its requested count; falling short of the floor (the minimum, or
/// the full count when no minimum is declared) fails the whole call.
/// Assignments are staged and written into the document only when every
/// description met its floor.
pub fn concretize_nodes(
    document: &mut ResourceDocument,
    available_nodes: &[Hostname],
) -> crate::Result<()> {
    let mut pool = NodePool::new(available_nodes.iter().cloned());
    let mut assigned: Vec<Option<Set<Hostname>>> = vec![None; document.machines.len()];

    for with_min in [true, false] {
        for (idx, machine) in document.machines.iter().enumerate() {
            if machine.min.is_some() != with_min {
                continue;
            }
            let hosts = pool.claim(&machine.cluster, machine.nodes);
            log::debug!(
                "role {}: {}/{} node(s) claimed on cluster {}",
                machine.label(),
                hosts.len(),
                machine.nodes,
                machine.cluster
            );
            if (hosts.len() as u32) < machine.floor() {
                return Err(BindError::NotEnoughNodes {
                    role: machine.label().to_string(),
                    cluster: machine.cluster.clone(),
                    required: machine.floor(),
                    assigned: hosts.len() as u32,
                });
            }
            assigned[idx] = Some(hosts.into_iter().collect());
        }
    }

    for (machine, hosts) in document.machines.iter_mut().zip(assigned) {
        machine.concrete_nodes = hosts;
    }
    Ok(())
}
