pub mod networks;
pub mod nics;
pub mod nodes;
pub(crate) mod pool;

pub use networks::concretize_networks;
pub use nics::{ClusterInterface, InterfaceInventory, StaticInventory, mount_nics};
pub use nodes::concretize_nodes;

use crate::internal::common::ids::Hostname;
use crate::internal::resources::{NetworkAllocation, ResourceDocument};

/// Bind a validated resource document to the acquired pools, in a fixed
/// order: nodes, then networks, then interfaces. On error the document must
/// be discarded by the caller; phases committed before the failure are not
/// rolled back.
pub fn concretize(
    document: &mut ResourceDocument,
    available_nodes: &[Hostname],
    available_networks: &[NetworkAllocation],
    inventory: &dyn InterfaceInventory,
) -> crate::Result<()> {
    document.validate()?;
    log::debug!(
        "concretizing {} machine(s) against {} acquired node(s)",
        document.machines.len(),
        available_nodes.len()
    );
    concretize_nodes(document, available_nodes)?;
    log::debug!(
        "concretizing {} network(s) against {} acquired allocation(s)",
        document.networks.len(),
        available_networks.len()
    );
    concretize_networks(document, available_networks)?;
    mount_nics(document, inventory)?;
    Ok(())
}
