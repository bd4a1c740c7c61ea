/// Grid-wide collapse loop with lowest-entropy selection
pub mod collapse;
/// Start-to-home reachability check and pruning
pub mod connectivity;
/// Generation driver with retry on unreachable home
pub mod executor;
/// Edge propagation between neighboring cells
pub mod propagation;
/// Injected random decisions
pub mod random;
