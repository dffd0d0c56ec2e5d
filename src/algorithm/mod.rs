/// Bounded memoization of transform applications
pub mod cache;
/// Independent chains generated in parallel
pub mod chains;
/// Chaos-game point generation
pub mod generator;
/// Transform roles, parameters and threshold selection
pub mod selection;
