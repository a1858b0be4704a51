pub mod config;
pub mod eval;
pub mod planner;
pub mod random;
pub mod weighted;

pub use config::PlannerConfig;
pub use planner::{select_move, Plan, Planner, PlannerAI};
pub use random::RandomAI;
pub use weighted::WeightedRandomAI;
