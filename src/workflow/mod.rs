pub mod solve_session;

pub use solve_session::{SolvePhase, SolveSession};
