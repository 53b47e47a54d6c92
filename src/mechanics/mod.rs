pub mod kinematics;
pub mod mask;
pub mod scroll;
pub mod stoch;

pub use kinematics::*;
pub use mask::*;
pub use scroll::*;
pub use stoch::*;
