mod assignment;
mod clause;
mod decision;
mod decision_error;
mod instance;
mod literal;
pub(crate) mod random;

pub use assignment::*;
pub use clause::*;
pub use decision::*;
pub use decision_error::*;
pub use instance::*;
pub use literal::*;
pub use random::Random;
