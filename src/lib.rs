mod error;
mod experiment;
mod rng;
mod round;
mod settings;

pub use error::*;
pub use experiment::*;
pub use rng::*;
pub use round::*;
pub use settings::*;
