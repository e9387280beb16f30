pub mod category;
pub mod loadout;
pub mod run;
pub mod runner;

pub use category::{Category, CategoryClass, Goal};
pub use loadout::Loadout;
pub use run::Run;
pub use runner::Runner;
