pub mod runners;
pub mod runs;

pub use runners::RunnerRepository;
pub use runs::RunRepository;
