pub mod startup;

pub use startup::StartupContext;
