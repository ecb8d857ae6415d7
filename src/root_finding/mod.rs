// common helpers 
pub mod algorithms; 
pub mod report; 
pub mod errors; 
pub mod interval; 
pub mod traits; 
pub mod config;
pub(crate) mod signs; 
pub(crate) mod tolerances; 

// algorithms 
pub mod bisection;

pub use traits::RootFinder;
