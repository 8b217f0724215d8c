pub mod aggregate;

pub use aggregate::Site;
