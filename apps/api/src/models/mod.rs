pub mod features;
pub mod requirements;
pub mod result;
