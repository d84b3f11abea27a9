//! Feature extraction: raw document text → normalized signal groups.

pub mod contact;
pub mod decode;
pub mod degree;
pub mod experience;
pub mod features;
pub mod normalize;
pub mod sections;
pub mod summary;
