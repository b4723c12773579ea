//! Domain records and the column names they map to

pub mod interaction;
pub mod multidata;

pub use interaction::Interaction;
pub use multidata::{Complex, IntoMultidataId, Multidata, MultidataId, Protein};
