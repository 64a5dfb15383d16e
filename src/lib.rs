pub mod analytics;
pub mod error;
pub mod flood;
pub mod location;
pub mod report;
pub mod scenario;
pub mod terrain;
pub mod union_find;

pub use analytics::{Extrema, RisingTides};
pub use error::TerrainError;
pub use flood::{flooded_regions_in, FloodMask};
pub use location::GridLocation;
pub use terrain::Terrain;
pub use union_find::WeightedQuickUnion;
