pub mod crop;
pub mod interval;
pub mod query;
pub mod recommendation;
pub mod zone;

pub use crop::Crop;
pub use interval::Interval;
pub use query::{
    parse_optional_number, Coordinate, CoordinateAxis, NumericInput, PartialSoilReading,
    RecommendationQuery, SoilField, SoilInput, SoilReading, ZoneInput,
};
pub use recommendation::{
    FallbackPolicy, Recommendation, RecommendationExplanation, RecommendationMode,
};
pub use zone::Zone;
