pub mod gene;
pub mod position;
pub mod region;
pub mod score_table;
pub mod span;

// re-export for cleaner imports
pub use self::gene::GeneFile;
pub use self::position::{Flag, PositionRecord};
pub use self::region::Region;
pub use self::score_table::ScoreTable;
pub use self::span::CodonSpan;
