pub mod clock;
pub mod constants;
pub mod error;
pub mod pointer;
pub mod spectrum;
pub mod surface;
pub mod svg;
pub mod ticker;
pub mod tier;
pub mod viewport;
pub mod waves;

pub use clock::*;
pub use error::*;
pub use pointer::*;
pub use spectrum::*;
pub use surface::*;
pub use svg::*;
pub use ticker::*;
pub use tier::*;
pub use viewport::*;
pub use waves::*;
