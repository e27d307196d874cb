pub mod cartesian;

pub use cartesian::Cartesian3;
