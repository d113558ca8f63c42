//! Ready-made unit catalogues. Both share the SI base unit tags, so their
//! quantities can be mixed and converted freely

pub mod cgs;
pub mod si;
