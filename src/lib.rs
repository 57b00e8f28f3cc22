pub mod alphabet;
pub mod api;
pub mod config;
pub mod consts;
pub mod corpus;
pub mod error;
pub mod geometry;
pub mod model;
pub mod predictor;
pub mod util;
pub mod verifier;
// cmd and reports belong to the binary.
