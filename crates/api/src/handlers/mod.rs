pub mod exoplanets;
