/// Catalog identifiers are opaque strings (UUID v4 text form when generated).
pub type PlanetId = String;
