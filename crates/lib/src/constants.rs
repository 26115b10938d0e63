//! # Shared Constants
//!
//! Protocol identifiers, reference schemes and URL markers recognised while
//! normalizing catalog records. Keeping them here avoids "magic strings" spread
//! across the dialect and normalizer modules.

/// Geonetwork protocol / GeoServer scheme for a WMS 1.1.1 GetMap endpoint.
pub const WMS_GET_MAP_PROTOCOL: &str = "OGC:WMS-1.1.1-http-get-map";

/// Generic WMS scheme published by some GeoServer catalogs.
pub const WMS_SCHEME: &str = "OGC:WMS";

/// All reference schemes accepted as a WMS GetMap endpoint.
pub const WMS_SCHEMES: [&str; 2] = [WMS_GET_MAP_PROTOCOL, WMS_SCHEME];

/// The `name` a Geonetwork `URI` entry carries when it points at a thumbnail.
pub const THUMBNAIL_NAME: &str = "thumbnail";

/// GeoServer scheme for a thumbnail image link.
pub const THUMBNAIL_LINK_SCHEME: &str = "WWW:LINK-1.0-http--image-thumbnail";

/// All reference schemes accepted as a thumbnail.
pub const THUMBNAIL_SCHEMES: [&str; 2] = [THUMBNAIL_LINK_SCHEME, THUMBNAIL_NAME];

/// Substring identifying a GetCapabilities reference scheme.
pub const GET_CAPABILITIES_MARKER: &str = "http-get-capabilities";

/// A reference URL starting with this prefix is treated as absolute.
pub const ABSOLUTE_URL_PREFIX: &str = "http";

/// WMS query parameter holding the layer name(s).
pub const WMS_LAYERS_PARAM: &str = "layers";
