/// Lowest zoom level; the image is fitted to the viewport at this scale.
pub const MIN_ZOOM: f32 = 1.0;

/// Highest zoom level reachable from the wheel or the zoom buttons.
pub const MAX_ZOOM: f32 = 5.0;

/// Increment applied per wheel tick or zoom button press.
pub const ZOOM_STEP: f32 = 0.5;

/// Fraction of the viewport an unzoomed image may occupy on each axis.
pub const FIT_FRACTION: f32 = 0.9;

/// Messaging number used when neither config nor environment provide one.
pub const DEFAULT_WHATSAPP_NUMBER: &str = "919876543210";

/// Environment variable overriding the messaging number.
pub const WHATSAPP_NUMBER_ENV: &str = "GRANITE_WHATSAPP_NUMBER";

/// Base URL of the chat deep link.
pub const WHATSAPP_BASE_URL: &str = "https://wa.me";

/// Prefix of generated material ids (`mat-0001`, `mat-0002`, ...).
pub const MATERIAL_ID_PREFIX: &str = "mat";

/// Prefix of generated buy request ids.
pub const BUY_REQUEST_ID_PREFIX: &str = "req";
