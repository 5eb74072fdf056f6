//! Built-in plugins for the babbage pipeline
//!
//! Every plugin is a stateless transform implementing [`crate::plugin::Plugin`].
//! The registration order below is the canonical listing order seen by both
//! the command line and the web frontend.

mod base64;
mod css;
mod fromcharcode;
mod hex2ascii;
mod json;
mod punycode;
mod replace;
mod rot13;
mod strrev;
mod url;
mod xor;

pub use self::base64::{Base64Decode, Base64Encode, UrlSafeBase64Decode, UrlSafeBase64Encode};
pub use self::css::FriendlyCss;
pub use self::fromcharcode::FromCharCode;
pub use self::hex2ascii::Hex2Ascii;
pub use self::json::JsonPrettyPrint;
pub use self::punycode::{PunycodeDecode, PunycodeEncode};
pub use self::replace::Replace;
pub use self::rot13::{Rot13Decode, Rot13Encode};
pub use self::strrev::StrRev;
pub use self::url::{UrlDecode, UrlEncode};
pub use self::xor::{IncrementalXor, Xor};

use crate::registry::PluginRegistry;

/// Registers all built-in plugins in their canonical order.
pub fn register_all(registry: &mut PluginRegistry) {
    registry.register(Base64Decode);
    registry.register(Base64Encode);
    registry.register(UrlSafeBase64Decode);
    registry.register(UrlSafeBase64Encode);
    registry.register(Hex2Ascii);
    registry.register(UrlEncode);
    registry.register(UrlDecode);
    registry.register(FromCharCode::new());
    registry.register(PunycodeEncode);
    registry.register(PunycodeDecode);
    registry.register(Replace);
    registry.register(Rot13Decode);
    registry.register(Rot13Encode);
    registry.register(StrRev);
    registry.register(Xor);
    registry.register(IncrementalXor);
    registry.register(FriendlyCss::new());
    registry.register(JsonPrettyPrint);
}

/// Decodes plugin input that must be text, mapping invalid UTF-8 to a
/// plugin-level error.
pub(crate) fn as_text(data: &[u8]) -> crate::error::Result<&str> {
    std::str::from_utf8(data).map_err(|_| "input is not valid UTF-8 text".into())
}
