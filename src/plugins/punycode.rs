use super::as_text;
use crate::error::Result;
use crate::plugin::Plugin;

pub struct PunycodeEncode;

impl Plugin for PunycodeEncode {
    fn name(&self) -> &str {
        "Punycode encode"
    }

    fn description(&self) -> &str {
        "Returns a punycode encoded string."
    }

    fn process(&self, data: &[u8], _options: &[String]) -> Result<Vec<u8>> {
        let domain = as_text(data)?;
        idna::domain_to_ascii(domain.trim())
            .map(String::into_bytes)
            .map_err(|_| "unable to punycode encode the input".into())
    }
}

pub struct PunycodeDecode;

impl Plugin for PunycodeDecode {
    fn name(&self) -> &str {
        "Punycode decode"
    }

    fn description(&self) -> &str {
        "Returns a punycode decoded string."
    }

    fn process(&self, data: &[u8], _options: &[String]) -> Result<Vec<u8>> {
        let domain = as_text(data)?;
        let (decoded, result) = idna::domain_to_unicode(domain.trim());
        result.map_err(|_| crate::error::Error::from("unable to punycode decode the input"))?;
        Ok(decoded.into_bytes())
    }
}
