use base64ct::{Base64, Encoding};

/// Username/password pair carried by a `Basic` Authorization header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub name: String,
    pub pass: String,
}

impl Credentials {
    /// Parses `Basic <base64(name:pass)>`. The scheme is matched case-insensitively.
    pub fn from_header(value: &str) -> Option<Self> {
        let (scheme, encoded) = value.trim().split_once(' ')?;
        if !scheme.eq_ignore_ascii_case("basic") {
            return None;
        }
        let decoded = Base64::decode_vec(encoded.trim()).ok()?;
        let decoded = String::from_utf8(decoded).ok()?;
        // passwords may contain ':', usernames may not
        let (name, pass) = decoded.split_once(':')?;
        if name.is_empty() {
            return None;
        }
        Some(Self {
            name: name.to_string(),
            pass: pass.to_string(),
        })
    }

    pub fn to_header(&self) -> String {
        let raw = format!("{}:{}", self.name, self.pass);
        format!("Basic {}", Base64::encode_string(raw.as_bytes()))
    }
}
