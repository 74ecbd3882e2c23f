use std::path::Path;

use anyhow::Context;
use encoding_rs::{Encoding, UTF_8};

fn is_url(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// Reads schema text from a file or an http(s) URL. The bytes are decoded as UTF-8 unless a BOM
/// says otherwise.
pub fn read_schema(source: &str) -> anyhow::Result<String> {
    let buf = if is_url(source) {
        fetch(source)?
    } else {
        std::fs::read(Path::new(source))
            .with_context(|| format!("failed to read schema {source}"))?
    };
    Ok(decode(&buf))
}

fn fetch(url: &str) -> anyhow::Result<Vec<u8>> {
    tracing::debug!(url, "fetching schema");
    let response = reqwest::blocking::get(url)
        .and_then(|response| response.error_for_status())
        .with_context(|| format!("failed to fetch schema {url}"))?;
    let bytes = response
        .bytes()
        .with_context(|| format!("failed to read schema body from {url}"))?;
    Ok(bytes.to_vec())
}

fn decode(buf: &[u8]) -> String {
    let (decoded, encoding, had_errors) = Encoding::decode(UTF_8, buf);
    if had_errors {
        tracing::warn!(encoding = encoding.name(), "schema contains malformed byte sequences");
    }
    decoded.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls() {
        assert!(is_url("https://capec.mitre.org/data/xsd/ap_schema_latest.xsd"));
        assert!(is_url("http://localhost/cwe.xsd"));
        assert!(!is_url("schemas/cwe_schema_latest.xsd.xml"));
    }

    #[test]
    fn bom_is_stripped() {
        assert_eq!(decode(b"\xEF\xBB\xBF<xs:schema/>"), "<xs:schema/>");
        assert_eq!(decode(b"\xFF\xFE<\x00a\x00/\x00>\x00"), "<a/>");
    }

    #[test]
    fn reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schema.xsd");
        std::fs::write(&path, "<xs:schema/>").unwrap();
        assert_eq!(read_schema(path.to_str().unwrap()).unwrap(), "<xs:schema/>");
        assert!(read_schema(dir.path().join("absent.xsd").to_str().unwrap()).is_err());
    }
}
