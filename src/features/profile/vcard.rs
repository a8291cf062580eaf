//! vCard 3.0 serialization for the owner's contact card.

use base64::{engine::general_purpose::STANDARD, Engine};

use crate::features::profile::models::ContactCard;

/// Embedded card photo
#[derive(Debug, Clone)]
pub struct Photo {
    pub image_type: &'static str,
    pub bytes: Vec<u8>,
}

impl Photo {
    /// JPEG unless the path ends in `.png`
    pub fn from_path(path: &str, bytes: Vec<u8>) -> Self {
        let image_type = if path.to_ascii_lowercase().ends_with(".png") {
            "PNG"
        } else {
            "JPEG"
        };
        Self { image_type, bytes }
    }
}

/// Escape a text value (RFC 6350 section 3.4)
pub fn escape_text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            ',' => out.push_str("\\,"),
            ';' => out.push_str("\\;"),
            '\n' => out.push_str("\\n"),
            '\r' => {}
            _ => out.push(c),
        }
    }
    out
}

/// Longest physical line, in octets, before folding (RFC 2426 section 2.6)
const MAX_LINE_OCTETS: usize = 75;

/// Fold a content line into CRLF + space continuations of at most
/// `MAX_LINE_OCTETS` octets each, never splitting a UTF-8 sequence.
pub fn fold_line(line: &str) -> String {
    let mut out = String::with_capacity(line.len() + line.len() / MAX_LINE_OCTETS * 3);
    // Continuation lines spend one octet on the leading space
    let mut budget = MAX_LINE_OCTETS;
    let mut used = 0;

    for c in line.chars() {
        let len = c.len_utf8();
        if used + len > budget {
            out.push_str("\r\n ");
            budget = MAX_LINE_OCTETS - 1;
            used = 0;
        }
        out.push(c);
        used += len;
    }
    out
}

/// Build the card. Lines are CRLF terminated and folded.
pub fn build_vcard(card: &ContactCard, photo: Option<&Photo>) -> String {
    let mut lines = vec!["BEGIN:VCARD".to_string(), "VERSION:3.0".to_string()];

    let full_name = escape_text(card.full_name.trim());
    lines.push(format!("FN:{}", full_name));
    // N is mandatory in 3.0
    lines.push(format!("N:{};;;;", full_name));

    let optional = [
        ("ORG", &card.organization),
        ("TITLE", &card.title),
        ("EMAIL", &card.email),
        ("TEL", &card.phone),
        ("URL", &card.website),
        ("NOTE", &card.note),
    ];
    for (property, value) in optional {
        if let Some(value) = value.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
            lines.push(format!("{}:{}", property, escape_text(value)));
        }
    }

    if let Some(photo) = photo {
        lines.push(format!(
            "PHOTO;ENCODING=b;TYPE={}:{}",
            photo.image_type,
            STANDARD.encode(&photo.bytes)
        ));
    }

    lines.push("END:VCARD".to_string());

    lines
        .iter()
        .map(|line| fold_line(line) + "\r\n")
        .collect()
}
