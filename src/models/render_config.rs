//! Static per-document rendering configuration

use serde::{Deserialize, Serialize};
use std::fmt;

/// One table column: the header label and the channel field it shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub header: &'static str,
    pub field: &'static str,
}

/// How one catalog document is produced
///
/// Headers and fields are paired per column so their order cannot drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    /// Data file name inside the data directory
    pub data: &'static str,
    /// Output file name relative to the catalog root
    pub output: &'static str,
    pub title: &'static str,
    pub columns: &'static [Column],
}

const fn column(header: &'static str, field: &'static str) -> Column {
    Column { header, field }
}

pub const TELEVISION: RenderConfig = RenderConfig {
    data: "television.yml",
    output: "TELEVISION.md",
    title: "Canales de Televisión",
    columns: &[
        column("Canal", "name"),
        column("M3U8", "m3u8"),
        column("Web", "web"),
        column("Logo", "logo"),
        column("EPG ID", "epg_id"),
        column("Info", "info"),
    ],
};

pub const RADIO: RenderConfig = RenderConfig {
    data: "radio.yml",
    output: "RADIO.md",
    title: "Emisoras de Radio",
    columns: &[
        column("Emisoras", "name"),
        column("Stream", "stream"),
        column("Web", "web"),
        column("Logo", "logo"),
        column("Info", "info"),
    ],
};

/// The catalog documents this tool knows how to build
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Television,
    Radio,
}

impl DocumentKind {
    /// Generation order
    pub const ALL: [DocumentKind; 2] = [DocumentKind::Television, DocumentKind::Radio];

    pub fn render_config(self) -> &'static RenderConfig {
        match self {
            DocumentKind::Television => &TELEVISION,
            DocumentKind::Radio => &RADIO,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DocumentKind::Television => "television",
            DocumentKind::Radio => "radio",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl RenderConfig {
    pub fn headers(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.columns.iter().map(|c| c.header)
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.columns.iter().map(|c| c.field)
    }
}
