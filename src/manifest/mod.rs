// SPDX-License-Identifier: MPL-2.0
//! Collection manifest loading.
//!
//! A manifest is an XML document whose root element (any name) holds a
//! `title` child and one child per entry:
//!
//! ```xml
//! <collection>
//!   <title>Summer 1987</title>
//!   <picture>
//!     <image>scans/001.jpg</image>
//!     <caption>Harbour at dawn</caption>
//!     <date>July 1987</date>
//!     <location>Brest</location>
//!     <asa>400</asa>
//!     <roll_num>3</roll_num>
//!     <roll_max>24</roll_max>
//!   </picture>
//! </collection>
//! ```
//!
//! Video manifests use `<video>` entries with a `<source>` path and the
//! `caption`, `date` and `location` fields. Entries of the other kind and
//! unknown elements are skipped. Relative asset paths are resolved against
//! the manifest's directory.

use crate::domain::collection::{Collection, ImageRecord, MediaRecord, VideoRecord};
use crate::domain::media::MediaKind;
use crate::error::ManifestError;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::fs;
use std::path::{Path, PathBuf};

/// Parsed manifest content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    /// Collection title, `None` when the manifest has none or it is blank.
    pub title: Option<String>,
    /// Entries of the requested kind, in document order.
    pub records: Vec<MediaRecord>,
}

impl Manifest {
    /// Builds a collection, falling back to the kind's default title.
    #[must_use]
    pub fn into_collection(self, kind: MediaKind) -> Collection {
        let title = self
            .title
            .unwrap_or_else(|| kind.default_title().to_owned());
        Collection::new(title, self.records)
    }
}

/// Reads and parses the manifest at `path`.
///
/// # Errors
///
/// Returns [`ManifestError::Io`] if the file cannot be read, or any parse
/// error from [`parse_manifest`].
pub fn load_manifest(path: &Path, kind: MediaKind) -> Result<Manifest, ManifestError> {
    let xml = fs::read_to_string(path).map_err(|e| ManifestError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
    parse_manifest(&xml, base_dir, kind)
}

/// Opens the manifest at `path` as a fresh collection.
///
/// # Errors
///
/// Same as [`load_manifest`].
pub fn open_collection(path: &Path, kind: MediaKind) -> Result<Collection, ManifestError> {
    match load_manifest(path, kind) {
        Ok(manifest) => {
            let collection = manifest.into_collection(kind);
            log::info!(
                "Loaded {} {} entries from {}",
                collection.len(),
                kind.entry_element(),
                path.display()
            );
            Ok(collection)
        }
        Err(err) => {
            log::warn!("Failed to read collection {}: {err}", path.display());
            Err(err)
        }
    }
}

/// Opens the manifest at `path`, returning an empty collection on failure.
///
/// The error is handed back so the caller can tell the user.
#[must_use]
pub fn load_or_empty(path: &Path, kind: MediaKind) -> (Collection, Option<ManifestError>) {
    match open_collection(path, kind) {
        Ok(collection) => (collection, None),
        Err(err) => (Collection::empty(kind.default_title()), Some(err)),
    }
}

/// Parses manifest XML.
///
/// Relative asset paths are joined to `base_dir`; absolute paths are kept.
///
/// # Errors
///
/// - [`ManifestError::Malformed`] on XML syntax errors, a missing root
///   element or a truncated document
/// - [`ManifestError::MissingField`] when an entry lacks its path or caption
/// - [`ManifestError::InvalidField`] when `roll_num` or `roll_max` is not an
///   unsigned integer
pub fn parse_manifest(
    xml: &str,
    base_dir: &Path,
    kind: MediaKind,
) -> Result<Manifest, ManifestError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut parser = Parser::new(base_dir, kind);

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                parser.open(&element_name(e))?;
            }
            Ok(Event::Empty(ref e)) => {
                parser.open(&element_name(e))?;
                parser.close()?;
            }
            Ok(Event::Text(ref e)) => {
                let text = e.unescape().map_err(malformed)?;
                parser.text(&text);
            }
            Ok(Event::CData(ref e)) => {
                let text = e.decode().map_err(malformed)?;
                parser.text(&text);
            }
            Ok(Event::End(_)) => parser.close()?,
            Ok(Event::Eof) => break,
            Err(e) => return Err(malformed(e)),
            _ => {}
        }
    }

    parser.finish()
}

fn element_name(e: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(e.local_name().as_ref()).into_owned()
}

fn malformed(err: impl std::fmt::Display) -> ManifestError {
    ManifestError::Malformed(err.to_string())
}

// =============================================================================
// Parser state
// =============================================================================

/// Where captured text goes when its element closes.
enum Target {
    Title,
    Field(String),
}

struct Capture {
    target: Target,
    /// Depth of the element's content.
    depth: usize,
    text: String,
}

/// Fields of the entry being read, first occurrence wins.
#[derive(Default)]
struct EntryFields {
    fields: Vec<(String, String)>,
}

impl EntryFields {
    fn insert(&mut self, name: String, value: String) {
        if !self.fields.iter().any(|(existing, _)| *existing == name) {
            self.fields.push((name, value));
        }
    }

    fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value.as_str())
    }

    fn optional(&self, name: &str) -> Option<String> {
        self.get(name).map(str::to_owned)
    }
}

struct Parser<'a> {
    base_dir: &'a Path,
    kind: MediaKind,
    depth: usize,
    seen_root: bool,
    title: Option<String>,
    entry: Option<EntryFields>,
    entry_count: usize,
    capture: Option<Capture>,
    records: Vec<MediaRecord>,
}

impl<'a> Parser<'a> {
    fn new(base_dir: &'a Path, kind: MediaKind) -> Self {
        Self {
            base_dir,
            kind,
            depth: 0,
            seen_root: false,
            title: None,
            entry: None,
            entry_count: 0,
            capture: None,
            records: Vec::new(),
        }
    }

    fn open(&mut self, name: &str) -> Result<(), ManifestError> {
        match self.depth {
            0 => {
                if self.seen_root {
                    return Err(ManifestError::Malformed(format!(
                        "unexpected second root element <{name}>"
                    )));
                }
                self.seen_root = true;
            }
            1 => {
                if name == "title" && self.title.is_none() {
                    self.start_capture(Target::Title);
                } else if name == self.kind.entry_element() {
                    self.entry = Some(EntryFields::default());
                    self.entry_count += 1;
                }
            }
            2 if self.entry.is_some() => self.start_capture(Target::Field(name.to_owned())),
            _ => {}
        }
        self.depth += 1;
        Ok(())
    }

    fn start_capture(&mut self, target: Target) {
        self.capture = Some(Capture {
            target,
            depth: self.depth + 1,
            text: String::new(),
        });
    }

    fn text(&mut self, text: &str) {
        if let Some(capture) = self.capture.as_mut() {
            if capture.depth == self.depth {
                capture.text.push_str(text);
            }
        }
    }

    fn close(&mut self) -> Result<(), ManifestError> {
        let depth = self.depth;
        if let Some(capture) = self.capture.take_if(|c| c.depth == depth) {
            let value = capture.text.trim().to_owned();
            match capture.target {
                Target::Title => self.title = Some(value).filter(|t| !t.is_empty()),
                Target::Field(name) => {
                    if let Some(entry) = self.entry.as_mut() {
                        entry.insert(name, value);
                    }
                }
            }
        }

        self.depth = self.depth.saturating_sub(1);

        if self.depth == 1 {
            if let Some(fields) = self.entry.take() {
                let record = self.build_record(&fields)?;
                self.records.push(record);
            }
        }
        Ok(())
    }

    fn finish(self) -> Result<Manifest, ManifestError> {
        if !self.seen_root {
            return Err(ManifestError::Malformed("missing root element".into()));
        }
        if self.depth > 0 {
            return Err(ManifestError::Malformed("unexpected end of document".into()));
        }
        Ok(Manifest {
            title: self.title,
            records: self.records,
        })
    }

    fn build_record(&self, fields: &EntryFields) -> Result<MediaRecord, ManifestError> {
        let entry = self.entry_count;
        let path_field = self.kind.path_element();

        let path = fields
            .get(path_field)
            .filter(|p| !p.is_empty())
            .ok_or(ManifestError::MissingField {
                entry,
                field: path_field,
            })?;
        let path = self.resolve(path);
        let caption = fields
            .optional("caption")
            .ok_or(ManifestError::MissingField {
                entry,
                field: "caption",
            })?;

        let record = match self.kind {
            MediaKind::Image => MediaRecord::Image(ImageRecord {
                path,
                caption,
                date: fields.optional("date"),
                location: fields.optional("location"),
                sensitivity: fields.optional("asa"),
                sequence_index: parse_count(fields, entry, "roll_num")?,
                sequence_total: parse_count(fields, entry, "roll_max")?,
            }),
            MediaKind::Video => MediaRecord::Video(VideoRecord {
                path,
                caption,
                date: fields.optional("date"),
                location: fields.optional("location"),
            }),
        };
        Ok(record)
    }

    fn resolve(&self, path: &str) -> PathBuf {
        let path = Path::new(path);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }
}

/// Parses a roll counter. Blank values count as absent.
fn parse_count(
    fields: &EntryFields,
    entry: usize,
    field: &'static str,
) -> Result<Option<u32>, ManifestError> {
    match fields.get(field) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse::<u32>()
            .map(Some)
            .map_err(|_| ManifestError::InvalidField {
                entry,
                field,
                value: value.to_owned(),
            }),
    }
}
