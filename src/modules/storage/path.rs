//! Deterministic object path construction.
//!
//! Paths follow the app's layout: `{owner}/{resource}/...` with a fixed
//! `.jpeg` extension. When no file name is given, one is synthesized from the
//! current time in UTC+9 so repeated uploads get distinct names.

use std::sync::LazyLock;

use chrono::FixedOffset;

use crate::core::clock::{Clock, SystemClock};

/// File extension appended to every generated object name.
const JPEG_EXT: &str = ".jpeg";

/// Offset used when rendering synthesized file names (UTC+9).
static NAME_OFFSET: LazyLock<FixedOffset> =
    LazyLock::new(|| FixedOffset::east_opt(9 * 3600).expect("UTC+9 is a valid offset"));

/// Resolved storage path identifying one object.
///
/// Immutable value derived deterministically from its inputs; lives for the
/// duration of one operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageLocation(String);

impl StorageLocation {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for StorageLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which part of an owner's records an object belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Category {
    /// A certificate scan, filed under a named folder.
    Certificate {
        folder_name: String,
        file_name: String,
    },
    /// The record's primary image. Without a file name, one is synthesized
    /// from the clock.
    Primary { file_name: Option<String> },
}

/// Logical identity of an object before path resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathKey {
    pub owner_id: String,
    pub resource_id: String,
    pub category: Category,
}

impl PathKey {
    /// Resolve to a storage path using the system clock.
    pub fn resolve(&self) -> StorageLocation {
        self.resolve_with(&SystemClock)
    }

    /// Resolve to a storage path with an injected clock.
    pub fn resolve_with(&self, clock: &dyn Clock) -> StorageLocation {
        match &self.category {
            Category::Certificate {
                folder_name,
                file_name,
            } => certificate_path(&self.owner_id, &self.resource_id, folder_name, file_name),
            Category::Primary { file_name } => {
                resource_path_with(clock, &self.owner_id, &self.resource_id, file_name.as_deref())
            }
        }
    }
}

/// Path for a certificate scan:
/// `{owner}/{resource}/certificates/{folder}/{file}.jpeg`.
pub fn certificate_path(
    owner_id: &str,
    resource_id: &str,
    folder_name: &str,
    file_name: &str,
) -> StorageLocation {
    StorageLocation(format!(
        "{}/{}/certificates/{}/{}{}",
        owner_id, resource_id, folder_name, file_name, JPEG_EXT
    ))
}

/// Path for a record's primary image: `{owner}/{resource}/{name}.jpeg`, with
/// the name synthesized from the current time when not given.
pub fn resource_path(
    owner_id: &str,
    resource_id: &str,
    file_name: Option<&str>,
) -> StorageLocation {
    resource_path_with(&SystemClock, owner_id, resource_id, file_name)
}

/// Clock-injectable variant of [`resource_path`].
pub fn resource_path_with(
    clock: &dyn Clock,
    owner_id: &str,
    resource_id: &str,
    file_name: Option<&str>,
) -> StorageLocation {
    let name = match file_name {
        Some(name) => format!("{}{}", name, JPEG_EXT),
        None => format!("{}{}", timestamp_name(clock), JPEG_EXT),
    };
    StorageLocation(format!("{}/{}/{}", owner_id, resource_id, name))
}

/// Passthrough for callers that already hold a full relative path.
pub fn raw_path(path: &str) -> StorageLocation {
    StorageLocation(path.to_string())
}

/// ISO-8601 date+time in UTC+9, colon-separated time fields, second
/// precision. Filename parsing elsewhere relies on this exact shape.
fn timestamp_name(clock: &dyn Clock) -> String {
    clock
        .now()
        .with_timezone(&*NAME_OFFSET)
        .format("%Y-%m-%dT%H:%M:%S")
        .to_string()
}
