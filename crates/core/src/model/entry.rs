use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::EntryId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EntryError {
    #[error("rotation must be between -15 and 15 degrees, got {degrees}")]
    RotationOutOfRange { degrees: i32 },

    #[error("captions are only supported on media entries")]
    CaptionOnNote,
}

//
// ─── ENTRY TYPES ───────────────────────────────────────────────────────────────
//

/// Kind of content pinned to a day board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryKind {
    Note,
    Image,
    AnimatedImage,
    Video,
}

impl EntryKind {
    /// Returns true for kinds whose content is an embeddable media
    /// representation rather than inline text.
    #[must_use]
    pub fn is_media(&self) -> bool {
        !matches!(self, EntryKind::Note)
    }
}

/// Cosmetic tilt applied to a pinned entry, in whole degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rotation(i8);

impl Rotation {
    pub const MIN: i8 = -15;
    pub const MAX: i8 = 15;

    /// Creates a rotation from whole degrees.
    ///
    /// # Errors
    ///
    /// Returns `EntryError::RotationOutOfRange` if `degrees` is outside
    /// [-15, 15].
    pub fn new(degrees: i32) -> Result<Self, EntryError> {
        let value = i8::try_from(degrees)
            .map_err(|_| EntryError::RotationOutOfRange { degrees })?;
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(EntryError::RotationOutOfRange { degrees });
        }
        Ok(Self(value))
    }

    /// Returns the rotation in degrees.
    #[must_use]
    pub fn degrees(&self) -> i8 {
        self.0
    }
}

//
// ─── VALIDATED DOMAIN ENTITY ───────────────────────────────────────────────────
//

/// A single content unit pinned to a day board.
///
/// `kind` and `content` are fixed at creation; only `rotation` and
/// `created_at` can change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    id: EntryId,
    kind: EntryKind,
    content: String,
    caption: Option<String>,
    created_at: DateTime<Utc>,
    rotation: Rotation,
}

impl Entry {
    #[must_use]
    pub fn id(&self) -> EntryId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    /// Inline text for notes, an opaque embeddable representation (such as
    /// a data URI) for media kinds. Never format-validated here.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    #[must_use]
    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[must_use]
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub(crate) fn set_rotation(&mut self, rotation: Rotation) {
        self.rotation = rotation;
    }

    pub(crate) fn set_created_at(&mut self, at: DateTime<Utc>) {
        self.created_at = at;
    }
}

//
// ─── DRAFT ENTITY (unvalidated input) ──────────────────────────────────────────
//

/// Caller-supplied specification for a new entry, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryDraft {
    pub kind: EntryKind,
    pub content: String,
    pub caption: Option<String>,
}

impl EntryDraft {
    /// Draft for an inline text note.
    #[must_use]
    pub fn note(content: impl Into<String>) -> Self {
        Self {
            kind: EntryKind::Note,
            content: content.into(),
            caption: None,
        }
    }

    /// Draft for a media entry whose content is already encoded to an
    /// embeddable string by the caller.
    #[must_use]
    pub fn media(kind: EntryKind, content: impl Into<String>, caption: Option<String>) -> Self {
        Self {
            kind,
            content: content.into(),
            caption,
        }
    }

    /// Validates the draft and produces an `Entry` with a fresh id,
    /// `created_at = now` and a neutral rotation.
    ///
    /// Content is stored as given: emptiness and format checks are the
    /// caller's concern.
    ///
    /// # Errors
    ///
    /// Returns `EntryError::CaptionOnNote` if a caption is supplied for a
    /// text note.
    pub fn validate(self, now: DateTime<Utc>) -> Result<Entry, EntryError> {
        if self.caption.is_some() && !self.kind.is_media() {
            return Err(EntryError::CaptionOnNote);
        }

        let caption = self
            .caption
            .map(|c| c.trim().to_owned())
            .filter(|c| !c.is_empty());

        Ok(Entry {
            id: EntryId::generate(),
            kind: self.kind,
            content: self.content,
            caption,
            created_at: now,
            rotation: Rotation::default(),
        })
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
