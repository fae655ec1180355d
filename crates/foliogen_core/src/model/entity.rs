//! Portfolio entity records and their draft/patch input shapes.
//!
//! # Responsibility
//! - Define the id-bearing records held by the document collections.
//! - Define the without-id draft shapes accepted by store `add_*` calls.
//! - Define typed patches enumerating exactly which fields a partial
//!   update may set.
//!
//! # Invariants
//! - An entity `id` is assigned once at creation and never rewritten by a
//!   patch.
//! - Patch application touches only fields that are `Some`.

use crate::ident::EntityId;
use serde::{Deserialize, Serialize};

/// One showcased project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Stable opaque id, unique within the document's project collection.
    pub id: EntityId,
    /// Display title.
    pub title: String,
    /// Short description shown on the project card.
    pub description: String,
    /// Image URI or encoded-image reference. May be empty.
    pub image: String,
    /// Link to the hosted repository. May be empty.
    pub github_link: String,
}

/// Project input before an id has been assigned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub image: String,
    pub github_link: String,
}

/// Partial project update. Unset fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub github_link: Option<String>,
}

impl Project {
    /// Materializes a draft into an entity under a caller-provided id.
    ///
    /// The id is expected to come from the store's [`IdGenerator`] seam;
    /// this constructor does not check uniqueness itself.
    ///
    /// [`IdGenerator`]: crate::ident::IdGenerator
    pub fn from_draft(id: EntityId, draft: ProjectDraft) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            image: draft.image,
            github_link: draft.github_link,
        }
    }

    /// Merges the set fields of `patch` into this project.
    ///
    /// # Contract
    /// - `id` is never changed.
    /// - Fields that are `None` in the patch keep their current value.
    pub fn apply(&mut self, patch: &ProjectPatch) {
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(description) = &patch.description {
            self.description = description.clone();
        }
        if let Some(image) = &patch.image {
            self.image = image.clone();
        }
        if let Some(github_link) = &patch.github_link {
            self.github_link = github_link.clone();
        }
    }
}

/// One named skill. Insertion order is display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    /// Stable opaque id, unique within the document's skill collection.
    pub id: EntityId,
    pub name: String,
}

/// Skill input before an id has been assigned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillDraft {
    pub name: String,
}

impl Skill {
    /// Materializes a draft into an entity under a caller-provided id.
    pub fn from_draft(id: EntityId, draft: SkillDraft) -> Self {
        Self {
            id,
            name: draft.name,
        }
    }
}

/// One social-media link. Insertion order is display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Stable opaque id, unique within the document's social collection.
    pub id: EntityId,
    /// Platform or label shown to visitors.
    pub name: String,
    pub url: String,
}

/// Social-link input before an id has been assigned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinkDraft {
    pub name: String,
    pub url: String,
}

/// Partial social-link update. Unset fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinkPatch {
    pub name: Option<String>,
    pub url: Option<String>,
}

impl SocialLink {
    /// Materializes a draft into an entity under a caller-provided id.
    pub fn from_draft(id: EntityId, draft: SocialLinkDraft) -> Self {
        Self {
            id,
            name: draft.name,
            url: draft.url,
        }
    }

    /// Merges the set fields of `patch` into this link. `id` never changes.
    pub fn apply(&mut self, patch: &SocialLinkPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(url) = &patch.url {
            self.url = url.clone();
        }
    }
}
