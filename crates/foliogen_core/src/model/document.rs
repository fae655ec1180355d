//! Portfolio aggregate root.
//!
//! # Responsibility
//! - Define the single document shape every view derives from.
//! - Provide the canonical all-empty default used at session start and on
//!   reset.
//!
//! # Invariants
//! - Collection order is display order; only an explicit store reorder may
//!   change it.
//! - Scalar profile fields are free text; shape rules live at the view
//!   boundary (`model::validate`), not here.

use crate::model::entity::{Project, Skill, SocialLink};
use serde::{Deserialize, Serialize};

/// The whole in-memory portfolio document.
///
/// There is exactly one live instance per session, owned by the store.
/// Everything callers receive is an owned snapshot that later store
/// mutations never touch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioDocument {
    /// Display name. May be empty until the owner fills the form.
    pub name: String,
    /// One-line bio shown in the hero section.
    pub short_bio: String,
    /// Long-form about text.
    pub about_me: String,
    /// URI or encoded-image reference. May be empty.
    pub profile_picture: String,
    /// Free-text interests line.
    pub interests: String,
    /// Shown on the contact section. Not validated at document level.
    pub contact_email: String,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
    pub social_media: Vec<SocialLink>,
}

/// Partial update for the document's scalar profile fields.
///
/// Enumerating the settable fields here is what makes accidental field
/// injection impossible: a patch can only name what this type names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub short_bio: Option<String>,
    pub about_me: Option<String>,
    pub profile_picture: Option<String>,
    pub interests: Option<String>,
    pub contact_email: Option<String>,
}

impl PortfolioDocument {
    /// Merges the set scalar fields of `patch` into this document.
    ///
    /// # Contract
    /// - Unset patch fields keep their current value.
    /// - Entity collections are never touched by a profile patch.
    pub fn apply_profile(&mut self, patch: &ProfilePatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(short_bio) = &patch.short_bio {
            self.short_bio = short_bio.clone();
        }
        if let Some(about_me) = &patch.about_me {
            self.about_me = about_me.clone();
        }
        if let Some(profile_picture) = &patch.profile_picture {
            self.profile_picture = profile_picture.clone();
        }
        if let Some(interests) = &patch.interests {
            self.interests = interests.clone();
        }
        if let Some(contact_email) = &patch.contact_email {
            self.contact_email = contact_email.clone();
        }
    }

    /// Returns whether every scalar field is empty and every collection
    /// holds no entities.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.short_bio.is_empty()
            && self.about_me.is_empty()
            && self.profile_picture.is_empty()
            && self.interests.is_empty()
            && self.contact_email.is_empty()
            && self.skills.is_empty()
            && self.projects.is_empty()
            && self.social_media.is_empty()
    }
}
