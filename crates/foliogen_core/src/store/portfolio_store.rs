//! Portfolio document store.
//!
//! # Responsibility
//! - Own the single live [`PortfolioDocument`] and be the only code that
//!   mutates it.
//! - Enforce id uniqueness and collection-order invariants across every
//!   mutation.
//!
//! # Invariants
//! - Every operation is synchronous and total: invalid input degrades to a
//!   no-op, never a panic or an error.
//! - An unknown id on update/remove leaves the document untouched.
//! - A reorder with any out-of-range index leaves the sequence intact.
//! - Snapshots returned by `document()` are owned; later mutations never
//!   alter them.

use crate::ident::{EntityId, IdGenerator, UuidIdGenerator};
use crate::model::document::{PortfolioDocument, ProfilePatch};
use crate::model::entity::{
    Project, ProjectDraft, ProjectPatch, Skill, SkillDraft, SocialLink, SocialLinkDraft,
    SocialLinkPatch,
};
use log::debug;

/// Single source of truth for one portfolio session.
///
/// Views hold a handle to the store and re-derive everything from
/// `document()` snapshots; there is no subscription machinery because the
/// update model is one synchronous writer per interaction.
pub struct PortfolioStore<G: IdGenerator = UuidIdGenerator> {
    document: PortfolioDocument,
    ids: G,
}

impl PortfolioStore<UuidIdGenerator> {
    /// Creates a store holding the all-empty default document.
    pub fn new() -> Self {
        Self::with_generator(UuidIdGenerator)
    }
}

impl Default for PortfolioStore<UuidIdGenerator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: IdGenerator> PortfolioStore<G> {
    /// Creates a store using the provided id generator.
    ///
    /// Production callers use [`PortfolioStore::new`]; this entry point
    /// exists so tests can inject a deterministic generator.
    pub fn with_generator(ids: G) -> Self {
        Self {
            document: PortfolioDocument::default(),
            ids,
        }
    }

    /// Returns an owned snapshot of the current document.
    ///
    /// # Contract
    /// - The snapshot reflects every mutation completed before this call.
    /// - Later store mutations never alter a returned snapshot.
    pub fn document(&self) -> PortfolioDocument {
        self.document.clone()
    }

    /// Merges the set scalar fields of `patch` into the document.
    ///
    /// Unset fields keep their current value; entity collections are never
    /// touched by a profile patch.
    pub fn update_profile(&mut self, patch: &ProfilePatch) {
        self.document.apply_profile(patch);
        debug!("event=profile_update module=store status=ok");
    }

    /// Appends a new project built from `draft` and returns it.
    ///
    /// # Contract
    /// - The assigned id was not present in the document before this call.
    /// - The returned entity's fields equal the draft's fields exactly.
    /// - Existing projects keep their ids and relative order.
    pub fn add_project(&mut self, draft: ProjectDraft) -> Project {
        let project = Project::from_draft(self.ids.next_id(), draft);
        self.document.projects.push(project.clone());
        debug!("event=project_add module=store status=ok id={}", project.id);
        project
    }

    /// Merges `patch` into the project matching `id`. No-op when unknown.
    pub fn update_project(&mut self, id: EntityId, patch: &ProjectPatch) {
        match self.document.projects.iter_mut().find(|p| p.id == id) {
            Some(project) => {
                project.apply(patch);
                debug!("event=project_update module=store status=ok id={id}");
            }
            None => debug!("event=project_update module=store status=miss id={id}"),
        }
    }

    /// Removes the project matching `id`. No-op when unknown.
    ///
    /// Remaining projects keep their ids and relative order.
    pub fn remove_project(&mut self, id: EntityId) {
        let before = self.document.projects.len();
        self.document.projects.retain(|p| p.id != id);
        if self.document.projects.len() == before {
            debug!("event=project_remove module=store status=miss id={id}");
        } else {
            debug!("event=project_remove module=store status=ok id={id}");
        }
    }

    /// Moves the project at `from_index` so it ends up at `to_index`.
    ///
    /// Remove-then-insert semantics: the element is taken out first and the
    /// target index is interpreted on the shortened sequence, so moving
    /// forward does not land one slot short.
    ///
    /// # Contract
    /// - Both indices must be in `0..projects.len()`; any out-of-range
    ///   index makes the whole call a no-op, the sequence is never
    ///   corrupted.
    /// - `reorder_projects(i, j)` followed by `reorder_projects(j, i)`
    ///   restores the original order.
    pub fn reorder_projects(&mut self, from_index: usize, to_index: usize) {
        let len = self.document.projects.len();
        if from_index >= len || to_index >= len {
            debug!(
                "event=projects_reorder module=store status=out_of_range \
                 from={from_index} to={to_index} len={len}"
            );
            return;
        }
        let moved = self.document.projects.remove(from_index);
        self.document.projects.insert(to_index, moved);
        debug!("event=projects_reorder module=store status=ok from={from_index} to={to_index}");
    }

    /// Appends a new skill built from `draft` and returns it.
    ///
    /// Duplicate names are allowed; each call yields a distinct id.
    pub fn add_skill(&mut self, draft: SkillDraft) -> Skill {
        let skill = Skill::from_draft(self.ids.next_id(), draft);
        self.document.skills.push(skill.clone());
        debug!("event=skill_add module=store status=ok id={}", skill.id);
        skill
    }

    /// Removes the skill matching `id`. No-op when unknown.
    pub fn remove_skill(&mut self, id: EntityId) {
        let before = self.document.skills.len();
        self.document.skills.retain(|s| s.id != id);
        if self.document.skills.len() == before {
            debug!("event=skill_remove module=store status=miss id={id}");
        } else {
            debug!("event=skill_remove module=store status=ok id={id}");
        }
    }

    /// Appends a new social link built from `draft` and returns it.
    pub fn add_social_media(&mut self, draft: SocialLinkDraft) -> SocialLink {
        let link = SocialLink::from_draft(self.ids.next_id(), draft);
        self.document.social_media.push(link.clone());
        debug!("event=social_add module=store status=ok id={}", link.id);
        link
    }

    /// Merges `patch` into the social link matching `id`. No-op when unknown.
    pub fn update_social_media(&mut self, id: EntityId, patch: &SocialLinkPatch) {
        match self.document.social_media.iter_mut().find(|s| s.id == id) {
            Some(link) => {
                link.apply(patch);
                debug!("event=social_update module=store status=ok id={id}");
            }
            None => debug!("event=social_update module=store status=miss id={id}"),
        }
    }

    /// Removes the social link matching `id`. No-op when unknown.
    pub fn remove_social_media(&mut self, id: EntityId) {
        let before = self.document.social_media.len();
        self.document.social_media.retain(|s| s.id != id);
        if self.document.social_media.len() == before {
            debug!("event=social_remove module=store status=miss id={id}");
        } else {
            debug!("event=social_remove module=store status=ok id={id}");
        }
    }

    /// Replaces the document with the all-empty default, discarding all
    /// entities and scalar fields.
    pub fn reset_document(&mut self) {
        self.document = PortfolioDocument::default();
        debug!("event=document_reset module=store status=ok");
    }

    /// Wholesale replaces the document with `doc`.
    ///
    /// Used by bulk-import paths. No merging: the previous document is
    /// discarded entirely.
    pub fn replace_document(&mut self, doc: PortfolioDocument) {
        self.document = doc;
        debug!(
            "event=document_replace module=store status=ok projects={} skills={} social={}",
            self.document.projects.len(),
            self.document.skills.len(),
            self.document.social_media.len()
        );
    }
}
