use foliogen_core::{
    PortfolioDocument, ProfilePatch, Project, ProjectDraft, ProjectPatch, Skill, SocialLink,
    SocialLinkPatch,
};
use uuid::Uuid;

#[test]
fn default_document_is_the_canonical_empty_document() {
    let document = PortfolioDocument::default();

    assert!(document.is_empty());
    assert_eq!(document.name, "");
    assert_eq!(document.short_bio, "");
    assert_eq!(document.about_me, "");
    assert_eq!(document.profile_picture, "");
    assert_eq!(document.interests, "");
    assert_eq!(document.contact_email, "");
    assert!(document.skills.is_empty());
    assert!(document.projects.is_empty());
    assert!(document.social_media.is_empty());
}

#[test]
fn project_from_draft_preserves_fields_and_id() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let draft = ProjectDraft {
        title: "Ray tracer".to_string(),
        description: "Weekend path tracing experiment".to_string(),
        image: "https://example.com/shot.png".to_string(),
        github_link: "https://github.com/ada/ray-tracer".to_string(),
    };

    let project = Project::from_draft(id, draft.clone());

    assert_eq!(project.id, id);
    assert_eq!(project.title, draft.title);
    assert_eq!(project.description, draft.description);
    assert_eq!(project.image, draft.image);
    assert_eq!(project.github_link, draft.github_link);
}

#[test]
fn project_patch_merges_only_set_fields() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let mut project = Project::from_draft(
        id,
        ProjectDraft {
            title: "Old title".to_string(),
            description: "Old description".to_string(),
            image: "old.png".to_string(),
            github_link: "https://github.com/ada/old".to_string(),
        },
    );

    project.apply(&ProjectPatch {
        title: Some("New title".to_string()),
        description: None,
        image: None,
        github_link: None,
    });

    assert_eq!(project.id, id);
    assert_eq!(project.title, "New title");
    assert_eq!(project.description, "Old description");
    assert_eq!(project.image, "old.png");
    assert_eq!(project.github_link, "https://github.com/ada/old");
}

#[test]
fn all_none_patches_change_nothing() {
    let id = Uuid::parse_str("22222222-3333-4444-8555-666666666666").unwrap();
    let mut project = Project::from_draft(id, ProjectDraft::default());
    let before = project.clone();
    project.apply(&ProjectPatch::default());
    assert_eq!(project, before);

    let mut link = SocialLink {
        id,
        name: "Mastodon".to_string(),
        url: "https://example.social/@ada".to_string(),
    };
    let before = link.clone();
    link.apply(&SocialLinkPatch::default());
    assert_eq!(link, before);

    let mut document = PortfolioDocument::default();
    document.apply_profile(&ProfilePatch::default());
    assert_eq!(document, PortfolioDocument::default());
}

#[test]
fn profile_patch_touches_only_scalar_fields() {
    let id = Uuid::parse_str("33333333-4444-4555-8666-777777777777").unwrap();
    let mut document = PortfolioDocument {
        skills: vec![Skill {
            id,
            name: "Rust".to_string(),
        }],
        ..PortfolioDocument::default()
    };

    document.apply_profile(&ProfilePatch {
        name: Some("Ada".to_string()),
        contact_email: Some("ada@example.com".to_string()),
        ..ProfilePatch::default()
    });

    assert_eq!(document.name, "Ada");
    assert_eq!(document.contact_email, "ada@example.com");
    assert_eq!(document.short_bio, "");
    assert_eq!(document.skills.len(), 1);
    assert_eq!(document.skills[0].id, id);
}

#[test]
fn document_serialization_uses_expected_wire_fields() {
    let project_id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let document = PortfolioDocument {
        name: "Ada".to_string(),
        short_bio: "Engineer".to_string(),
        projects: vec![Project {
            id: project_id,
            title: "Ray tracer".to_string(),
            description: "d1".to_string(),
            image: "".to_string(),
            github_link: "https://github.com/ada/ray-tracer".to_string(),
        }],
        ..PortfolioDocument::default()
    };

    let json = serde_json::to_value(&document).unwrap();
    assert_eq!(json["name"], "Ada");
    assert_eq!(json["short_bio"], "Engineer");
    assert_eq!(json["projects"][0]["id"], project_id.to_string());
    assert_eq!(json["projects"][0]["title"], "Ray tracer");
    assert_eq!(json["projects"][0]["github_link"], "https://github.com/ada/ray-tracer");
    assert_eq!(json["skills"], serde_json::json!([]));
    assert_eq!(json["social_media"], serde_json::json!([]));

    let decoded: PortfolioDocument = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, document);
}
