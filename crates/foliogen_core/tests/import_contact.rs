use foliogen_core::{
    drafts_from_records, ContactSubmission, FormTarget, GithubRepoRecord, ImportError,
    ImportService, PortfolioStore, ProfilePatch, ProjectDraft, ProjectImportSource,
    SubmissionError, SubmissionSink, ValidationError, IMPORT_PLACEHOLDER_IMAGE,
};
use std::cell::RefCell;

fn sample_drafts() -> Vec<ProjectDraft> {
    vec![
        ProjectDraft {
            title: "ray-tracer".to_string(),
            description: "Weekend path tracing experiment".to_string(),
            image: IMPORT_PLACEHOLDER_IMAGE.to_string(),
            github_link: "https://github.com/ada/ray-tracer".to_string(),
        },
        ProjectDraft {
            title: "dotfiles".to_string(),
            description: "No description available".to_string(),
            image: IMPORT_PLACEHOLDER_IMAGE.to_string(),
            github_link: "https://github.com/ada/dotfiles".to_string(),
        },
    ]
}

/// Import source stub with a scripted outcome.
struct FakeSource {
    fail_with_status: Option<u16>,
    drafts: Vec<ProjectDraft>,
}

impl ProjectImportSource for FakeSource {
    fn fetch_projects(&self, _username: &str) -> Result<Vec<ProjectDraft>, ImportError> {
        match self.fail_with_status {
            Some(code) => Err(ImportError::Status(code)),
            None => Ok(self.drafts.clone()),
        }
    }
}

#[test]
fn repo_records_map_to_drafts_with_fallbacks() {
    // Wire shape as the GitHub API returns it; extra fields are ignored.
    let body = r#"[
        {
            "name": "ray-tracer",
            "description": "Weekend path tracing experiment",
            "html_url": "https://github.com/ada/ray-tracer",
            "stargazers_count": 12
        },
        {
            "name": "dotfiles",
            "description": null,
            "html_url": "https://github.com/ada/dotfiles"
        }
    ]"#;
    let records: Vec<GithubRepoRecord> = serde_json::from_str(body).unwrap();

    let drafts = drafts_from_records(records);

    assert_eq!(drafts, sample_drafts());
}

#[test]
fn import_appends_every_fetched_draft_in_order() {
    let mut store = PortfolioStore::new();
    let service = ImportService::new(FakeSource {
        fail_with_status: None,
        drafts: sample_drafts(),
    });

    let count = service.import_projects(&mut store, "ada").unwrap();

    assert_eq!(count, 2);
    let document = store.document();
    assert_eq!(document.projects.len(), 2);
    assert_eq!(document.projects[0].title, "ray-tracer");
    assert_eq!(document.projects[1].title, "dotfiles");
    assert_ne!(document.projects[0].id, document.projects[1].id);
}

#[test]
fn import_keeps_existing_projects_in_front() {
    let mut store = PortfolioStore::new();
    store.add_project(ProjectDraft {
        title: "hand-made".to_string(),
        description: "entered through the form".to_string(),
        image: String::new(),
        github_link: String::new(),
    });
    let service = ImportService::new(FakeSource {
        fail_with_status: None,
        drafts: sample_drafts(),
    });

    service.import_projects(&mut store, "ada").unwrap();

    let document = store.document();
    assert_eq!(document.projects.len(), 3);
    assert_eq!(document.projects[0].title, "hand-made");
}

#[test]
fn blank_username_is_rejected_before_any_fetch() {
    let mut store = PortfolioStore::new();
    let service = ImportService::new(FakeSource {
        fail_with_status: None,
        drafts: sample_drafts(),
    });
    let before = store.document();

    let err = service.import_projects(&mut store, "   ").unwrap_err();

    assert!(matches!(err, ImportError::EmptyUsername));
    assert_eq!(store.document(), before);
}

#[test]
fn failed_fetch_leaves_the_document_unchanged() {
    let mut store = PortfolioStore::new();
    store.add_project(ProjectDraft {
        title: "existing".to_string(),
        description: "stays".to_string(),
        image: String::new(),
        github_link: String::new(),
    });
    let before = store.document();
    let service = ImportService::new(FakeSource {
        fail_with_status: Some(403),
        drafts: sample_drafts(),
    });

    let err = service.import_projects(&mut store, "ada").unwrap_err();

    assert!(matches!(err, ImportError::Status(403)));
    assert_eq!(store.document(), before);
}

#[test]
fn import_errors_render_human_readable_messages() {
    assert_eq!(
        ImportError::EmptyUsername.to_string(),
        "username must not be empty"
    );
    assert_eq!(
        ImportError::Status(403).to_string(),
        "repository host returned status 403"
    );
}

#[test]
fn contact_submission_validation_follows_form_rules() {
    let valid = ContactSubmission {
        name: "Ada".to_string(),
        email: "ada@example.com".to_string(),
        message: "Hello!".to_string(),
    };
    assert_eq!(valid.validate(), Ok(()));

    let blank_name = ContactSubmission {
        name: "  ".to_string(),
        ..valid.clone()
    };
    assert_eq!(
        blank_name.validate(),
        Err(ValidationError::MissingField("name"))
    );

    let bad_email = ContactSubmission {
        email: "not-an-address".to_string(),
        ..valid.clone()
    };
    assert!(matches!(
        bad_email.validate(),
        Err(ValidationError::InvalidEmail(_))
    ));

    let blank_message = ContactSubmission {
        message: String::new(),
        ..valid
    };
    assert_eq!(
        blank_message.validate(),
        Err(ValidationError::MissingField("message"))
    );
}

/// Submission sink stub recording what it was handed.
struct RecordingSink {
    received: RefCell<Vec<ContactSubmission>>,
    reject_with_status: Option<u16>,
}

impl SubmissionSink for RecordingSink {
    fn submit(&self, submission: &ContactSubmission) -> Result<(), SubmissionError> {
        if let Some(code) = self.reject_with_status {
            return Err(SubmissionError::Status(code));
        }
        self.received.borrow_mut().push(submission.clone());
        Ok(())
    }
}

#[test]
fn contact_flow_validates_then_submits_once() {
    let sink = RecordingSink {
        received: RefCell::new(Vec::new()),
        reject_with_status: None,
    };
    let submission = ContactSubmission {
        name: "Ada".to_string(),
        email: "ada@example.com".to_string(),
        message: "Saw your ray tracer, impressive work.".to_string(),
    };

    submission.validate().unwrap();
    sink.submit(&submission).unwrap();

    assert_eq!(sink.received.borrow().as_slice(), &[submission]);
}

#[test]
fn rejected_submission_surfaces_a_readable_message() {
    let sink = RecordingSink {
        received: RefCell::new(Vec::new()),
        reject_with_status: Some(500),
    };
    let submission = ContactSubmission {
        name: "Ada".to_string(),
        email: "ada@example.com".to_string(),
        message: "Hello".to_string(),
    };

    let err = sink.submit(&submission).unwrap_err();

    assert_eq!(err.to_string(), "form endpoint returned status 500");
    assert!(sink.received.borrow().is_empty());
}

#[test]
fn default_form_target_carries_entry_keys_for_every_field() {
    let target = FormTarget::default();

    assert!(target.form_url.starts_with("https://"));
    assert!(target.form_url.ends_with("/formResponse"));
    assert!(target.name_entry.starts_with("entry."));
    assert!(target.email_entry.starts_with("entry."));
    assert!(target.message_entry.starts_with("entry."));
    assert_ne!(target.name_entry, target.email_entry);
    assert_ne!(target.email_entry, target.message_entry);
}

#[test]
fn publish_gate_requires_name_bio_and_one_project() {
    let mut store = PortfolioStore::new();
    assert_eq!(
        foliogen_core::validate_publish(&store.document()),
        Err(ValidationError::MissingField("name"))
    );

    store.update_profile(&ProfilePatch {
        name: Some("Ada".to_string()),
        short_bio: Some("Engineer".to_string()),
        ..ProfilePatch::default()
    });
    assert_eq!(
        foliogen_core::validate_publish(&store.document()),
        Err(ValidationError::NoProjects)
    );

    store.add_project(ProjectDraft {
        title: "Ray tracer".to_string(),
        description: "d1".to_string(),
        image: String::new(),
        github_link: String::new(),
    });
    assert_eq!(foliogen_core::validate_publish(&store.document()), Ok(()));
}
