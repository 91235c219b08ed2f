//! Tests for committed search and browse.

use super::*;
use crate::catalog::CatalogSnapshot;
use crate::model::{EngagementCounts, EntityId, MediaKind};

// ===== Fixtures =====

fn id(raw: &str) -> EntityId {
    EntityId::new(raw).expect("valid id")
}

fn sample_catalog() -> Catalog {
    Catalog::new(CatalogSnapshot::new(
        vec![
            Person::new(id("u1"), "Ravi Menon", "@ravi", "mentor"),
            Person::new(id("u2"), "Isha Rao", "@isha_jee", "student"),
        ],
        vec![
            Organization::new(id("o1"), "NIT Trichy", "Tiruchirappalli", "college", "engineering"),
            Organization::new(id("o2"), "AIIMS Delhi", "Delhi", "college", "medical"),
        ],
        vec![
            Content::new(id("p1"), "JEE physics revision", "Ravi Menon")
                .with_playable_link("https://youtube.com/watch?v=phy1"),
            Content::new(id("p2"), "Study group tonight", "Isha Rao").with_tags(["#JEE", "group"]),
            Content::new(id("p3"), "Rotational motion in 60s", "Ravi Menon")
                .with_playable_link("https://youtube.com/shorts/rot60"),
        ],
        vec![
            Resource::new(id("r1"), "Mechanics Problem Set")
                .with_subject("Physics")
                .with_exam("JEE Main")
                .with_topic("Kinematics"),
            Resource::new(id("r2"), "Biology Flashcards")
                .with_subject("Biology")
                .with_exam("NEET")
                .with_tags(["botany"]),
        ],
    ))
}

fn ids(results: &[SearchResult<'_>]) -> Vec<String> {
    results.iter().map(|r| r.id.clone()).collect()
}

// ===== Search Mode: Field Coverage =====

#[test]
fn person_matches_on_handle_and_role() {
    let catalog = sample_catalog();

    assert_eq!(ids(&search(&catalog, "isha_jee", Category::People)), vec!["person_u2"]);
    assert_eq!(ids(&search(&catalog, "MENTOR", Category::People)), vec!["person_u1"]);
}

#[test]
fn organization_matches_on_location_kind_and_category() {
    let catalog = sample_catalog();

    assert_eq!(ids(&search(&catalog, "delhi", Category::Colleges)), vec!["organization_o2"]);
    assert_eq!(ids(&search(&catalog, "medical", Category::Colleges)), vec!["organization_o2"]);
    assert_eq!(
        ids(&search(&catalog, "college", Category::Colleges)),
        vec!["organization_o1", "organization_o2"]
    );
}

#[test]
fn content_matches_on_tags_and_author() {
    let catalog = sample_catalog();

    assert_eq!(ids(&search(&catalog, "group", Category::Posts)), vec!["post_p2"]);
    assert_eq!(ids(&search(&catalog, "isha", Category::Posts)), vec!["post_p2"]);
}

#[test]
fn resource_matches_on_topic_and_tags_but_not_exam() {
    let catalog = sample_catalog();

    assert_eq!(ids(&search(&catalog, "kinematics", Category::Resources)), vec!["resource_r1"]);
    assert_eq!(ids(&search(&catalog, "botany", Category::Resources)), vec!["resource_r2"]);
    assert!(
        search(&catalog, "neet", Category::Resources).is_empty(),
        "Exam tag is displayed as a badge, not searched"
    );
}

// ===== Search Mode: Ordering =====

#[test]
fn all_category_follows_fixed_precedence() {
    let catalog = sample_catalog();

    let results = search(&catalog, "ravi", Category::All);

    assert_eq!(
        ids(&results),
        vec!["person_u1", "post_p1", "post_p3", "video_p1", "clip_p3"]
    );
}

#[test]
fn organizations_come_before_people() {
    let catalog = Catalog::new(CatalogSnapshot::new(
        vec![Person::new(id("u1"), "Delhi Topper", "", "")],
        vec![Organization::new(id("o1"), "Delhi College", "", "", "")],
        vec![],
        vec![],
    ));

    assert_eq!(
        ids(&search(&catalog, "delhi", Category::All)),
        vec!["organization_o1", "person_u1"]
    );
}

#[test]
fn resources_come_before_video_projections() {
    let catalog = sample_catalog();

    let results = search(&catalog, "physics", Category::All);

    assert_eq!(ids(&results), vec!["post_p1", "resource_r1", "video_p1"]);
}

// ===== Search Mode: Content Projections =====

#[test]
fn video_and_post_projections_coexist_under_all() {
    let catalog = sample_catalog();

    let results = search(&catalog, "revision", Category::All);

    assert_eq!(ids(&results), vec!["post_p1", "video_p1"]);
    assert!(matches!(results[0].source, EntityRef::Post(c) if c.id.as_str() == "p1"));
    assert!(matches!(results[1].source, EntityRef::Video(c) if c.id.as_str() == "p1"));
}

#[test]
fn videos_category_excludes_clips_and_posts() {
    let catalog = sample_catalog();

    assert_eq!(ids(&search(&catalog, "ravi", Category::Videos)), vec!["video_p1"]);
    assert_eq!(ids(&search(&catalog, "ravi", Category::Clips)), vec!["clip_p3"]);
    assert!(search(&catalog, "ravi", Category::Posts).is_empty());
}

#[test]
fn result_ids_are_unique_even_with_duplicate_entities() {
    let duplicate = Person::new(id("u1"), "Ravi", "", "");
    let catalog = Catalog::new(CatalogSnapshot::new(
        vec![duplicate.clone(), duplicate],
        vec![],
        vec![],
        vec![],
    ));

    assert_eq!(ids(&search(&catalog, "ravi", Category::All)), vec!["person_u1"]);
}

#[test]
fn no_match_yields_empty() {
    let catalog = sample_catalog();
    assert!(search(&catalog, "quantum chromodynamics", Category::All).is_empty());
}

#[test]
fn query_is_trimmed_before_matching() {
    let catalog = sample_catalog();
    assert_eq!(ids(&search(&catalog, "  trichy  ", Category::All)), vec!["organization_o1"]);
}

// ===== Browse Mode =====

#[test]
fn browse_colleges_lists_every_organization() {
    let catalog = sample_catalog();

    let results = browse(&catalog, Category::Colleges);

    assert_eq!(results.len(), catalog.organizations().len());
    assert_eq!(ids(&results), vec!["organization_o1", "organization_o2"]);
}

#[test]
fn browse_posts_lists_only_classified_posts() {
    let catalog = sample_catalog();
    assert_eq!(ids(&browse(&catalog, Category::Posts)), vec!["post_p2"]);
}

#[test]
fn browse_clips_lists_short_form_content() {
    let catalog = sample_catalog();
    assert_eq!(ids(&browse(&catalog, Category::Clips)), vec!["clip_p3"]);
}

#[test]
fn browse_all_is_empty() {
    let catalog = sample_catalog();
    assert!(browse(&catalog, Category::All).is_empty());
}

#[test]
fn search_with_blank_query_browses() {
    let catalog = sample_catalog();
    assert_eq!(
        ids(&search(&catalog, "   ", Category::People)),
        vec!["person_u1", "person_u2"]
    );
}

// ===== Projection =====

#[test]
fn person_projection_fields() {
    let catalog = sample_catalog();
    let results = search(&catalog, "isha rao", Category::People);
    let row = &results[0];

    assert_eq!(row.title, "Isha Rao");
    assert_eq!(row.subtitle, "@isha_jee");
    assert_eq!(row.badge.as_deref(), Some("student"));
    assert_eq!(row.description, None);
}

#[test]
fn resource_projection_uses_exam_badge() {
    let catalog = sample_catalog();
    let results = browse(&catalog, Category::Resources);

    assert_eq!(results[0].subtitle, "Physics");
    assert_eq!(results[0].badge.as_deref(), Some("JEE Main"));
    assert_eq!(results[0].description, None, "Blank description becomes None");
}

#[test]
fn post_projection_uses_engagement_badge() {
    let catalog = Catalog::new(CatalogSnapshot::new(
        vec![],
        vec![],
        vec![Content::new(id("p9"), "Doubt session\nBring your questions", "Asha").with_engagement(
            EngagementCounts {
                likes: 12,
                comments: 3,
                shares: 0,
            },
        )],
        vec![],
    ));

    let results = browse(&catalog, Category::Posts);
    let row = &results[0];

    assert_eq!(row.title, "Doubt session");
    assert_eq!(row.subtitle, "Asha");
    assert_eq!(row.badge.as_deref(), Some("12 likes · 3 comments"));
    assert_eq!(
        row.description.as_deref(),
        Some("Doubt session\nBring your questions")
    );
}

#[test]
fn video_projection_has_thumbnail_and_badge() {
    let catalog = sample_catalog();
    let results = browse(&catalog, Category::Videos);

    assert_eq!(results[0].badge.as_deref(), Some("Video"));
    assert_eq!(
        results[0].thumbnail.as_deref(),
        Some("https://img.youtube.com/vi/phy1/hqdefault.jpg")
    );
}

#[test]
fn declared_clip_without_link_browses_as_clip() {
    let catalog = Catalog::new(CatalogSnapshot::new(
        vec![],
        vec![],
        vec![Content::new(id("c1"), "Uploaded clip", "Asha").with_media_kind(MediaKind::Clip)],
        vec![],
    ));

    let results = browse(&catalog, Category::Clips);

    assert_eq!(ids(&results), vec!["clip_c1"]);
    assert_eq!(results[0].thumbnail, None);
}

#[test]
fn long_content_title_is_truncated() {
    let body = "a".repeat(200);
    let title = content_title(&body);

    assert_eq!(title.chars().count(), CONTENT_TITLE_MAX_CHARS);
    assert!(title.ends_with('…'));
}

#[test]
fn content_title_skips_blank_leading_lines() {
    assert_eq!(content_title("\n   \nActual title\nmore"), "Actual title");
}
