//! Tests for the discovery controller.

use super::*;
use crate::catalog::StaticRepository;
use crate::model::{CatalogSlice, Content, EntityId, Organization, Person, Resource};

// ===== Fixtures =====

fn id(raw: &str) -> EntityId {
    EntityId::new(raw).expect("valid id")
}

fn snapshot() -> CatalogSnapshot {
    CatalogSnapshot::new(
        vec![Person::new(id("u1"), "Ravi Menon", "@ravi", "mentor")],
        vec![Organization::new(id("o1"), "NIT Trichy", "Tiruchirappalli", "college", "engineering")],
        vec![
            Content::new(id("p1"), "JEE physics revision", "Ravi Menon")
                .with_tags(["#JEE"])
                .with_playable_link("https://youtube.com/watch?v=phy1"),
            Content::new(id("p2"), "Study group tonight", "Isha Rao").with_tags(["#jee", "group"]),
        ],
        vec![Resource::new(id("r1"), "Mechanics Problem Set").with_subject("Physics")],
    )
}

fn controller() -> DiscoveryController {
    DiscoveryController::new(
        Catalog::new(snapshot()),
        HistoryStore::in_memory(),
        TrendingAnalyzer::default(),
    )
}

fn result_ids(results: &[SearchResult<'_>]) -> Vec<String> {
    results.iter().map(|r| r.id.clone()).collect()
}

// ===== Initial State =====

#[test]
fn starts_idle_on_landing() {
    let controller = controller();

    assert!(controller.state().is_idle());
    assert_eq!(controller.category(), Category::All);
    match controller.view() {
        DiscoveryView::Landing(landing) => {
            assert!(landing.history.is_empty());
            assert_eq!(landing.quick_actions, &Category::BROWSABLE);
        }
        other => panic!("Expected landing view, got {:?}", other),
    }
}

#[test]
fn trending_is_computed_from_initial_catalog() {
    let controller = controller();

    let labels: Vec<(&str, usize)> = controller
        .trending()
        .iter()
        .map(|t| (t.label.as_str(), t.count))
        .collect();
    assert_eq!(labels, vec![("JEE", 2), ("Group", 1)]);
}

// ===== Typing =====

#[test]
fn typing_returns_suggestions() {
    let mut controller = controller();

    let ids: Vec<String> = controller
        .on_query_text_changed("ravi")
        .iter()
        .map(|s| s.id.clone())
        .collect();

    assert!(ids.contains(&"person_u1".to_string()));
    assert!(controller.state().is_typing());
    assert!(matches!(controller.view(), DiscoveryView::Suggestions(_)));
}

#[test]
fn typing_without_matches_shows_landing() {
    let mut controller = controller();

    assert!(controller.on_query_text_changed("zzz").is_empty());

    assert!(controller.state().is_typing());
    assert!(controller.view().is_landing());
}

#[test]
fn clearing_the_text_returns_to_idle() {
    let mut controller = controller();
    controller.on_query_text_changed("ravi");

    controller.on_query_text_changed("   ");

    assert!(controller.state().is_idle());
}

#[test]
fn category_chip_while_typing_filters_suggestions() {
    let mut controller = controller();
    controller.on_query_text_changed("ravi");

    controller.on_category_selected(Category::Colleges);

    assert!(controller.state().is_typing());
    assert!(controller.suggestions().is_empty());
}

// ===== Commit =====

#[test]
fn commit_runs_search_and_records_history() {
    let mut controller = controller();

    let ids = result_ids(&controller.on_commit("physics", Category::All));

    assert_eq!(ids, vec!["post_p1", "resource_r1", "video_p1"]);
    assert_eq!(controller.history(), ["physics"]);
}

#[test]
fn blank_commit_under_all_goes_idle_without_history() {
    let mut controller = controller();
    controller.on_query_text_changed("ravi");

    assert!(controller.on_commit("   ", Category::All).is_empty());

    assert!(controller.state().is_idle());
    assert!(controller.history().is_empty());
}

#[test]
fn blank_commit_under_category_browses_it() {
    let mut controller = controller();

    let ids = result_ids(&controller.on_commit("", Category::Colleges));

    assert_eq!(ids, vec!["organization_o1"]);
    assert!(controller.state().is_browsing());
    assert_eq!(controller.category(), Category::Colleges);
    assert!(controller.history().is_empty());
    assert_eq!(
        ids,
        result_ids(&search(controller.catalog(), "", Category::Colleges)),
        "Blank commit should agree with a blank search"
    );
}

#[test]
fn recommitting_moves_term_to_front() {
    let mut controller = controller();
    controller.on_commit("physics", Category::All);
    controller.on_commit("ravi", Category::All);

    controller.on_commit("PHYSICS", Category::All);

    assert_eq!(controller.history(), ["PHYSICS", "ravi"]);
}

#[test]
fn selecting_a_suggestion_commits_its_text_in_current_category() {
    let mut controller = controller();
    controller.on_category_selected(Category::Resources);
    let picked = controller.on_query_text_changed("mech")[0].display_text.to_string();

    let ids = result_ids(&controller.on_suggestion_selected(&picked));

    assert_eq!(ids, vec!["resource_r1"]);
    assert_eq!(controller.category(), Category::Resources);
    assert_eq!(controller.history(), ["Mechanics Problem Set"]);
}

#[test]
fn selecting_history_and_trending_terms_commit() {
    let mut controller = controller();

    let trending = result_ids(&controller.on_trending_selected("JEE"));
    assert_eq!(trending, vec!["post_p1", "post_p2", "video_p1"]);

    let history = result_ids(&controller.on_history_selected("nit"));
    assert_eq!(history, vec!["organization_o1"]);

    assert_eq!(controller.history(), ["nit", "JEE"]);
}

#[test]
fn category_change_reruns_submitted_search() {
    let mut controller = controller();
    controller.on_commit("physics", Category::All);

    controller.on_category_selected(Category::Videos);

    assert_eq!(result_ids(&controller.results()), vec!["video_p1"]);
    match controller.view() {
        DiscoveryView::Results {
            category, browsing, ..
        } => {
            assert_eq!(category, Category::Videos);
            assert!(!browsing);
        }
        other => panic!("Expected results view, got {:?}", other),
    }
}

// ===== Browse =====

#[test]
fn quick_action_browses_category() {
    let mut controller = controller();

    let ids = result_ids(&controller.on_quick_action(Category::People));

    assert_eq!(ids, vec!["person_u1"]);
    assert!(controller.state().is_browsing());
    assert!(controller.history().is_empty());
}

#[test]
fn quick_action_all_goes_idle() {
    let mut controller = controller();

    assert!(controller.on_quick_action(Category::All).is_empty());

    assert!(controller.state().is_idle());
}

#[test]
fn browsing_then_selecting_all_goes_idle() {
    let mut controller = controller();
    controller.on_quick_action(Category::Colleges);

    controller.on_category_selected(Category::All);

    assert!(controller.state().is_idle());
    assert_eq!(controller.category(), Category::All);
}

#[test]
fn browse_follows_category_chip() {
    let mut controller = controller();
    controller.on_quick_action(Category::Colleges);

    controller.on_category_selected(Category::Resources);

    assert!(controller.state().is_browsing());
    assert_eq!(result_ids(&controller.results()), vec!["resource_r1"]);
}

// ===== Clear =====

#[test]
fn clear_resets_state_and_category() {
    let mut controller = controller();
    controller.on_commit("physics", Category::Posts);

    controller.on_clear();

    assert!(controller.state().is_idle());
    assert_eq!(controller.category(), Category::All);
    assert_eq!(controller.history(), ["physics"]);
}

#[test]
fn history_can_be_edited() {
    let mut controller = controller();
    controller.on_commit("physics", Category::All);
    controller.on_commit("ravi", Category::All);

    assert!(controller.remove_history("Physics"));
    assert_eq!(controller.history(), ["ravi"]);

    controller.clear_history();
    assert!(controller.history().is_empty());
}

// ===== Catalog Refresh =====

#[test]
fn refresh_recomputes_trending() {
    let mut controller = controller();

    controller.on_catalog_refresh(CatalogSnapshot::new(
        vec![],
        vec![],
        vec![Content::new(id("p9"), "Scholarship deadline", "Admin").with_tags(["#Scholarship"])],
        vec![],
    ));

    assert_eq!(controller.trending()[0].label, "Scholarship");
    assert_eq!(controller.catalog().generation(), 1);
}

#[test]
fn refresh_without_tags_falls_back() {
    let mut controller = controller();

    controller.on_catalog_refresh(CatalogSnapshot::empty());

    let labels: Vec<&str> = controller.trending().iter().map(|t| t.label.as_str()).collect();
    assert_eq!(labels, vec!["JEE Preparation", "NEET", "Scholarships"]);
}

#[tokio::test]
async fn refresh_from_repository_keeps_healthy_slices() {
    let mut controller = DiscoveryController::new(
        Catalog::default(),
        HistoryStore::in_memory(),
        TrendingAnalyzer::default(),
    );
    let repo = StaticRepository::new(snapshot()).failing(CatalogSlice::People);

    controller.refresh_from(&repo).await;

    assert!(controller.catalog().people().is_empty());
    assert_eq!(controller.catalog().organizations().len(), 1);
    assert_eq!(controller.catalog().content().len(), 2);
    assert_eq!(controller.trending()[0].label, "JEE");
}

// ===== Configuration =====

#[test]
fn from_config_uses_configured_limits_and_history_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = ResolvedConfig {
        suggestion_limit: 1,
        history_capacity: 2,
        trending_limit: 1,
        history_file_path: dir.path().join("history.json"),
        log_file_path: dir.path().join("scout.log"),
    };
    let mut controller = DiscoveryController::from_config(&config);
    controller.on_catalog_refresh(snapshot());

    assert_eq!(controller.trending().len(), 1);
    assert_eq!(controller.on_query_text_changed("i").len(), 1);

    controller.on_commit("a", Category::All);
    controller.on_commit("b", Category::All);
    controller.on_commit("c", Category::All);
    assert_eq!(controller.history(), ["c", "b"]);

    let reopened = DiscoveryController::from_config(&config);
    assert_eq!(reopened.history(), ["c", "b"]);
}
