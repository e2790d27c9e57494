//! Scenario tests driving the whole dashboard against an in-memory backend.

mod support;

use common::model::capabilities::Capabilities;
use common::model::dataset::DatasetId;
use common::model::preview::TablePreview;
use common::model::relationship::Relationship;
use common::responses::CurrentValue;
use dashboard_sync::datasets::PreviewPane;
use dashboard_sync::listing::Listing;
use dashboard_sync::notifier::{NoticeKind, NoticeScope};
use dashboard_sync::thresholds::LivePreview;
use dashboard_sync::{ClientError, Command, Dashboard, Msg, Request, Settings};
use support::{dataset, offline, rejection, FakeBackend, Harness};

fn sales_and_costs() -> FakeBackend {
    FakeBackend::with_datasets(vec![
        dataset(3, "Sales", &["region", "revenue"]),
        dataset(4, "Costs", &["region", "amount"]),
    ])
}

#[test]
fn initial_load_fetches_capabilities_then_collections_in_order() {
    let harness = Harness::started(sales_and_costs());
    assert_eq!(
        harness.backend.calls(),
        ["capabilities", "datasets", "relationships", "thresholds", "recommendations"]
    );
    assert_eq!(harness.dashboard.cache().count(), 2);
}

#[test]
fn empty_state_hides_both_forms() {
    let harness = Harness::started(FakeBackend::with_datasets(Vec::new()));
    let dashboard = &harness.dashboard;
    assert!(dashboard.datasets().listing().is_empty_state());
    assert!(!dashboard.relationships().form_visible());
    assert!(!dashboard.thresholds().form_visible());
    assert!(dashboard.relationships().listing().is_empty_state());
    assert!(dashboard.thresholds().listing().is_empty_state());
    assert!(dashboard.recommendations().listing().is_empty_state());
}

#[test]
fn single_dataset_shows_threshold_form_only() {
    let harness = Harness::started(FakeBackend::with_datasets(vec![dataset(1, "Sales", &["revenue"])]));
    assert!(harness.dashboard.thresholds().form_visible());
    assert!(!harness.dashboard.relationships().form_visible());
    assert!(harness.dashboard.relationships().list_available_datasets().is_none());
}

#[test]
fn refresh_reevaluates_gates_before_fetching_lists() {
    let mut dashboard = Dashboard::new(Settings::default());
    assert_eq!(dashboard.on_upload_success(), [Command::Fetch(Request::Datasets)]);
    assert!(!dashboard.relationships().form_visible());

    let commands = dashboard.update(Msg::DatasetsLoaded(Ok(vec![
        dataset(1, "A", &["x"]),
        dataset(2, "B", &["y"]),
    ])));
    assert!(dashboard.relationships().form_visible());
    assert!(dashboard.thresholds().form_visible());
    assert_eq!(
        commands,
        [
            Command::Fetch(Request::Relationships),
            Command::Fetch(Request::Thresholds),
            Command::Fetch(Request::Recommendations),
        ]
    );
}

#[test]
fn dataset_failure_does_not_stop_other_refreshes() {
    let backend = sales_and_costs();
    let mut harness = Harness::started(backend);
    *harness.backend.datasets.borrow_mut() = Err(offline());

    harness.dispatch(Msg::Refresh);

    assert_eq!(
        harness.notice_text(NoticeScope::General).as_deref(),
        Some("Failed to load tables. Please check backend connection.")
    );
    assert_eq!(harness.dashboard.cache().count(), 2, "previous snapshot is kept");
    assert_eq!(harness.backend.count("relationships"), 2);
    assert_eq!(harness.backend.count("thresholds"), 2);
    assert_eq!(harness.backend.count("recommendations"), 2);
}

#[test]
fn list_failures_are_isolated_per_collection() {
    let backend = sales_and_costs();
    *backend.relationships.borrow_mut() = Err(offline());
    *backend.thresholds.borrow_mut() = Ok(vec![common::model::threshold::Threshold {
        id: Some(1),
        table_name: "Sales".to_string(),
        column_name: "revenue".to_string(),
        function: "avg".to_string(),
        operator: ">".to_string(),
        value: 1000.0,
    }]);
    let harness = Harness::started(backend);

    assert_eq!(
        harness.notice_text(NoticeScope::Relationship).as_deref(),
        Some("Failed to load relationships. Please check backend connection.")
    );
    assert_eq!(harness.dashboard.relationships().listing(), &Listing::Pending);
    assert_eq!(harness.dashboard.thresholds().listing().items().len(), 1);
    assert!(harness.dashboard.recommendations().listing().is_empty_state());
}

#[test]
fn refreshing_twice_renders_the_same_output() {
    let backend = sales_and_costs();
    *backend.relationships.borrow_mut() = Ok(vec![Relationship {
        id: Some(1),
        source_table_name: "Sales".to_string(),
        source_column: "region".to_string(),
        target_table_name: "Costs".to_string(),
        target_column: "region".to_string(),
    }]);
    let mut harness = Harness::started(backend);

    let snapshot = |d: &Dashboard| {
        (
            d.datasets().listing().clone(),
            d.relationships().listing().clone(),
            d.thresholds().listing().clone(),
            d.recommendations().listing().clone(),
            d.relationships().list_available_datasets().map(|o| o.to_vec()),
        )
    };
    harness.dispatch(Msg::Refresh);
    let first = snapshot(&harness.dashboard);
    harness.dispatch(Msg::Refresh);
    assert_eq!(snapshot(&harness.dashboard), first);
}

#[test]
fn successful_threshold_creation_resets_form_and_refreshes_list() {
    let mut harness = Harness::started(FakeBackend::with_datasets(vec![dataset(3, "Sales", &["region", "revenue"])]));
    *harness.backend.current_value.borrow_mut() = Ok(CurrentValue { current_value: Some(1234.5) });

    harness.dispatch(Msg::ThresholdDatasetChanged("3".to_string()));
    harness.dispatch(Msg::ThresholdColumnChanged("revenue".to_string()));
    harness.dispatch(Msg::ThresholdFunctionChanged("avg".to_string()));
    assert_eq!(harness.dashboard.thresholds().preview().text(), "Current avg(revenue) = 1234.5");

    harness.dispatch(Msg::ThresholdOperatorChanged(">".to_string()));
    harness.dispatch(Msg::ThresholdValueChanged("1000".to_string()));
    harness.dispatch(Msg::ThresholdSubmitted);

    let notice = harness.dashboard.notices().current(NoticeScope::Threshold).cloned().unwrap();
    assert_eq!(notice.text, "Threshold created successfully!");
    assert_eq!(notice.kind, NoticeKind::Success);

    let labels: Vec<_> = harness
        .dashboard
        .thresholds()
        .listing()
        .items()
        .iter()
        .map(|row| row.label.clone())
        .collect();
    assert_eq!(labels, ["avg(Sales.revenue) > 1000"]);

    let thresholds = harness.dashboard.thresholds();
    assert_eq!(thresholds.selector().dataset_value(), "");
    assert_eq!(thresholds.selector().column_value(), "");
    assert_eq!(thresholds.function(), None);
    assert_eq!(thresholds.operator(), None);
    assert_eq!(thresholds.value(), "");
    assert_eq!(thresholds.preview(), &LivePreview::Idle);
}

#[test]
fn non_numeric_threshold_never_reaches_backend() {
    let mut harness = Harness::started(FakeBackend::with_datasets(vec![dataset(3, "Sales", &["revenue"])]));
    harness.dispatch(Msg::ThresholdDatasetChanged("3".to_string()));
    harness.dispatch(Msg::ThresholdColumnChanged("revenue".to_string()));
    harness.dispatch(Msg::ThresholdFunctionChanged("avg".to_string()));
    harness.dispatch(Msg::ThresholdOperatorChanged(">".to_string()));
    harness.dispatch(Msg::ThresholdValueChanged("a lot".to_string()));
    harness.dispatch(Msg::ThresholdSubmitted);

    assert_eq!(harness.backend.count("create_threshold"), 0);
    assert_eq!(
        harness.notice_text(NoticeScope::Threshold).as_deref(),
        Some("Threshold value must be a number.")
    );
}

#[test]
fn live_preview_shows_backend_error_in_error_state() {
    let mut harness = Harness::started(FakeBackend::with_datasets(vec![dataset(3, "Sales", &["region"])]));
    *harness.backend.current_value.borrow_mut() = Err(rejection(400, "unsupported function"));

    harness.dispatch(Msg::ThresholdDatasetChanged("3".to_string()));
    harness.dispatch(Msg::ThresholdColumnChanged("region".to_string()));
    harness.dispatch(Msg::ThresholdFunctionChanged("sum".to_string()));

    let preview = harness.dashboard.thresholds().preview();
    assert_eq!(preview.text(), "Error: unsupported function");
    assert!(preview.is_error());
}

#[test]
fn incomplete_preview_selection_issues_no_request() {
    let mut harness = Harness::started(FakeBackend::with_datasets(vec![dataset(3, "Sales", &["region"])]));
    harness.dispatch(Msg::ThresholdDatasetChanged("3".to_string()));
    harness.dispatch(Msg::ThresholdFunctionChanged("avg".to_string()));
    harness.dispatch(Msg::ThresholdColumnChanged("".to_string()));
    assert_eq!(harness.backend.count("current_value"), 0);
    assert_eq!(harness.dashboard.thresholds().preview(), &LivePreview::Idle);
}

#[test]
fn late_preview_response_for_old_selection_is_ignored() {
    let mut harness = Harness::started(FakeBackend::with_datasets(vec![dataset(3, "Sales", &["revenue"])]));
    harness.dispatch(Msg::ThresholdDatasetChanged("3".to_string()));
    harness.dispatch(Msg::ThresholdColumnChanged("revenue".to_string()));

    let first = harness.dashboard.update(Msg::ThresholdFunctionChanged("avg".to_string()));
    let second = harness.dashboard.update(Msg::ThresholdFunctionChanged("max".to_string()));
    let (Command::Fetch(Request::CurrentValue { token: old, query: old_query }), Command::Fetch(Request::CurrentValue { token: new, query: new_query })) =
        (&first[0], &second[0])
    else {
        panic!("expected two preview requests, got {first:?} and {second:?}");
    };

    harness.dashboard.update(Msg::CurrentValueLoaded {
        token: *new,
        query: new_query.clone(),
        result: Ok(CurrentValue { current_value: Some(99.0) }),
    });
    harness.dashboard.update(Msg::CurrentValueLoaded {
        token: *old,
        query: old_query.clone(),
        result: Ok(CurrentValue { current_value: Some(1.0) }),
    });
    assert_eq!(harness.dashboard.thresholds().preview().text(), "Current max(revenue) = 99");
}

#[test]
fn identical_relationship_is_rejected_locally() {
    let mut harness = Harness::started(sales_and_costs());
    harness.dispatch(Msg::RelationshipSourceDatasetChanged("3".to_string()));
    harness.dispatch(Msg::RelationshipSourceColumnChanged("region".to_string()));
    harness.dispatch(Msg::RelationshipTargetDatasetChanged("3".to_string()));
    harness.dispatch(Msg::RelationshipTargetColumnChanged("region".to_string()));
    harness.dispatch(Msg::RelationshipSubmitted);

    assert_eq!(harness.backend.count("create_relationship"), 0);
    assert_eq!(
        harness.notice_text(NoticeScope::Relationship).as_deref(),
        Some("Source and Target relationship cannot be identical.")
    );
}

#[test]
fn created_relationship_clears_form_and_appears_in_list() {
    let mut harness = Harness::started(sales_and_costs());
    harness.dispatch(Msg::RelationshipSourceDatasetChanged("3".to_string()));
    harness.dispatch(Msg::RelationshipSourceColumnChanged("region".to_string()));
    harness.dispatch(Msg::RelationshipTargetDatasetChanged("4".to_string()));
    harness.dispatch(Msg::RelationshipTargetColumnChanged("region".to_string()));
    harness.dispatch(Msg::RelationshipSubmitted);

    assert_eq!(
        harness.notice_text(NoticeScope::Relationship).as_deref(),
        Some("Relationship created successfully!")
    );
    let rows = harness.dashboard.relationships().listing().items();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].source_label(), "Sales.region");
    assert_eq!(rows[0].target_label(), "Costs.region");

    let relationships = harness.dashboard.relationships();
    assert_eq!(relationships.source().selection(), None);
    assert_eq!(relationships.target().selection(), None);
    assert!(relationships.source().column_options().is_empty());
    assert_eq!(relationships.source().dataset_options().len(), 2);
}

#[test]
fn backend_rejection_is_shown_verbatim() {
    let mut harness = Harness::started(sales_and_costs());
    *harness.backend.create_relationship.borrow_mut() = Err(rejection(409, "Relationship already exists."));
    harness.dispatch(Msg::RelationshipSourceDatasetChanged("3".to_string()));
    harness.dispatch(Msg::RelationshipSourceColumnChanged("region".to_string()));
    harness.dispatch(Msg::RelationshipTargetDatasetChanged("4".to_string()));
    harness.dispatch(Msg::RelationshipTargetColumnChanged("amount".to_string()));
    harness.dispatch(Msg::RelationshipSubmitted);

    assert_eq!(
        harness.notice_text(NoticeScope::Relationship).as_deref(),
        Some("Relationship already exists.")
    );
    assert_eq!(
        harness.dashboard.relationships().source().selection(),
        Some((DatasetId(3), "region")),
        "a rejected submission keeps the form"
    );
}

#[test]
fn unreachable_backend_on_create_uses_connection_message() {
    let mut harness = Harness::started(sales_and_costs());
    *harness.backend.create_threshold.borrow_mut() = Err(offline());
    harness.dispatch(Msg::ThresholdDatasetChanged("4".to_string()));
    harness.dispatch(Msg::ThresholdColumnChanged("amount".to_string()));
    harness.dispatch(Msg::ThresholdFunctionChanged("sum".to_string()));
    harness.dispatch(Msg::ThresholdOperatorChanged("<".to_string()));
    harness.dispatch(Msg::ThresholdValueChanged("5".to_string()));
    harness.dispatch(Msg::ThresholdSubmitted);

    assert_eq!(
        harness.notice_text(NoticeScope::Threshold).as_deref(),
        Some("Failed to connect to the server. Could not add threshold.")
    );
}

#[test]
fn upload_without_files_is_rejected_locally() {
    let mut harness = Harness::started(sales_and_costs());
    harness.dispatch(Msg::UploadRequested { file_count: 0 });
    assert_eq!(harness.uploads, 0);
    assert_eq!(
        harness.notice_text(NoticeScope::General).as_deref(),
        Some("Please select CSV files to upload.")
    );
}

#[test]
fn successful_upload_triggers_full_refresh() {
    let mut harness = Harness::started(FakeBackend::with_datasets(vec![dataset(3, "Sales", &["revenue"])]));
    *harness.backend.datasets.borrow_mut() = Ok(vec![
        dataset(3, "Sales", &["revenue"]),
        dataset(5, "Targets", &["revenue"]),
    ]);

    harness.dispatch(Msg::UploadRequested { file_count: 1 });

    assert_eq!(harness.uploads, 1);
    assert_eq!(harness.notice_text(NoticeScope::General).as_deref(), Some("Files uploaded"));
    assert_eq!(harness.backend.count("datasets"), 2);
    assert!(harness.dashboard.relationships().form_visible());
    assert_eq!(harness.dashboard.datasets().listing().items().len(), 2);
}

#[test]
fn notice_clears_only_for_latest_generation() {
    let mut harness = Harness::started(sales_and_costs());
    harness.dispatch(Msg::UploadRequested { file_count: 0 });
    harness.dispatch(Msg::RelationshipSubmitted);
    harness.dispatch(Msg::UploadRequested { file_count: 0 });

    let generations: Vec<(NoticeScope, u64)> = harness
        .expiries
        .iter()
        .filter_map(|c| match c {
            Command::ExpireNotice { scope, generation, after_ms } => {
                assert_eq!(*after_ms, 5000);
                Some((*scope, *generation))
            }
            _ => None,
        })
        .collect();
    assert_eq!(generations.len(), 3);

    let (scope, stale) = generations[0];
    harness.dispatch(Msg::NoticeExpired { scope, generation: stale });
    assert!(harness.notice_text(NoticeScope::General).is_some());

    let (scope, latest) = generations[2];
    harness.dispatch(Msg::NoticeExpired { scope, generation: latest });
    assert!(harness.notice_text(NoticeScope::General).is_none());
    assert!(harness.notice_text(NoticeScope::Relationship).is_some());
}

#[test]
fn preview_pane_opens_with_rows() {
    let mut harness = Harness::started(sales_and_costs());
    let mut row = serde_json::Map::new();
    row.insert("region".to_string(), serde_json::json!("north"));
    row.insert("revenue".to_string(), serde_json::json!(12.5));
    *harness.backend.preview.borrow_mut() = Ok(TablePreview {
        table_name: "Sales".to_string(),
        columns: vec!["region".to_string(), "revenue".to_string()],
        data: vec![row],
    });

    harness.dispatch(Msg::PreviewRequested(DatasetId(3)));
    let pane = harness.dashboard.datasets().preview();
    assert_eq!(pane.title(), "Data Preview: Sales");
    let PreviewPane::Open(preview) = pane else {
        panic!("preview not open: {pane:?}");
    };
    assert_eq!(preview.cell(0, "revenue"), "12.5");

    harness.dispatch(Msg::PreviewClosed);
    assert_eq!(harness.dashboard.datasets().preview(), &PreviewPane::Closed);
}

#[test]
fn failed_preview_closes_pane_and_reports() {
    let mut harness = Harness::started(sales_and_costs());
    harness.dispatch(Msg::PreviewRequested(DatasetId(99)));
    assert_eq!(harness.dashboard.datasets().preview(), &PreviewPane::Closed);
    assert_eq!(harness.notice_text(NoticeScope::General).as_deref(), Some("Table not found"));
}

#[test]
fn capabilities_failure_leaves_function_options_empty() {
    let backend = sales_and_costs();
    *backend.capabilities.borrow_mut() = Err(offline());
    let mut harness = Harness::started(backend);

    assert!(harness.dashboard.thresholds().capabilities().functions.is_empty());
    assert_eq!(
        harness.notice_text(NoticeScope::Threshold).as_deref(),
        Some("Failed to load threshold options. Please check backend connection.")
    );
    harness.dispatch(Msg::ThresholdFunctionChanged("avg".to_string()));
    assert_eq!(harness.dashboard.thresholds().function(), None);
}

fn fill_threshold_form(harness: &mut Harness) {
    harness.dispatch(Msg::ThresholdDatasetChanged("3".to_string()));
    harness.dispatch(Msg::ThresholdColumnChanged("revenue".to_string()));
    harness.dispatch(Msg::ThresholdFunctionChanged("avg".to_string()));
    harness.dispatch(Msg::ThresholdOperatorChanged(">".to_string()));
    harness.dispatch(Msg::ThresholdValueChanged("1000".to_string()));
}

#[test]
fn threshold_rejection_is_shown_verbatim_and_form_is_kept() {
    let mut harness = Harness::started(FakeBackend::with_datasets(vec![dataset(3, "Sales", &["revenue"])]));
    *harness.backend.create_threshold.borrow_mut() = Err(rejection(
        409,
        "A threshold already exists for this column with this function in this table.",
    ));
    fill_threshold_form(&mut harness);
    harness.dispatch(Msg::ThresholdSubmitted);

    let notice = harness.dashboard.notices().current(NoticeScope::Threshold).cloned().unwrap();
    assert_eq!(
        notice.text,
        "A threshold already exists for this column with this function in this table."
    );
    assert_eq!(notice.kind, NoticeKind::Error);

    let thresholds = harness.dashboard.thresholds();
    assert_eq!(thresholds.selector().selection(), Some((DatasetId(3), "revenue")));
    assert_eq!(thresholds.function(), Some("avg"));
    assert_eq!(thresholds.operator(), Some(">"));
    assert_eq!(thresholds.value(), "1000");
    assert_eq!(harness.backend.count("thresholds"), 1, "no list refresh after a rejection");
}

#[test]
fn upload_rejection_without_message_uses_generic_text() {
    let mut harness = Harness::started(sales_and_costs());
    harness.upload_result = Err(ClientError::BackendRejection {
        status: 500,
        message: None,
    });

    harness.dispatch(Msg::UploadRequested { file_count: 2 });

    assert_eq!(harness.uploads, 1);
    let notice = harness.dashboard.notices().current(NoticeScope::General).cloned().unwrap();
    assert_eq!(notice.text, "An unknown error occurred during upload.");
    assert_eq!(notice.kind, NoticeKind::Error);
    assert_eq!(harness.backend.count("datasets"), 1, "a failed upload does not refresh");
}

#[test]
fn upload_transport_failure_asks_whether_backend_runs() {
    let mut harness = Harness::started(sales_and_costs());
    harness.upload_result = Err(offline());

    harness.dispatch(Msg::UploadRequested { file_count: 1 });

    assert_eq!(
        harness.notice_text(NoticeScope::General).as_deref(),
        Some("Failed to connect to the server for upload. Is the backend running?")
    );
    assert_eq!(harness.backend.count("datasets"), 1);
}

#[test]
fn upload_form_failure_is_not_reported_as_connection_problem() {
    let mut harness = Harness::started(sales_and_costs());
    harness.upload_result = Err(ClientError::LocalFailure("FormData unavailable".to_string()));

    harness.dispatch(Msg::UploadRequested { file_count: 1 });

    assert_eq!(
        harness.notice_text(NoticeScope::General).as_deref(),
        Some("An unknown error occurred during upload.")
    );
}

#[test]
fn configured_options_stand_in_for_missing_capabilities_route() {
    let backend = FakeBackend::with_datasets(vec![dataset(3, "Sales", &["revenue"])]);
    *backend.capabilities.borrow_mut() = Err(rejection(404, "Not Found"));
    let settings = Settings {
        notice_timeout_ms: 5000,
        fallback_capabilities: Capabilities {
            functions: ["AVG", "MAX", "MIN", "SUM", "COUNT"].map(String::from).to_vec(),
            operators: [">", "<", "="].map(String::from).to_vec(),
        },
    };
    let mut harness = Harness::with_settings(backend, settings).start();

    assert!(harness.notice_text(NoticeScope::Threshold).is_none());
    assert_eq!(harness.dashboard.thresholds().capabilities().functions.len(), 5);

    harness.dispatch(Msg::ThresholdDatasetChanged("3".to_string()));
    harness.dispatch(Msg::ThresholdColumnChanged("revenue".to_string()));
    harness.dispatch(Msg::ThresholdFunctionChanged("AVG".to_string()));
    assert_eq!(harness.dashboard.thresholds().function(), Some("AVG"));
    assert_eq!(harness.backend.count("current_value"), 1);
}

#[test]
fn failed_first_load_leaves_cache_unloaded() {
    let backend = sales_and_costs();
    *backend.datasets.borrow_mut() = Err(offline());
    let harness = Harness::started(backend);

    assert!(!harness.dashboard.cache().is_loaded());
    assert!(!harness.dashboard.relationships().form_visible());
    assert_eq!(harness.dashboard.datasets().listing(), &Listing::Pending);

    let loaded = Harness::started(FakeBackend::with_datasets(Vec::new()));
    assert!(loaded.dashboard.cache().is_loaded());
}
