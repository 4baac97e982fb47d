//! Listing and write operations against an in-memory SQLite database.
//!
//! Tables are created straight from the entities, so no migrations or
//! running server are needed.
//!
//! Run with: `cargo test --test listing_test`
use chrono::{DateTime, Duration, TimeZone, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ConnectOptions, ConnectionTrait, Database,
    DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, Schema,
};
use tracing_subscriber::EnvFilter;

use referral_service::db::{campaigns, event_logs, events, referees, referrers, rewards};
use referral_service::error::{Error, RequestError};
use referral_service::models;
use referral_service::request::{
    CreateCampaignRequest, CreateEventLogRequest, CreateEventRequest, CreateRefereeRequest,
    CreateReferrerRequest, GetCampaignsRequest, GetEventLogRequest, GetEventsRequest,
    GetRefereeRequest, GetReferrerRequest, GetRewardRequest, PaginationConditions, SortOrder,
    UpdateCampaignRequest, UpdateReferrerRequest,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A single-connection in-memory database with every table created.
async fn setup() -> DatabaseConnection {
    init_tracing();

    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).min_connections(1).sqlx_logging(false);
    let db = Database::connect(options).await.unwrap();

    let backend = db.get_database_backend();
    let schema = Schema::new(backend);
    let tables = [
        schema.create_table_from_entity(models::events::Entity),
        schema.create_table_from_entity(models::campaigns::Entity),
        schema.create_table_from_entity(models::campaign_events::Entity),
        schema.create_table_from_entity(models::referrers::Entity),
        schema.create_table_from_entity(models::referrer_campaigns::Entity),
        schema.create_table_from_entity(models::referees::Entity),
        schema.create_table_from_entity(models::rewards::Entity),
        schema.create_table_from_entity(models::event_logs::Entity),
    ];
    for table in &tables {
        db.execute(backend.build(table)).await.unwrap();
    }

    db
}

fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

/// Seed 25 events with ids 1..=25. Names are a permutation of
/// `event-00..event-24`, so name order differs from id order. Row `i` is
/// created and updated `i` days after `base_time()`; ids <= 12 belong to
/// project "shop", the rest to "blog".
async fn seed_events(db: &DatabaseConnection) {
    let rows = (1..=25).map(|i: i64| {
        let at = base_time() + Duration::days(i);
        models::events::ActiveModel {
            project: Set(if i <= 12 { "shop" } else { "blog" }.to_string()),
            key: Set(format!("key-{i}")),
            name: Set(format!("event-{:02}", (i * 7) % 25)),
            event_type: Set("simple".to_string()),
            description: Set(None),
            created_at: Set(at),
            updated_at: Set(at),
            ..Default::default()
        }
    });
    models::events::Entity::insert_many(rows)
        .exec(db)
        .await
        .unwrap();
}

fn with_conditions(conditions: PaginationConditions) -> GetEventsRequest {
    GetEventsRequest {
        pagination_conditions: conditions,
        ..Default::default()
    }
}

async fn event_ids(db: &DatabaseConnection, request: &GetEventsRequest) -> Vec<i32> {
    events::find_events(db, request)
        .await
        .unwrap()
        .into_iter()
        .map(|event| event.id)
        .collect()
}

// ── Pagination behaviour ──

#[tokio::test]
async fn test_no_conditions_returns_everything_id_desc() {
    let db = setup().await;
    seed_events(&db).await;

    let ids = event_ids(&db, &GetEventsRequest::default()).await;
    assert_eq!(ids, (1..=25).rev().collect::<Vec<_>>());
}

#[tokio::test]
async fn test_limit_sort_by_name_ascending() {
    let db = setup().await;
    seed_events(&db).await;

    let request = with_conditions(PaginationConditions {
        limit: Some(10),
        sort_by: Some("name".to_string()),
        order: Some(SortOrder::Asc),
        ..Default::default()
    });
    let names: Vec<String> = events::find_events(&db, &request)
        .await
        .unwrap()
        .into_iter()
        .map(|event| event.name)
        .collect();

    let expected: Vec<String> = (0..10).map(|n| format!("event-{n:02}")).collect();
    assert_eq!(names, expected);
}

#[tokio::test]
async fn test_cursor_window_is_exclusive() {
    let db = setup().await;
    seed_events(&db).await;

    let request = with_conditions(PaginationConditions {
        greater_than_id: Some(3),
        less_than_id: Some(8),
        ..Default::default()
    });
    assert_eq!(event_ids(&db, &request).await, vec![7, 6, 5, 4]);
}

#[tokio::test]
async fn test_offset_and_limit() {
    let db = setup().await;
    seed_events(&db).await;

    let first_page = with_conditions(PaginationConditions {
        offset: Some(0),
        limit: Some(5),
        ..Default::default()
    });
    assert_eq!(event_ids(&db, &first_page).await, vec![25, 24, 23, 22, 21]);

    let second_page = with_conditions(PaginationConditions {
        offset: Some(5),
        limit: Some(5),
        ..Default::default()
    });
    assert_eq!(event_ids(&db, &second_page).await, vec![20, 19, 18, 17, 16]);
}

#[tokio::test]
async fn test_non_positive_limit_is_unbounded() {
    let db = setup().await;
    seed_events(&db).await;

    for limit in [0, -3] {
        let request = with_conditions(PaginationConditions {
            limit: Some(limit),
            ..Default::default()
        });
        assert_eq!(event_ids(&db, &request).await.len(), 25, "limit {limit}");
    }
}

#[tokio::test]
async fn test_date_bounds_are_inclusive() {
    let db = setup().await;
    seed_events(&db).await;

    let request = with_conditions(PaginationConditions {
        created_after: Some(base_time() + Duration::days(10)),
        updated_before: Some(base_time() + Duration::days(13)),
        order: Some(SortOrder::Asc),
        ..Default::default()
    });
    assert_eq!(event_ids(&db, &request).await, vec![10, 11, 12, 13]);
}

#[tokio::test]
async fn test_entity_filters_only_narrow() {
    let db = setup().await;
    seed_events(&db).await;

    let request = GetEventsRequest {
        projects: vec!["shop".to_string()],
        pagination_conditions: PaginationConditions {
            greater_than_id: Some(9),
            ..Default::default()
        },
        ..Default::default()
    };
    assert_eq!(event_ids(&db, &request).await, vec![12, 11, 10]);

    let shop_only = GetEventsRequest {
        projects: vec!["shop".to_string()],
        ..Default::default()
    };
    let everything = event_ids(&db, &GetEventsRequest::default()).await;
    for id in event_ids(&db, &shop_only).await {
        assert!(everything.contains(&id));
    }
}

#[tokio::test]
async fn test_repeated_listing_is_stable() {
    let db = setup().await;
    seed_events(&db).await;

    let request = with_conditions(PaginationConditions {
        limit: Some(7),
        sort_by: Some("name".to_string()),
        ..Default::default()
    });
    assert_eq!(event_ids(&db, &request).await, event_ids(&db, &request).await);
}

#[tokio::test]
async fn test_unknown_sort_field_never_reaches_the_database() {
    let db = setup().await;

    let request = with_conditions(PaginationConditions {
        sort_by: Some("nope".to_string()),
        ..Default::default()
    });
    let err = events::find_events(&db, &request).await.unwrap_err();
    assert!(matches!(
        err,
        Error::Request(RequestError::UnknownSortField(ref field)) if field == "nope"
    ));
}

// ── Writes ──

fn campaign_request(name: &str, event_keys: &[&str]) -> CreateCampaignRequest {
    CreateCampaignRequest {
        name: name.to_string(),
        reward_type: "flat_fee".to_string(),
        reward_value: 10.0,
        reward_cap: None,
        invitee_reward_type: None,
        invitee_reward_value: None,
        invitee_reward_cap: None,
        budget: Some(1000.0),
        description: None,
        start_date: None,
        end_date: None,
        is_default: false,
        campaign_type_per_customer: "one_time".to_string(),
        validity_months_per_customer: None,
        max_occurrences_per_customer: None,
        reward_cap_per_customer: None,
        event_keys: event_keys.iter().map(|k| k.to_string()).collect(),
    }
}

async fn create_event(db: &DatabaseConnection, project: &str, key: &str) -> i32 {
    events::insert_event(
        db,
        project,
        CreateEventRequest {
            key: key.to_string(),
            name: key.to_uppercase(),
            event_type: "simple".to_string(),
            description: None,
        },
    )
    .await
    .unwrap()
    .id
}

#[tokio::test]
async fn test_campaign_links_events_by_key() {
    let db = setup().await;
    let signup = create_event(&db, "shop", "signup").await;
    let purchase = create_event(&db, "shop", "purchase").await;

    let campaign = campaigns::insert_campaign(&db, "shop", campaign_request("Launch", &["signup"]))
        .await
        .unwrap();
    assert_eq!(campaign.project, "shop");
    assert_eq!(
        campaigns::campaign_event_ids(&db, campaign.id).await.unwrap(),
        vec![signup]
    );

    let updated = campaigns::update_campaign(
        &db,
        campaign.id,
        UpdateCampaignRequest {
            status: Some("paused".to_string()),
            event_keys: Some(vec!["purchase".to_string(), "signup".to_string()]),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(updated.status, "paused");
    assert_eq!(updated.name, "Launch");

    let mut expected = vec![signup, purchase];
    expected.sort();
    assert_eq!(
        campaigns::campaign_event_ids(&db, campaign.id).await.unwrap(),
        expected
    );
}

#[tokio::test]
async fn test_campaign_with_unknown_event_key_is_rolled_back() {
    let db = setup().await;
    create_event(&db, "shop", "signup").await;
    // Same key in another project does not count.
    create_event(&db, "blog", "purchase").await;

    let err = campaigns::insert_campaign(&db, "shop", campaign_request("Bad", &["signup", "purchase"]))
        .await
        .unwrap_err();
    assert!(matches!(err, DbErr::RecordNotFound(ref msg) if msg.contains("purchase")));

    let count = models::campaigns::Entity::find().count(&db).await.unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn test_referrer_and_referee_flow() {
    let db = setup().await;
    let campaign = campaigns::insert_campaign(&db, "shop", campaign_request("Friends", &[]))
        .await
        .unwrap();

    let alice = referrers::insert_referrer(
        &db,
        "shop",
        CreateReferrerRequest {
            reference_id: "cust-1".to_string(),
            code: Some("ALICE".to_string()),
            campaign_ids: vec![campaign.id, campaign.id],
            email: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(
        referrers::referrer_campaign_ids(&db, alice.id).await.unwrap(),
        vec![campaign.id]
    );

    let bob = referrers::insert_referrer(
        &db,
        "shop",
        CreateReferrerRequest {
            reference_id: "cust-2".to_string(),
            code: None,
            campaign_ids: Vec::new(),
            email: Some("bob@example.com".to_string()),
        },
    )
    .await
    .unwrap();
    assert_eq!(bob.code.len(), 8);

    let updated = referrers::update_referrer(
        &db,
        bob.id,
        UpdateReferrerRequest {
            campaign_ids: Some(vec![campaign.id]),
            email: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(updated.email.as_deref(), Some("bob@example.com"));
    assert_eq!(
        referrers::referrer_campaign_ids(&db, bob.id).await.unwrap(),
        vec![campaign.id]
    );

    let carol = referees::insert_referee(
        &db,
        "shop",
        CreateRefereeRequest {
            reference_id: "cust-3".to_string(),
            code: "ALICE".to_string(),
            email: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(carol.referrer_id, alice.id);

    let missing = referees::insert_referee(
        &db,
        "blog",
        CreateRefereeRequest {
            reference_id: "cust-4".to_string(),
            code: "ALICE".to_string(),
            email: None,
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(missing, DbErr::RecordNotFound(_)));

    let by_referrer = referees::find_referees(
        &db,
        &GetRefereeRequest {
            referrer_reference_id: Some("cust-1".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(by_referrer.len(), 1);
    assert_eq!(by_referrer[0].id, carol.id);

    let none = referees::find_referees(
        &db,
        &GetRefereeRequest {
            referrer_reference_id: Some("cust-2".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert!(none.is_empty());
}

#[tokio::test]
async fn test_event_logs_start_pending() {
    let db = setup().await;

    let logs = [("signup", "cust-1"), ("purchase", "cust-1"), ("signup", "cust-2")];
    for (key, reference_id) in logs {
        event_logs::insert_event_log(
            &db,
            "shop",
            CreateEventLogRequest {
                event_key: key.to_string(),
                reference_id: reference_id.to_string(),
                amount: None,
                data: Some(r#"{"source":"web"}"#.to_string()),
            },
        )
        .await
        .unwrap();
    }

    let signups = event_logs::find_event_logs(
        &db,
        &GetEventLogRequest {
            event_key: Some("signup".to_string()),
            status: Some("pending".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    assert_eq!(signups.len(), 2);
    assert!(signups.iter().all(|log| log.reward_id.is_none()));
    assert_eq!(signups[0].reference_id, "cust-2");
    assert_eq!(signups[1].reference_id, "cust-1");

    let purchase = event_logs::get_event_log_by_id(&db, 2).await.unwrap().unwrap();
    assert_eq!(purchase.event_key, "purchase");
    assert!(event_logs::get_event_log_by_id(&db, 4).await.unwrap().is_none());
}

#[tokio::test]
async fn test_created_before_and_updated_after() {
    let db = setup().await;
    seed_events(&db).await;

    let early = with_conditions(PaginationConditions {
        created_before: Some(base_time() + Duration::days(3)),
        ..Default::default()
    });
    assert_eq!(event_ids(&db, &early).await, vec![3, 2, 1]);

    let late = with_conditions(PaginationConditions {
        updated_after: Some(base_time() + Duration::days(23)),
        ..Default::default()
    });
    assert_eq!(event_ids(&db, &late).await, vec![25, 24, 23]);

    assert_eq!(events::get_event_by_id(&db, 25).await.unwrap().unwrap().key, "key-25");
    assert!(events::get_event_by_id(&db, 26).await.unwrap().is_none());
}

// ── Uniqueness and project scoping ──

fn referrer_request(reference_id: &str, code: &str, campaign_ids: Vec<i32>) -> CreateReferrerRequest {
    CreateReferrerRequest {
        reference_id: reference_id.to_string(),
        code: Some(code.to_string()),
        campaign_ids,
        email: None,
    }
}

#[tokio::test]
async fn test_duplicate_event_key_is_rejected() {
    let db = setup().await;
    create_event(&db, "shop", "signup").await;

    let err = events::insert_event(
        &db,
        "shop",
        CreateEventRequest {
            key: "signup".to_string(),
            name: "Again".to_string(),
            event_type: "simple".to_string(),
            description: None,
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, DbErr::Custom(ref msg) if msg.contains("signup")));

    // The same key is fine in another project.
    create_event(&db, "blog", "signup").await;
    let count = models::events::Entity::find().count(&db).await.unwrap();
    assert_eq!(count, 2);
}

#[tokio::test]
async fn test_duplicate_referrer_code_is_rejected() {
    let db = setup().await;
    let alice = referrers::insert_referrer(&db, "shop", referrer_request("cust-1", "ALICE", vec![]))
        .await
        .unwrap();

    let err = referrers::insert_referrer(&db, "shop", referrer_request("cust-2", "ALICE", vec![]))
        .await
        .unwrap_err();
    assert!(matches!(err, DbErr::Custom(ref msg) if msg.contains("ALICE")));

    referrers::insert_referrer(&db, "blog", referrer_request("cust-2", "ALICE", vec![]))
        .await
        .unwrap();

    let referee = referees::insert_referee(
        &db,
        "shop",
        CreateRefereeRequest {
            reference_id: "cust-9".to_string(),
            code: "ALICE".to_string(),
            email: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(referee.referrer_id, alice.id);
    assert_eq!(
        referees::get_referee_by_id(&db, referee.id).await.unwrap().unwrap().reference_id,
        "cust-9"
    );
}

#[tokio::test]
async fn test_referrer_cannot_join_foreign_campaign() {
    let db = setup().await;
    let blog_campaign = campaigns::insert_campaign(&db, "blog", campaign_request("Blog", &[]))
        .await
        .unwrap();

    let err = referrers::insert_referrer(
        &db,
        "shop",
        referrer_request("cust-1", "ALICE", vec![blog_campaign.id]),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, DbErr::RecordNotFound(_)));
    let count = models::referrers::Entity::find().count(&db).await.unwrap();
    assert_eq!(count, 0);

    let alice = referrers::insert_referrer(&db, "shop", referrer_request("cust-1", "ALICE", vec![]))
        .await
        .unwrap();
    let err = referrers::update_referrer(
        &db,
        alice.id,
        UpdateReferrerRequest {
            campaign_ids: Some(vec![blog_campaign.id + 100]),
            email: None,
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, DbErr::RecordNotFound(_)));
    assert!(referrers::referrer_campaign_ids(&db, alice.id).await.unwrap().is_empty());
}

// ── Entity filters ──

#[tokio::test]
async fn test_campaign_filters() {
    let db = setup().await;

    // Campaign `i` (id i + 1) starts on day i and ends on day 10 + i.
    for i in 0..5 {
        let mut request = campaign_request(&format!("campaign-{i}"), &[]);
        request.start_date = Some(base_time() + Duration::days(i));
        request.end_date = Some(base_time() + Duration::days(10 + i));
        request.is_default = i == 4;
        campaigns::insert_campaign(&db, "shop", request).await.unwrap();
    }
    campaigns::update_campaign(
        &db,
        2,
        UpdateCampaignRequest {
            status: Some("paused".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let ids = |campaigns: Vec<models::campaigns::Model>| -> Vec<i32> {
        campaigns.into_iter().map(|campaign| campaign.id).collect()
    };

    let starts = GetCampaignsRequest {
        start_date_min: Some(base_time() + Duration::days(1)),
        start_date_max: Some(base_time() + Duration::days(3)),
        ..Default::default()
    };
    assert_eq!(ids(campaigns::find_campaigns(&db, &starts).await.unwrap()), vec![4, 3, 2]);

    let ends = GetCampaignsRequest {
        end_date_min: Some(base_time() + Duration::days(13)),
        end_date_max: Some(base_time() + Duration::days(14)),
        ..Default::default()
    };
    assert_eq!(ids(campaigns::find_campaigns(&db, &ends).await.unwrap()), vec![5, 4]);

    let paused = GetCampaignsRequest {
        status: Some("paused".to_string()),
        ..Default::default()
    };
    assert_eq!(ids(campaigns::find_campaigns(&db, &paused).await.unwrap()), vec![2]);

    let defaults = GetCampaignsRequest {
        is_default: Some(true),
        ..Default::default()
    };
    assert_eq!(ids(campaigns::find_campaigns(&db, &defaults).await.unwrap()), vec![5]);

    let elsewhere = GetCampaignsRequest {
        projects: vec!["blog".to_string()],
        ..Default::default()
    };
    assert!(campaigns::find_campaigns(&db, &elsewhere).await.unwrap().is_empty());

    assert!(campaigns::get_campaign_by_id(&db, 5).await.unwrap().unwrap().is_default);
    assert!(campaigns::get_campaign_by_id(&db, 6).await.unwrap().is_none());
}

#[tokio::test]
async fn test_referrer_filters() {
    let db = setup().await;
    let alice = referrers::insert_referrer(&db, "shop", referrer_request("cust-1", "ALICE", vec![]))
        .await
        .unwrap();
    let blog_alice = referrers::insert_referrer(&db, "blog", referrer_request("cust-1", "ALICE", vec![]))
        .await
        .unwrap();
    referrers::insert_referrer(&db, "shop", referrer_request("cust-2", "BOB", vec![]))
        .await
        .unwrap();

    let ids = |referrers: Vec<models::referrers::Model>| -> Vec<i32> {
        referrers.into_iter().map(|referrer| referrer.id).collect()
    };

    let by_code = GetReferrerRequest {
        code: Some("ALICE".to_string()),
        ..Default::default()
    };
    assert_eq!(
        ids(referrers::find_referrers(&db, &by_code).await.unwrap()),
        vec![blog_alice.id, alice.id]
    );

    let in_shop = GetReferrerRequest {
        projects: vec!["shop".to_string()],
        reference_id: Some("cust-1".to_string()),
        ..Default::default()
    };
    assert_eq!(ids(referrers::find_referrers(&db, &in_shop).await.unwrap()), vec![alice.id]);

    assert_eq!(
        referrers::get_referrer_by_id(&db, alice.id).await.unwrap().unwrap().code,
        "ALICE"
    );
}

/// Rows for the reward filter tests. Inserts rewards with ids 1..=4:
/// 1: shop, referrer shop/cust-1 (ALICE), referee shop/cust-9, pending
/// 2: blog, referrer blog/cust-1 (ALICE), referee blog/cust-9, paid
/// 3: blog, referrer blog/cust-2 (BOB), paid
/// 4: shop, referrer blog/cust-2 (BOB), pending
async fn seed_rewards(db: &DatabaseConnection) {
    let shop_campaign = campaigns::insert_campaign(db, "shop", campaign_request("Shop", &[]))
        .await
        .unwrap();
    let blog_campaign = campaigns::insert_campaign(db, "blog", campaign_request("Blog", &[]))
        .await
        .unwrap();

    let shop_alice = referrers::insert_referrer(db, "shop", referrer_request("cust-1", "ALICE", vec![]))
        .await
        .unwrap();
    let blog_alice = referrers::insert_referrer(db, "blog", referrer_request("cust-1", "ALICE", vec![]))
        .await
        .unwrap();
    let blog_bob = referrers::insert_referrer(db, "blog", referrer_request("cust-2", "BOB", vec![]))
        .await
        .unwrap();

    let mut referee_ids = Vec::new();
    for project in ["shop", "blog"] {
        let referee = referees::insert_referee(
            db,
            project,
            CreateRefereeRequest {
                reference_id: "cust-9".to_string(),
                code: "ALICE".to_string(),
                email: None,
            },
        )
        .await
        .unwrap();
        referee_ids.push(referee.id);
    }

    let rows = [
        ("shop", shop_campaign.id, shop_alice.id, Some(referee_ids[0]), "pending"),
        ("blog", blog_campaign.id, blog_alice.id, Some(referee_ids[1]), "paid"),
        ("blog", blog_campaign.id, blog_bob.id, None, "paid"),
        ("shop", shop_campaign.id, blog_bob.id, None, "pending"),
    ];
    for (project, campaign_id, referrer_id, referee_id, status) in rows {
        models::rewards::ActiveModel {
            project: Set(project.to_string()),
            campaign_id: Set(campaign_id),
            referrer_id: Set(Some(referrer_id)),
            referee_id: Set(referee_id),
            amount: Set(10.0),
            status: Set(status.to_string()),
            created_at: Set(base_time()),
            updated_at: Set(base_time()),
            ..Default::default()
        }
        .insert(db)
        .await
        .unwrap();
    }
}

async fn reward_ids(db: &DatabaseConnection, request: GetRewardRequest) -> Vec<i32> {
    rewards::find_rewards(db, &request)
        .await
        .unwrap()
        .into_iter()
        .map(|reward| reward.id)
        .collect()
}

#[tokio::test]
async fn test_reward_referrer_reference_filter() {
    let db = setup().await;
    seed_rewards(&db).await;

    let cust_1 = || GetRewardRequest {
        referrer_reference_id: Some("cust-1".to_string()),
        ..Default::default()
    };
    assert_eq!(reward_ids(&db, cust_1()).await, vec![2, 1]);
    assert_eq!(
        reward_ids(&db, GetRewardRequest { projects: vec!["shop".to_string()], ..cust_1() }).await,
        vec![1]
    );

    // Reward 4 lives in "shop" but its referrer is blog's cust-2.
    let cust_2 = GetRewardRequest {
        referrer_reference_id: Some("cust-2".to_string()),
        ..Default::default()
    };
    assert_eq!(reward_ids(&db, cust_2).await, vec![3]);
}

#[tokio::test]
async fn test_reward_referrer_code_filter() {
    let db = setup().await;
    seed_rewards(&db).await;

    let alice = GetRewardRequest {
        referrer_code: Some("ALICE".to_string()),
        ..Default::default()
    };
    assert_eq!(reward_ids(&db, alice).await, vec![2, 1]);

    let bob = GetRewardRequest {
        referrer_code: Some("BOB".to_string()),
        ..Default::default()
    };
    assert_eq!(reward_ids(&db, bob).await, vec![3]);
}

#[tokio::test]
async fn test_reward_referee_reference_and_status_filters() {
    let db = setup().await;
    seed_rewards(&db).await;

    let cust_9 = GetRewardRequest {
        referee_reference_id: Some("cust-9".to_string()),
        ..Default::default()
    };
    assert_eq!(reward_ids(&db, cust_9).await, vec![2, 1]);

    let cust_9_blog = GetRewardRequest {
        projects: vec!["blog".to_string()],
        referee_reference_id: Some("cust-9".to_string()),
        ..Default::default()
    };
    assert_eq!(reward_ids(&db, cust_9_blog).await, vec![2]);

    let paid = GetRewardRequest {
        status: Some("paid".to_string()),
        ..Default::default()
    };
    assert_eq!(reward_ids(&db, paid).await, vec![3, 2]);

    assert_eq!(rewards::get_reward_by_id(&db, 4).await.unwrap().unwrap().project, "shop");
    assert!(rewards::get_reward_by_id(&db, 5).await.unwrap().is_none());
}
