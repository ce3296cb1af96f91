use crux_core::testing::AppTester;
use shared::fixtures::RsvpStatus;
use shared::model::{CURATED_WARDROBE_KIND, CURATED_WARDROBE_SIZE};
use shared::navigation::{EventId, ProductId, WardrobeId};
use shared::{
    AddItemOrigin, App, ConciergeConfig, Effect, Event, Model, ScreenId, ScreenView,
    SelectionParams, Tab,
};

fn setup() -> (AppTester<App, Effect>, Model) {
    let app = AppTester::<App, Effect>::default();
    let mut model = Model::default();
    let config = ConciergeConfig::default().with_reply_seed(7);
    let _ = app.update(Event::Configure(Box::new(config)), &mut model);
    (app, model)
}

fn go(app: &AppTester<App, Effect>, model: &mut Model, screen: ScreenId, params: SelectionParams) {
    let update = app.update(Event::navigate_with(screen, params), model);
    assert!(update.effects.iter().any(|e| matches!(e, Effect::Render(_))));
}

mod history {
    use super::*;

    #[test]
    fn starts_on_welcome_and_back_lands_home() {
        let (app, mut model) = setup();
        assert_eq!(model.navigator.active_screen(), ScreenId::Welcome);
        assert_eq!(model.navigator.prev_screen(), None);

        let _ = app.update(Event::GoBack, &mut model);
        assert_eq!(model.navigator.active_screen(), ScreenId::Home);
        assert_eq!(model.navigator.prev_screen(), Some(ScreenId::Welcome));
    }

    #[test]
    fn every_screen_is_reachable_from_anywhere() {
        let (app, mut model) = setup();
        for from in ScreenId::ALL {
            for to in ScreenId::ALL {
                go(&app, &mut model, from, SelectionParams::none());
                go(&app, &mut model, to, SelectionParams::none());
                assert_eq!(model.navigator.active_screen(), to);
                assert_eq!(model.navigator.prev_screen(), Some(from));
            }
        }
    }

    #[test]
    fn back_twice_ping_pongs() {
        let (app, mut model) = setup();
        go(&app, &mut model, ScreenId::Home, SelectionParams::none());
        go(&app, &mut model, ScreenId::Events, SelectionParams::none());

        let _ = app.update(Event::GoBack, &mut model);
        assert_eq!(model.navigator.active_screen(), ScreenId::Home);
        let _ = app.update(Event::GoBack, &mut model);
        assert_eq!(model.navigator.active_screen(), ScreenId::Events);
    }

    #[test]
    fn self_navigation_sends_back_home() {
        let (app, mut model) = setup();
        go(&app, &mut model, ScreenId::Drops, SelectionParams::none());
        go(&app, &mut model, ScreenId::Drops, SelectionParams::none());
        assert_eq!(model.navigator.prev_screen(), Some(ScreenId::Drops));

        let _ = app.update(Event::GoBack, &mut model);
        assert_eq!(model.navigator.active_screen(), ScreenId::Home);
    }

    #[test]
    fn selection_survives_unrelated_navigation() {
        let (app, mut model) = setup();
        go(&app, &mut model, ScreenId::ProductDetail, SelectionParams::product("lp3"));
        go(&app, &mut model, ScreenId::Home, SelectionParams::none());
        go(&app, &mut model, ScreenId::Events, SelectionParams::none());
        assert_eq!(
            model.navigator.selection().product,
            Some(ProductId::new("lp3"))
        );
    }
}

mod chrome {
    use super::*;

    #[test]
    fn tab_bar_hidden_on_entry_screens() {
        let (app, mut model) = setup();
        for screen in [ScreenId::Welcome, ScreenId::Login, ScreenId::StoreKey] {
            go(&app, &mut model, screen, SelectionParams::none());
            assert!(!app.view(&model).show_tab_bar, "{screen}");
        }
        go(&app, &mut model, ScreenId::Mto, SelectionParams::none());
        let view = app.view(&model);
        assert!(view.show_tab_bar);
        assert_eq!(view.active_tab, Some(Tab::Mto));
    }

    #[test]
    fn unbuilt_screen_renders_placeholder() {
        let (app, mut model) = setup();
        go(&app, &mut model, ScreenId::OrderHistory, SelectionParams::none());
        match app.view(&model).screen {
            ScreenView::Placeholder { title, message } => {
                assert_eq!(title, "order history");
                assert!(message.contains("private corridor"));
            }
            other => panic!("expected placeholder, got {other:?}"),
        }
    }
}

mod login {
    use super::*;

    #[test]
    fn correct_code_enters_home() {
        let (app, mut model) = setup();
        go(&app, &mut model, ScreenId::Login, SelectionParams::none());
        let _ = app.update(Event::LoginCodeEntered { code: "f3f3".into() }, &mut model);

        assert_eq!(model.navigator.active_screen(), ScreenId::Home);
        assert!(!model.login_error);
    }

    #[test]
    fn wrong_code_flags_error_and_stays() {
        let (app, mut model) = setup();
        go(&app, &mut model, ScreenId::Login, SelectionParams::none());
        let _ = app.update(Event::LoginCodeEntered { code: "1234".into() }, &mut model);

        assert_eq!(model.navigator.active_screen(), ScreenId::Login);
        assert_eq!(app.view(&model).screen, ScreenView::Login { error: true });

        let _ = app.update(Event::LoginCodeEntered { code: "F3F3".into() }, &mut model);
        assert_eq!(model.navigator.active_screen(), ScreenId::Home);
        assert!(!model.login_error);
    }

    #[test]
    fn configured_code_replaces_default() {
        let (app, mut model) = setup();
        let config = ConciergeConfig {
            access_code: "LP26".into(),
            ..ConciergeConfig::default()
        };
        let _ = app.update(Event::Configure(Box::new(config)), &mut model);
        let _ = app.update(Event::LoginCodeEntered { code: "F3F3".into() }, &mut model);
        assert!(model.login_error);
        let _ = app.update(Event::LoginCodeEntered { code: "lp26".into() }, &mut model);
        assert_eq!(model.navigator.active_screen(), ScreenId::Home);
    }
}

mod wardrobes {
    use super::*;

    #[test]
    fn curating_opens_the_new_wardrobe() {
        let (app, mut model) = setup();
        go(&app, &mut model, ScreenId::CreateWardrobe, SelectionParams::none());
        let _ = app.update(
            Event::WardrobeCurated {
                name: "Riviera Summer".into(),
                location: None,
            },
            &mut model,
        );

        assert_eq!(model.wardrobes.len(), 4);
        assert_eq!(model.navigator.active_screen(), ScreenId::WardrobeDetail);
        assert_eq!(model.navigator.prev_screen(), Some(ScreenId::CreateWardrobe));

        match app.view(&model).screen {
            ScreenView::WardrobeDetail { wardrobe: Some(detail) } => {
                assert_eq!(detail.name, "Riviera Summer");
                assert_eq!(detail.kind, CURATED_WARDROBE_KIND);
                assert_eq!(detail.items.len(), CURATED_WARDROBE_SIZE);
            }
            other => panic!("expected wardrobe detail, got {other:?}"),
        }
    }

    #[test]
    fn blank_name_changes_nothing() {
        let (app, mut model) = setup();
        go(&app, &mut model, ScreenId::CreateWardrobe, SelectionParams::none());
        let _ = app.update(
            Event::WardrobeCurated {
                name: " ".into(),
                location: Some("Capri".into()),
            },
            &mut model,
        );
        assert_eq!(model.wardrobes.len(), 3);
        assert_eq!(model.navigator.active_screen(), ScreenId::CreateWardrobe);
    }

    #[test]
    fn scanned_item_returns_to_wardrobe() {
        let (app, mut model) = setup();
        go(&app, &mut model, ScreenId::WardrobeDetail, SelectionParams::wardrobe("w3"));
        go(&app, &mut model, ScreenId::AddItemMethod, SelectionParams::none());
        go(&app, &mut model, ScreenId::ScanItem, SelectionParams::none());

        let _ = app.update(
            Event::ItemAdded {
                product_id: ProductId::new("lp1"),
                origin: AddItemOrigin::Scan,
            },
            &mut model,
        );

        assert_eq!(model.navigator.active_screen(), ScreenId::WardrobeDetail);
        let w3 = model.wardrobe(&WardrobeId::new("w3")).unwrap();
        assert_eq!(w3.items.len(), 5);
        assert_eq!(w3.items.last(), Some(&ProductId::new("lp1")));
    }

    #[test]
    fn catalog_item_goes_back() {
        let (app, mut model) = setup();
        go(&app, &mut model, ScreenId::WardrobeDetail, SelectionParams::wardrobe("w1"));
        go(&app, &mut model, ScreenId::AddItemSelection, SelectionParams::none());

        let _ = app.update(
            Event::ItemAdded {
                product_id: ProductId::new("lp9"),
                origin: AddItemOrigin::Catalog,
            },
            &mut model,
        );

        assert_eq!(model.navigator.active_screen(), ScreenId::WardrobeDetail);
        let w1 = model.wardrobe(&WardrobeId::new("w1")).unwrap();
        assert!(w1.items.contains(&ProductId::new("lp9")));
    }

    #[test]
    fn item_without_selected_wardrobe_is_ignored() {
        let (app, mut model) = setup();
        go(&app, &mut model, ScreenId::AddItemSelection, SelectionParams::none());
        let before = model.wardrobes.clone();

        let _ = app.update(
            Event::ItemAdded {
                product_id: ProductId::new("lp2"),
                origin: AddItemOrigin::Catalog,
            },
            &mut model,
        );

        assert_eq!(model.wardrobes, before);
        assert_eq!(model.navigator.active_screen(), ScreenId::AddItemSelection);
    }
}

mod events {
    use super::*;

    #[test]
    fn rsvp_is_reflected_in_detail_view() {
        let (app, mut model) = setup();
        go(&app, &mut model, ScreenId::EventDetail, SelectionParams::event("giraglia-2025"));
        let _ = app.update(
            Event::EventRsvp {
                event_id: EventId::new("giraglia-2025"),
                status: RsvpStatus::Confirmed,
            },
            &mut model,
        );

        match app.view(&model).screen {
            ScreenView::EventDetail { event: Some(event) } => {
                assert_eq!(event.status, RsvpStatus::Confirmed);
            }
            other => panic!("expected event detail, got {other:?}"),
        }
    }

    #[test]
    fn unknown_event_renders_not_found() {
        let (app, mut model) = setup();
        go(&app, &mut model, ScreenId::EventDetail, SelectionParams::event("regatta-1999"));
        assert_eq!(app.view(&model).screen, ScreenView::EventDetail { event: None });
    }
}

mod shell_wire {
    use super::*;

    fn decode(json: &str) -> Event {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn decoded_shell_events_drive_the_app() {
        let app = AppTester::<App, Effect>::default();
        let mut model = Model::default();

        let _ = app.update(decode(r#"{"Configure":{"access_code":"LP26","reply_seed":1}}"#), &mut model);
        let _ = app.update(decode(r#"{"Navigate":{"screen":"login","params":{}}}"#), &mut model);
        let _ = app.update(decode(r#"{"LoginCodeEntered":{"code":"lp26"}}"#), &mut model);
        assert_eq!(model.navigator.active_screen(), ScreenId::Home);

        let _ = app.update(
            decode(r#"{"Navigate":{"screen":"event-detail","params":{"event":"giraglia-2025"}}}"#),
            &mut model,
        );
        let _ = app.update(
            decode(r#"{"EventRsvp":{"event_id":"giraglia-2025","status":"confirmed"}}"#),
            &mut model,
        );
        assert_eq!(
            model.event(&EventId::new("giraglia-2025")).unwrap().status,
            RsvpStatus::Confirmed
        );

        let _ = app.update(decode(r#""GoBack""#), &mut model);
        assert_eq!(model.navigator.active_screen(), ScreenId::Home);
    }
}
