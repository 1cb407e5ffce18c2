use kjv_core::*;
use speculate2::speculate;

fn card(key: &str, y: f64, delay: Millis) -> MountSpec {
    MountSpec::new(key, Rect::new(0.0, y, 300.0, 200.0), delay)
}

fn section(name: &str, items: Vec<MountSpec>) -> SectionSpec {
    SectionSpec {
        name: name.to_string(),
        anchor: Some(name.to_string()),
        rect: Rect::new(0.0, 0.0, 1280.0, 4000.0),
        items,
    }
}

fn page() -> PageRuntime {
    PageRuntime::new(Viewport::new(1280.0, 800.0), ObserverSupport::Supported)
}

speculate! {
    describe "reveal lifecycle" {
        before {
            let mut page = page();
        }

        it "starts hidden and never reverts once visible" {
            page.mount(section("about", vec![card("fact", 1200.0, 0)])).unwrap();
            assert!(!page.is_visible("fact").unwrap());

            page.scroll_to(1000.0);
            assert!(page.is_visible("fact").unwrap());

            page.scroll_to(0.0);
            page.advance_by(10_000);
            assert!(page.is_visible("fact").unwrap());
            assert_eq!(page.reveal_log().len(), 1);
        }

        it "waits for the threshold and then for the delay" {
            page.mount(section("about", vec![card("fact", 800.0, 300)])).unwrap();

            // 15px of a 200px card is below the 10% threshold.
            page.scroll_to(15.0);
            page.advance_by(1_000);
            assert!(!page.is_visible("fact").unwrap());

            page.scroll_to(30.0);
            assert_eq!(page.pending_timers(), 1);
            page.advance_by(299);
            assert!(!page.is_visible("fact").unwrap());
            page.advance_by(1);
            assert!(page.is_visible("fact").unwrap());
            assert_eq!(page.reveal_log()[0].at, 1_300);
        }

        it "reveals siblings that enter together in index order" {
            let items = (0..6).map(|i| card(&format!("fact.{i}"), 1200.0, i * 100)).collect();
            page.mount(section("about", items)).unwrap();

            page.scroll_to(1000.0);
            page.advance_by(1_000);

            let log: Vec<_> = page.reveal_log().iter().map(|r| (r.key.as_str(), r.at)).collect();
            assert_eq!(
                log,
                vec![
                    ("fact.0", 0),
                    ("fact.1", 100),
                    ("fact.2", 200),
                    ("fact.3", 300),
                    ("fact.4", 400),
                    ("fact.5", 500),
                ]
            );
        }

        it "drops pending reveals when the section unmounts" {
            let id = page.mount(section("about", vec![card("fact", 100.0, 500)])).unwrap();
            assert_eq!(page.pending_timers(), 1);

            page.advance_by(200);
            page.unmount(id).unwrap();
            page.advance_by(1_000);

            assert!(page.reveal_log().is_empty());
            assert_eq!(page.pending_timers(), 0);
        }

        it "reveals mount-triggered items without any scrolling" {
            let items = (0..4)
                .map(|i| MountSpec::on_mount(format!("stat.{i}"), Rect::new(0.0, 3000.0, 100.0, 100.0), 600 + i * 200))
                .collect();
            page.mount(section("home", items)).unwrap();

            page.advance_by(1_200);
            let times: Vec<_> = page.reveal_log().iter().map(|r| r.at).collect();
            assert_eq!(times, vec![600, 800, 1_000, 1_200]);
        }

        it "rejects moving the clock backwards" {
            page.advance_by(100);
            assert_eq!(
                page.advance_to(50),
                Err(RuntimeError::ClockBackwards { now: 100, requested: 50 })
            );
        }
    }

    describe "without intersection observation" {
        before {
            let mut page = PageRuntime::new(Viewport::new(1280.0, 800.0), ObserverSupport::Unsupported);
        }

        it "shows every item as soon as it mounts" {
            page.mount(section("about", vec![card("near", 0.0, 300), card("far", 3500.0, 0)])).unwrap();
            assert!(page.is_visible("near").unwrap());
            assert!(page.is_visible("far").unwrap());
            assert!(page.reveal_log().iter().all(|r| r.at == 0));
        }
    }

    describe "navbar" {
        before {
            let mut page = page();
            page.mount(section("home", vec![])).unwrap();
        }

        it "is scrolled only past 50px, in both directions" {
            page.scroll_to(50.0);
            assert!(!page.nav().is_scrolled());
            page.scroll_to(51.0);
            assert!(page.nav().is_scrolled());
            page.scroll_to(50.0);
            assert!(!page.nav().is_scrolled());
            page.scroll_to(400.0);
            assert!(page.nav().is_scrolled());
            page.scroll_to(0.0);
            assert!(!page.nav().is_scrolled());
        }

        it "closes the menu when following a link" {
            assert!(page.toggle_menu());
            page.follow_link("#home").unwrap();
            assert!(!page.nav().is_menu_open());
        }

        it "closes the menu even for an unknown anchor" {
            page.toggle_menu();
            assert_eq!(
                page.follow_link("#gallery"),
                Err(RuntimeError::UnknownAnchor("gallery".to_string()))
            );
            assert!(!page.nav().is_menu_open());
        }
    }
}
