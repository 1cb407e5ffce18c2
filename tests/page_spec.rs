use kjv_core::{ObserverSupport, PageRuntime, SectionId, Viewport};
use kjv_site::assembly::{self, mount_page, page_plan, resize_page};
use kjv_site::content::school::NAV_LINKS;
use kjv_site::layout::layout_page;
use speculate2::speculate;

fn desktop() -> Viewport {
    Viewport::new(1280.0, 800.0)
}

fn item_top(key: &str) -> f64 {
    layout_page(&page_plan(), &desktop())
        .iter()
        .flat_map(|section| section.items.iter())
        .find(|item| item.key == key)
        .map(|item| item.rect.y)
        .expect("item is laid out")
}

fn section_top(anchor: &str) -> f64 {
    layout_page(&page_plan(), &desktop())
        .iter()
        .find(|section| section.anchor.as_deref() == Some(anchor))
        .map(|section| section.rect.y)
        .expect("section is laid out")
}

speculate! {
    before {
        let mut page = PageRuntime::new(desktop(), ObserverSupport::Supported);
        let sections: Vec<SectionId> = mount_page(&mut page).expect("page mounts");
    }

    describe "about section" {
        it "reveals the six fact cards in order once they scroll into view" {
            page.advance_to(1_000).unwrap();
            for i in 0..6 {
                assert!(!page.is_visible(&format!("about.facts.{i}")).unwrap());
            }

            page.scroll_to(item_top("about.facts.0") - 100.0);
            page.advance_by(1_000);

            let facts: Vec<_> = page
                .reveal_log()
                .iter()
                .filter(|r| r.key.starts_with("about.facts."))
                .map(|r| (r.key.clone(), r.at))
                .collect();
            let expected: Vec<_> = (0..6u64)
                .map(|i| (format!("about.facts.{i}"), 1_000 + i * 100))
                .collect();
            assert_eq!(facts, expected);
            assert!(facts.iter().all(|(_, at)| *at >= 1_000));
        }

        it "reveals the heading with the section and the markers 300ms later" {
            page.scroll_to(section_top("about"));
            page.advance_by(1_000);

            let heading = page.reveal_log().iter().find(|r| r.key == "about.heading").unwrap();
            let markers = page.reveal_log().iter().find(|r| r.key == "about.markers").unwrap();
            assert_eq!(heading.at, 0);
            assert_eq!(markers.at, 300);
            assert_eq!(heading.section, "about");
        }
    }

    describe "hero" {
        it "brings in the statistics after load without scrolling" {
            page.advance_by(1_200);
            let stats: Vec<_> = page
                .reveal_log()
                .iter()
                .filter(|r| r.key.starts_with("home.stats."))
                .map(|r| r.at)
                .collect();
            assert_eq!(stats, vec![600, 800, 1_000, 1_200]);
            assert!(!page.is_visible("about.facts.0").unwrap());
        }
    }

    describe "mobile menu" {
        it "starts closed, opens on toggle and closes after following a link" {
            assert!(!page.nav().is_menu_open());
            assert!(page.nav().menu_links(NAV_LINKS).is_empty());

            assert!(page.toggle_menu());
            assert_eq!(page.nav().menu_links(NAV_LINKS).len(), NAV_LINKS.len());

            page.follow_link("#about").unwrap();
            assert!(!page.nav().is_menu_open());
            assert_eq!(page.viewport().scroll_y, section_top("about"));
            assert!(page.nav().is_scrolled());
        }

        it "resolves every navbar link to a mounted section" {
            for link in NAV_LINKS {
                assert!(page.section_by_anchor(link.href).is_some(), "{} is dangling", link.href);
            }
        }
    }

    describe "resizing" {
        it "reflows to a phone width so every item can still be revealed" {
            resize_page(&mut page, 375.0, 667.0);
            assert_eq!(page.viewport().width, 375.0);

            let bottom = page.document_height();
            let mut y = 0.0;
            while y <= bottom {
                page.scroll_to(y);
                y += 20.0;
            }
            page.advance_by(10_000);

            let hidden: Vec<String> = page_plan()
                .iter()
                .flat_map(|plan| plan.cells())
                .filter(|cell| cell.reveal.is_some())
                .map(|cell| cell.key.clone())
                .filter(|key| !page.is_visible(key).unwrap())
                .collect();
            assert!(hidden.is_empty(), "never revealed: {hidden:?}");
        }

        it "stacks the about facts in one column after narrowing" {
            resize_page(&mut page, 375.0, 667.0);
            let narrow = layout_page(&page_plan(), &Viewport::new(375.0, 667.0));
            let about = narrow.iter().find(|s| s.name == "about").unwrap();
            let fact = about.items.iter().find(|i| i.key == "about.facts.2").unwrap();

            page.scroll_to(fact.rect.y - 100.0);
            page.advance_by(1_000);
            assert!(page.is_visible("about.facts.2").unwrap());
        }
    }

    describe "teardown" {
        it "cancels every pending reveal" {
            assert!(page.pending_timers() > 0);
            assembly::unmount_page(&mut page, &sections).unwrap();
            page.advance_by(5_000);
            assert_eq!(page.pending_timers(), 0);
            assert!(page.reveal_log().is_empty());
        }
    }
}
