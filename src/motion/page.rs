//! Headless model of the mounted page.
//!
//! [`PageRuntime`] owns everything stateful the page does after load: the
//! scroll viewport, one visibility tracker and reveal driver per section,
//! the about-portrait rotator, the skill counters, the contact form, the
//! navigation bar's scrolled/menu state and the fragment-scroll grace
//! timer. The clock is a plain millisecond counter advanced by the caller,
//! so the whole page can be driven deterministically in tests.
//!
//! Mount order follows the component lifecycle: visibility observation
//! attaches before any timer starts. Teardown is symmetric: every timer is
//! released and every tracker detached, after which no poll can change
//! state.

use crate::config::SiteConfig;
use crate::types::{PagePlan, SectionId};

use super::counter::CounterAnimator;
use super::fallback::ImageFallback;
use super::form::ContactForm;
use super::reveal::{RevealDriver, Variants};
use super::rotator::Rotator;
use super::timer::Deadline;
use super::visibility::{ObserveOptions, Span, VisibilityTracker};

/// Delay between load and the scroll to a URL fragment, letting layout
/// settle first.
pub const FRAGMENT_SCROLL_GRACE_MS: u64 = 100;

/// Scroll offset past which the navigation bar switches to its solid style.
pub const NAV_SOLID_AFTER_PX: f64 = 50.0;

/// Nominal section height in the headless layout. Real layout belongs to
/// the browser; the model only needs stable, distinct regions to scroll
/// between.
const SECTION_HEIGHT_PX: f64 = 800.0;

/// Nominal footer height in the headless layout.
const FOOTER_HEIGHT_PX: f64 = 300.0;

/// Navigation bar state: solid-vs-transparent styling and the mobile menu.
#[derive(Debug, Default)]
pub struct NavState {
    scrolled: bool,
    menu_open: bool,
    /// One reveal per menu item while the panel is open, staggered by index.
    item_reveals: Vec<RevealDriver>,
}

impl NavState {
    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn item_reveals(&self) -> &[RevealDriver] {
        &self.item_reveals
    }
}

/// The mounted page.
#[derive(Debug)]
pub struct PageRuntime {
    now_ms: u64,
    viewport: Span,
    page_height: f64,
    sections: Vec<(SectionId, Span)>,
    trackers: Vec<(SectionId, VisibilityTracker)>,
    reveals: Vec<(SectionId, RevealDriver)>,
    hero_reveal: RevealDriver,
    nav_reveal: RevealDriver,
    portrait: ImageFallback,
    rotator: Rotator,
    counters: Vec<CounterAnimator>,
    form: ContactForm,
    nav: NavState,
    pending_fragment: Option<(SectionId, Deadline)>,
    menu_item_count: usize,
}

impl PageRuntime {
    /// Mount the page described by `plan` into a viewport of the given
    /// height, optionally with a URL fragment from the address bar.
    pub fn mount(plan: &PagePlan, viewport_height: f64, fragment: Option<&str>) -> Self {
        let hero_height = viewport_height.max(600.0);
        let sections = layout_sections(&plan.sections, hero_height);
        let page_height =
            hero_height + plan.sections.len() as f64 * SECTION_HEIGHT_PX + FOOTER_HEIGHT_PX;

        // Observation attaches before any timer starts.
        let trackers = sections
            .iter()
            .map(|&(id, span)| {
                let mut tracker = VisibilityTracker::new(ObserveOptions::default());
                tracker.attach(span);
                (id, tracker)
            })
            .collect();
        let reveals = sections
            .iter()
            .map(|&(id, _)| (id, RevealDriver::new(Variants::fade_in_up())))
            .collect();

        // Mount animations run immediately; they are not scroll-triggered.
        let mut hero_reveal = RevealDriver::new(Variants::fade_in());
        hero_reveal.set_in_view(true, 0);
        let mut nav_reveal = RevealDriver::new(Variants::nav_drop());
        nav_reveal.set_in_view(true, 0);

        let portrait = match &plan.config.hero.portrait_alternate {
            Some(alternate) => ImageFallback::with_alternate(&plan.config.hero.portrait, alternate),
            None => ImageFallback::new(&plan.config.hero.portrait),
        };

        let mut rotator = Rotator::new(plan.config.about.portraits.len());
        rotator.start(0);

        let counters = skill_counters(&plan.config);
        let form = ContactForm::new(&plan.config.owner.email);

        let pending_fragment = fragment
            .and_then(SectionId::from_fragment)
            .map(|id| (id, Deadline::at(FRAGMENT_SCROLL_GRACE_MS)));

        let mut page = Self {
            now_ms: 0,
            viewport: Span::new(0.0, viewport_height),
            page_height,
            sections,
            trackers,
            reveals,
            hero_reveal,
            nav_reveal,
            portrait,
            rotator,
            counters,
            form,
            nav: NavState::default(),
            pending_fragment,
            menu_item_count: plan.menu.len(),
        };
        // Initial visibility pass at the top of the page.
        page.set_scroll(0.0);
        page
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn scroll_y(&self) -> f64 {
        self.viewport.top
    }

    pub fn page_height(&self) -> f64 {
        self.page_height
    }

    /// Advance the clock and deliver all due work, in declaration order:
    /// the fragment grace timer, then the rotator, the counters, and the
    /// form's submitted-notice timeout.
    pub fn advance(&mut self, ms: u64) {
        self.now_ms += ms;
        let now = self.now_ms;

        if let Some((id, deadline)) = self.pending_fragment.as_mut()
            && deadline.fire(now)
        {
            let id = *id;
            self.pending_fragment = None;
            self.scroll_to_section(id);
        }

        self.rotator.poll(now);
        for counter in &mut self.counters {
            counter.poll(now);
        }
        self.form.poll(now);
    }

    /// Scroll to an absolute offset: updates the navigation style, every
    /// visibility tracker, every section reveal, and the skill counters.
    pub fn set_scroll(&mut self, y: f64) {
        let max_scroll = (self.page_height - self.viewport.height).max(0.0);
        self.viewport.top = y.clamp(0.0, max_scroll);
        self.nav.scrolled = self.viewport.top > NAV_SOLID_AFTER_PX;

        let now = self.now_ms;
        let viewport = self.viewport;
        for ((id, tracker), (_, reveal)) in self.trackers.iter_mut().zip(self.reveals.iter_mut()) {
            let in_view = tracker.update(viewport);
            reveal.set_in_view(in_view, now);
            if *id == SectionId::Skills {
                for counter in &mut self.counters {
                    counter.set_in_view(in_view, now);
                }
            }
        }
    }

    /// Scroll a section's top edge to the top of the viewport (clamped at
    /// the page end).
    pub fn scroll_to_section(&mut self, id: SectionId) {
        if let Some(span) = self.section_span(id) {
            self.set_scroll(span.top);
        }
    }

    pub fn section_span(&self, id: SectionId) -> Option<Span> {
        self.sections
            .iter()
            .find(|(s, _)| *s == id)
            .map(|&(_, span)| span)
    }

    /// Whether a section's tracker currently reports it in view.
    pub fn is_section_in_view(&self, id: SectionId) -> bool {
        self.trackers
            .iter()
            .find(|(s, _)| *s == id)
            .is_some_and(|(_, t)| t.in_view())
    }

    pub fn section_reveal(&self, id: SectionId) -> Option<&RevealDriver> {
        self.reveals
            .iter()
            .find(|(s, _)| *s == id)
            .map(|(_, r)| r)
    }

    pub fn hero_reveal(&self) -> &RevealDriver {
        &self.hero_reveal
    }

    pub fn nav_reveal(&self) -> &RevealDriver {
        &self.nav_reveal
    }

    /// The hero portrait's fallback chain.
    pub fn portrait(&self) -> &ImageFallback {
        &self.portrait
    }

    pub fn portrait_mut(&mut self) -> &mut ImageFallback {
        &mut self.portrait
    }

    pub fn nav_state(&self) -> &NavState {
        &self.nav
    }

    pub fn rotator(&self) -> &Rotator {
        &self.rotator
    }

    pub fn rotator_mut(&mut self) -> &mut Rotator {
        &mut self.rotator
    }

    pub fn counters(&self) -> &[CounterAnimator] {
        &self.counters
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ContactForm {
        &mut self.form
    }

    /// Open the mobile menu: each item reveals staggered by its index.
    pub fn open_menu(&mut self) {
        if self.nav.menu_open {
            return;
        }
        self.nav.menu_open = true;
        let now = self.now_ms;
        self.nav.item_reveals = (0..self.menu_item_count)
            .map(|i| {
                let mut reveal = RevealDriver::new(Variants::menu_item(i));
                reveal.set_in_view(true, now);
                reveal
            })
            .collect();
    }

    /// Close the mobile menu and drop its item reveals.
    pub fn close_menu(&mut self) {
        self.nav.menu_open = false;
        self.nav.item_reveals.clear();
    }

    pub fn toggle_menu(&mut self) {
        if self.nav.menu_open {
            self.close_menu();
        } else {
            self.open_menu();
        }
    }

    /// A menu item was activated: the panel closes and the page scrolls to
    /// the section.
    pub fn select_menu_item(&mut self, id: SectionId) {
        self.close_menu();
        self.scroll_to_section(id);
    }

    /// Release every timer and detach every tracker. After teardown no
    /// `advance`/`set_scroll` can change component state.
    pub fn teardown(&mut self) {
        self.rotator.stop();
        for counter in &mut self.counters {
            counter.stop();
        }
        for (_, tracker) in &mut self.trackers {
            tracker.detach();
        }
        self.pending_fragment = None;
        self.close_menu();
    }
}

/// Stack the sections under the hero in document order.
fn layout_sections(order: &[SectionId], hero_height: f64) -> Vec<(SectionId, Span)> {
    order
        .iter()
        .enumerate()
        .map(|(i, &id)| {
            (
                id,
                Span::new(hero_height + i as f64 * SECTION_HEIGHT_PX, SECTION_HEIGHT_PX),
            )
        })
        .collect()
}

/// One counter per skill, in category order, displayed with a `%` suffix.
fn skill_counters(config: &SiteConfig) -> Vec<CounterAnimator> {
    config
        .skills
        .categories
        .iter()
        .flat_map(|c| &c.items)
        .map(|item| CounterAnimator::with_suffix(item.level as u64, "%"))
        .collect()
}
