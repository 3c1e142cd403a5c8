//! The booklet controller
//!
//! [`Booklet`] owns one instance of the layout state: the viewport observer,
//! the derived page list and the spread navigator. All changes go through it,
//! so several booklets can coexist without sharing hidden state.

use crate::layout::{self, LayoutState, LogicalPage};
use crate::navigator::SpreadNavigator;
use crate::observer::ResponsiveObserver;
use crate::options::BookletOptions;
use crate::render::{LogoLoader, PageRenderer, RenderedSpread, TextOnlyLogos};
use crate::repository::SessionRepository;

pub struct Booklet<R> {
    repository: R,
    options: BookletOptions,
    logos: Box<dyn LogoLoader + Send + Sync>,
    observer: ResponsiveObserver,
    pages: Vec<LogicalPage>,
    navigator: SpreadNavigator,
}

impl<R: SessionRepository> Booklet<R> {
    /// Build a booklet laid out for `initial_width_px`.
    ///
    /// Logos are not loaded until a loader is supplied with
    /// [`Booklet::with_logo_loader`]; sponsors show their names meanwhile.
    pub fn new(repository: R, options: BookletOptions, initial_width_px: f32) -> Self {
        let observer = ResponsiveObserver::new(options.breakpoint_px, initial_width_px);
        let pages = layout::logical_pages(&repository, options.welcome_day);
        let navigator =
            SpreadNavigator::new(layout::total_spreads(observer.is_mobile(), pages.len()));

        Self {
            repository,
            options,
            logos: Box::new(TextOnlyLogos),
            observer,
            pages,
            navigator,
        }
    }

    pub fn with_logo_loader(mut self, loader: impl LogoLoader + Send + Sync + 'static) -> Self {
        self.logos = Box::new(loader);
        self
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn options(&self) -> &BookletOptions {
        &self.options
    }

    pub fn logical_pages(&self) -> &[LogicalPage] {
        &self.pages
    }

    pub fn current_spread(&self) -> usize {
        self.navigator.current()
    }

    pub fn total_spreads(&self) -> usize {
        self.navigator.total()
    }

    pub fn can_go_next(&self) -> bool {
        self.navigator.can_go_next()
    }

    pub fn can_go_previous(&self) -> bool {
        self.navigator.can_go_previous()
    }

    pub fn layout(&self) -> LayoutState {
        LayoutState {
            is_mobile: self.observer.is_mobile(),
            pages_per_spread: self.pages_per_spread(),
            total_spreads: self.navigator.total(),
            current_spread: self.navigator.current(),
        }
    }

    fn pages_per_spread(&self) -> usize {
        layout::pages_per_spread(self.observer.is_mobile())
    }

    /// Apply a viewport width. Returns `true` when the layout changed.
    pub fn resize(&mut self, width_px: f32) -> bool {
        if !self.observer.observe(width_px) {
            return false;
        }

        let total = layout::total_spreads(self.observer.is_mobile(), self.pages.len());
        self.navigator.on_layout_changed(total);
        log::debug!(
            "Viewport {}px is now {:?}: {} spreads, showing spread {}",
            width_px,
            self.observer.device_class(),
            total,
            self.navigator.current()
        );
        true
    }

    pub fn next(&mut self) -> bool {
        self.navigator.next()
    }

    pub fn previous(&mut self) -> bool {
        self.navigator.previous()
    }

    /// Show the spread holding `page`. Returns `false` when the booklet has
    /// no such page.
    pub fn show_page(&mut self, page: LogicalPage) -> bool {
        match self.pages.iter().position(|&p| p == page) {
            Some(index) => {
                self.navigator
                    .jump_to(layout::spread_of_page(index, self.pages_per_spread()));
                true
            }
            None => false,
        }
    }

    /// Swap in new agenda data, keeping the current index where it is still
    /// valid
    pub fn replace_repository(&mut self, repository: R) {
        self.repository = repository;
        self.pages = layout::logical_pages(&self.repository, self.options.welcome_day);
        let total = layout::total_spreads(self.observer.is_mobile(), self.pages.len());
        self.navigator.on_layout_changed(total);
    }

    /// Logical pages of the current spread
    pub fn current_pages(&self) -> &[LogicalPage] {
        layout::spread_pages(&self.pages, self.pages_per_spread(), self.navigator.current())
    }

    pub fn render_current(&self) -> RenderedSpread {
        self.render_spread(self.navigator.current())
    }

    /// Render any spread under the current layout
    pub fn render_spread(&self, index: usize) -> RenderedSpread {
        let renderer = PageRenderer::new(
            &self.repository,
            &self.options.event,
            self.options.welcome_day,
            self.logos.as_ref(),
        );
        let pages = layout::spread_pages(&self.pages, self.pages_per_spread(), index);
        renderer.render_spread(pages, index, self.navigator.total())
    }
}
