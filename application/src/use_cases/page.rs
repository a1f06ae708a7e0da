//! Page controller
//!
//! Independent event-to-visual bindings outside the contact form: the mobile
//! menu, anchor scrolling, nav highlighting on scroll, and the hover and press
//! visuals of skill tiles and project buttons.

use crate::config::InteractionConfig;
use crate::ports::scheduler::{Scheduler, TimerHandle, TimerTask};
use crate::ports::surface::PageSurface;
use folio_domain::{
    AnchorTarget, DomainError, InteractionTimings, Key, MenuState, PageOutline, TileId, TileKind,
    TileState,
};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

struct Tile {
    state: TileState,
    release: Option<TimerHandle>,
}

pub struct PageController {
    outline: PageOutline,
    nav_links: Vec<String>,
    menu: MenuState,
    active_link: Option<String>,
    tiles: HashMap<TileId, Tile>,
    projects: Vec<String>,
    timings: InteractionTimings,
    surface: Arc<dyn PageSurface>,
    scheduler: Arc<dyn Scheduler>,
}

impl PageController {
    pub fn new(
        config: &InteractionConfig,
        surface: Arc<dyn PageSurface>,
        scheduler: Arc<dyn Scheduler>,
    ) -> Self {
        let skills = (0..config.skills.len()).map(TileId::skill);
        let projects = (0..config.projects.len()).map(TileId::project);
        let tiles = skills
            .chain(projects)
            .map(|id| {
                (
                    id,
                    Tile {
                        state: TileState::default(),
                        release: None,
                    },
                )
            })
            .collect();

        Self {
            outline: config.outline.clone(),
            nav_links: config.nav_links.clone(),
            menu: MenuState::default(),
            active_link: None,
            tiles,
            projects: (0..config.projects.len())
                .map(|i| config.project_name(i).to_string())
                .collect(),
            timings: config.timings,
            surface,
            scheduler,
        }
    }

    pub fn menu(&self) -> MenuState {
        self.menu
    }

    /// Href of the highlighted nav link
    pub fn active_link(&self) -> Option<&str> {
        self.active_link.as_deref()
    }

    pub fn tile_state(&self, id: TileId) -> Option<TileState> {
        self.tiles.get(&id).map(|t| t.state)
    }

    /// Draw the menu and every tile in their current state
    pub fn mount(&self) {
        self.render_menu();
        for (id, tile) in &self.tiles {
            self.surface.render_tile(*id, &tile.state.visual(id.kind));
        }
    }

    // ==================== Menu ====================

    pub fn toggle_menu(&mut self) {
        let open = self.menu.toggle();
        debug!(open, "Menu toggled");
        self.render_menu();
    }

    pub fn close_menu(&mut self) {
        if self.menu.close() {
            debug!("Menu closed");
            self.render_menu();
        }
    }

    /// Escape closes the menu from anywhere on the page
    pub fn key_pressed(&mut self, key: Key) {
        if key == Key::Escape {
            self.close_menu();
        }
    }

    fn render_menu(&self) {
        self.surface
            .render_menu(self.menu.is_open(), self.menu.scroll_locked());
    }

    // ==================== Navigation ====================

    /// A link in the navigation list: close the menu, then follow the anchor
    pub fn nav_link_clicked(&mut self, href: &str) -> AnchorTarget {
        if !self.nav_links.iter().any(|l| l == href) {
            debug!(href, "Click on a link outside the navigation list");
        }
        self.close_menu();
        self.anchor_clicked(href)
    }

    /// Smooth scroll to the section an in-page anchor points at
    pub fn anchor_clicked(&mut self, href: &str) -> AnchorTarget {
        let target = self.outline.resolve_anchor(href);
        if let AnchorTarget::ScrollTo { section, offset } = &target {
            self.close_menu();
            debug!(section = %section, offset, "Scrolling to section");
            self.surface.scroll_to(*offset);
        }
        target
    }

    /// Highlight the nav link of the section under the scroll marker.
    ///
    /// Returns the active href, which stays unchanged when no section matches.
    /// A section without a nav link clears the highlight.
    pub fn scrolled(&mut self, y: f64) -> Option<&str> {
        if let Some(section) = self.outline.active_section(y) {
            let href = section.href();
            if self.active_link.as_deref() != Some(href.as_str()) {
                let linked = self.nav_links.contains(&href);
                self.surface
                    .highlight_link(linked.then_some(href.as_str()));
                self.active_link = Some(href);
            }
        }
        self.active_link.as_deref()
    }

    // ==================== Tiles ====================

    pub fn tile_entered(&mut self, id: TileId) -> Result<(), DomainError> {
        self.tile_mut(id)?.state.hovered = true;
        self.render_tile(id);
        Ok(())
    }

    pub fn tile_left(&mut self, id: TileId) -> Result<(), DomainError> {
        self.tile_mut(id)?.state.hovered = false;
        self.render_tile(id);
        Ok(())
    }

    /// Show the pressed visual, then restore after the release delay
    pub fn tile_clicked(&mut self, id: TileId) -> Result<(), DomainError> {
        let release_after = self.timings.press_release();
        let scheduler = self.scheduler.clone();
        let tile = self.tile_mut(id)?;
        if let Some(previous) = tile.release.take() {
            scheduler.cancel(previous);
        }
        tile.state.pressed = true;
        tile.release = Some(scheduler.schedule(release_after, TimerTask::TileRelease(id)));
        self.render_tile(id);

        if id.kind == TileKind::Project {
            let name = self
                .projects
                .get(id.index)
                .map(String::as_str)
                .unwrap_or("Project");
            info!("Viewing details for: {}", name);
        }
        Ok(())
    }

    /// Handle a due page timer. Returns false for tasks it does not own.
    pub fn on_timer(&mut self, task: &TimerTask) -> bool {
        let TimerTask::TileRelease(id) = *task else {
            return false;
        };
        if let Some(tile) = self.tiles.get_mut(&id) {
            tile.state.pressed = false;
            tile.release = None;
            self.render_tile(id);
        }
        true
    }

    fn tile_mut(&mut self, id: TileId) -> Result<&mut Tile, DomainError> {
        self.tiles.get_mut(&id).ok_or(DomainError::UnknownTile(id))
    }

    fn render_tile(&self, id: TileId) {
        if let Some(tile) = self.tiles.get(&id) {
            self.surface.render_tile(id, &tile.state.visual(id.kind));
        }
    }
}
