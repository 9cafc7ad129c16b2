//! DOM element renderer
//!
//! Owns every presentation element. The simulation only hands it lifecycle
//! events and per-frame state snapshots; nothing in here ever feeds back
//! into gameplay.
//!
//! Expected markup: `#bird`, `#score`, `#best-score`, `#obstacles`,
//! `#particles`, `#start-screen`, `#game-over-screen`, `#final-score`,
//! `#best-score-final` inside the game container.

use wasm_bindgen::JsCast;
use web_sys::{CssStyleDeclaration, Document, Element, HtmlElement};

use crate::Settings;
use crate::consts::*;
use crate::sim::{GameEvent, GamePhase, GameState, Obstacle};

pub struct DomRenderer {
    document: Document,
    bird: HtmlElement,
    score: Element,
    best_score: Element,
    obstacle_layer: Element,
    particle_layer: Element,
    start_screen: Element,
    game_over_screen: Element,
    final_score: Element,
    best_score_final: Element,
    /// Particle ids rendered last frame, for element cleanup
    live_particles: Vec<u32>,
}

fn set_px(style: &CssStyleDeclaration, prop: &str, value: f32) {
    let _ = style.set_property(prop, &format!("{}px", value));
}

impl DomRenderer {
    /// Grab every element the renderer owns; None when the markup is missing
    pub fn new(document: &Document) -> Option<Self> {
        let get = |id: &str| document.get_element_by_id(id);
        Some(Self {
            document: document.clone(),
            bird: get("bird")?.dyn_into().ok()?,
            score: get("score")?,
            best_score: get("best-score")?,
            obstacle_layer: get("obstacles")?,
            particle_layer: get("particles")?,
            start_screen: get("start-screen")?,
            game_over_screen: get("game-over-screen")?,
            final_score: get("final-score")?,
            best_score_final: get("best-score-final")?,
            live_particles: Vec::new(),
        })
    }

    /// React to a lifecycle event (element creation/removal, end screen text)
    pub fn apply(&mut self, event: &GameEvent) {
        match event {
            GameEvent::ObstacleSpawned(obstacle) => self.add_obstacle(obstacle),
            GameEvent::ObstacleRemoved { id } => self.remove_obstacle(*id),
            GameEvent::GameOver { score, best, .. } => {
                self.final_score.set_text_content(Some(&score.to_string()));
                self.best_score_final
                    .set_text_content(Some(&best.to_string()));
            }
            _ => {}
        }
    }

    /// Per-frame positional updates read straight from state
    pub fn draw(&mut self, state: &GameState, settings: &Settings) {
        self.draw_bird(state, settings);
        self.draw_obstacles(state);
        self.sync_particles(state, settings);
        self.draw_hud(state);
    }

    fn draw_bird(&self, state: &GameState, settings: &Settings) {
        let style = self.bird.style();
        set_px(&style, "top", state.bird.y);
        set_px(&style, "left", BIRD_X);

        // Tilt follows vertical velocity: nose up on a flap, nose-dive on
        // a long fall
        if settings.reduced_motion {
            let _ = style.set_property("transform", "rotate(0deg)");
        } else {
            let rotation = (state.bird.vy * 3.0).clamp(-30.0, 90.0);
            let _ = style.set_property("transform", &format!("rotate({}deg)", rotation));
        }
    }

    fn draw_obstacles(&self, state: &GameState) {
        for obstacle in &state.obstacles {
            for half in ["top", "bottom"] {
                if let Some(el) = self
                    .document
                    .get_element_by_id(&format!("obstacle-{}-{}", half, obstacle.id))
                {
                    if let Some(el) = el.dyn_ref::<HtmlElement>() {
                        set_px(&el.style(), "left", obstacle.x);
                    }
                }
            }
        }
    }

    fn draw_hud(&self, state: &GameState) {
        self.score.set_text_content(Some(&state.score.to_string()));
        self.best_score
            .set_text_content(Some(&state.best_score.to_string()));

        self.set_visible(&self.start_screen, state.phase == GamePhase::Idle);
        self.set_visible(&self.game_over_screen, state.phase == GamePhase::Over);
    }

    fn set_visible(&self, el: &Element, visible: bool) {
        let _ = el.set_attribute("class", if visible { "screen" } else { "screen hidden" });
    }

    fn add_obstacle(&self, obstacle: &Obstacle) {
        // Top column covers [0, gap_start), bottom covers (gap_end, field]
        self.add_column(
            &format!("obstacle-top-{}", obstacle.id),
            "obstacle obstacle-top",
            obstacle.x,
            0.0,
            obstacle.gap_start,
        );
        self.add_column(
            &format!("obstacle-bottom-{}", obstacle.id),
            "obstacle obstacle-bottom",
            obstacle.x,
            obstacle.gap_end(),
            FIELD_HEIGHT - obstacle.gap_end(),
        );
    }

    fn add_column(&self, id: &str, class: &str, x: f32, top: f32, height: f32) {
        let Ok(el) = self.document.create_element("div") else {
            return;
        };
        el.set_id(id);
        let _ = el.set_attribute("class", class);
        if let Some(el) = el.dyn_ref::<HtmlElement>() {
            let style = el.style();
            set_px(&style, "left", x);
            set_px(&style, "top", top);
            set_px(&style, "width", OBSTACLE_WIDTH);
            set_px(&style, "height", height);
        }
        let _ = self.obstacle_layer.append_child(&el);
    }

    fn remove_obstacle(&self, id: u32) {
        for half in ["top", "bottom"] {
            if let Some(el) = self
                .document
                .get_element_by_id(&format!("obstacle-{}-{}", half, id))
            {
                el.remove();
            }
        }
    }

    /// Diff particle elements against the live pool by id
    fn sync_particles(&mut self, state: &GameState, settings: &Settings) {
        let current: Vec<u32> = if settings.particles {
            state.particles.iter().map(|p| p.id).collect()
        } else {
            Vec::new()
        };

        for id in &self.live_particles {
            if !current.contains(id) {
                if let Some(el) = self.document.get_element_by_id(&format!("particle-{}", id)) {
                    el.remove();
                }
            }
        }

        if settings.particles {
            for particle in &state.particles {
                let dom_id = format!("particle-{}", particle.id);
                let el = match self.document.get_element_by_id(&dom_id) {
                    Some(el) => el,
                    None => {
                        let Ok(el) = self.document.create_element("div") else {
                            continue;
                        };
                        el.set_id(&dom_id);
                        let _ = el.set_attribute("class", "particle");
                        if let Some(html) = el.dyn_ref::<HtmlElement>() {
                            let style = html.style();
                            set_px(&style, "width", particle.size);
                            set_px(&style, "height", particle.size);
                            let _ = style.set_property(
                                "background-color",
                                &format!("#{:06x}", particle.color),
                            );
                        }
                        let _ = self.particle_layer.append_child(&el);
                        el
                    }
                };
                if let Some(html) = el.dyn_ref::<HtmlElement>() {
                    let style = html.style();
                    set_px(&style, "left", particle.pos.x);
                    set_px(&style, "top", particle.pos.y);
                    let _ = style.set_property("opacity", &format!("{:.2}", particle.life));
                }
            }
        }

        self.live_particles = current;
    }
}
